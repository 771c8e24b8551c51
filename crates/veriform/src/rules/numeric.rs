//! Numeric-category predicates and the min/max bounds layer

use once_cell::sync::Lazy;
use regex::Regex;
use veriform_dom::Element;

/// Decimal places allowed when the control does not set `data-decimal-max`
const DEFAULT_DECIMAL_MAX: u32 = 2;

static WHOLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?(?:\d+|\d{1,3}(?:,\d{3})+)$").unwrap());
static WHOLE_PLAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());
static FULL_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

fn no_separators(element: &Element) -> bool {
    element.has_attr("data-no-thousands-separator")
}

/// Signed integer, thousands separators allowed unless the control carries
/// the `data-no-thousands-separator` attribute
pub fn whole_number(element: &Element) -> bool {
    if no_separators(element) {
        WHOLE_PLAIN.is_match(element.value())
    } else {
        WHOLE.is_match(element.value())
    }
}

/// Decimal-place cap for a control (`data-decimal-max`, default 2)
pub fn decimal_max(element: &Element) -> u32 {
    element
        .attr("data-decimal-max")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DECIMAL_MAX)
}

/// Signed decimal with a per-control decimal-place cap and the same
/// thousands-separator handling as [`whole_number`]
pub fn decimal(element: &Element) -> bool {
    let places = decimal_max(element);
    let integer = if no_separators(element) {
        r"\d+".to_string()
    } else {
        r"(?:\d+|\d{1,3}(?:,\d{3})+)".to_string()
    };
    let pattern = if places == 0 {
        format!("^-?{integer}$")
    } else {
        format!(r"^-?{integer}(?:\.\d{{1,{places}}})?$")
    };
    // The cap varies per control, so this one compiles per call
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(element.value()),
        Err(_) => false,
    }
}

/// Exactly four digits. Deprecated: year fields should use a proper date
/// control; warns on every use so stragglers surface in the logs
pub fn full_year(element: &Element) -> bool {
    tracing::warn!(
        control = element.name(),
        "the numeric-full-year rule is deprecated; use a date control instead"
    );
    FULL_YEAR.is_match(element.value())
}

/// Valid iff the host's date-picker widget parsed a date for this control
pub fn widget_date(element: &Element) -> bool {
    element.parsed_date().is_some()
}

/// Comma-stripped numeric parse used for bounds checks
pub fn parse_amount(value: &str) -> Option<f64> {
    value.replace(',', "").trim().parse().ok()
}

/// Layered min/max attribute check, run only after the format check passed.
/// A value that does not parse numerically skips the bounds entirely
pub fn within_bounds(element: &Element) -> bool {
    let Some(value) = parse_amount(element.value()) else {
        return true;
    };
    if let Some(min) = element.attr("min").and_then(parse_amount) {
        if value < min {
            return false;
        }
    }
    if let Some(max) = element.attr("max").and_then(parse_amount) {
        if value > max {
            return false;
        }
    }
    true
}

/// Human clause describing the min/max attributes, appended to the numeric
/// rule messages ("", " no less than 5", " between 5 and 10", ...)
pub fn bounds_clause(element: &Element) -> String {
    match (element.attr("min"), element.attr("max")) {
        (Some(min), Some(max)) => format!(" between {min} and {max}"),
        (Some(min), None) => format!(" no less than {min}"),
        (None, Some(max)) => format!(" no greater than {max}"),
        (None, None) => String::new(),
    }
}
