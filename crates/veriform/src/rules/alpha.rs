//! Alpha-category predicates: text-shaped values (names, zips, emails)

use once_cell::sync::Lazy;
use regex::Regex;
use veriform_dom::Element;

static ALPHA_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z .\-]+$").unwrap());
static ALPHA_ONLY_NO_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z.\-]+$").unwrap());
static ALPHA_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").unwrap());
// Loose on purpose: anything@anything.anything
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());
static ZIP_US: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").unwrap());
static ZIP_CA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d$").unwrap());

/// Letters, periods, and hyphens; spaces too, unless the control carries
/// the `data-no-space` attribute
pub fn alpha_only(element: &Element) -> bool {
    if element.has_attr("data-no-space") {
        ALPHA_ONLY_NO_SPACE.is_match(element.value())
    } else {
        ALPHA_ONLY.is_match(element.value())
    }
}

/// US 5-digit (with optional +4) or Canadian postal code
pub fn zip_code(element: &Element) -> bool {
    let value = element.value();
    ZIP_US.is_match(value) || ZIP_CA.is_match(value)
}

/// Letters and digits, spaces allowed
pub fn alpha_numeric(element: &Element) -> bool {
    ALPHA_NUMERIC.is_match(element.value())
}

/// Deliberately loose email shape; real verification belongs to the server
pub fn email(element: &Element) -> bool {
    EMAIL.is_match(element.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Element {
        Element::text("field").with_value(value)
    }

    #[test]
    fn test_alpha_only() {
        assert!(alpha_only(&text("beans")));
        assert!(alpha_only(&text("Mary-Jane St. Clair")));
        assert!(!alpha_only(&text("bea3ns")));
        assert!(!alpha_only(&text("name_with_underscores")));
    }

    #[test]
    fn test_alpha_only_no_space() {
        let element = Element::text("field")
            .with_value("two words")
            .with_attr("data-no-space", "");
        assert!(!alpha_only(&element));

        let element = Element::text("field")
            .with_value("hyphen-ated")
            .with_attr("data-no-space", "");
        assert!(alpha_only(&element));
    }

    #[test]
    fn test_zip_code() {
        assert!(zip_code(&text("12345")));
        assert!(zip_code(&text("12345-6789")));
        assert!(zip_code(&text("K1A 0B1")));
        assert!(zip_code(&text("K1A0B1")));
        assert!(!zip_code(&text("1234")));
        assert!(!zip_code(&text("12345-67")));
        assert!(!zip_code(&text("K1A 0B")));
    }

    #[test]
    fn test_alpha_numeric() {
        assert!(alpha_numeric(&text("abc123")));
        assert!(alpha_numeric(&text("room 101")));
        assert!(!alpha_numeric(&text("nope!")));
    }

    #[test]
    fn test_email_is_loose() {
        assert!(email(&text("user@example.com")));
        assert!(email(&text("weird+tag@sub.domain.co")));
        assert!(!email(&text("no-at-sign.com")));
        assert!(!email(&text("spaces in@example.com")));
        assert!(!email(&text("user@nodot")));
    }
}
