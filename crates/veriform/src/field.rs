// File: src/field.rs
// Purpose: Per-control validation - check ordering and category dispatch

use regex::RegexBuilder;
use veriform_dom::{Element, ElementKind};

use crate::rules::{numeric, RuleCategory, RuleRegistry};

/// Validates one control at a time against a rule registry.
///
/// Pure over control state: reads classes and attributes, never writes
/// anything back. The orchestrator owns flags and rendering.
pub struct FieldValidator<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> FieldValidator<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Whether a single control passes. Checks apply in strict order and
    /// the first applicable one decides:
    ///
    /// 1. disabled controls always pass
    /// 2. hidden controls always pass
    /// 3. selects use their own rule (non-empty selection, or `optional`)
    /// 4. a `pattern` attribute overrides every category check
    /// 5. empty controls (file inputs aside) pass unless required, with
    ///    the `optional` marker overriding `required`
    /// 6. category dispatch: alpha rule / numeric rule plus bounds /
    ///    file rule / plain required fallback
    pub fn validate(&self, element: &Element) -> bool {
        if element.is_disabled() {
            return true;
        }
        if element.kind() == ElementKind::Hidden {
            return true;
        }
        if element.kind().is_checkable() {
            // Checkboxes and radios only participate in dirty tracking
            return true;
        }
        if element.kind() == ElementKind::Select {
            return validate_select(element);
        }
        if let Some(pattern) = element.attr("pattern") {
            return pattern_override(element, pattern);
        }
        if element.is_empty() && element.kind() != ElementKind::File {
            // The optional marker wins over required; otherwise an empty
            // control passes exactly when nothing requires it
            if element.is_optional() || !element.is_required() {
                return true;
            }
            return false;
        }
        if element.has_class(RuleCategory::Alpha.marker_class()) {
            return match self.registry.lookup_in(element.classes(), RuleCategory::Alpha) {
                Some(rule) => rule.check(element),
                None => true,
            };
        }
        if element.has_class(RuleCategory::Numeric.marker_class()) {
            return match self.registry.lookup_in(element.classes(), RuleCategory::Numeric) {
                // Bounds only layer on top of a passing format check
                Some(rule) => rule.check(element) && numeric::within_bounds(element),
                None => true,
            };
        }
        if element.kind() == ElementKind::File {
            return !element.is_required()
                || !element.files().is_empty()
                || element.has_attr("data-simple-file-hash");
        }
        if element.is_required() {
            return !element.is_empty();
        }
        true
    }
}

/// Selects pass when a non-empty option is chosen or the control carries
/// the `optional` marker class
pub(crate) fn validate_select(element: &Element) -> bool {
    element.is_optional() || !element.is_empty()
}

/// A `pattern` attribute overrides every category check. The whole value
/// must match. Compilation prefers unicode mode and falls back to the
/// looser non-unicode mode before giving up.
fn pattern_override(element: &Element, pattern: &str) -> bool {
    if element.is_empty() && !element.is_required() {
        return true;
    }
    let anchored = format!("^(?:{pattern})$");
    let compiled = RegexBuilder::new(&anchored)
        .unicode(true)
        .build()
        .or_else(|_| RegexBuilder::new(&anchored).unicode(false).build());
    match compiled {
        Ok(re) => re.is_match(element.value()),
        Err(err) => {
            tracing::warn!(%pattern, %err, "pattern attribute did not compile; control treated as invalid");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleRegistry;

    fn checker(registry: &RuleRegistry) -> FieldValidator<'_> {
        FieldValidator::new(registry)
    }

    #[test]
    fn test_disabled_short_circuits_everything() {
        let registry = RuleRegistry::new();
        let element = Element::text("x")
            .with_class("alpha alpha-only")
            .with_value("1234!!")
            .with_attr("disabled", "");
        assert!(checker(&registry).validate(&element));
    }

    #[test]
    fn test_hidden_fields_always_pass() {
        let registry = RuleRegistry::new();
        let element = Element::hidden("token").with_class("numeric numeric-whole");
        assert!(checker(&registry).validate(&element));
    }

    #[test]
    fn test_pattern_attribute_overrides_classes() {
        let registry = RuleRegistry::new();
        let element = Element::text("code")
            .with_class("numeric numeric-whole")
            .with_attr("pattern", "1337Speak")
            .with_value("1337Speak");
        assert!(checker(&registry).validate(&element));

        let element = Element::text("code")
            .with_attr("pattern", "1337Speak")
            .with_value("1337speak");
        assert!(!checker(&registry).validate(&element));
    }

    #[test]
    fn test_pattern_requires_full_match() {
        let registry = RuleRegistry::new();
        let element = Element::text("code")
            .with_attr("pattern", r"\d{3}")
            .with_value("12345");
        assert!(!checker(&registry).validate(&element));
    }

    #[test]
    fn test_pattern_on_empty_optional_field_passes() {
        let registry = RuleRegistry::new();
        let element = Element::text("code").with_attr("pattern", r"\d+");
        assert!(checker(&registry).validate(&element));

        let element = Element::text("code")
            .with_attr("pattern", r"\d+")
            .with_attr("required", "");
        assert!(!checker(&registry).validate(&element));
    }

    #[test]
    fn test_unparsable_pattern_fails_the_control() {
        let registry = RuleRegistry::new();
        let element = Element::text("code")
            .with_attr("pattern", r"(unclosed")
            .with_value("anything");
        assert!(!checker(&registry).validate(&element));
    }

    #[test]
    fn test_empty_and_not_required_passes() {
        let registry = RuleRegistry::new();
        let element = Element::text("nickname").with_class("alpha alpha-only");
        assert!(checker(&registry).validate(&element));
    }

    #[test]
    fn test_alpha_dispatch() {
        let registry = RuleRegistry::new();
        let valid = Element::text("name").with_class("alpha alpha-only").with_value("beans");
        let invalid = Element::text("name").with_class("alpha alpha-only").with_value("bea3ns");
        assert!(checker(&registry).validate(&valid));
        assert!(!checker(&registry).validate(&invalid));
    }

    #[test]
    fn test_numeric_dispatch_layers_bounds() {
        let registry = RuleRegistry::new();
        let base = || {
            Element::text("year")
                .with_class("numeric numeric-whole")
                .with_attr("min", "1336")
                .with_attr("max", "1338")
        };
        assert!(checker(&registry).validate(&base().with_value("1337")));
        assert!(!checker(&registry).validate(&base().with_value("1339")));
        // Format failure never reaches the bounds layer
        assert!(!checker(&registry).validate(&base().with_value("13.e37")));
    }

    #[test]
    fn test_category_tag_without_rule_class_passes() {
        let registry = RuleRegistry::new();
        let element = Element::text("x").with_class("alpha").with_value("whatever 123 !!");
        assert!(checker(&registry).validate(&element));
    }

    #[test]
    fn test_file_rule() {
        let registry = RuleRegistry::new();
        let required = || Element::file("upload").with_attr("required", "");
        assert!(!checker(&registry).validate(&required()));
        assert!(checker(&registry).validate(&required().with_file("resume.pdf")));
        assert!(checker(&registry).validate(&required().with_attr("data-simple-file-hash", "ab12")));
        assert!(checker(&registry).validate(&Element::file("upload")));
    }

    #[test]
    fn test_plain_required_field() {
        let registry = RuleRegistry::new();
        let element = Element::text("subject").with_attr("required", "");
        assert!(!checker(&registry).validate(&element));
        assert!(checker(&registry).validate(&element.clone().with_value("hello")));
    }

    #[test]
    fn test_optional_marker_overrides_required() {
        let registry = RuleRegistry::new();
        let element = Element::text("middle-name")
            .with_class("optional")
            .with_attr("required", "");
        assert!(checker(&registry).validate(&element));
    }

    #[test]
    fn test_select_rule() {
        let registry = RuleRegistry::new();
        let empty = Element::select("state");
        assert!(!checker(&registry).validate(&empty));
        assert!(checker(&registry).validate(&empty.clone().with_class("optional")));
        assert!(checker(&registry).validate(&empty.clone().with_value("CA")));
    }

    #[test]
    fn test_checkboxes_are_not_validated() {
        let registry = RuleRegistry::new();
        let element = Element::checkbox("agree").with_attr("required", "");
        assert!(checker(&registry).validate(&element));
    }
}
