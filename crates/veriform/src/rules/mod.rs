// File: src/rules/mod.rs
// Purpose: Rule registry - identifier -> (category, predicate, message)

pub mod alpha;
pub mod numeric;

use std::fmt;
use std::str::FromStr;

use veriform_dom::Element;

use crate::error::{Result, ValidateError};

/// Message used when a rule carries no message of its own, and for plain
/// required-field failures that have no owning rule
pub const DEFAULT_MESSAGE: &str = "Please correct this field";

/// Coarse grouping of rules: text-shaped vs number-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    Alpha,
    Numeric,
}

impl RuleCategory {
    /// Marker class that tags a control as belonging to this category
    pub fn marker_class(&self) -> &'static str {
        match self {
            RuleCategory::Alpha => "alpha",
            RuleCategory::Numeric => "numeric",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker_class())
    }
}

impl FromStr for RuleCategory {
    type Err = ValidateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(RuleCategory::Alpha),
            "numeric" => Ok(RuleCategory::Numeric),
            other => Err(ValidateError::RuleDefinition(format!(
                "unrecognized category: {other}"
            ))),
        }
    }
}

/// Validation predicate over a single control
pub type Predicate = Box<dyn Fn(&Element) -> bool + Send + Sync>;

/// How a rule produces its error text
pub enum MessageSource {
    /// Fall back to [`DEFAULT_MESSAGE`]
    Default,
    /// A fixed message
    Literal(String),
    /// Computed per control (embedding bounds, decimal caps, ...).
    /// Returning `None` suppresses rendering for that control
    Computed(Box<dyn Fn(&Element) -> Option<String> + Send + Sync>),
}

impl MessageSource {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Element) -> Option<String> + Send + Sync + 'static,
    {
        MessageSource::Computed(Box::new(f))
    }

    /// Resolve to the text shown next to the control, if any
    pub fn resolve(&self, element: &Element) -> Option<String> {
        match self {
            MessageSource::Default => Some(DEFAULT_MESSAGE.to_string()),
            MessageSource::Literal(text) => Some(text.clone()),
            MessageSource::Computed(f) => f(element),
        }
    }
}

impl From<&str> for MessageSource {
    fn from(text: &str) -> Self {
        MessageSource::Literal(text.to_string())
    }
}

impl From<String> for MessageSource {
    fn from(text: String) -> Self {
        MessageSource::Literal(text)
    }
}

impl fmt::Debug for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSource::Default => f.write_str("Default"),
            MessageSource::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            MessageSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A named validation policy: category, predicate, and message generator
pub struct Rule {
    id: String,
    category: RuleCategory,
    predicate: Predicate,
    message: MessageSource,
}

impl Rule {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> RuleCategory {
        self.category
    }

    /// Run the predicate against a control
    pub fn check(&self, element: &Element) -> bool {
        (self.predicate)(element)
    }

    /// Error text for a control that failed this rule
    pub fn message(&self, element: &Element) -> Option<String> {
        self.message.resolve(element)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Definition consumed by [`RuleRegistry::add_many`]
pub struct RuleSpec {
    pub id: String,
    pub category: RuleCategory,
    pub predicate: Predicate,
    pub message: MessageSource,
}

impl RuleSpec {
    pub fn new(
        id: impl Into<String>,
        category: RuleCategory,
        predicate: impl Fn(&Element) -> bool + Send + Sync + 'static,
        message: impl Into<MessageSource>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }
}

/// Keyed table of validation rules.
///
/// Insertion keeps no particular order guarantee across replacements;
/// lookup by candidate list scans the *candidate* order, so an element's
/// class order decides which rule wins, not registry order.
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Registry preloaded with the built-in rule table
    pub fn new() -> Self {
        let mut registry = Self::empty();
        register_builtins(&mut registry);
        registry
    }

    /// Empty registry, no built-ins
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule, replacing any existing rule with the identifier.
    ///
    /// The message is optional in spirit: pass [`MessageSource::Default`]
    /// to fall back to the generic message, a string for a constant, or
    /// [`MessageSource::computed`] for per-control text.
    pub fn upsert(
        &mut self,
        id: impl Into<String>,
        category: RuleCategory,
        predicate: impl Fn(&Element) -> bool + Send + Sync + 'static,
        message: impl Into<MessageSource>,
    ) -> Result<()> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidateError::RuleDefinition(
                "identifier must be non-empty text".to_string(),
            ));
        }
        self.replace(Rule {
            id,
            category,
            predicate: Box::new(predicate),
            message: message.into(),
        });
        Ok(())
    }

    /// Apply `upsert` for each spec in order. Not atomic: a failure partway
    /// through leaves the earlier upserts applied
    pub fn add_many(&mut self, specs: Vec<RuleSpec>) -> Result<()> {
        for spec in specs {
            let id = spec.id;
            if id.trim().is_empty() {
                return Err(ValidateError::RuleDefinition(
                    "identifier must be non-empty text".to_string(),
                ));
            }
            self.replace(Rule {
                id,
                category: spec.category,
                predicate: spec.predicate,
                message: spec.message,
            });
        }
        Ok(())
    }

    // Remove-then-insert, preserving no particular ordering guarantee
    fn replace(&mut self, rule: Rule) {
        self.rules.retain(|r| r.id != rule.id);
        self.rules.push(rule);
    }

    /// Rule registered under exactly this identifier
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// First candidate identifier (scanning candidate order, e.g. an
    /// element's class list) with a registered rule
    pub fn lookup<I, S>(&self, candidates: I) -> Option<&Rule>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .find_map(|candidate| self.get(candidate.as_ref()))
    }

    /// Like [`RuleRegistry::lookup`], restricted to rules of one category
    pub fn lookup_in<I, S>(&self, candidates: I, category: RuleCategory) -> Option<&Rule>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates.into_iter().find_map(|candidate| {
            self.get(candidate.as_ref())
                .filter(|rule| rule.category == category)
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered identifiers, in current storage order
    pub fn ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id.as_str()).collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry").field("ids", &self.ids()).finish()
    }
}

// Built-in rule table. Identifiers double as the marker classes the host
// writes on its controls.
fn register_builtins(registry: &mut RuleRegistry) {
    registry.replace(Rule {
        id: "alpha-only".to_string(),
        category: RuleCategory::Alpha,
        predicate: Box::new(alpha::alpha_only),
        message: "Only letters, spaces, hyphens, and periods are allowed".into(),
    });
    registry.replace(Rule {
        id: "alpha-zip".to_string(),
        category: RuleCategory::Alpha,
        predicate: Box::new(alpha::zip_code),
        message: "Enter a valid zip code".into(),
    });
    registry.replace(Rule {
        id: "alpha-numeric".to_string(),
        category: RuleCategory::Alpha,
        predicate: Box::new(alpha::alpha_numeric),
        message: "Enter only alphanumeric characters".into(),
    });
    registry.replace(Rule {
        id: "alpha-email".to_string(),
        category: RuleCategory::Alpha,
        predicate: Box::new(alpha::email),
        message: "Make sure the email is correct".into(),
    });
    registry.replace(Rule {
        id: "numeric-whole".to_string(),
        category: RuleCategory::Numeric,
        predicate: Box::new(numeric::whole_number),
        message: MessageSource::computed(|element| {
            Some(format!(
                "Enter a whole number{}",
                numeric::bounds_clause(element)
            ))
        }),
    });
    registry.replace(Rule {
        id: "numeric-decimal".to_string(),
        category: RuleCategory::Numeric,
        predicate: Box::new(numeric::decimal),
        message: MessageSource::computed(|element| {
            Some(format!(
                "Enter a number with up to {} decimal places{}",
                numeric::decimal_max(element),
                numeric::bounds_clause(element)
            ))
        }),
    });
    registry.replace(Rule {
        id: "numeric-full-year".to_string(),
        category: RuleCategory::Numeric,
        predicate: Box::new(numeric::full_year),
        message: MessageSource::computed(|element| {
            Some(format!(
                "Enter a four-digit year{}",
                numeric::bounds_clause(element)
            ))
        }),
    });
    registry.replace(Rule {
        id: "numeric-jquery-date".to_string(),
        category: RuleCategory::Numeric,
        predicate: Box::new(numeric::widget_date),
        message: "Select a valid date".into(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = RuleRegistry::new();
        for (id, category) in [
            ("alpha-only", RuleCategory::Alpha),
            ("alpha-zip", RuleCategory::Alpha),
            ("alpha-numeric", RuleCategory::Alpha),
            ("alpha-email", RuleCategory::Alpha),
            ("numeric-whole", RuleCategory::Numeric),
            ("numeric-decimal", RuleCategory::Numeric),
            ("numeric-full-year", RuleCategory::Numeric),
            ("numeric-jquery-date", RuleCategory::Numeric),
        ] {
            let rule = registry.get(id).unwrap_or_else(|| panic!("missing {id}"));
            assert_eq!(rule.category(), category, "category of {id}");
        }
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut registry = RuleRegistry::empty();
        registry
            .upsert("custom", RuleCategory::Alpha, |_| true, "first")
            .unwrap();
        registry
            .upsert("custom", RuleCategory::Alpha, |_| false, "second")
            .unwrap();

        assert_eq!(registry.len(), 1);
        let rule = registry.get("custom").unwrap();
        let element = Element::text("x");
        assert!(!rule.check(&element));
        assert_eq!(rule.message(&element), Some("second".to_string()));
    }

    #[test]
    fn test_upsert_rejects_empty_identifier() {
        let mut registry = RuleRegistry::empty();
        let err = registry
            .upsert("  ", RuleCategory::Alpha, |_| true, MessageSource::Default)
            .unwrap_err();
        assert!(matches!(err, ValidateError::RuleDefinition(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_many_is_not_atomic() {
        let mut registry = RuleRegistry::empty();
        let specs = vec![
            RuleSpec::new("one", RuleCategory::Alpha, |_| true, MessageSource::Default),
            RuleSpec::new("", RuleCategory::Alpha, |_| true, MessageSource::Default),
            RuleSpec::new("three", RuleCategory::Alpha, |_| true, MessageSource::Default),
        ];
        assert!(registry.add_many(specs).is_err());
        // The first upsert stays applied, the rest never ran
        assert!(registry.get("one").is_some());
        assert!(registry.get("three").is_none());
    }

    #[test]
    fn test_lookup_scans_candidate_order() {
        let mut registry = RuleRegistry::empty();
        registry
            .upsert("a", RuleCategory::Alpha, |_| true, MessageSource::Default)
            .unwrap();
        registry
            .upsert("b", RuleCategory::Alpha, |_| true, MessageSource::Default)
            .unwrap();

        // "b" comes first in the candidate list, so it wins even though
        // "a" was registered first
        let found = registry.lookup(["unknown", "b", "a"]).unwrap();
        assert_eq!(found.id(), "b");
    }

    #[test]
    fn test_lookup_in_skips_other_categories() {
        let registry = RuleRegistry::new();
        let classes = ["numeric-whole", "alpha-only"];
        let rule = registry.lookup_in(classes, RuleCategory::Alpha).unwrap();
        assert_eq!(rule.id(), "alpha-only");
    }

    #[test]
    fn test_lookup_not_found() {
        let registry = RuleRegistry::new();
        assert!(registry.lookup(["nope", "also-nope"]).is_none());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("alpha".parse::<RuleCategory>().unwrap(), RuleCategory::Alpha);
        assert_eq!("numeric".parse::<RuleCategory>().unwrap(), RuleCategory::Numeric);
        assert!("date".parse::<RuleCategory>().is_err());
    }

    #[test]
    fn test_message_source_resolution() {
        let element = Element::text("x").with_attr("min", "5");
        assert_eq!(
            MessageSource::Default.resolve(&element),
            Some(DEFAULT_MESSAGE.to_string())
        );
        assert_eq!(
            MessageSource::from("fixed").resolve(&element),
            Some("fixed".to_string())
        );
        let dynamic = MessageSource::computed(|e| e.attr("min").map(|m| format!("min {m}")));
        assert_eq!(dynamic.resolve(&element), Some("min 5".to_string()));
        let silent = MessageSource::computed(|_| None);
        assert_eq!(silent.resolve(&element), None);
    }
}
