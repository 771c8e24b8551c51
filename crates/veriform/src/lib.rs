// veriform - rule-driven form validation
// Walks tagged form controls, applies the matching rules, and reports
// per-control and per-form validity with optional inline error messages.

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod rules;

// Re-export the control/document model for hosts and tests
pub use veriform_dom::{BaselineValue, Document, Element, ElementKind, Group, Selector};

// Re-export framework types
pub use config::ValidatorConfig;
pub use error::{Result, ValidateError};
pub use field::FieldValidator;
pub use form::{FormValidator, INVALID_CLASS};
pub use rules::{
    MessageSource, Predicate, Rule, RuleCategory, RuleRegistry, RuleSpec, DEFAULT_MESSAGE,
};
