// File: src/form.rs
// Purpose: Form-level orchestration - walk, aggregate, mark, render, dirty-check

use serde_json::Value;
use veriform_dom::{BaselineValue, Document, Element, ElementKind, Selector};

use crate::config::ValidatorConfig;
use crate::error::{Result, ValidateError};
use crate::field::FieldValidator;
use crate::rules::{RuleCategory, RuleRegistry, DEFAULT_MESSAGE};

/// Marker class toggled on invalid controls (or their group containers)
pub const INVALID_CLASS: &str = "invalid";

/// Walks a document's controls, applies per-control validation, aggregates
/// the overall result, and owns the marking and message side effects.
pub struct FormValidator {
    config: ValidatorConfig,
    registry: RuleRegistry,
}

impl FormValidator {
    /// Validator with default configuration and the built-in rule table
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
            registry: RuleRegistry::new(),
        }
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            registry: RuleRegistry::new(),
        }
    }

    /// Re-apply configuration from a JSON object. Missing keys restore
    /// their defaults; anything other than an object is rejected outright,
    /// with no partial state applied.
    pub fn initialize(&mut self, options: &Value) -> Result<()> {
        if !options.is_object() {
            return Err(ValidateError::Config(format!(
                "expected a configuration object, got {options}"
            )));
        }
        self.config = serde_json::from_value(options.clone())
            .map_err(|err| ValidateError::Config(err.to_string()))?;
        Ok(())
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable registry access, for caller-supplied custom rules
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Overall validity for the selection (the whole document when `None`).
    ///
    /// Records each checked control's invalid flag, clears the inline
    /// message of controls that came back valid, and applies the
    /// marking/message side effects the configuration asks for. Disabled
    /// controls are skipped and never affect the aggregate.
    pub fn validate_form(&self, document: &mut Document, selection: Option<&Selector>) -> Result<bool> {
        let indices = resolve(document, selection)?;
        let checker = FieldValidator::new(&self.registry);

        let mut all_valid = true;
        let mut checked = 0usize;
        for &index in &indices {
            if document.elements()[index].is_disabled() {
                continue;
            }
            checked += 1;
            let valid = checker.validate(&document.elements()[index]);
            all_valid &= valid;

            let element = &mut document.elements_mut()[index];
            element.set_invalid(!valid);
            if valid {
                element.set_error_message(None);
            }
        }
        tracing::debug!(controls = checked, valid = all_valid, "validation pass finished");

        if self.config.auto_mark_invalid_fields {
            self.mark(document, &indices);
        }
        if self.config.auto_show_error_messages {
            self.render(document, &indices);
        }
        Ok(all_valid)
    }

    /// Toggle the invalid marker according to each control's recorded flag
    pub fn mark_invalid_fields(&self, document: &mut Document, selection: Option<&Selector>) -> Result<()> {
        let indices = resolve(document, selection)?;
        self.mark(document, &indices);
        Ok(())
    }

    /// Render or clear inline error messages according to recorded flags
    pub fn show_error_messages(&self, document: &mut Document, selection: Option<&Selector>) -> Result<()> {
        let indices = resolve(document, selection)?;
        self.render(document, &indices);
        Ok(())
    }

    /// Record each control's current value (or checked state) as its baseline
    pub fn capture_baseline(&self, document: &mut Document, selection: Option<&Selector>) -> Result<()> {
        let indices = resolve(document, selection)?;
        for index in indices {
            let element = &mut document.elements_mut()[index];
            let baseline = baseline_of(element);
            element.set_baseline(Some(baseline));
        }
        Ok(())
    }

    /// True as soon as any control in the selection differs from its
    /// recorded baseline. Controls with no baseline count as unchanged.
    pub fn is_dirty(&self, document: &Document, selection: Option<&Selector>) -> Result<bool> {
        let indices = resolve(document, selection)?;
        for index in indices {
            let element = &document.elements()[index];
            let Some(baseline) = element.baseline() else {
                continue;
            };
            if *baseline != baseline_of(element) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn mark(&self, document: &mut Document, indices: &[usize]) {
        for &index in indices {
            let element = &document.elements()[index];
            if element.is_disabled() {
                continue;
            }
            let invalid = element.is_invalid();
            let group = element.group().map(str::to_string);

            if self.config.use_alternate_styling {
                if let Some(group) = group {
                    let group = document.group_mut(&group);
                    if invalid {
                        group.add_class(INVALID_CLASS);
                    } else {
                        group.remove_class(INVALID_CLASS);
                    }
                    continue;
                }
            }
            let element = &mut document.elements_mut()[index];
            if invalid {
                element.add_class(INVALID_CLASS);
            } else {
                element.remove_class(INVALID_CLASS);
            }
        }
    }

    fn render(&self, document: &mut Document, indices: &[usize]) {
        for &index in indices {
            let element = &document.elements()[index];
            if element.is_disabled() {
                continue;
            }
            let message = if element.is_invalid() {
                self.message_for(element)
            } else {
                None
            };
            let group = element.group().map(str::to_string);

            if self.config.use_alternate_styling {
                if let Some(group) = group {
                    document.group_mut(&group).set_message(message);
                    continue;
                }
            }
            document.elements_mut()[index].set_error_message(message);
        }
    }

    /// The owning rule's message, resolved by the control's class list at
    /// render time. Controls that failed without an owning rule (plain
    /// required, selects) get the generic default.
    fn message_for(&self, element: &Element) -> Option<String> {
        let rule = if element.has_class(RuleCategory::Alpha.marker_class()) {
            self.registry.lookup_in(element.classes(), RuleCategory::Alpha)
        } else if element.has_class(RuleCategory::Numeric.marker_class()) {
            self.registry.lookup_in(element.classes(), RuleCategory::Numeric)
        } else {
            None
        };
        match rule {
            Some(rule) => rule.message(element),
            None => Some(DEFAULT_MESSAGE.to_string()),
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn baseline_of(element: &Element) -> BaselineValue {
    match element.kind() {
        ElementKind::Checkbox | ElementKind::Radio => BaselineValue::Checked(element.is_checked()),
        _ => BaselineValue::Text(element.value().to_string()),
    }
}

/// Resolve the selection to control indices. An explicit selector that
/// matches nothing is an error; the default covers the whole document.
fn resolve(document: &Document, selection: Option<&Selector>) -> Result<Vec<usize>> {
    match selection {
        None => Ok(document.resolve(&Selector::Document)),
        Some(selector) => {
            let indices = document.resolve(selector);
            if indices.is_empty() {
                return Err(ValidateError::NoSelection);
            }
            Ok(indices)
        }
    }
}
