// File: src/element.rs
// Purpose: Form control model - kinds, classes, attributes, validation metadata

use std::collections::HashMap;

/// Kind of form control, mirroring the host UI's input/textarea/select split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    TextArea,
    Hidden,
    File,
    Checkbox,
    Radio,
    Select,
}

impl ElementKind {
    /// Whether this kind holds free text (a text input or a textarea)
    pub fn is_text_like(&self) -> bool {
        matches!(self, ElementKind::Text | ElementKind::TextArea)
    }

    /// Whether this kind carries a checked state instead of a text value
    pub fn is_checkable(&self) -> bool {
        matches!(self, ElementKind::Checkbox | ElementKind::Radio)
    }
}

/// Recorded initial state of a control, used for dirty-checking
#[derive(Debug, Clone, PartialEq)]
pub enum BaselineValue {
    Text(String),
    Checked(bool),
}

/// A single form control as seen by the validator.
///
/// The host UI builds these from its widget tree. The validator reads
/// classes and attributes, and writes back the invalid flag, the rendered
/// error message, and the dirty-checking baseline; it never invents
/// controls of its own.
#[derive(Debug, Clone)]
pub struct Element {
    kind: ElementKind,
    name: String,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    value: String,
    checked: bool,
    files: Vec<String>,
    parsed_date: Option<String>,
    form: Option<String>,
    group: Option<String>,
    invalid: bool,
    error_message: Option<String>,
    baseline: Option<BaselineValue>,
}

impl Element {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            value: String::new(),
            checked: false,
            files: Vec::new(),
            parsed_date: None,
            form: None,
            group: None,
            invalid: false,
            error_message: None,
            baseline: None,
        }
    }

    /// A text input
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, name)
    }

    /// A textarea
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(ElementKind::TextArea, name)
    }

    /// A hidden input
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Hidden, name)
    }

    /// A file input
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(ElementKind::File, name)
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Checkbox, name)
    }

    pub fn radio(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Radio, name)
    }

    /// A select; its value is the currently selected option's value
    pub fn select(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Select, name)
    }

    // --- builder-style construction -------------------------------------

    /// Add one or more classes (space-separated, as class attributes are written)
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Set an attribute. Boolean attributes pass an empty value
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Record an attached file name (file inputs)
    pub fn with_file(mut self, file: &str) -> Self {
        self.files.push(file.to_string());
        self
    }

    /// Record the date a date-picker widget parsed for this control
    pub fn with_parsed_date(mut self, date: &str) -> Self {
        self.parsed_date = Some(date.to_string());
        self
    }

    /// Identify the owning form container (selection by container)
    pub fn in_form(mut self, id: &str) -> Self {
        self.form = Some(id.to_string());
        self
    }

    /// Identify the enclosing field group (alternate styling target)
    pub fn in_group(mut self, id: &str) -> Self {
        self.group = Some(id.to_string());
        self
    }

    // --- reads ----------------------------------------------------------

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Class list, in the order classes were written on the control
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn parsed_date(&self) -> Option<&str> {
        self.parsed_date.as_deref()
    }

    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.has_attr("disabled")
    }

    pub fn is_required(&self) -> bool {
        self.has_attr("required")
    }

    /// The `optional` marker class (consulted for selects)
    pub fn is_optional(&self) -> bool {
        self.has_class("optional")
    }

    /// Whether the value is empty after trimming surrounding whitespace
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    // --- writes ---------------------------------------------------------

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn set_parsed_date(&mut self, date: Option<String>) {
        self.parsed_date = date;
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // --- validation metadata --------------------------------------------

    /// Result of the last validation pass over this control
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// The inline error message currently rendered next to this control
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// Recorded baseline for dirty-checking, if one was captured
    pub fn baseline(&self) -> Option<&BaselineValue> {
        self.baseline.as_ref()
    }

    pub fn set_baseline(&mut self, baseline: Option<BaselineValue>) {
        self.baseline = baseline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_class_splits_on_whitespace() {
        let element = Element::text("first-name").with_class("alpha alpha-only");
        assert!(element.has_class("alpha"));
        assert!(element.has_class("alpha-only"));
        assert_eq!(element.classes().len(), 2);
    }

    #[test]
    fn test_with_class_deduplicates() {
        let element = Element::text("a").with_class("alpha").with_class("alpha");
        assert_eq!(element.classes().len(), 1);
    }

    #[test]
    fn test_boolean_attributes() {
        let element = Element::text("age").with_attr("required", "").with_attr("min", "18");
        assert!(element.is_required());
        assert!(!element.is_disabled());
        assert_eq!(element.attr("min"), Some("18"));
        assert_eq!(element.attr("max"), None);
    }

    #[test]
    fn test_is_empty_trims_whitespace() {
        assert!(Element::text("a").is_empty());
        assert!(Element::text("a").with_value("   ").is_empty());
        assert!(!Element::text("a").with_value("x").is_empty());
    }

    #[test]
    fn test_add_and_remove_class() {
        let mut element = Element::text("a");
        element.add_class("invalid");
        element.add_class("invalid");
        assert!(element.has_class("invalid"));
        element.remove_class("invalid");
        assert!(!element.has_class("invalid"));
    }

    #[test]
    fn test_class_order_is_preserved() {
        let element = Element::text("a").with_class("numeric-whole numeric alpha-only");
        let classes: Vec<&str> = element.classes().iter().map(String::as_str).collect();
        assert_eq!(classes, vec!["numeric-whole", "numeric", "alpha-only"]);
    }
}
