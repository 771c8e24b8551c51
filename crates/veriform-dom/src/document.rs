// File: src/document.rs
// Purpose: Document-ordered control collection, group containers, selection

use std::collections::HashMap;

use crate::element::Element;

/// A field-group container (the label/control wrapper) that alternate
/// styling targets instead of the control itself
#[derive(Debug, Clone, Default)]
pub struct Group {
    classes: Vec<String>,
    message: Option<String>,
}

impl Group {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// The error message currently rendered inside this group
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}

/// Selects which controls an operation applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every control in the document
    Document,
    /// Controls owned by the named form container
    Form(String),
    /// The single named control
    Named(String),
}

/// The flat, document-ordered set of controls the host exposes for
/// validation, plus the group containers marking and messages may target
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    groups: HashMap<String, Group>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Builder-style push, for assembling documents inline
    pub fn with(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    /// First control with the given name, in document order
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name() == name)
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.name() == name)
    }

    /// Group state, if anything has been rendered into the group yet
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Group state, created on first touch. Groups exist in the host's
    /// tree already; this model only materializes the ones written to
    pub fn group_mut(&mut self, id: &str) -> &mut Group {
        self.groups.entry(id.to_string()).or_default()
    }

    /// Indices of the controls a selector covers, in document order
    pub fn resolve(&self, selector: &Selector) -> Vec<usize> {
        match selector {
            Selector::Document => (0..self.elements.len()).collect(),
            Selector::Form(id) => self
                .elements
                .iter()
                .enumerate()
                .filter(|(_, e)| e.form() == Some(id.as_str()))
                .map(|(i, _)| i)
                .collect(),
            Selector::Named(name) => self
                .elements
                .iter()
                .enumerate()
                .filter(|(_, e)| e.name() == name)
                .map(|(i, _)| i)
                .collect(),
        }
    }
}
