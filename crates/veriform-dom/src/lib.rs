// veriform-dom - the form-control surface the validator reads and annotates
// The host UI builds a Document from its widget tree; validation never
// touches anything beyond this model.

pub mod document;
pub mod element;

pub use document::{Document, Group, Selector};
pub use element::{BaselineValue, Element, ElementKind};
