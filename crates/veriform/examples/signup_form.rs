// Example: Validate a small signup form and print the per-field report
// Shows document assembly, configuration, custom rules, and dirty tracking

use serde_json::json;
use veriform::{Document, Element, FormValidator, MessageSource, RuleCategory};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let mut validator = FormValidator::new();
    validator.initialize(&json!({
        "auto_mark_invalid_fields": true,
        "auto_show_error_messages": true
    }))?;

    // A custom rule alongside the built-ins
    validator.registry_mut().upsert(
        "alpha-username",
        RuleCategory::Alpha,
        |e| e.value().chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        MessageSource::computed(|e| Some(format!("'{}' may only use letters, digits, and _", e.value()))),
    )?;

    // The host UI would build this from its widget tree
    let mut doc = Document::new()
        .with(
            Element::text("username")
                .in_form("signup")
                .with_class("alpha alpha-username")
                .with_attr("required", "")
                .with_value("grace hopper"),
        )
        .with(
            Element::text("email")
                .in_form("signup")
                .with_class("alpha alpha-email")
                .with_attr("required", "")
                .with_value("grace@example.com"),
        )
        .with(
            Element::text("age")
                .in_form("signup")
                .with_class("numeric numeric-whole")
                .with_attr("min", "13")
                .with_value("9"),
        )
        .with(Element::select("country").in_form("signup"))
        .with(Element::checkbox("newsletter").in_form("signup").with_checked(true));

    validator.capture_baseline(&mut doc, None)?;

    let valid = validator.validate_form(&mut doc, None)?;
    println!("form valid: {valid}\n");

    for element in doc.elements() {
        match element.error_message() {
            Some(message) => println!("  {:<12} INVALID  {message}", element.name()),
            None if element.is_invalid() => println!("  {:<12} INVALID", element.name()),
            None => println!("  {:<12} ok", element.name()),
        }
    }

    doc.element_mut("age").unwrap().set_value("37");
    println!("\ndirty after edit: {}", validator.is_dirty(&doc, None)?);

    Ok(())
}
