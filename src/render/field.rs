//! Field composition: label, errors, widget, help text and the shadow
//! initial-value widget.

use super::attrs::apply_attrs;
use super::widgets::build_widget;
use crate::domain::{Field, Label, Result};
use crate::markup::{Element, Node};
use crate::Config;

#[must_use]
pub fn build_label(label: &Label) -> Element {
    let mut element = Element::new("label");
    apply_attrs(&mut element, &label.attrs);
    element.set_text_content(label.text.as_str());
    element
}

/// Builds the `<ul>` error list, one `<li>` per message.
#[must_use]
pub fn build_field_errors(errors: &[String], config: &Config) -> Element {
    let mut list = Element::new("ul");
    if let Some(class) = config.error_list_class.as_deref() {
        list.set_attribute("class", class);
    }
    for error in errors {
        list.append(Element::new("li").with_text(error.as_str()));
    }
    list
}

#[must_use]
pub fn build_help_text(help_text: &str, config: &Config) -> Element {
    Element::new("span")
        .with_attribute("class", config.help_text_class.as_str())
        .with_text(help_text)
}

/// Builds the nodes for one field.
///
/// With the default settings this is a single `div.field-wrapper` holding, in
/// order: label, error list, widget, help text, initial-value widget. The
/// initial-value widget never gets a label or help text of its own.
///
/// # Errors
///
/// Propagates builder failures of the main widget and the initial-value widget.
pub fn build_field(field: &Field, config: &Config) -> Result<Vec<Node>> {
    tracing::debug!(name = %field.field.name, "building field");
    let mut nodes: Vec<Node> = Vec::new();
    let widget = build_widget(&field.field)?;

    if config.wrap_label {
        if !field.errors.is_empty() {
            nodes.push(build_field_errors(&field.errors, config).into());
        }
        if field.label.is_empty() {
            nodes.push(widget.into());
        } else {
            let mut label = build_label(&field.label);
            label.append(widget);
            nodes.push(label.into());
        }
    } else {
        if !field.label.is_empty() {
            nodes.push(build_label(&field.label).into());
        }
        if !field.errors.is_empty() {
            nodes.push(build_field_errors(&field.errors, config).into());
        }
        nodes.push(widget.into());
    }

    if let Some(help_text) = field.help_text() {
        nodes.push(build_help_text(help_text, config).into());
    }
    if let Some(initial) = &field.initial_field {
        nodes.push(build_widget(initial)?.into());
    }

    if !config.wrap_field {
        return Ok(nodes);
    }

    let mut wrapper = Element::new("div");
    wrapper.set_attribute("class", config.field_wrapper_class.as_str());
    for node in nodes {
        wrapper.append(node);
    }
    Ok(vec![wrapper.into()])
}
