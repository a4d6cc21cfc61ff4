//! Widget builders.
//!
//! One builder per supported widget template. [`build_widget`] dispatches on
//! the widget's [`WidgetKind`]; every other template fails the render.

use super::attrs::apply_attrs;
use crate::domain::{DeformError, Result, SelectOption, Widget, WidgetKind};
use crate::markup::Element;

/// Builds the element for one widget.
///
/// # Errors
///
/// - [`DeformError::UnsupportedWidgetKind`] when the template has no builder
/// - [`DeformError::MalformedInput`] when an input widget has no `type`
pub fn build_widget(widget: &Widget) -> Result<Element> {
    let kind = widget.kind()?;
    tracing::debug!(template_name = %widget.template_name, name = %widget.name, "building widget");

    match kind {
        WidgetKind::Checkbox
        | WidgetKind::Date
        | WidgetKind::Hidden
        | WidgetKind::Number
        | WidgetKind::Text
        | WidgetKind::Time => build_input(widget),
        WidgetKind::Select => Ok(build_select(widget)),
        WidgetKind::Textarea => Ok(build_textarea(widget)),
    }
}

/// Builds an `<input>`.
///
/// A present value is written both as the `value` attribute and as the live
/// `value` property.
///
/// # Errors
///
/// Returns [`DeformError::MalformedInput`] when the widget has no `type`.
pub fn build_input(widget: &Widget) -> Result<Element> {
    let input_type = widget
        .input_type
        .as_deref()
        .filter(|input_type| !input_type.is_empty())
        .ok_or_else(|| {
            DeformError::MalformedInput(format!("input widget `{}` has no `type`", widget.name))
        })?;

    let mut input = Element::new("input");
    input.set_attribute("type", input_type);
    input.set_attribute("name", widget.name.as_str());
    apply_attrs(&mut input, &widget.attrs);
    if let Some(value) = widget.value_text() {
        input.set_attribute("value", value.as_str());
        input.set_property("value", value);
    }
    Ok(input)
}

/// Builds a `<select>` with its options, grouping named option groups in
/// `<optgroup>` elements.
#[must_use]
pub fn build_select(widget: &Widget) -> Element {
    let mut select = Element::new("select");
    select.set_attribute("name", widget.name.as_str());
    apply_attrs(&mut select, &widget.attrs);

    for group in &widget.optgroups {
        let options = group.options.iter().map(build_select_option);
        match group.label() {
            Some(label) => {
                let mut optgroup = Element::new("optgroup");
                optgroup.set_attribute("label", label);
                for option in options {
                    optgroup.append(option);
                }
                select.append(optgroup);
            }
            None => {
                for option in options {
                    select.append(option);
                }
            }
        }
    }
    select
}

/// Builds one `<option>`.
#[must_use]
pub fn build_select_option(option: &SelectOption) -> Element {
    let mut element = Element::new("option");
    element.set_attribute("value", option.value_text());
    apply_attrs(&mut element, &option.attrs);
    element.set_text_content(option.label.as_str());
    element
}

/// Builds a `<textarea>` whose text is the widget value.
#[must_use]
pub fn build_textarea(widget: &Widget) -> Element {
    let mut textarea = Element::new("textarea");
    textarea.set_attribute("name", widget.name.as_str());
    apply_attrs(&mut textarea, &widget.attrs);
    textarea.set_text_content(widget.value_text().unwrap_or_default());
    textarea
}
