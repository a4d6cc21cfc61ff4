//! Form rendering layer.
//!
//! Turns a parsed [`Payload`] into element nodes and appends them to a caller's
//! container element, mirroring the server's form widget templates.
//!
//! # Architecture
//!
//! ```text
//! JSON → Payload::from_value → build_formset / build_form → Vec<Node> → container
//!                                     │
//!                              build_field → build_widget → apply_attrs
//! ```
//!
//! The subtree is built completely before anything touches the container, so
//! a failed render leaves the container as it was.
//!
//! # Modules
//!
//! - [`attrs`]: Attribute mapping applier
//! - [`widgets`]: Per-widget builders and template dispatch
//! - [`field`]: Label, errors, help text and field wrappers
//! - [`form`]: Forms, formsets and form-level errors

pub mod attrs;
pub mod field;
pub mod form;
pub mod widgets;

pub use attrs::apply_attrs;
pub use field::build_field;
pub use form::{build_form, build_formset};
pub use widgets::build_widget;

use crate::domain::{Payload, Result};
use crate::markup::{Element, Node};
use crate::Config;
use serde_json::Value;

/// Renders a form or formset payload into `container` with default settings.
///
/// # Errors
///
/// Returns [`crate::DeformError::MalformedInput`] for payloads of the wrong
/// shape and [`crate::DeformError::UnsupportedWidgetKind`] for widgets with no
/// builder. On error nothing is appended.
///
/// # Examples
///
/// ```
/// use deform::markup::Element;
/// use serde_json::json;
///
/// let mut form = Element::new("form");
/// deform::render(&mut form, &json!({"errors": ["Required"], "fields": [], "hidden_fields": []}))?;
/// assert_eq!(
///     form.inner_html(),
///     r#"<div><p>Required</p></div><button type="submit">Submit</button>"#
/// );
/// # Ok::<(), deform::DeformError>(())
/// ```
pub fn render(container: &mut Element, data: &Value) -> Result<()> {
    render_with(container, data, &Config::default())
}

/// Renders a payload into `container` using `config`.
///
/// # Errors
///
/// See [`render`].
pub fn render_with(container: &mut Element, data: &Value, config: &Config) -> Result<()> {
    let payload = Payload::from_value(data)?;
    render_payload(container, &payload, config)
}

/// Renders an already parsed payload into `container`, followed by the submit
/// button.
///
/// # Errors
///
/// Returns the first builder failure; nothing is appended in that case.
pub fn render_payload(container: &mut Element, payload: &Payload, config: &Config) -> Result<()> {
    let span = tracing::debug_span!("render", kind = payload.kind_name());
    let _guard = span.enter();

    let mut nodes: Vec<Node> = match payload {
        Payload::FormSet(formset) => build_formset(formset, config)?,
        Payload::Form(form) => build_form(form, config)?,
    };
    nodes.push(build_submit_button(config).into());

    tracing::debug!(nodes = nodes.len(), "appending rendered nodes");
    for node in nodes {
        container.append(node);
    }
    Ok(())
}

#[must_use]
pub fn build_submit_button(config: &Config) -> Element {
    Element::new("button")
        .with_attribute("type", "submit")
        .with_text(config.submit_label.as_str())
}

/// Renders a payload into a fresh `<form>` element and serializes it.
///
/// # Errors
///
/// See [`render`].
pub fn render_to_html(data: &Value, config: &Config) -> Result<String> {
    let mut form = Element::new("form");
    render_with(&mut form, data, config)?;
    Ok(form.outer_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeformError;
    use serde_json::json;

    #[test]
    fn error_only_form_ends_with_submit() {
        let mut container = Element::new("form");
        render(
            &mut container,
            &json!({"errors": ["Required"], "fields": [], "hidden_fields": []}),
        )
        .unwrap();

        let children: Vec<&Element> = container.child_elements().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), "div");
        assert_eq!(children[0].child_elements().count(), 1);
        assert_eq!(children[0].text_content(), "Required");
        assert_eq!(children[1].tag(), "button");
        assert_eq!(children[1].attribute("type"), Some("submit"));
        assert_eq!(children[1].text_content(), "Submit");
    }

    #[test]
    fn failed_render_leaves_container_untouched() {
        let mut container = Element::new("form");
        let err = render(
            &mut container,
            &json!({
                "errors": ["first"],
                "fields": [{
                    "label": {"text": "Email", "attrs": {}},
                    "field": {
                        "template_name": "django/forms/widgets/email.html",
                        "type": "email",
                        "name": "email",
                        "attrs": {},
                    },
                    "errors": [],
                }],
                "hidden_fields": [],
            }),
        )
        .unwrap_err();

        assert!(matches!(err, DeformError::UnsupportedWidgetKind { .. }));
        assert!(container.children().is_empty());
    }

    #[test]
    fn unknown_payload_shape_is_malformed() {
        let mut container = Element::new("form");
        let err = render(&mut container, &json!({"fields": []})).unwrap_err();
        assert!(matches!(err, DeformError::MalformedInput(_)));
        assert!(container.children().is_empty());
    }

    #[test]
    fn submit_label_is_configurable() {
        let config = Config {
            submit_label: "Save".to_string(),
            ..Config::default()
        };
        let html = render_to_html(&json!({"errors": [], "fields": []}), &config).unwrap();
        assert_eq!(html, r#"<form><button type="submit">Save</button></form>"#);
    }

    #[test]
    fn rendering_twice_gives_identical_independent_trees() {
        let data = json!({
            "management_form": {"errors": [], "fields": [], "hidden_fields": []},
            "forms": [{"errors": ["x"], "fields": [], "hidden_fields": []}],
        });
        let mut first = Element::new("form");
        let mut second = Element::new("form");
        render(&mut first, &data).unwrap();
        render(&mut second, &data).unwrap();
        assert_eq!(first, second);

        first.append(Element::new("hr"));
        assert_ne!(first, second);
    }
}
