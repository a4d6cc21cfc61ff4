//! Form and formset composition.

use super::field::build_field;
use super::widgets::build_input;
use crate::domain::{Form, FormSet, Result};
use crate::markup::{Element, Node};
use crate::Config;

/// Builds the form-level error block: a `<div>` with one `<p>` per error.
#[must_use]
pub fn build_form_errors(errors: &[String]) -> Element {
    let mut block = Element::new("div");
    for error in errors {
        block.append(Element::new("p").with_text(error.as_str()));
    }
    block
}

/// Builds the nodes of one form: error block, fields, then hidden fields.
///
/// Hidden fields render as bare inputs with no label, errors or help text;
/// a hidden widget from an unsupported template still fails the form.
///
/// # Errors
///
/// Propagates the first builder failure.
pub fn build_form(form: &Form, config: &Config) -> Result<Vec<Node>> {
    tracing::debug!(
        fields = form.fields.len(),
        hidden_fields = form.hidden_fields.len(),
        "building form"
    );
    let mut nodes: Vec<Node> = Vec::new();

    if !form.errors.is_empty() {
        tracing::debug!(count = form.errors.len(), "form-level errors exist");
        nodes.push(build_form_errors(&form.errors).into());
    }
    for field in &form.fields {
        nodes.extend(build_field(field, config)?);
    }
    for hidden in &form.hidden_fields {
        let widget = hidden.widget();
        // Hidden entries always build as inputs, but only from a supported template.
        widget.kind()?;
        nodes.push(build_input(widget)?.into());
    }
    Ok(nodes)
}

/// Builds the nodes of a formset: the management form's nodes, then one
/// wrapper `<div>` per form.
///
/// # Errors
///
/// Propagates the first builder failure.
pub fn build_formset(formset: &FormSet, config: &Config) -> Result<Vec<Node>> {
    tracing::debug!(forms = formset.forms.len(), "building formset");
    let mut nodes = build_form(&formset.management_form, config)?;

    for form in &formset.forms {
        let mut wrapper = Element::new("div");
        wrapper.set_attribute("class", config.form_wrapper_class.as_str());
        for node in build_form(form, config)? {
            wrapper.append(node);
        }
        nodes.push(wrapper.into());
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeformError;
    use serde_json::{json, Value};

    fn hidden(name: &str, value: &str) -> Value {
        json!({
            "template_name": "django/forms/widgets/hidden.html",
            "type": "hidden",
            "name": name,
            "value": value,
            "attrs": {"id": format!("id_{name}")},
        })
    }

    fn html(nodes: &[Node]) -> String {
        let mut container = Element::new("form");
        for node in nodes {
            container.append(node.clone());
        }
        container.inner_html()
    }

    #[test]
    fn errors_come_first_and_hidden_fields_last() {
        let form: Form = serde_json::from_value(json!({
            "errors": ["Dates overlap"],
            "fields": [{
                "label": {"text": "Memo", "attrs": {}},
                "field": {
                    "template_name": "django/forms/widgets/text.html",
                    "type": "text",
                    "name": "memo",
                    "attrs": {},
                },
                "errors": [],
                "help_text": "",
                "initial_field": {},
            }],
            "hidden_fields": [hidden("id", "7")],
        }))
        .unwrap();

        let nodes = build_form(&form, &Config::default()).unwrap();
        assert_eq!(
            html(&nodes),
            concat!(
                "<div><p>Dates overlap</p></div>",
                r#"<div class="field-wrapper"><label>Memo</label><input type="text" name="memo"></div>"#,
                r#"<input type="hidden" name="id" id="id_id" value="7">"#,
            )
        );
    }

    #[test]
    fn formset_wraps_each_form() {
        let formset: FormSet = serde_json::from_value(json!({
            "management_form": {
                "errors": [],
                "fields": [],
                "hidden_fields": [hidden("form-TOTAL_FORMS", "2"), hidden("form-INITIAL_FORMS", "0")],
            },
            "forms": [
                {"errors": [], "fields": [], "hidden_fields": [hidden("form-0-id", "1")]},
                {"errors": ["Bad"], "fields": [], "hidden_fields": []},
            ],
        }))
        .unwrap();

        let nodes = build_formset(&formset, &Config::default()).unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(
            html(&nodes[2..]),
            concat!(
                r#"<div class="form-wrapper"><input type="hidden" name="form-0-id" id="id_form-0-id" value="1"></div>"#,
                r#"<div class="form-wrapper"><div><p>Bad</p></div></div>"#,
            )
        );
    }

    #[test]
    fn unsupported_hidden_template_fails_the_form() {
        let form: Form = serde_json::from_value(json!({
            "errors": [],
            "fields": [],
            "hidden_fields": [{
                "template_name": "django/forms/widgets/multiple_hidden.html",
                "type": "hidden",
                "name": "tags",
                "value": ["1", "2"],
                "attrs": {"id": "id_tags"},
                "subwidgets": [
                    {"template_name": "django/forms/widgets/hidden.html", "type": "hidden", "name": "tags", "value": "1", "attrs": {"id": "id_tags_0"}},
                ],
            }],
        }))
        .unwrap();

        let err = build_form(&form, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            DeformError::UnsupportedWidgetKind { template_name }
                if template_name == "django/forms/widgets/multiple_hidden.html"
        ));
    }

    #[test]
    fn hidden_fields_without_type_are_malformed() {
        let form: Form = serde_json::from_value(json!({
            "errors": [],
            "fields": [],
            "hidden_fields": [{"template_name": "django/forms/widgets/hidden.html", "name": "id"}],
        }))
        .unwrap();
        assert!(matches!(
            build_form(&form, &Config::default()),
            Err(DeformError::MalformedInput(_))
        ));
    }
}
