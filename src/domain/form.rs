//! Form, field and formset payloads.
//!
//! These mirror the dictionaries built by the server's `as_dict()` helpers.
//! The producer fills "nothing here" slots with empty values (`label: {}`,
//! `initial_field: {}`, `help_text: ""`), so each of those is read back as
//! absent.

use super::attrs::{null_as_default, Attrs};
use super::error::{DeformError, Result};
use super::widget::Widget;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A field label: text plus `<label>` attributes (usually `for`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attrs: Attrs,
}

impl Label {
    /// A label with neither text nor attributes renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.attrs.is_empty()
    }
}

/// A visible field: label, widget, errors, help text and optional shadow widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: Label,
    pub field: Widget,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    #[serde(default, deserialize_with = "help_text_or_none")]
    pub help_text: Option<String>,
    /// Hidden widget carrying the field's initial value for change detection.
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub initial_field: Option<Widget>,
}

impl Field {
    /// Returns the help text when it is present and non-empty.
    #[must_use]
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref().filter(|text| !text.is_empty())
    }
}

/// An entry of a form's `hidden_fields`.
///
/// The server emits bare widget contexts here; a full field record is accepted
/// too, in which case only its widget is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum HiddenField {
    Widget(Widget),
    Field(Box<Field>),
}

impl HiddenField {
    #[must_use]
    pub fn widget(&self) -> &Widget {
        match self {
            Self::Widget(widget) => widget,
            Self::Field(field) => &field.field,
        }
    }
}

impl TryFrom<Value> for HiddenField {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        if value.get("field").is_some() {
            serde_json::from_value(value).map(|field| Self::Field(Box::new(field)))
        } else {
            serde_json::from_value(value).map(Self::Widget)
        }
    }
}

/// One form: form-level errors, visible fields and hidden fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Form {
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden_fields: Vec<HiddenField>,
}

/// A management form plus an ordered list of structurally identical forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormSet {
    pub management_form: Form,
    pub forms: Vec<Form>,
}

/// A top-level render payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    FormSet(FormSet),
    Form(Form),
}

impl Payload {
    /// Detects and parses a payload.
    ///
    /// An object carrying both `management_form` and `forms` is a formset; one
    /// carrying both `fields` and `errors` is a single form.
    ///
    /// # Errors
    ///
    /// Returns [`DeformError::MalformedInput`] when the value is not an object,
    /// matches neither shape, or a nested value has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use deform::domain::Payload;
    /// use serde_json::json;
    ///
    /// let payload = Payload::from_value(&json!({"errors": [], "fields": []})).unwrap();
    /// assert!(matches!(payload, Payload::Form(_)));
    /// assert!(Payload::from_value(&json!({"fields": []})).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| DeformError::MalformedInput("payload must be a JSON object".to_string()))?;

        if object.contains_key("management_form") && object.contains_key("forms") {
            tracing::debug!("detected formset");
            Ok(Self::FormSet(FormSet::deserialize(value)?))
        } else if object.contains_key("fields") && object.contains_key("errors") {
            tracing::debug!("detected form");
            Ok(Self::Form(Form::deserialize(value)?))
        } else {
            Err(DeformError::MalformedInput(
                "payload has neither `management_form` and `forms` nor `fields` and `errors`"
                    .to_string(),
            ))
        }
    }

    /// Parses a payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DeformError::MalformedInput`] for invalid JSON or an
    /// unrecognized payload shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Short name used in logs and summaries.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::FormSet(_) => "formset",
            Self::Form(_) => "form",
        }
    }

    /// Iterates the management form (for formsets) followed by every form.
    pub fn forms(&self) -> impl Iterator<Item = &Form> {
        let (head, tail): (&Form, &[Form]) = match self {
            Self::FormSet(formset) => (&formset.management_form, &formset.forms),
            Self::Form(form) => (form, &[]),
        };
        std::iter::once(head).chain(tail)
    }
}

fn help_text_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(other) => Err(D::Error::custom(format!(
            "help_text must be a string, got {other}"
        ))),
    }
}

fn empty_object_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<Widget>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}
