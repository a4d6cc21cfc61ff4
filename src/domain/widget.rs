//! Widget descriptions and the closed set of renderable widget kinds.
//!
//! A [`Widget`] is the JSON form of a server-side widget context. Its
//! `template_name` selects the builder; [`WidgetKind`] is the closed list of
//! templates that have one.

use super::attrs::{null_as_default, Attrs};
use super::error::{DeformError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Template names shared by every widget this crate can build.
const TEMPLATE_PREFIX: &str = "django/forms/widgets/";

/// Widget templates with a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Checkbox,
    Date,
    Hidden,
    Number,
    Select,
    Text,
    Textarea,
    Time,
}

impl WidgetKind {
    /// All buildable kinds, in template-name order.
    pub const ALL: [Self; 8] = [
        Self::Checkbox,
        Self::Date,
        Self::Hidden,
        Self::Number,
        Self::Select,
        Self::Text,
        Self::Textarea,
        Self::Time,
    ];

    /// Resolves a widget template name.
    ///
    /// # Errors
    ///
    /// Returns [`DeformError::UnsupportedWidgetKind`] for any template outside
    /// [`WidgetKind::ALL`], including the framework templates that exist but
    /// have no builder (`email.html`, `file.html`, `multiwidget.html`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use deform::domain::WidgetKind;
    ///
    /// let kind = WidgetKind::from_template_name("django/forms/widgets/select.html").unwrap();
    /// assert_eq!(kind, WidgetKind::Select);
    /// assert!(WidgetKind::from_template_name("django/forms/widgets/email.html").is_err());
    /// ```
    pub fn from_template_name(template_name: &str) -> Result<Self> {
        template_name
            .strip_prefix(TEMPLATE_PREFIX)
            .and_then(|file| match file {
                "checkbox.html" => Some(Self::Checkbox),
                "date.html" => Some(Self::Date),
                "hidden.html" => Some(Self::Hidden),
                "number.html" => Some(Self::Number),
                "select.html" => Some(Self::Select),
                "text.html" => Some(Self::Text),
                "textarea.html" => Some(Self::Textarea),
                "time.html" => Some(Self::Time),
                _ => None,
            })
            .ok_or_else(|| DeformError::UnsupportedWidgetKind {
                template_name: template_name.to_string(),
            })
    }

    /// Returns the framework template this kind mirrors.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Checkbox => "django/forms/widgets/checkbox.html",
            Self::Date => "django/forms/widgets/date.html",
            Self::Hidden => "django/forms/widgets/hidden.html",
            Self::Number => "django/forms/widgets/number.html",
            Self::Select => "django/forms/widgets/select.html",
            Self::Text => "django/forms/widgets/text.html",
            Self::Textarea => "django/forms/widgets/textarea.html",
            Self::Time => "django/forms/widgets/time.html",
        }
    }
}

/// A widget or option value.
///
/// Scalars print the way Python's `str()` prints them; multi-valued selects
/// send a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidgetValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
}

impl WidgetValue {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Flag(true) => "True".to_string(),
            Self::Flag(false) => "False".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::List(values) => values.join(","),
        }
    }
}

/// One widget context.
///
/// Deserialization resolves `template_name` before reading anything else. A
/// widget of an unsupported kind keeps only its identifying keys, whatever
/// shape the rest of its context has (`select_date.html` sends a dict value,
/// multiwidgets send lists with nulls), and fails with
/// [`DeformError::UnsupportedWidgetKind`] once a builder asks for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Widget {
    pub template_name: String,
    pub name: String,
    pub value: Option<WidgetValue>,
    pub attrs: Attrs,
    /// The `type` attribute of input widgets.
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub optgroups: Vec<OptGroup>,
    pub subwidgets: Vec<Widget>,
    pub is_hidden: bool,
    pub required: bool,
}

/// Wire shape of a widget whose kind has a builder.
#[derive(Deserialize)]
struct WidgetContext {
    template_name: String,
    name: String,
    #[serde(default)]
    value: Option<WidgetValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    attrs: Attrs,
    #[serde(default, rename = "type")]
    input_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    optgroups: Vec<OptGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    subwidgets: Vec<Widget>,
    #[serde(default)]
    is_hidden: bool,
    #[serde(default)]
    required: bool,
}

impl From<WidgetContext> for Widget {
    fn from(context: WidgetContext) -> Self {
        Self {
            template_name: context.template_name,
            name: context.name,
            value: context.value,
            attrs: context.attrs,
            input_type: context.input_type,
            optgroups: context.optgroups,
            subwidgets: context.subwidgets,
            is_hidden: context.is_hidden,
            required: context.required,
        }
    }
}

impl TryFrom<Value> for Widget {
    type Error = serde_json::Error;

    fn try_from(context: Value) -> std::result::Result<Self, Self::Error> {
        let unsupported = context
            .get("template_name")
            .and_then(Value::as_str)
            .is_some_and(|name| WidgetKind::from_template_name(name).is_err());

        if unsupported {
            return Ok(Self::unsupported(&context));
        }
        serde_json::from_value::<WidgetContext>(context).map(Self::from)
    }
}

impl Widget {
    fn unsupported(context: &Value) -> Self {
        let text = |key: &str| context.get(key).and_then(Value::as_str).map(str::to_string);
        let flag = |key: &str| context.get(key).and_then(Value::as_bool).unwrap_or(false);

        Self {
            template_name: text("template_name").unwrap_or_default(),
            name: text("name").unwrap_or_default(),
            value: None,
            attrs: Attrs::new(),
            input_type: text("type"),
            optgroups: Vec::new(),
            subwidgets: Vec::new(),
            is_hidden: flag("is_hidden"),
            required: flag("required"),
        }
    }

    /// Resolves the widget's builder kind from its template name.
    ///
    /// # Errors
    ///
    /// Returns [`DeformError::UnsupportedWidgetKind`] when no builder exists.
    pub fn kind(&self) -> Result<WidgetKind> {
        WidgetKind::from_template_name(&self.template_name)
    }

    /// Returns the value text when a value is present and non-empty.
    #[must_use]
    pub fn value_text(&self) -> Option<String> {
        self.value
            .as_ref()
            .map(WidgetValue::text)
            .filter(|text| !text.is_empty())
    }
}

/// One `(group name, options, group index)` triple of a select widget.
///
/// A `None` or empty name means the options belong directly to the select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(Option<String>, Vec<SelectOption>, usize)",
    into = "(Option<String>, Vec<SelectOption>, usize)"
)]
pub struct OptGroup {
    pub name: Option<String>,
    pub options: Vec<SelectOption>,
    pub index: usize,
}

impl OptGroup {
    /// Returns the group label when the options are wrapped in an `<optgroup>`.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl From<(Option<String>, Vec<SelectOption>, usize)> for OptGroup {
    fn from((name, options, index): (Option<String>, Vec<SelectOption>, usize)) -> Self {
        Self {
            name,
            options,
            index,
        }
    }
}

impl From<OptGroup> for (Option<String>, Vec<SelectOption>, usize) {
    fn from(group: OptGroup) -> Self {
        (group.name, group.options, group.index)
    }
}

/// One choice of a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub value: Option<WidgetValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attrs: Attrs,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    /// Returns the `value` attribute text; a missing value is the empty string.
    #[must_use]
    pub fn value_text(&self) -> String {
        self.value.as_ref().map(WidgetValue::text).unwrap_or_default()
    }
}
