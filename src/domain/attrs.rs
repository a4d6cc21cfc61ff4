//! Widget attribute mappings.
//!
//! Attribute values arrive from the form framework's widget context, where they
//! can be strings, numbers, booleans or, for `class`, a list of tokens.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One value of a widget attribute mapping.
///
/// `Flag(false)` and `Null` suppress the attribute, `Flag(true)` marks a
/// presence-only attribute such as `required` or `checked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    Tokens(Vec<String>),
}

impl AttrValue {
    /// Returns the value formatted the way the server template prints it, or
    /// `None` for `null`, which has no attribute text.
    ///
    /// Booleans follow Python's `str()` (`True`/`False`) and token lists are
    /// joined with a single space.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Flag(true) => Some("True".to_string()),
            Self::Flag(false) => Some("False".to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Tokens(tokens) => Some(tokens.join(" ")),
        }
    }

    /// Returns the `class` attribute text, or `None` when the value carries no
    /// class tokens at all.
    #[must_use]
    pub fn class_list(&self) -> Option<String> {
        match self {
            Self::Tokens(tokens) => Some(tokens.join(" ")),
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Null | Self::Flag(_) => None,
        }
    }
}

/// Attribute mapping, iterated in the order the producer sent it.
pub type Attrs = IndexMap<String, AttrValue>;

/// Deserializes `null` (or a missing key, with `#[serde(default)]`) as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_every_value_shape() {
        let attrs: Attrs = serde_json::from_value(json!({
            "class": ["a", "b"],
            "disabled": false,
            "required": true,
            "maxlength": 100,
            "id": "id_name",
            "placeholder": null,
        }))
        .unwrap();

        assert_eq!(attrs["class"], AttrValue::Tokens(vec!["a".into(), "b".into()]));
        assert_eq!(attrs["disabled"], AttrValue::Flag(false));
        assert_eq!(attrs["required"], AttrValue::Flag(true));
        assert_eq!(attrs["maxlength"].text().as_deref(), Some("100"));
        assert_eq!(attrs["id"], AttrValue::Text("id_name".into()));
        assert_eq!(attrs["placeholder"], AttrValue::Null);
    }

    #[test]
    fn class_list_joins_tokens_with_single_spaces() {
        let value = AttrValue::Tokens(vec!["form-control".into(), "wide".into()]);
        assert_eq!(value.class_list().as_deref(), Some("form-control wide"));
        assert_eq!(AttrValue::Flag(false).class_list(), None);
    }

    #[test]
    fn booleans_print_like_python() {
        assert_eq!(AttrValue::Flag(true).text().as_deref(), Some("True"));
        assert_eq!(AttrValue::Flag(false).text().as_deref(), Some("False"));
        assert_eq!(AttrValue::Null.text(), None);
    }

    #[test]
    fn keys_keep_payload_order() {
        let attrs: Attrs = serde_json::from_value(json!({
            "maxlength": "5",
            "required": true,
            "id": "id_n",
            "class": ["a"],
        }))
        .unwrap();

        let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["maxlength", "required", "id", "class"]);
    }
}
