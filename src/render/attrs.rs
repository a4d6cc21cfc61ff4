//! Attribute applier shared by every builder.

use crate::domain::{AttrValue, Attrs};
use crate::markup::Element;

/// Applies a widget attribute mapping to an element.
///
/// - `class` is set to its tokens joined by single spaces
/// - `false` and `null` values are skipped
/// - `true` values become presence-only attributes
/// - anything else is set to its string form
pub fn apply_attrs(element: &mut Element, attrs: &Attrs) {
    for (key, value) in attrs {
        if key == "class" {
            if let Some(classes) = value.class_list() {
                element.set_attribute(key.as_str(), classes);
            }
            continue;
        }

        match value {
            AttrValue::Flag(false) => {}
            AttrValue::Flag(true) => element.set_boolean_attribute(key.as_str()),
            other => {
                if let Some(text) = other.text() {
                    element.set_attribute(key.as_str(), text);
                }
            }
        }
    }
}
