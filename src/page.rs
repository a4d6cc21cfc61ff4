//! Locating form payloads embedded in server-rendered pages.
//!
//! Pages carry the payload in a JSON script element, the shape Django's
//! `json_script` filter produces:
//!
//! ```html
//! <script id="deform-data" type="application/json">{"errors": [], ...}</script>
//! ```
//!
//! The filter escapes `<`, `>` and `&` as JSON unicode escapes, so the element
//! body is plain JSON text.

use crate::domain::{DeformError, Payload, Result};

/// Script element id used when the caller does not name one.
pub const DEFAULT_SCRIPT_ID: &str = "deform-data";

/// Returns the trimmed body of the `<script>` element whose `id` is `id`.
///
/// # Errors
///
/// Returns [`DeformError::Page`] when no script element carries that id.
///
/// # Examples
///
/// ```
/// use deform::page::extract_json_script;
///
/// let html = r#"<body><script id="form" type="application/json">{"a": 1}</script></body>"#;
/// assert_eq!(extract_json_script(html, "form").unwrap(), r#"{"a": 1}"#);
/// assert!(extract_json_script(html, "other").is_err());
/// ```
pub fn extract_json_script(html: &str, id: &str) -> Result<String> {
    // ASCII lowercasing keeps byte offsets valid for `html`.
    let lower = html.to_ascii_lowercase();
    let mut cursor = 0;

    while let Some(offset) = lower[cursor..].find("<script") {
        let start = cursor + offset;
        let attrs_start = start + "<script".len();
        let Some(open_len) = lower[attrs_start..].find('>') else {
            break;
        };
        let body_start = attrs_start + open_len + 1;
        let Some(body_len) = lower[body_start..].find("</script") else {
            break;
        };

        let open_tag = &html[attrs_start..attrs_start + open_len];
        if attribute_value(open_tag, "id").as_deref() == Some(id) {
            tracing::debug!(id, bytes = body_len, "found JSON script element");
            return Ok(html[body_start..body_start + body_len].trim().to_string());
        }
        cursor = body_start + body_len;
    }

    Err(DeformError::Page(format!(
        "no script element with id `{id}`"
    )))
}

/// Extracts and parses the payload embedded under `id`.
///
/// # Errors
///
/// Returns [`DeformError::Page`] when the element is missing and
/// [`DeformError::MalformedInput`] when its body is not a form payload.
pub fn payload_from_page(html: &str, id: &str) -> Result<Payload> {
    Payload::from_json(&extract_json_script(html, id)?)
}

/// Reads one attribute from the inside of an opening tag.
fn attribute_value(open_tag: &str, wanted: &str) -> Option<String> {
    let mut rest = open_tag.trim_start();

    while !rest.is_empty() {
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let mut value = None;
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (raw, remainder) = match after_eq.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let inner = &after_eq[1..];
                    let end = inner.find(quote).unwrap_or(inner.len());
                    (&inner[..end], inner.get(end + 1..).unwrap_or(""))
                }
                _ => {
                    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
                    (&after_eq[..end], &after_eq[end..])
                }
            };
            value = Some(raw.to_string());
            rest = remainder.trim_start();
        } else if name.is_empty() {
            // Stray `/` or similar.
            rest = rest.get(1..).unwrap_or("").trim_start();
        }

        if name.eq_ignore_ascii_case(wanted) {
            return Some(value.unwrap_or_default());
        }
    }
    None
}
