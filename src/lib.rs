//! Deform: renders server-side form descriptions as element trees and HTML.
//!
//! A Django-style form framework describes each form as a JSON payload: the
//! form-level errors, every visible field (label, widget, errors, help text,
//! shadow "initial" widget) and the hidden fields, or for a formset a
//! management form plus a list of forms. This crate rebuilds the markup the
//! framework's widget templates would have produced from that payload:
//! - Typed parsing of form and formset payloads
//! - Widget builders for checkbox, date, hidden, number, select, text,
//!   textarea and time templates
//! - An in-memory element tree with HTML serialization
//! - Extraction of payloads embedded in a page's JSON script element
//! - A `deform` command-line renderer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Page (page)   │   │ Render        │   │ Markup        │
//! │ - JSON script │ → │ (render/)     │ → │ (markup/)     │
//! │   extraction  │   │ - Form/field  │   │ - Element tree│
//! │               │   │ - Widgets     │   │ - HTML output │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Payload model, widget kinds (domain/)            │
//! │  - Error types (domain/error)                       │
//! │  - Config file lookup (infrastructure/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← CLI only
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Payload types, widget kinds and errors
//! - [`markup`]: Element tree and HTML serialization
//! - [`render`]: Form, field and widget builders
//! - [`page`]: Payload extraction from HTML pages
//! - [`infrastructure`]: Configuration file lookup
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! Rendering is tuned with a TOML file; every key is optional:
//!
//! ```toml
//! submit_label = "Submit"
//! field_wrapper_class = "field-wrapper"
//! form_wrapper_class = "form-wrapper"
//! help_text_class = "helptext"
//! error_list_class = "errorlist"
//! wrap_label = false
//! wrap_field = true
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use deform::markup::Element;
//! use serde_json::json;
//!
//! let data = json!({
//!     "errors": [],
//!     "fields": [{
//!         "label": {"text": "Name", "attrs": {"for": "id_name"}},
//!         "field": {
//!             "template_name": "django/forms/widgets/text.html",
//!             "type": "text",
//!             "name": "name",
//!             "attrs": {"id": "id_name", "required": true},
//!         },
//!         "errors": [],
//!         "help_text": "",
//!         "initial_field": {},
//!     }],
//!     "hidden_fields": [],
//! });
//!
//! let mut form = Element::new("form");
//! deform::render(&mut form, &data)?;
//! assert_eq!(
//!     form.outer_html(),
//!     concat!(
//!         r#"<form><div class="field-wrapper"><label for="id_name">Name</label>"#,
//!         r#"<input type="text" name="name" id="id_name" required></div>"#,
//!         r#"<button type="submit">Submit</button></form>"#,
//!     )
//! );
//! # Ok::<(), deform::DeformError>(())
//! ```
//!
//! # Failure Model
//!
//! Rendering is all-or-nothing. A widget with no builder
//! ([`DeformError::UnsupportedWidgetKind`]) or a payload of the wrong shape
//! ([`DeformError::MalformedInput`]) aborts the call before anything is
//! appended to the container.

#![allow(clippy::multiple_crate_versions)]

pub mod domain;
pub mod infrastructure;
pub mod markup;
pub mod observability;
pub mod page;
pub mod render;

pub use domain::{DeformError, Payload, Result, WidgetKind};
pub use markup::{Element, Node};
pub use render::{render, render_payload, render_to_html, render_with};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Rendering configuration.
///
/// The defaults reproduce the server templates exactly; a TOML file can
/// override any subset of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text of the trailing submit button. Default: `"Submit"`
    pub submit_label: String,

    /// Class of the `<div>` wrapping each field. Default: `"field-wrapper"`
    pub field_wrapper_class: String,

    /// Class of the `<div>` wrapping each formset form. Default: `"form-wrapper"`
    pub form_wrapper_class: String,

    /// Class of the help text `<span>`. Default: `"helptext"`
    pub help_text_class: String,

    /// Optional class for field error lists. Default: none
    pub error_list_class: Option<String>,

    /// Nest each widget inside its `<label>` instead of after it. Default: `false`
    pub wrap_label: bool,

    /// Wrap each field's nodes in a `<div>`. Default: `true`
    pub wrap_field: bool,

    /// Tracing level used by the CLI when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: none, in
    /// which case [`observability::init_tracing`] falls back to `warn`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit_label: "Submit".to_string(),
            field_wrapper_class: "field-wrapper".to_string(),
            form_wrapper_class: "form-wrapper".to_string(),
            help_text_class: "helptext".to_string(),
            error_list_class: None,
            wrap_label: false,
            wrap_field: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DeformError::Config`] for invalid TOML, unknown keys or
    /// mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deform::Config;
    ///
    /// let config = Config::from_toml_str("submit_label = \"Save\"\nwrap_label = true").unwrap();
    /// assert_eq!(config.submit_label, "Save");
    /// assert!(config.wrap_label);
    /// assert_eq!(config.field_wrapper_class, "field-wrapper");
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| DeformError::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DeformError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            DeformError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Loads the configuration the CLI runs with.
///
/// Uses `explicit` when given, otherwise the first file found by
/// [`infrastructure::locate_config`], otherwise [`Config::default`].
///
/// # Errors
///
/// Returns [`DeformError::Config`] when a located file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match infrastructure::locate_config(explicit) {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}
