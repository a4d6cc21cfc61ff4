//! Domain layer: the typed form payload and the crate's error type.
//!
//! These types describe what the server sent and nothing about how it is
//! rendered. Parsing happens once, up front, so the builders in
//! [`crate::render`] only ever see well-typed input.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`attrs`]: Widget attribute mappings
//! - [`widget`]: Widgets, select option groups, and the closed [`WidgetKind`] set
//! - [`form`]: Fields, forms, formsets and top-level payload detection
//!
//! # Examples
//!
//! ```
//! use deform::domain::{Payload, Result};
//!
//! fn parse(json: &str) -> Result<Payload> {
//!     Payload::from_json(json)
//! }
//!
//! let payload = parse(r#"{"errors": [], "fields": [], "hidden_fields": []}"#).unwrap();
//! assert_eq!(payload.kind_name(), "form");
//! ```

pub mod attrs;
pub mod error;
pub mod form;
pub mod widget;

pub use attrs::{AttrValue, Attrs};
pub use error::{DeformError, Result};
pub use form::{Field, Form, FormSet, HiddenField, Label, Payload};
pub use widget::{OptGroup, SelectOption, Widget, WidgetKind, WidgetValue};
