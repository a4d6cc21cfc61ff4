//! Element tree and HTML output.
//!
//! Builders in [`crate::render`] produce [`Element`] trees; [`to_html`] turns a
//! tree into markup.
//!
//! # Modules
//!
//! - [`element`]: Elements, nodes and attributes
//! - [`html`]: HTML serialization and escaping

pub mod element;
pub mod html;

pub use element::{Attribute, Element, Node};
pub use html::{escape_attribute, escape_text, to_html};
