//! Document adapters: populate reflected structs from JSON or XML.
//!
//! The adapters only touch reflected data through the traversal engine. For
//! each key in a document they fingerprint the key, call
//! [`find_field_mut`](crate::Struct::find_field_mut) and convert the document
//! value inside the visitor, recursing when the field is a nested struct.
//!
//! ## Menu
//!
//! - [`AdapterConfig`], [`MismatchPolicy`]: lenient or strict loading.
//! - [`AdapterError`]: what can go wrong.
//! - JSON (feature `json`): [`json_to_struct`], [`json_to_dyn`],
//!   [`from_json_str`], [`struct_to_json`], [`dyn_to_json`].
//! - XML (feature `xml`): [`xml_to_struct`], [`xml_to_dyn`],
//!   [`from_xml_str`], [`load_nodes`].

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod scalar;
mod staging;

crate::cfg::json! {
    mod json;
    pub use json::{dyn_to_json, from_json_str, json_to_dyn, json_to_struct, struct_to_json};
}

crate::cfg::xml! {
    mod xml;
    pub use xml::{from_xml_str, load_nodes, xml_to_dyn, xml_to_struct};
}

// -----------------------------------------------------------------------------
// Exports

pub use config::{AdapterConfig, MismatchPolicy};
pub use error::AdapterError;
