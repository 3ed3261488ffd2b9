use alloc::string::String;

use thiserror::Error;

use crate::FieldKind;

// -----------------------------------------------------------------------------
// AdapterError

/// An error raised while populating a struct from a document.
///
/// The traversal engine itself never fails; these errors are produced by the
/// adapters when a document value does not fit the target field.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdapterError {
    /// The document value has a different shape than the field.
    #[error("field `{field}` expects {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: FieldKind,
        found: &'static str,
    },
    /// The document value could not be parsed into the field type.
    #[error("field `{field}`: `{value}` is not a valid {expected}")]
    InvalidValue {
        field: &'static str,
        expected: FieldKind,
        value: String,
    },
    /// The document value does not fit in the field type.
    #[error("field `{field}`: `{value}` is out of range for {expected}")]
    OutOfRange {
        field: &'static str,
        expected: FieldKind,
        value: String,
    },
    /// The document has more items than a fixed-size list can hold.
    #[error("field `{field}` holds at most {capacity} items")]
    ListFull { field: &'static str, capacity: usize },
    /// The document names a field the struct does not have.
    #[error("`{type_name}` has no field named `{key}`")]
    UnknownField { type_name: &'static str, key: String },
    /// The document names a type that is not in the catalogue.
    #[error("`{name}` is not a registered type")]
    UnknownType { name: String },
    /// A required element is absent.
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    /// The document is not valid JSON.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The document is not valid XML.
    #[cfg(feature = "xml")]
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),
}
