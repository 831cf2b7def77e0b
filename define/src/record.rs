//! Record definitions for generated data-holder types.
//!
//! A [`RecordDef`] describes one named record: the generator emits a
//! ledger-persisted struct for it on the contract side and a
//! wire-serializable struct on the client side, from the same definition.

use serde::{Deserialize, Serialize};

/// A single record field: a name paired with a type-name string.
///
/// The type name is an ordinary Rust type written as a string, e.g.
/// `"String"`, `"i64"` or `"Vec<Asset>"`. It is resolved lazily during
/// generation and appears verbatim in the emitted code; a name that does not
/// exist fails when the generated artifacts compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name. Must be unique within its record.
    pub name: String,
    /// Type name the field resolves to in generated code.
    pub type_name: String,
}

/// A named data-record type to generate for both backends.
///
/// Field order is significant: it becomes the declaration order of the
/// generated struct and the parameter order of its all-field constructor.
/// A record is authored once and read-only during generation.
///
/// ## Examples
///
/// ```
/// use chainapi_define::RecordDef;
///
/// let record = RecordDef::new("Asset")
///     .field("id", "String")
///     .field("createTime", "i64");
///
/// assert_eq!(record.name, "Asset");
/// assert_eq!(record.fields[1].name, "createTime");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDef {
    /// Record name. Must be unique within the schema.
    pub name: String,
    /// Ordered fields.
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Creates an empty record definition with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, preserving declaration order.
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }
}
