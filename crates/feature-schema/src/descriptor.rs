//! Feature field descriptor tables
//!
//! A concrete, explicit table of typed field descriptors standing in
//! for the schema registry. The resolver core never reflects over
//! arbitrary types at runtime; it walks these tables with ordinary
//! structural recursion.

use serde::{Deserialize, Serialize};

/// A single named enumerant of a feature enum.
///
/// Number 0 is reserved to mean "unset" and may never survive as a
/// resolved feature value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

/// An enum type referenced by enum-kinded feature fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// Full name of the enum type
    pub name: String,
    /// Declared enumerants
    pub values: Vec<EnumValue>,
}

impl EnumDescriptor {
    /// Look up an enumerant by its declared name
    pub fn value_by_name(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Look up an enumerant by number
    pub fn value_by_number(&self, number: i32) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.number == number)
    }
}

/// The value kind of a feature field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Bool,
    Int,
    String,
    Enum(EnumDescriptor),
    Record(RecordDescriptor),
}

impl FieldKind {
    /// Returns the record descriptor for record-kinded fields
    pub fn as_record(&self) -> Option<&RecordDescriptor> {
        match self {
            FieldKind::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// One (edition, literal) default entry on a field.
///
/// The list on a field is unordered; the compiler sorts it under the
/// edition order before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionDefault {
    pub edition: String,
    pub value: String,
}

/// A single feature field of a configuration record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,

    /// Declared required (always rejected by validation)
    #[serde(default)]
    pub required: bool,

    /// Declared repeated (always rejected by validation)
    #[serde(default)]
    pub repeated: bool,

    /// Applicability targets; must be non-empty for a valid field
    #[serde(default)]
    pub targets: Vec<String>,

    /// Per-edition default literals, in no particular order
    #[serde(default)]
    pub defaults: Vec<EditionDefault>,
}

/// A configuration record type: the root feature type, or the payload
/// type of an extension fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    /// Full name of the record type
    pub name: String,
    pub fields: Vec<FieldDescriptor>,

    /// Names of declared union (oneof) groups; any entry makes the
    /// type invalid as a feature type
    #[serde(default)]
    pub unions: Vec<String>,

    /// Number of extension ranges or nested extension declarations
    #[serde(default)]
    pub extension_ranges: usize,
}

impl RecordDescriptor {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Full name of a field of this record, for error messages
    pub fn field_full_name(&self, field: &FieldDescriptor) -> String {
        format!("{}.{}", self.name, field.name)
    }
}

/// An externally-declared field extending the root feature type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionField {
    /// Full name of the record type this field extends
    pub extendee: String,
    pub field: FieldDescriptor,
}

impl ExtensionField {
    /// The extension's payload record type, if it is record-kinded
    pub fn record(&self) -> Option<&RecordDescriptor> {
        self.field.kind.as_record()
    }
}
