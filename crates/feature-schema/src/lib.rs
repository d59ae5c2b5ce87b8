//! Feature Schema Types
//!
//! Typed descriptor tables, value containers, and the literal-value
//! parser consumed by the feature-default resolver. This crate is the
//! boundary to the external schema registry: descriptors are built
//! once (here, typically deserialized from JSON) and then only read.

pub mod descriptor;
pub mod literal;
pub mod value;

pub use descriptor::{
    EditionDefault, EnumDescriptor, EnumValue, ExtensionField, FieldDescriptor, FieldKind,
    RecordDescriptor,
};
pub use literal::{parse_literal, parse_record_fragment, LiteralError};
pub use value::{FieldValue, RecordValue};
