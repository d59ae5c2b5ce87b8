//! Feature Resolver - edition-scoped configuration defaults
//!
//! This crate resolves version-scoped configuration defaults
//! ("features") for a schema description language whose semantics
//! evolve over discrete, ordered editions. Validation gates
//! compilation, compilation produces an immutable artifact, and a
//! per-edition resolver merges that baseline with parent/child
//! overrides at read time.

pub mod compile;
pub mod edition;
pub mod error;
pub mod resolve;
pub mod validate;

pub use compile::{compile_defaults, CompiledDefaults, EditionEntry};
pub use edition::Edition;
pub use error::ResolverError;
pub use resolve::FeatureResolver;
pub use validate::{validate_extension, validate_feature_type};

pub use feature_schema::{
    EditionDefault, EnumDescriptor, EnumValue, ExtensionField, FieldDescriptor, FieldKind,
    FieldValue, RecordDescriptor, RecordValue,
};
