//! Resolver error taxonomy
//!
//! Every failure in the resolver core is a synchronous, descriptive,
//! precondition-style error. Nothing is retried internally and no
//! partial result accompanies an error.

use crate::edition::Edition;
use feature_schema::LiteralError;

/// Errors from schema validation, defaults compilation, resolver
/// construction, and feature merging.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    // --- schema shape ---
    #[error("feature type {type_name} contains unsupported union declarations")]
    UnsupportedUnion { type_name: String },

    #[error("feature field {field} is an unsupported required field")]
    RequiredField { field: String },

    #[error("feature field {field} is an unsupported repeated field")]
    RepeatedField { field: String },

    #[error("feature field {field} has no target specified")]
    MissingTarget { field: String },

    #[error("extension {field} is not an extension of {expected}")]
    WrongExtendee { field: String, expected: String },

    #[error(
        "feature extension {field} is not of record type; feature extensions \
         should always use records to allow for evolution"
    )]
    NonRecordExtension { field: String },

    #[error("only singular feature extensions are supported; found repeated extension {field}")]
    RepeatedExtension { field: String },

    #[error("nested extensions in feature extension {field} are not supported")]
    NestedExtensions { field: String },

    // --- default availability ---
    #[error("no valid default found for edition {edition} in feature field {field}")]
    MissingDefault { edition: Edition, field: String },

    // --- literal parsing ---
    #[error("parsing error in edition defaults for feature field {field}: could not parse `{literal}`")]
    LiteralParse {
        field: String,
        literal: String,
        #[source]
        source: LiteralError,
    },

    // --- ordering / range ---
    #[error("edition {edition} is earlier than the minimum supported edition {minimum}")]
    EditionBelowMinimum { edition: Edition, minimum: Edition },

    #[error("edition {edition} is later than the maximum supported edition {maximum}")]
    EditionAboveMaximum { edition: Edition, maximum: Edition },

    #[error(
        "feature set defaults are not strictly increasing: edition {previous} \
         is greater than or equal to edition {current}"
    )]
    NonMonotonicDefaults { previous: Edition, current: Edition },

    #[error("no valid default found for edition {edition}")]
    NoDefaultEntry { edition: Edition },

    // --- post-merge validation ---
    #[error("feature field {field} must resolve to a known value, found {value}")]
    UnresolvedEnum { field: String, value: String },
}
