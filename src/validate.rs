//! Feature schema validation
//!
//! Pure shape checks over the descriptor tables. Validation gates
//! compilation: a type that passes here can be filled field-by-field
//! without surprises (no unions, no repeated or required fields, every
//! field targeted, extensions singular and non-extensible).

use crate::error::ResolverError;
use feature_schema::{ExtensionField, RecordDescriptor};

/// Validate that `record` is legally shaped as a feature type.
pub fn validate_feature_type(record: &RecordDescriptor) -> Result<(), ResolverError> {
    if !record.unions.is_empty() {
        return Err(ResolverError::UnsupportedUnion {
            type_name: record.name.clone(),
        });
    }

    for field in &record.fields {
        if field.required {
            return Err(ResolverError::RequiredField {
                field: record.field_full_name(field),
            });
        }
        if field.repeated {
            return Err(ResolverError::RepeatedField {
                field: record.field_full_name(field),
            });
        }
        if field.targets.is_empty() {
            return Err(ResolverError::MissingTarget {
                field: record.field_full_name(field),
            });
        }
    }

    Ok(())
}

/// Validate that `extension` is a legal extension fragment of `root`.
///
/// The extension's payload type must additionally pass
/// [`validate_feature_type`]; the compiler runs that check after this
/// one.
pub fn validate_extension(
    root: &RecordDescriptor,
    extension: &ExtensionField,
) -> Result<(), ResolverError> {
    if extension.extendee != root.name {
        return Err(ResolverError::WrongExtendee {
            field: extension.field.name.clone(),
            expected: root.name.clone(),
        });
    }

    let record = match extension.record() {
        Some(record) => record,
        None => {
            return Err(ResolverError::NonRecordExtension {
                field: extension.field.name.clone(),
            })
        }
    };

    if extension.field.repeated {
        return Err(ResolverError::RepeatedExtension {
            field: extension.field.name.clone(),
        });
    }

    if record.extension_ranges > 0 {
        return Err(ResolverError::NestedExtensions {
            field: extension.field.name.clone(),
        });
    }

    Ok(())
}
