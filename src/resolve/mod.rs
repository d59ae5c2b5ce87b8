//! Feature resolution
//!
//! A `FeatureResolver` is constructed once per target edition from a
//! compiled-defaults artifact and holds the baseline feature value for
//! that edition. It is immutable after construction; `merge_features`
//! takes `&self` and produces an independent value per call, so one
//! resolver may serve many configuration instances concurrently.

use crate::compile::CompiledDefaults;
use crate::edition::Edition;
use crate::error::ResolverError;
use feature_schema::{FieldValue, RecordValue};

/// Resolves feature values for one target edition.
#[derive(Debug, Clone)]
pub struct FeatureResolver {
    defaults: RecordValue,
}

impl FeatureResolver {
    /// Select the defaults applicable at `edition` from a compiled
    /// artifact.
    ///
    /// The applicable entry is the one with the greatest edition not
    /// greater than the target. Fails if the target lies outside the
    /// artifact's supported range, if the artifact's editions are not
    /// strictly increasing, or if no entry is early enough.
    pub fn create(edition: &Edition, compiled: &CompiledDefaults) -> Result<Self, ResolverError> {
        if *edition < compiled.minimum_edition {
            return Err(ResolverError::EditionBelowMinimum {
                edition: edition.clone(),
                minimum: compiled.minimum_edition.clone(),
            });
        }
        if *edition > compiled.maximum_edition {
            return Err(ResolverError::EditionAboveMaximum {
                edition: edition.clone(),
                maximum: compiled.maximum_edition.clone(),
            });
        }

        for pair in compiled.defaults.windows(2) {
            if pair[0].edition >= pair[1].edition {
                return Err(ResolverError::NonMonotonicDefaults {
                    previous: pair[0].edition.clone(),
                    current: pair[1].edition.clone(),
                });
            }
        }

        // Entries at or before the target form a prefix; take the last.
        let bound = compiled
            .defaults
            .partition_point(|entry| entry.edition <= *edition);
        if bound == 0 {
            return Err(ResolverError::NoDefaultEntry {
                edition: edition.clone(),
            });
        }

        Ok(Self {
            defaults: compiled.defaults[bound - 1].features.clone(),
        })
    }

    /// The baseline feature value this resolver was constructed with.
    pub fn defaults(&self) -> &RecordValue {
        &self.defaults
    }

    /// Resolve one configuration instance: baseline defaults, then the
    /// parent's already-merged features, then the child's own
    /// overrides, with the child taking final precedence.
    ///
    /// The result is re-validated: every resolved enum value must be a
    /// known, non-zero enumerant.
    pub fn merge_features(
        &self,
        merged_parent: &RecordValue,
        unmerged_child: &RecordValue,
    ) -> Result<RecordValue, ResolverError> {
        let mut merged = self.defaults.clone();
        merged.merge_from(merged_parent);
        merged.merge_from(unmerged_child);

        validate_merged_features(&merged)?;

        Ok(merged)
    }
}

/// Reject any enum field that resolved to the reserved zero enumerant.
fn validate_merged_features(merged: &RecordValue) -> Result<(), ResolverError> {
    validate_record(merged, "")
}

fn validate_record(record: &RecordValue, prefix: &str) -> Result<(), ResolverError> {
    for (name, value) in record.iter() {
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            FieldValue::Enum { name: enumerant, number } => {
                if *number == 0 {
                    return Err(ResolverError::UnresolvedEnum {
                        field: path,
                        value: enumerant.clone(),
                    });
                }
            }
            FieldValue::Record(nested) => validate_record(nested, &path)?,
            _ => {}
        }
    }
    Ok(())
}
