//! Defaults compilation
//!
//! Enumerates every edition at which any feature default changes and
//! synthesizes one complete feature value per edition. Scalar and enum
//! fields take only their latest applicable default (replace); record
//! fields accumulate every applicable default in edition order, so a
//! later edition only restates the sub-fields it changes.

mod artifact;

pub use artifact::{CompiledDefaults, EditionEntry, SCHEMA_ID, SCHEMA_VERSION};

use chrono::Utc;
use std::collections::BTreeSet;

use crate::edition::Edition;
use crate::error::ResolverError;
use crate::validate::{validate_extension, validate_feature_type};
use feature_schema::{
    parse_literal, parse_record_fragment, ExtensionField, FieldDescriptor, FieldKind, FieldValue,
    LiteralError, RecordDescriptor, RecordValue,
};

/// Compile the defaults artifact for `root` and its extension
/// fragments over the inclusive edition range `[minimum, maximum]`.
pub fn compile_defaults(
    root: &RecordDescriptor,
    extensions: &[ExtensionField],
    minimum: &Edition,
    maximum: &Edition,
) -> Result<CompiledDefaults, ResolverError> {
    validate_feature_type(root)?;
    for extension in extensions {
        validate_extension(root, extension)?;
        // validate_extension guarantees a record payload
        if let Some(record) = extension.record() {
            validate_feature_type(record)?;
        }
    }

    // Collect the relevant edition set: every edition at which some
    // field's default changes, capped at the maximum.
    let mut editions = BTreeSet::new();
    collect_editions(root, maximum, &mut editions);
    for extension in extensions {
        if let Some(record) = extension.record() {
            collect_editions(record, maximum, &mut editions);
        }
    }

    let mut defaults = Vec::with_capacity(editions.len());
    for edition in &editions {
        let mut features = fill_defaults(root, edition)?;
        for extension in extensions {
            if let Some(record) = extension.record() {
                let payload = fill_defaults(record, edition)?;
                features.set(extension.field.name.clone(), FieldValue::Record(payload));
            }
        }
        defaults.push(EditionEntry {
            edition: edition.clone(),
            features,
        });
    }

    Ok(CompiledDefaults {
        schema_version: SCHEMA_VERSION,
        schema_id: SCHEMA_ID.to_string(),
        created_at: Utc::now(),
        minimum_edition: minimum.clone(),
        maximum_edition: maximum.clone(),
        defaults,
    })
}

fn collect_editions(record: &RecordDescriptor, maximum: &Edition, editions: &mut BTreeSet<Edition>) {
    for field in &record.fields {
        for default in &field.defaults {
            let edition = Edition::from(default.edition.as_str());
            if edition > *maximum {
                continue;
            }
            editions.insert(edition);
        }
    }
}

/// Synthesize the complete value of `record` at `edition`.
fn fill_defaults(record: &RecordDescriptor, edition: &Edition) -> Result<RecordValue, ResolverError> {
    let mut value = RecordValue::new();
    for field in &record.fields {
        let mut defaults: Vec<(Edition, &str)> = field
            .defaults
            .iter()
            .map(|d| (Edition::from(d.edition.as_str()), d.value.as_str()))
            .collect();
        defaults.sort_by(|a, b| a.0.cmp(&b.0));

        // Entries applicable at this edition form a prefix.
        let applicable = defaults.partition_point(|(e, _)| e <= edition);
        if applicable == 0 {
            return Err(ResolverError::MissingDefault {
                edition: edition.clone(),
                field: record.field_full_name(field),
            });
        }

        let parsed = match &field.kind {
            FieldKind::Record(nested) => {
                // Cumulative: every applicable fragment, oldest first.
                let mut accumulated = RecordValue::new();
                for (_, literal) in &defaults[..applicable] {
                    let fragment = parse_record_fragment(nested, literal)
                        .map_err(|source| literal_error(record, field, literal, source))?;
                    accumulated.merge_from(&fragment);
                }
                FieldValue::Record(accumulated)
            }
            _ => {
                // Replace: only the latest applicable entry counts.
                let (_, literal) = &defaults[applicable - 1];
                parse_literal(field, literal)
                    .map_err(|source| literal_error(record, field, literal, source))?
            }
        };
        value.set(field.name.clone(), parsed);
    }
    Ok(value)
}

fn literal_error(
    record: &RecordDescriptor,
    field: &FieldDescriptor,
    literal: &str,
    source: LiteralError,
) -> ResolverError {
    ResolverError::LiteralParse {
        field: record.field_full_name(field),
        literal: literal.to_string(),
        source,
    }
}
