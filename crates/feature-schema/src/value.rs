//! Feature value containers
//!
//! `RecordValue` is the generic configuration value the resolver fills
//! and merges. Presence is structural: a field is explicitly set iff
//! its name is present in the map.
//!
//! Merge semantics match the configuration-layer rules:
//! - Records: deep-merge field-by-field (recursive)
//! - Scalars and enums: override (second wins)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single feature field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    String(String),
    /// An enum value carries both the enumerant name and number so the
    /// post-merge zero check needs no descriptor lookup.
    Enum { name: String, number: i32 },
    Record(RecordValue),
}

impl FieldValue {
    /// Returns the inner record for record values
    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            FieldValue::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// A concrete instance of a configuration record type.
///
/// Keyed by field name; `BTreeMap` keeps serialization deterministic
/// so artifact digests are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordValue {
    fields: BTreeMap<String, FieldValue>,
}

impl RecordValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the named field is explicitly set
    pub fn is_set(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate set fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge another record onto this one.
    ///
    /// Fields set in `other` override fields here, except record
    /// fields, which deep-merge recursively so sub-fields only set on
    /// this side survive.
    pub fn merge_from(&mut self, other: &RecordValue) {
        for (name, incoming) in &other.fields {
            match (self.fields.get_mut(name), incoming) {
                (Some(FieldValue::Record(base)), FieldValue::Record(overlay)) => {
                    base.merge_from(overlay);
                }
                (_, incoming) => {
                    self.fields.insert(name.clone(), incoming.clone());
                }
            }
        }
    }
}
