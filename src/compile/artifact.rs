//! Compiled-defaults artifact
//!
//! The serializable output of defaults compilation: one fully
//! populated feature value per relevant edition, ordered, together
//! with the supported edition range. Compiled once per toolchain
//! build, embedded as a build-time resource, and re-loaded by resolver
//! construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

use crate::edition::Edition;
use feature_schema::RecordValue;

/// Schema version for the compiled-defaults artifact
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "feature-resolver/compiled_defaults@1";

/// One compiled entry: the complete feature value that takes effect at
/// `edition` and stays in effect until the next entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditionEntry {
    pub edition: Edition,
    pub features: RecordValue,
}

/// The compiled defaults for one feature schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledDefaults {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When this artifact was compiled
    pub created_at: DateTime<Utc>,

    /// Inclusive lower bound of the supported edition range
    pub minimum_edition: Edition,

    /// Inclusive upper bound of the supported edition range
    pub maximum_edition: Edition,

    /// Entries in strictly increasing edition order
    pub defaults: Vec<EditionEntry>,
}

impl CompiledDefaults {
    /// SHA-256 digest over the canonical (JCS) serialization of the
    /// semantic payload: range and entries only, so recompiling the
    /// same schema yields the same digest regardless of `created_at`.
    pub fn digest(&self) -> io::Result<String> {
        let payload = (
            &self.minimum_edition,
            &self.maximum_edition,
            &self.defaults,
        );
        let jcs_bytes = serde_json_canonicalizer::to_vec(&payload).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JCS serialization failed: {}", e),
            )
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&jcs_bytes);
        Ok(hex::encode(hasher.finalize()))
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Write the artifact to a file as JSON
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)
    }

    /// Load an artifact from a JSON file
    pub fn load_from_file(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON parse failed: {}", e),
            )
        })
    }
}
