//! Edition identifiers and their total order
//!
//! An edition is a dot-separated sequence of numeral segments
//! (`"2023"`, `"2023.1"`). Editions are never compared as whole
//! strings: at each segment position a shorter segment sorts first, so
//! `"9"` < `"10"` even though `"1" < "9"` lexicographically. When all
//! shared segments match, the identifier with more segments is the
//! more recent one.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An ordered, dot-segmented edition identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Edition(String);

impl Edition {
    pub fn new(edition: impl Into<String>) -> Self {
        Self(edition.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Edition {
    fn from(edition: &str) -> Self {
        Self(edition.to_string())
    }
}

impl From<String> for Edition {
    fn from(edition: String) -> Self {
        Self(edition)
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for Edition {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs: Vec<&str> = self.0.split('.').collect();
        let rhs: Vec<&str> = other.0.split('.').collect();
        for (a, b) in lhs.iter().zip(rhs.iter()) {
            // Shorter numeral segments sort first, so digit count
            // decides before character content does.
            match a.len().cmp(&b.len()).then_with(|| a.cmp(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        // Equal up to the shared prefix; the extra segment makes that
        // edition the more recent one.
        lhs.len().cmp(&rhs.len())
    }
}

impl PartialOrd for Edition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
