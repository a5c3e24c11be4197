//! Usage kinds and the identifier → function-set mapping shared by
//! observations and specifications.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a function exercises a rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UsageKind {
    /// Checks the limit is configured without touching its budget.
    #[serde(rename = "exists")]
    Exists,
    /// Consumes budget.
    #[serde(rename = "down")]
    Decrease,
    /// Restores budget.
    #[serde(rename = "up")]
    Increase,
}

impl UsageKind {
    pub const ALL: [UsageKind; 3] = [UsageKind::Exists, UsageKind::Decrease, UsageKind::Increase];

    /// Short label used in reports: `exists`, `down`, `up`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::Decrease => "down",
            Self::Increase => "up",
        }
    }
}

impl fmt::Display for UsageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified reference: (identifier, kind, enclosing function).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageRecord {
    pub limit: String,
    pub kind: UsageKind,
    pub function: String,
}

/// Function names per usage kind for a single rate-limit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageSets {
    pub exists: BTreeSet<String>,
    #[serde(rename = "down")]
    pub decrease: BTreeSet<String>,
    #[serde(rename = "up")]
    pub increase: BTreeSet<String>,
}

impl UsageSets {
    pub fn get(&self, kind: UsageKind) -> &BTreeSet<String> {
        match kind {
            UsageKind::Exists => &self.exists,
            UsageKind::Decrease => &self.decrease,
            UsageKind::Increase => &self.increase,
        }
    }

    fn get_mut(&mut self, kind: UsageKind) -> &mut BTreeSet<String> {
        match kind {
            UsageKind::Exists => &mut self.exists,
            UsageKind::Decrease => &mut self.decrease,
            UsageKind::Increase => &mut self.increase,
        }
    }

    /// Add a function under `kind`. Returns false if it was already present.
    pub fn insert(&mut self, kind: UsageKind, function: impl Into<String>) -> bool {
        self.get_mut(kind).insert(function.into())
    }

    /// Total number of (kind, function) entries.
    pub fn len(&self) -> usize {
        self.exists.len() + self.decrease.len() + self.increase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rate-limit identifier → [`UsageSets`]. Ordered so that reports and
/// diffs come out the same on every run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitMapping {
    entries: BTreeMap<String, UsageSets>,
}

/// Mapping built from source by the classifier.
pub type ContractObservation = LimitMapping;

/// Hand-authored mapping the observation is checked against.
pub type ContractSpecification = LimitMapping;

impl LimitMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union a record into the mapping. Nothing already present is removed.
    /// Returns false when the record was already there.
    pub fn record(&mut self, record: UsageRecord) -> bool {
        self.entries
            .entry(record.limit)
            .or_default()
            .insert(record.kind, record.function)
    }

    /// Insert a complete entry, replacing any previous one for `limit`.
    pub fn insert_entry(&mut self, limit: impl Into<String>, sets: UsageSets) {
        self.entries.insert(limit.into(), sets);
    }

    pub fn get(&self, limit: &str) -> Option<&UsageSets> {
        self.entries.get(limit)
    }

    pub fn contains(&self, limit: &str) -> bool {
        self.entries.contains_key(limit)
    }

    /// Identifiers in sorted order.
    pub fn limits(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UsageSets)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten back into records, sorted by identifier then kind.
    pub fn records(&self) -> Vec<UsageRecord> {
        let mut out = Vec::new();
        for (limit, sets) in &self.entries {
            for kind in UsageKind::ALL {
                for function in sets.get(kind) {
                    out.push(UsageRecord {
                        limit: limit.clone(),
                        kind,
                        function: function.clone(),
                    });
                }
            }
        }
        out
    }
}
