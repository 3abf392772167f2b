//! In-memory census tree.
//!
//! Nodes own their members directly, so a whole census layout can be built
//! in code or loaded from a JSON manifest and then shared by reference.

use super::{SomaObject, SomaType};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A node in an in-memory census tree.
///
/// Serialized as:
///
/// ```json
/// {
///   "soma_type": "SOMACollection",
///   "members": { "homo_sapiens": { "soma_type": "SOMAExperiment" } },
///   "metadata": { "census_schema_version": "2.0.1" }
/// }
/// ```
///
/// `members` and `metadata` are omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SomaNode {
    soma_type: SomaType,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    members: BTreeMap<String, SomaNode>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, serde_json::Value>,
}

impl SomaNode {
    /// Create an empty node with the given type tag.
    #[must_use]
    pub fn new(soma_type: impl Into<SomaType>) -> Self {
        Self {
            soma_type: soma_type.into(),
            members: BTreeMap::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Create an empty `SOMACollection` node.
    #[must_use]
    pub fn collection() -> Self {
        Self::new(SomaType::Collection)
    }

    /// Create an empty `SOMAExperiment` node.
    #[must_use]
    pub fn experiment() -> Self {
        Self::new(SomaType::Experiment)
    }

    /// Add a member, replacing any existing member under the same key.
    #[must_use]
    pub fn with_member(mut self, key: impl Into<String>, node: Self) -> Self {
        self.insert(key, node);
        self
    }

    /// Attach a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Insert a member, returning the node it replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: Self) -> Option<Self> {
        self.members.insert(key.into(), node)
    }

    /// Declared type tag.
    #[must_use]
    pub const fn tag(&self) -> &SomaType {
        &self.soma_type
    }

    /// Member keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Iterate over `(key, member)` pairs in key order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the node has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Get a metadata value by key.
    #[must_use]
    pub fn metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    /// Parse a census tree from a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if the manifest is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a census tree from a JSON manifest on disk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Json`] if it cannot be parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading census manifest");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Json`] if a metadata value cannot be encoded.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SomaObject for SomaNode {
    fn soma_type(&self) -> &str {
        self.soma_type.as_str()
    }

    fn get(&self, key: &str) -> Option<&Self> {
        self.members.get(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }
}
