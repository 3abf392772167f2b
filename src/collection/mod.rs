//! Hierarchical SOMA collection access
//!
//! A census is a tree of typed nodes: collections map string keys to child
//! nodes, and every node declares a SOMA type tag. Resolution code only
//! needs read access, which [`SomaObject`] describes.
//!
//! # Example
//!
//! ```rust
//! use soma_census::collection::{SomaNode, SomaObject, SomaType};
//!
//! let census = SomaNode::collection().with_member(
//!     "census_data",
//!     SomaNode::collection().with_member("homo_sapiens", SomaNode::experiment()),
//! );
//!
//! let data = census.get("census_data").expect("census_data");
//! assert!(data.contains("homo_sapiens"));
//! assert_eq!(
//!     data.get("homo_sapiens").map(SomaObject::soma_type),
//!     Some(SomaType::Experiment.as_str())
//! );
//! ```

mod memory;

pub use memory::SomaNode;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only capability surface of a node in a census tree.
///
/// Implemented by [`SomaNode`]; other stores can implement it to reuse the
/// resolver in [`crate::experiment`].
pub trait SomaObject {
    /// Declared SOMA type tag, e.g. `"SOMAExperiment"`.
    fn soma_type(&self) -> &str;

    /// Get the child node stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist or the node has no members.
    fn get(&self, key: &str) -> Option<&Self>;

    /// Check if a child exists under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// SOMA type tags a census node may declare.
///
/// Tags this crate does not know are preserved verbatim in
/// [`SomaType::Other`] so a manifest round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SomaType {
    /// `SOMACollection`
    Collection,
    /// `SOMAExperiment`
    Experiment,
    /// `SOMAMeasurement`
    Measurement,
    /// `SOMADataFrame`
    DataFrame,
    /// `SOMASparseNDArray`
    SparseNdArray,
    /// `SOMADenseNDArray`
    DenseNdArray,
    /// Any other tag
    Other(String),
}

impl SomaType {
    /// The tag string as stored in the census.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Collection => "SOMACollection",
            Self::Experiment => "SOMAExperiment",
            Self::Measurement => "SOMAMeasurement",
            Self::DataFrame => "SOMADataFrame",
            Self::SparseNdArray => "SOMASparseNDArray",
            Self::DenseNdArray => "SOMADenseNDArray",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for SomaType {
    fn from(tag: &str) -> Self {
        match tag {
            "SOMACollection" => Self::Collection,
            "SOMAExperiment" => Self::Experiment,
            "SOMAMeasurement" => Self::Measurement,
            "SOMADataFrame" => Self::DataFrame,
            "SOMASparseNDArray" => Self::SparseNdArray,
            "SOMADenseNDArray" => Self::DenseNdArray,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SomaType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<SomaType> for String {
    fn from(soma_type: SomaType) -> Self {
        match soma_type {
            SomaType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SomaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
