//! # soma-census: Organism Experiment Resolution
//!
//! A census is a hierarchical SOMA collection holding one experiment per
//! organism under `census_data`. This crate turns human-friendly organism
//! names into those experiments and checks that what it found really is a
//! `SOMAExperiment`.
//!
//! ## Modules
//!
//! - [`naming`]: organism name → experiment key (`"Homo sapiens"` → `homo_sapiens`)
//! - [`collection`]: the [`collection::SomaObject`] read interface and an
//!   in-memory tree that loads from a JSON manifest
//! - [`experiment`]: the resolver
//!
//! ## Example Usage
//!
//! ```rust
//! use soma_census::collection::SomaNode;
//! use soma_census::Census;
//!
//! let root = SomaNode::collection().with_member(
//!     "census_data",
//!     SomaNode::collection()
//!         .with_member("homo_sapiens", SomaNode::experiment())
//!         .with_member("mus_musculus", SomaNode::experiment()),
//! );
//!
//! let census = Census::new(root);
//! let mouse = census.experiment("Mus musculus")?;
//! assert_eq!(census.organisms()?, vec!["homo_sapiens", "mus_musculus"]);
//! # let _ = mouse;
//! # Ok::<(), soma_census::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod collection;
pub mod error;
pub mod experiment;
pub mod naming;

pub use error::{Error, Result};

use collection::{SomaNode, SomaObject, SomaType};
use std::path::PathBuf;

/// An opened census
#[derive(Debug)]
pub struct Census {
    root: SomaNode,
    default_modality: String,
}

impl Census {
    /// Wrap an already-built census tree, using `census_data` as the
    /// default modality.
    #[must_use]
    pub fn new(root: SomaNode) -> Self {
        Self {
            root,
            default_modality: experiment::DEFAULT_MODALITY.to_string(),
        }
    }

    /// Create a new census builder
    #[must_use]
    pub fn builder() -> CensusBuilder {
        CensusBuilder::default()
    }

    /// Root collection
    #[must_use]
    pub const fn root(&self) -> &SomaNode {
        &self.root
    }

    /// Modality used by [`Census::experiment`]
    #[must_use]
    pub fn default_modality(&self) -> &str {
        &self.default_modality
    }

    /// Resolve an organism's experiment in the default modality.
    ///
    /// # Errors
    ///
    /// See [`experiment::get_experiment`].
    pub fn experiment(&self, organism: &str) -> Result<&SomaNode> {
        experiment::get_experiment(&self.root, organism, &self.default_modality)
    }

    /// Resolve an organism's experiment in an explicit modality.
    ///
    /// # Errors
    ///
    /// See [`experiment::get_experiment`].
    pub fn experiment_in(&self, organism: &str, modality: &str) -> Result<&SomaNode> {
        experiment::get_experiment(&self.root, organism, modality)
    }

    /// Keys of every experiment under `census_data`, in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingMember`] if the root has no `census_data`.
    pub fn organisms(&self) -> Result<Vec<&str>> {
        let census_data =
            self.root
                .get(experiment::CENSUS_DATA)
                .ok_or_else(|| Error::MissingMember {
                    collection: "census".to_string(),
                    key: experiment::CENSUS_DATA.to_string(),
                })?;

        Ok(census_data
            .members()
            .filter(|(_, node)| node.tag() == &SomaType::Experiment)
            .map(|(key, _)| key)
            .collect())
    }
}

/// Census builder
#[derive(Debug, Default)]
pub struct CensusBuilder {
    root: Option<SomaNode>,
    manifest_path: Option<PathBuf>,
    default_modality: Option<String>,
}

impl CensusBuilder {
    /// Use an in-memory census tree
    #[must_use]
    pub fn root(mut self, root: SomaNode) -> Self {
        self.root = Some(root);
        self
    }

    /// Load the census tree from a JSON manifest when built
    #[must_use]
    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    /// Set the modality used by [`Census::experiment`]
    #[must_use]
    pub fn default_modality(mut self, modality: impl Into<String>) -> Self {
        self.default_modality = Some(modality.into());
        self
    }

    /// Build the census
    ///
    /// An explicit root takes precedence over a manifest path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if neither a root nor a manifest path
    /// was given, or the manifest's load error.
    pub fn build(self) -> Result<Census> {
        let root = match (self.root, self.manifest_path) {
            (Some(root), _) => root,
            (None, Some(path)) => SomaNode::from_path(path)?,
            (None, None) => {
                return Err(Error::InvalidInput(
                    "census requires a root collection or a manifest path".to_string(),
                ))
            }
        };

        let mut census = Census::new(root);
        if let Some(modality) = self.default_modality {
            census.default_modality = modality;
        }
        tracing::debug!(
            modality = %census.default_modality,
            members = census.root.len(),
            "census opened"
        );
        Ok(census)
    }
}
