//! Error types for soma-census
//!
//! Every failure names what the caller asked for, so the message can be
//! acted on without re-deriving the canonical key.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// soma-census error types
#[derive(Error, Debug)]
pub enum Error {
    /// The organism's canonical key is not present in `census_data`
    #[error("Unknown organism {organism} - does not exist")]
    NotFound {
        /// Organism name exactly as the caller supplied it
        organism: String,
    },

    /// An entry exists for the organism but it is not an experiment
    #[error("Unknown organism {organism} - not a SOMA Experiment (found {soma_type})")]
    TypeMismatch {
        /// Organism name exactly as the caller supplied it
        organism: String,
        /// Type tag declared by the node that was found
        soma_type: String,
    },

    /// A collection on the lookup path has no member with the given key
    #[error("No member '{key}' in collection '{collection}'")]
    MissingMember {
        /// Name of the collection that was searched
        collection: String,
        /// Key that was looked up
        key: String,
    },

    /// Invalid caller input (e.g. incomplete builder)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest (de)serialization error
    #[error("Manifest error: {0}")]
    Json(#[from] serde_json::Error),
}
