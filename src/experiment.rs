//! Experiment resolution
//!
//! Maps a human-friendly organism name to the SOMA experiment stored for it
//! in a census. Matching is forgiving about case and spacing:
//! `"Homo sapiens"`, `"homo sapiens"` and `"homo_sapiens"` all resolve to
//! the `homo_sapiens` experiment.
//!
//! ```text
//! census (SOMACollection)
//!   ├── census_data (SOMACollection)          <- membership is checked here
//!   │     ├── homo_sapiens (SOMAExperiment)
//!   │     └── mus_musculus (SOMAExperiment)
//!   └── census_spatial_sequencing (SOMACollection)
//!         └── mus_musculus (SOMAExperiment)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use soma_census::collection::SomaNode;
//! use soma_census::experiment::get_experiment_default;
//!
//! let census = SomaNode::collection().with_member(
//!     "census_data",
//!     SomaNode::collection().with_member("homo_sapiens", SomaNode::experiment()),
//! );
//!
//! let human = get_experiment_default(&census, "Homo sapiens")?;
//! assert_eq!(human, &SomaNode::experiment());
//! # Ok::<(), soma_census::Error>(())
//! ```

use crate::collection::{SomaObject, SomaType};
use crate::naming::experiment_name;
use crate::{Error, Result};

/// Sub-collection holding one experiment per organism.
pub const CENSUS_DATA: &str = "census_data";

/// Sub-collection holding spatial sequencing experiments.
pub const CENSUS_SPATIAL_SEQUENCING: &str = "census_spatial_sequencing";

/// Default modality used when none is given.
pub const DEFAULT_MODALITY: &str = CENSUS_DATA;

/// Name used for the census root in [`Error::MissingMember`].
const ROOT_NAME: &str = "census";

/// Return the experiment for `organism` from the `census_data` modality.
///
/// # Errors
///
/// See [`get_experiment`].
pub fn get_experiment_default<'a, N: SomaObject>(census: &'a N, organism: &str) -> Result<&'a N> {
    get_experiment(census, organism, DEFAULT_MODALITY)
}

/// Return the experiment for `organism` from the named `modality`.
///
/// The organism name is normalized with [`experiment_name`]. Membership is
/// always checked against `census_data`, while the node itself is read from
/// `modality`; for the default modality the two are the same collection.
///
/// # Errors
///
/// - [`Error::NotFound`] if the organism has no entry in `census_data`
/// - [`Error::TypeMismatch`] if the entry is not a `SOMAExperiment`
/// - [`Error::MissingMember`] if `census_data`, the modality collection,
///   or the organism inside the modality collection is absent
pub fn get_experiment<'a, N: SomaObject>(
    census: &'a N,
    organism: &str,
    modality: &str,
) -> Result<&'a N> {
    let exp_name = experiment_name(organism);
    tracing::debug!(organism, exp_name = %exp_name, modality, "resolving experiment");

    if modality != CENSUS_DATA {
        tracing::warn!(
            modality,
            "membership is checked against census_data, not the requested modality"
        );
    }

    let census_data = child(census, ROOT_NAME, CENSUS_DATA)?;
    if !census_data.contains(&exp_name) {
        tracing::debug!(organism, exp_name = %exp_name, "organism not in census");
        return Err(Error::NotFound {
            organism: organism.to_string(),
        });
    }

    let exp = child(child(census, ROOT_NAME, modality)?, modality, &exp_name)?;
    if exp.soma_type() != SomaType::Experiment.as_str() {
        tracing::warn!(organism, soma_type = exp.soma_type(), "entry is not an experiment");
        return Err(Error::TypeMismatch {
            organism: organism.to_string(),
            soma_type: exp.soma_type().to_string(),
        });
    }

    tracing::debug!(organism, exp_name = %exp_name, "experiment resolved");
    Ok(exp)
}

fn child<'a, N: SomaObject>(parent: &'a N, parent_name: &str, key: &str) -> Result<&'a N> {
    parent.get(key).ok_or_else(|| Error::MissingMember {
        collection: parent_name.to_string(),
        key: key.to_string(),
    })
}
