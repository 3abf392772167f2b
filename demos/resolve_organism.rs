//! Resolve Organism Example
//!
//! Loads a census layout and resolves organism names against it.
//!
//! Run with: cargo run --example resolve_organism -- [manifest.json] [organism...]
//! Set `RUST_LOG=soma_census=debug` to see resolution events.

use anyhow::Context;
use soma_census::collection::{SomaNode, SomaObject, SomaType};
use soma_census::experiment::{CENSUS_DATA, CENSUS_SPATIAL_SEQUENCING};
use soma_census::Census;
use tracing_subscriber::EnvFilter;

fn sample_census() -> SomaNode {
    SomaNode::collection()
        .with_metadata("census_schema_version", serde_json::json!("2.0.1"))
        .with_member(
            CENSUS_DATA,
            SomaNode::collection()
                .with_member("homo_sapiens", SomaNode::experiment())
                .with_member("mus_musculus", SomaNode::experiment()),
        )
        .with_member(
            CENSUS_SPATIAL_SEQUENCING,
            SomaNode::collection().with_member("mus_musculus", SomaNode::experiment()),
        )
        .with_member(
            "census_info",
            SomaNode::collection().with_member("summary", SomaNode::new(SomaType::DataFrame)),
        )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== soma-census Organism Resolution ===\n");

    let mut args = std::env::args().skip(1).peekable();
    let census = match args.peek() {
        Some(arg) if arg.ends_with(".json") => {
            let path = args.next().unwrap_or_default();
            Census::builder()
                .manifest_path(&path)
                .build()
                .with_context(|| format!("failed to open census manifest {path}"))?
        }
        _ => Census::new(sample_census()),
    };

    println!("Organisms: {:?}\n", census.organisms()?);

    let mut organisms: Vec<String> = args.collect();
    if organisms.is_empty() {
        organisms = ["Homo sapiens", "MUS   MUSCULUS", "Danio rerio"]
            .into_iter()
            .map(String::from)
            .collect();
    }

    for organism in &organisms {
        match census.experiment(organism) {
            Ok(exp) => println!("  {organism:?} -> {} ({} members)", exp.soma_type(), exp.len()),
            Err(e) => println!("  {organism:?} -> error: {e}"),
        }
    }

    Ok(())
}
