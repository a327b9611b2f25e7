use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use travelmap_core::io::summary::CollectionSummary;

#[derive(Args)]
pub struct ValidateArgs {
    /// GeoJSON data file (defaults to the configured data path)
    pub file: Option<PathBuf>,

    /// Map config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Fail when any feature would be refused by the popup (no images).
pub fn run(args: &ValidateArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let (path, collection) = super::load_features(args.file.as_ref(), &config)?;
    let summary = CollectionSummary::of(&collection);

    if summary.is_valid() {
        println!(
            "{}: {} features, all with images",
            path.display(),
            summary.feature_count
        );
        return Ok(());
    }

    for name in &summary.empty_features {
        println!("no images: {name}");
    }
    bail!(
        "{} of {} features have no images",
        summary.empty_features.len(),
        summary.feature_count
    )
}
