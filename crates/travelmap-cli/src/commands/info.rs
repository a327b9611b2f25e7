use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use travelmap_core::io::summary::CollectionSummary;

#[derive(Args)]
pub struct InfoArgs {
    /// GeoJSON data file (defaults to the configured data path)
    pub file: Option<PathBuf>,

    /// Map config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let (path, collection) = super::load_features(args.file.as_ref(), &config)?;
    let summary = CollectionSummary::of(&collection);

    println!("File:        {}", path.display());
    println!("Features:    {}", summary.feature_count);
    println!("Images:      {}", summary.image_count);
    println!("No caption:  {}", summary.records_without_description);
    println!();

    println!("{:<32}  {:>22}  {:>6}", "Name", "Position", "Images");
    println!("{}", "-".repeat(64));
    for feature in &collection.features {
        println!(
            "{:<32}  {:>22}  {:>6}",
            truncate(&feature.name, 32),
            feature.position.to_string(),
            feature.images.len()
        );
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('\u{2026}');
        out
    }
}
