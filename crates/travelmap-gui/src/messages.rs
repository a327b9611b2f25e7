use std::path::PathBuf;
use std::time::Duration;

use travelmap_core::config::MapConfig;
use travelmap_core::io::summary::CollectionSummary;
use travelmap_core::model::FeatureCollection;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read and validate a GeoJSON point file.
    LoadFeatures { path: PathBuf },

    /// Read a TOML config file.
    LoadConfig { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A data file read has begun, whoever asked for it.
    LoadStarted,
    FeaturesLoaded {
        path: PathBuf,
        collection: FeatureCollection,
        summary: CollectionSummary,
        elapsed: Duration,
    },
    ConfigLoaded {
        path: PathBuf,
        config: Box<MapConfig>,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
