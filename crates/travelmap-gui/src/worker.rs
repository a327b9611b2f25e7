use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use travelmap_core::config::MapConfig;
use travelmap_core::io::geojson::load_feature_collection;
use travelmap_core::io::summary::CollectionSummary;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("travelmap-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadFeatures { path } => handle_load_features(&path, &tx, &ctx),
            WorkerCommand::LoadConfig { path } => match read_config(&path) {
                Ok(config) => send(
                    &tx,
                    &ctx,
                    WorkerResult::ConfigLoaded {
                        path,
                        config: Box::new(config),
                    },
                ),
                Err(e) => send_error(&tx, &ctx, format!("{e:#}")),
            },
        }
    }
    tracing::debug!("worker channel closed");
}

fn handle_load_features(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    send(tx, ctx, WorkerResult::LoadStarted);
    send_log(tx, ctx, format!("Loading {}", path.display()));
    let start = Instant::now();

    let collection = match load_feature_collection(path) {
        Ok(c) => c,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to load {}: {e}", path.display()));
            return;
        }
    };

    let summary = CollectionSummary::of(&collection);
    for name in &summary.empty_features {
        send_log(tx, ctx, format!("Point '{name}' has no images and cannot be opened"));
    }

    send(
        tx,
        ctx,
        WorkerResult::FeaturesLoaded {
            path: path.to_path_buf(),
            collection,
            summary,
            elapsed: start.elapsed(),
        },
    );
}

fn read_config(path: &Path) -> anyhow::Result<MapConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: MapConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.markers.fill_rgb().context("Invalid marker fill colour")?;
    config.markers.stroke_rgb().context("Invalid marker stroke colour")?;
    Ok(config)
}
