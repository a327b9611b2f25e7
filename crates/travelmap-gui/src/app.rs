use std::path::PathBuf;
use std::sync::mpsc;

use travelmap_core::config::MapConfig;
use travelmap_core::map::{FeatureClicked, MapCollaborator};
use travelmap_core::model::FeatureCollection;
use travelmap_core::popup::{PopupController, PopupEvent, PopupScene};

use crate::host::EguiHost;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{MapState, UIState};
use crate::worker;

pub type Popup = PopupController<PopupScene<EguiHost>>;

pub struct TravelMapApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub map: MapState,
    pub popup: Popup,
    pub config: MapConfig,
    pub features: FeatureCollection,
    pub show_about: bool,
    ctx: egui::Context,
}

impl TravelMapApp {
    pub fn new(ctx: &egui::Context, data_path: Option<PathBuf>) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone())?;
        let config = MapConfig::default();

        let mut app = Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            map: MapState::new(config.view.clone()),
            popup: new_popup(ctx, &config),
            features: FeatureCollection::default(),
            show_about: false,
            ctx: ctx.clone(),
            config,
        };

        let path = data_path.unwrap_or_else(|| app.config.data.path.clone());
        if path.exists() {
            app.load_features(path);
        } else {
            app.ui_state
                .add_log(format!("{} not found, use File > Open Points", path.display()));
        }
        Ok(app)
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FeaturesLoaded {
                    path,
                    collection,
                    summary,
                    elapsed,
                } => {
                    self.popup.close();
                    self.ui_state.add_log(format!(
                        "Loaded {} points, {} images from {} in {:.0}ms",
                        summary.feature_count,
                        summary.image_count,
                        path.display(),
                        elapsed.as_secs_f32() * 1000.0
                    ));
                    tracing::info!(points = summary.feature_count, "features loaded");
                    self.features = collection;
                    self.ui_state.finish_load(path);
                }
                WorkerResult::ConfigLoaded { path, config } => {
                    self.apply_config(*config);
                    self.ui_state
                        .add_log(format!("Config imported from {}", path.display()));
                }
                WorkerResult::LoadStarted => self.ui_state.begin_load(),
                WorkerResult::Error { message } => {
                    self.ui_state.loading = false;
                    tracing::error!("{message}");
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Swap in a new config. The popup is closed and the camera reset.
    fn apply_config(&mut self, config: MapConfig) {
        self.popup.close();
        self.map = MapState::new(config.view.clone());
        self.popup = new_popup(&self.ctx, &config);
        self.config = config;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn load_features(&mut self, path: PathBuf) {
        self.ui_state.begin_load();
        self.send_command(WorkerCommand::LoadFeatures { path });
    }

    /// Feed one user interaction to the popup. Failures are logged, not fatal.
    pub fn dispatch(&mut self, event: PopupEvent) {
        tracing::debug!(%event, "popup event");
        if let Err(e) = self.popup.dispatch(event, &mut self.map) {
            tracing::warn!(%event, "{e}");
            self.ui_state.add_log(format!("ERROR: {e}"));
        }
    }

    /// A marker on the map was clicked.
    pub fn open_feature(&mut self, index: usize) {
        let Some(feature) = self.features.features.get(index) else {
            return;
        };
        let event = FeatureClicked::from_feature(feature, self.map.zoom());
        tracing::info!(title = %event.title, images = event.images.len(), "feature clicked");
        if let Err(e) = self.popup.handle_feature_click(event, &mut self.map) {
            self.ui_state.add_log(format!("{}: {e}", feature.name));
        }
    }
}

fn new_popup(ctx: &egui::Context, config: &MapConfig) -> Popup {
    PopupController::new(PopupScene::new(EguiHost::new(ctx.clone())), config)
}

impl eframe::App for TravelMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        if ctx.input(|i| i.key_released(egui::Key::Escape)) {
            self.dispatch(PopupEvent::Escape);
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        if self.popup.view().is_visible() {
            panels::popup::show(ctx, self);
        } else {
            panels::map::show(ctx, self);
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About Travel Map")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Travel Map");
                        ui.label("Points of interest with image galleries");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
