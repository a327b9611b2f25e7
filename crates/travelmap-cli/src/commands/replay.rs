use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use travelmap_core::error::{Result as CoreResult, TravelMapError};
use travelmap_core::map::{FeatureClicked, MapCamera, MapCollaborator};
use travelmap_core::popup::{parse_event_list, PopupController, PopupScene, SceneHost, TextRegion};

use crate::summary::{print_event, print_scene};

#[derive(Args)]
pub struct ReplayArgs {
    /// GeoJSON data file (defaults to the configured data path)
    pub file: Option<PathBuf>,

    /// Name of the feature to open
    #[arg(short, long)]
    pub feature: String,

    /// Comma-separated events: next, prev, thumb:N, focus, escape, read-more, reset, close
    #[arg(short, long, default_value = "")]
    pub events: String,

    /// Map config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Visible height of the info panel in pixels
    #[arg(long, default_value = "600")]
    pub panel_height: f32,

    /// Characters that fit on one line of the info panel
    #[arg(long, default_value = "60")]
    pub line_chars: usize,

    /// Treat fullscreen requests as refused
    #[arg(long)]
    pub no_fullscreen: bool,
}

/// Text layout estimate for a terminal session: fixed characters per line.
struct ReplayHost {
    line_chars: usize,
    panel_height: f32,
    allow_fullscreen: bool,
}

impl ReplayHost {
    const LINE_HEIGHT: f32 = 18.0;
    const TITLE_LINE_HEIGHT: f32 = 28.0;
    const DIVIDER_HEIGHT: f32 = 2.0;
}

impl SceneHost for ReplayHost {
    fn text_height(&self, region: TextRegion, text: &str) -> f32 {
        let line_height = match region {
            TextRegion::Title => Self::TITLE_LINE_HEIGHT,
            TextRegion::Tombstone | TextRegion::Description => Self::LINE_HEIGHT,
        };
        let lines: usize = text
            .lines()
            .map(|l| l.chars().count().div_ceil(self.line_chars).max(1))
            .sum();
        lines as f32 * line_height
    }

    fn divider_height(&self) -> f32 {
        Self::DIVIDER_HEIGHT
    }

    fn container_height(&self) -> f32 {
        self.panel_height
    }

    fn request_fullscreen(&mut self) -> CoreResult<()> {
        if self.allow_fullscreen {
            Ok(())
        } else {
            Err(TravelMapError::Fullscreen("refused by --no-fullscreen".into()))
        }
    }

    fn exit_fullscreen(&mut self) -> CoreResult<()> {
        Ok(())
    }
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let (_, collection) = super::load_features(args.file.as_ref(), &config)?;
    let feature = collection
        .find(&args.feature)
        .ok_or_else(|| anyhow!("No feature named '{}'", args.feature))?;
    let events = parse_event_list(&args.events).context("Invalid event list")?;

    let host = ReplayHost {
        line_chars: args.line_chars.max(1),
        panel_height: args.panel_height,
        allow_fullscreen: !args.no_fullscreen,
    };
    let mut popup = PopupController::new(PopupScene::new(host), &config);
    let mut map = MapCamera::new(config.view.clone());

    let click = FeatureClicked::from_feature(feature, map.zoom());
    popup
        .handle_feature_click(click, &mut map)
        .with_context(|| format!("Cannot open '{}'", feature.name))?;
    print_event("open", &popup, &map);
    print_scene(&mut popup);

    for event in events {
        if let Err(err) = popup.dispatch(event, &mut map) {
            tracing::warn!("{event}: {err}");
        }
        print_event(&event.to_string(), &popup, &map);
        print_scene(&mut popup);
    }

    Ok(())
}
