// src/lib.rs
use anyhow::{Context, Result};
use std::path::PathBuf;

// --- Declare modules ---
mod config;
pub mod coordinator;
pub mod dialog;
pub mod host;
pub mod icons;
pub mod model;
pub mod panel;
pub mod store;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util,
    load_config as load_config_util,
    parse_color,
    save_config as save_config_util,
    Config,
    Error as ConfigError,
    StandardColor,
    Theme,
};
pub use coordinator::{
    Activation, CoordinatorState, LayoutCoordinator, FALLBACK_RECORD_ID,
};
pub use dialog::{CreationDialog, DialogField, ValidationError};
pub use host::{Host, Mounted, PanelHost, PanelId, PresentationMode, Slot, Transaction};
pub use icons::{IconCatalog, IconDescriptor, IconId};
pub use model::{sample_records, Difficulty, WorkoutRecord};
pub use panel::{
    DetailPanel, DetailView, ListPanel, ListRow, Panel, PanelKind, SelectionEvent,
};
pub use store::{RecordStore, SharedStore};

/// Composition root: configuration plus the one record store every panel
/// shares for the life of the process.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
    store: SharedStore,
}

impl AppService {
    /// Loads (or creates) the config file and builds the store.
    pub fn initialize() -> Result<Self> {
        let config_path = config::get_config_path()
            .context("Failed to determine configuration file path")?;
        let config = config::load_config(&config_path).with_context(|| {
            format!("Failed to load config from {:?}", config_path)
        })?;
        Ok(Self::with_config(config, config_path))
    }

    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        let store = if config.seed_sample_records {
            RecordStore::with_samples()
        } else {
            RecordStore::new()
        };
        tracing::info!(records = store.len(), "record store created");
        Self {
            config,
            config_path,
            store: store.into_shared(),
        }
    }

    /// Handle to the shared store; clones point at the same records.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    pub fn coordinator(&self) -> LayoutCoordinator {
        LayoutCoordinator::new(self.store())
    }

    /// Mode for a host area `width` columns wide.
    pub fn mode_for_width(&self, width: u16) -> PresentationMode {
        if width >= self.config.dual_pane_min_width {
            PresentationMode::DualPane
        } else {
            PresentationMode::SinglePane
        }
    }
}
