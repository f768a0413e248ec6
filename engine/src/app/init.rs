//! Building an [`App`] from configuration.

use std::path::PathBuf;

use quadra_config::QuadraConfig;
use quadra_types::Coefficient;
use quadra_types::ui::{CoefficientFields, InputMode, Notice, ViewState};
use tracing::{info, warn};

use super::App;
use crate::opener::ExternalOpener;

impl App {
    /// Load `~/.quadra/config.toml` and build a session around `opener`.
    ///
    /// A broken config file is not fatal: it is logged, reported in the
    /// status bar, and defaults are used.
    pub fn new(opener: Box<dyn ExternalOpener>) -> Self {
        let (config, config_error) = match QuadraConfig::load() {
            Ok(config) => (config, None),
            Err(err) => (None, Some(err)),
        };

        match (&config, QuadraConfig::path()) {
            (Some(_), Some(path)) => info!(path = %path.display(), "Loaded config"),
            _ => info!("Using default config"),
        }

        let mut app = Self::with_config(config.as_ref(), QuadraConfig::path(), opener);
        if let Some(err) = config_error {
            warn!("Config error, using defaults: {err}");
            app.view.notice = Some(Notice::error(err.to_string()));
        }
        app
    }

    /// Build a session from an already-loaded config.
    ///
    /// `config_path` is where language changes are written; pass `None` to
    /// keep them in memory only.
    pub fn with_config(
        config: Option<&QuadraConfig>,
        config_path: Option<PathBuf>,
        opener: Box<dyn ExternalOpener>,
    ) -> Self {
        let defaults = QuadraConfig::default();
        let config = config.unwrap_or(&defaults);

        let mut view = ViewState::new();
        view.ui_options = config.ui_options();
        view.language = config.language();
        let linear_solver_url = config.linear_solver_url();

        Self {
            fields: CoefficientFields::default(),
            focus: Coefficient::A,
            input_mode: InputMode::Normal,
            last_outcome: None,
            view,
            opener,
            linear_solver_url,
            config_path,
            should_quit: false,
        }
    }
}
