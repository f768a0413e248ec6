//! The interactive session behind the Quadra TUI.
//!
//! [`App`] owns the three coefficient fields, the focused field, the input
//! mode, the last resolution outcome and the view state. The TUI layer
//! (`quadra_tui`) reads state from `App` and forwards input back to it; no
//! rendering logic lives here.
//!
//! # Input modes
//!
//! - **Normal**: navigation, solve/clear, tab and language switching
//! - **Insert**: editing the focused field through [`InsertMode`]

use std::path::PathBuf;

use quadra_config::QuadraConfig;
use quadra_types::ui::{CoefficientFields, DraftInput, InputMode, Notice, Tab, UiOptions, ViewState};
use quadra_types::{Catalog, Coefficient, Language, ResolutionOutcome, resolve};
use tracing::{debug, info, warn};

use crate::opener::ExternalOpener;

mod init;
mod input_modes;

pub use input_modes::{InsertMode, InsertModeAccess};

pub struct App {
    fields: CoefficientFields,
    focus: Coefficient,
    input_mode: InputMode,
    /// Replaced wholesale by every solve; dropped by clear.
    last_outcome: Option<ResolutionOutcome>,
    view: ViewState,
    opener: Box<dyn ExternalOpener>,
    linear_solver_url: String,
    /// Where the language choice is persisted. `None` disables persistence.
    config_path: Option<PathBuf>,
    should_quit: bool,
}

impl App {
    // ------------------------------------------------------------------
    // Read access for rendering
    // ------------------------------------------------------------------

    #[must_use]
    pub fn draft(&self, coefficient: Coefficient) -> &DraftInput {
        self.fields.get(coefficient)
    }

    #[must_use]
    pub fn field_text(&self, coefficient: Coefficient) -> &str {
        self.fields.text(coefficient)
    }

    #[must_use]
    pub fn focus(&self) -> Coefficient {
        self.focus
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&ResolutionOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.view.tab
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.view.language
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.view.language.catalog()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.view.notice.as_ref()
    }

    #[must_use]
    pub fn linear_solver_url(&self) -> &str {
        &self.linear_solver_url
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolve the current field texts and show the outcome.
    ///
    /// Always permitted; invalid input becomes an error outcome, not a
    /// refusal.
    pub fn solve(&mut self) {
        let (a, b, c) = self.fields.texts();
        let outcome = resolve(a, b, c);
        debug!(kind = outcome.kind(), "Solved");
        self.last_outcome = Some(outcome);
        self.view.notice = None;
    }

    /// Empty every field, drop the outcome and return focus to `a`.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.last_outcome = None;
        self.focus = Coefficient::A;
        self.view.notice = None;
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn focus_field(&mut self, coefficient: Coefficient) {
        self.focus = coefficient;
    }

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------

    /// Start editing the focused field. Only the quadratic tab has fields.
    pub fn enter_insert_mode(&mut self) {
        if self.view.tab == Tab::Quadratic {
            self.input_mode = InputMode::Insert;
        }
    }

    pub fn enter_insert_mode_at_end(&mut self) {
        self.fields.get_mut(self.focus).move_cursor_end();
        self.enter_insert_mode();
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != Tab::Quadratic {
            self.input_mode = InputMode::Normal;
        }
        self.view.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.view.tab.next());
    }

    // ------------------------------------------------------------------
    // External collaborators
    // ------------------------------------------------------------------

    /// Hand the linear-system address to the external opener.
    pub fn open_linear_solver(&mut self) {
        let catalog = self.catalog();
        info!(address = %self.linear_solver_url, "Opening linear solver");
        self.view.notice = Some(match self.opener.open(&self.linear_solver_url) {
            Ok(()) => Notice::info(format!("{} {}", catalog.opened, self.linear_solver_url)),
            Err(err) => {
                warn!(address = %self.linear_solver_url, "Failed to open linear solver: {err}");
                Notice::error(format!(
                    "{} {}: {err}",
                    catalog.open_failed, self.linear_solver_url
                ))
            }
        });
    }

    /// Switch the message language and remember it in the config file.
    pub fn toggle_language(&mut self) {
        let language = self.view.language.toggle();
        self.view.language = language;
        self.view.notice = Some(Notice::info(language.catalog().language_switched));

        let Some(path) = self.config_path.as_deref() else {
            debug!("No config path; language not persisted");
            return;
        };
        if let Err(err) = QuadraConfig::persist_language_at(path, language) {
            warn!(path = %path.display(), "Failed to persist language: {err}");
            self.view.notice = Some(Notice::error(format!(
                "{} ({err})",
                language.catalog().language_switched
            )));
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.view.notice = None;
    }
}
