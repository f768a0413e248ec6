//! Session state for Quadra, without TUI dependencies.
//!
//! [`App`] is the explicit session the terminal UI drives: field editing,
//! solve/clear, tab and language switching, and handing the linear-system
//! address to an [`ExternalOpener`].

mod app;
mod opener;

pub use app::{App, InsertMode, InsertModeAccess};
pub use opener::{ExternalOpener, OpenError, SystemOpener};

pub use quadra_config::{ConfigError, QuadraConfig};
pub use quadra_types::ui::{InputMode, Notice, NoticeLevel, Tab, UiOptions};
pub use quadra_types::{
    Catalog, Classification, Coefficient, Language, Resolution, ResolutionOutcome, SolutionSet,
};
