//! View state for rendering.

use crate::Language;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

/// The two panels of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Quadratic,
    /// Placeholder that hands off to the external linear-system solver.
    LinearSystem,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Quadratic, Self::LinearSystem];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Quadratic => Self::LinearSystem,
            Self::LinearSystem => Self::Quadratic,
        }
    }

    #[must_use]
    pub fn title(self, language: Language) -> &'static str {
        let catalog = language.catalog();
        match self {
            Self::Quadratic => catalog.tab_quadratic,
            Self::LinearSystem => catalog.tab_linear,
        }
    }
}

/// Severity of a status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line status message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Separates view concerns from session state: what the renderer needs that
/// the resolver never sees.
#[derive(Debug, Default)]
pub struct ViewState {
    pub tab: Tab,
    /// UI options (theme, glyphs).
    pub ui_options: UiOptions,
    pub language: Language,
    pub notice: Option<Notice>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
