//! Configuration for Quadra: `~/.quadra/config.toml`.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! language = "en"
//!
//! [linear_solver]
//! url = "http://localhost:5000"
//! ```
//!
//! A missing file means defaults. A file that cannot be read or parsed is an
//! error the caller decides how to report; the binary logs it and starts with
//! defaults.

mod persist;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quadra_types::Language;
use quadra_types::ui::UiOptions;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Where the linear-system service lives when nothing else is configured.
pub const DEFAULT_LINEAR_SOLVER_URL: &str = "http://localhost:5000";

/// Environment variable that overrides `[linear_solver] url`.
pub const LINEAR_SOLVER_URL_ENV: &str = "QUADRA_LINEAR_SOLVER_URL";

#[derive(Debug, Default, Deserialize)]
pub struct QuadraConfig {
    pub app: Option<AppConfig>,
    pub linear_solver: Option<LinearSolverConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Message language: "en" (default) or "vi".
    pub language: Option<String>,
}

/// The external linear-system service.
///
/// ```toml
/// [linear_solver]
/// url = "http://${SOLVER_HOST}:5000"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LinearSolverConfig {
    pub url: Option<String>,
}

/// Expand `${VAR}` references from the environment. Missing variables expand
/// to the empty string; an unclosed `${` is kept literally.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Pick the linear-solver address: environment override, then config, then
/// [`DEFAULT_LINEAR_SOLVER_URL`]. Candidates that are not absolute `http(s)`
/// URLs are skipped with a warning.
#[must_use]
pub fn resolve_linear_solver_url(env_override: Option<&str>, configured: Option<&str>) -> String {
    let candidates = [
        ("environment", env_override),
        ("config", configured),
    ];

    for (source, candidate) in candidates {
        let Some(raw) = candidate else {
            continue;
        };
        let expanded = expand_env_vars(raw.trim());
        if expanded.is_empty() {
            continue;
        }
        match Url::parse(&expanded) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => return expanded,
            Ok(url) => {
                tracing::warn!(source, scheme = url.scheme(), "Ignoring non-http linear solver url");
            }
            Err(err) => {
                tracing::warn!(source, "Ignoring invalid linear solver url {expanded:?}: {err}");
            }
        }
    }

    DEFAULT_LINEAR_SOLVER_URL.to_string()
}

impl QuadraConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
        })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        let Some(raw) = self.app.as_ref().and_then(|app| app.language.as_deref()) else {
            return Language::default();
        };
        Language::parse(raw).unwrap_or_else(|| {
            tracing::warn!("Unknown language in config: {}", raw);
            Language::default()
        })
    }

    /// Linear-solver address, honouring `QUADRA_LINEAR_SOLVER_URL`.
    #[must_use]
    pub fn linear_solver_url(&self) -> String {
        let env_override = env::var(LINEAR_SOLVER_URL_ENV).ok();
        let configured = self
            .linear_solver
            .as_ref()
            .and_then(|solver| solver.url.as_deref());
        resolve_linear_solver_url(env_override.as_deref(), configured)
    }

    /// Persist the language to `path`.
    ///
    /// Uses `toml_edit` to preserve comments and formatting.
    /// Creates the config file and parent directory if they don't exist.
    pub fn persist_language_at(path: &Path, language: Language) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            persist::ensure_private_dir(parent)?;
        }

        let content = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };

        let mut doc = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if !doc.get("app").is_some_and(toml_edit::Item::is_table_like) {
            doc["app"] = toml_edit::Item::Table(toml_edit::Table::new());
        }
        doc["app"]["language"] = toml_edit::value(language.code());

        persist::atomic_write(path, doc.to_string().as_bytes())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".quadra").join("config.toml"))
}
