//! Core domain types for Quadra.
//!
//! This crate contains the quadratic resolver and the pure types around it:
//! no IO, no async, minimal dependencies. Everything here can be used from any
//! layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::float_cmp)] // exact comparisons against zero are the resolution policy

pub mod format;
mod language;
pub mod ui;

pub use format::{PanelLine, panel_lines};
pub use language::{Catalog, Language};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;
use thiserror::Error;

// ============================================================================
// Coefficients
// ============================================================================

/// One of the three coefficients of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coefficient {
    A,
    B,
    C,
}

impl Coefficient {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    /// Next coefficient in form order, wrapping from `c` back to `a`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::C,
            Self::C => Self::A,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::A => Self::C,
            Self::B => Self::A,
            Self::C => Self::B,
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoefficientError {
    #[error("coefficient is empty")]
    Empty,
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("not a finite number: {0:?}")]
    NotFinite(String),
}

/// Parse user-entered coefficient text.
///
/// Surrounding whitespace is ignored. The decimal separator is always `.`,
/// independent of locale. Spellings of infinity and NaN are rejected: only
/// finite values are coefficients.
pub fn parse_coefficient(raw: &str) -> Result<f64, ParseCoefficientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseCoefficientError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseCoefficientError::NotANumber(trimmed.to_string()))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseCoefficientError::NotFinite(trimmed.to_string()))
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// How many real roots the equation has, as decided by the discriminant sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    NoRealRoot,
    RepeatedRoot,
    TwoDistinctRoots,
}

/// Real roots of a quadratic.
///
/// The variant fixes the root count, so a classification can never disagree
/// with the number of values carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolutionSet {
    Empty,
    Repeated(f64),
    /// `[(-b + √Δ) / 2a, (-b - √Δ) / 2a]`, in that order.
    Distinct([f64; 2]),
}

impl SolutionSet {
    #[must_use]
    pub const fn classification(&self) -> Classification {
        match self {
            Self::Empty => Classification::NoRealRoot,
            Self::Repeated(_) => Classification::RepeatedRoot,
            Self::Distinct(_) => Classification::TwoDistinctRoots,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Empty => &[],
            Self::Repeated(root) => slice::from_ref(root),
            Self::Distinct(roots) => roots,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A successfully resolved quadratic: the discriminant used and its roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    discriminant: f64,
    solutions: SolutionSet,
}

impl Resolution {
    #[must_use]
    pub const fn discriminant(&self) -> f64 {
        self.discriminant
    }

    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.solutions.classification()
    }

    #[must_use]
    pub const fn solutions(&self) -> &SolutionSet {
        &self.solutions
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The first coefficient (in `a`, `b`, `c` order) that did not parse.
    #[error("coefficient {coefficient} is not a valid number")]
    InvalidInput { coefficient: Coefficient },
    #[error("coefficient a is zero; the equation is not quadratic")]
    DegenerateA,
}

/// Result of one solve: every caller must handle all three shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolutionOutcome {
    InvalidInput { coefficient: Coefficient },
    DegenerateA,
    Resolved(Resolution),
}

impl ResolutionOutcome {
    #[must_use]
    pub const fn resolution(&self) -> Option<&Resolution> {
        match self {
            Self::Resolved(resolution) => Some(resolution),
            Self::InvalidInput { .. } | Self::DegenerateA => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<ResolveError> {
        match self {
            Self::InvalidInput { coefficient } => Some(ResolveError::InvalidInput {
                coefficient: *coefficient,
            }),
            Self::DegenerateA => Some(ResolveError::DegenerateA),
            Self::Resolved(_) => None,
        }
    }

    /// Short, stable name of the outcome kind (for logs).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::DegenerateA => "degenerate_a",
            Self::Resolved(resolution) => match resolution.classification() {
                Classification::NoRealRoot => "no_real_root",
                Classification::RepeatedRoot => "repeated_root",
                Classification::TwoDistinctRoots => "two_distinct_roots",
            },
        }
    }
}

impl From<Result<Resolution, ResolveError>> for ResolutionOutcome {
    fn from(result: Result<Resolution, ResolveError>) -> Self {
        match result {
            Ok(resolution) => Self::Resolved(resolution),
            Err(ResolveError::InvalidInput { coefficient }) => Self::InvalidInput { coefficient },
            Err(ResolveError::DegenerateA) => Self::DegenerateA,
        }
    }
}

fn parse_as(coefficient: Coefficient, raw: &str) -> Result<f64, ResolveError> {
    parse_coefficient(raw).map_err(|_| ResolveError::InvalidInput { coefficient })
}

/// Resolve `a·x² + b·x + c = 0` from raw coefficient text.
///
/// All three coefficients are parsed before anything is computed. The
/// discriminant is `b² - 4ac` in plain IEEE double arithmetic; overflow to
/// infinity is a valid result, not an error. When overflow makes the
/// discriminant NaN, neither the `< 0` nor the `== 0` branch matches and two
/// (NaN) roots are reported.
pub fn try_resolve(a: &str, b: &str, c: &str) -> Result<Resolution, ResolveError> {
    let a = parse_as(Coefficient::A, a)?;
    let b = parse_as(Coefficient::B, b)?;
    let c = parse_as(Coefficient::C, c)?;

    if a == 0.0 {
        return Err(ResolveError::DegenerateA);
    }

    let discriminant = b * b - 4.0 * a * c;
    let denominator = 2.0 * a;

    let solutions = if discriminant < 0.0 {
        SolutionSet::Empty
    } else if discriminant == 0.0 {
        SolutionSet::Repeated(-b / denominator)
    } else {
        let root = discriminant.sqrt();
        SolutionSet::Distinct([(-b + root) / denominator, (-b - root) / denominator])
    };

    Ok(Resolution {
        discriminant,
        solutions,
    })
}

/// Total form of [`try_resolve`]: never fails, always one of three outcomes.
#[must_use]
pub fn resolve(a: &str, b: &str, c: &str) -> ResolutionOutcome {
    try_resolve(a, b, c).into()
}

// ============================================================================
// Tests
// ============================================================================
