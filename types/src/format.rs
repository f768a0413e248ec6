//! Display formatting for resolution outcomes.
//!
//! Rounding happens here and only here: the resolver hands out full-precision
//! values and the UI shows roots to [`ROOT_DECIMALS`] places.

use std::fmt;
use std::iter;

use crate::{Catalog, Coefficient, ResolutionOutcome};

pub const ROOT_DECIMALS: usize = 4;

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Root value rounded to four decimal places, exact ties away from zero.
/// Negative zero prints as `0.0000`.
#[must_use]
pub fn format_root(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    // -0.0 == 0.0, so this folds the sign away.
    let value = if value == 0.0 { 0.0 } else { value };

    // A tie at the last kept place is an odd multiple of 2^-(ROOT_DECIMALS + 1).
    let scaled = value * f64::from(1_u32 << (ROOT_DECIMALS + 1));
    let is_tie = scaled.fract() == 0.0 && scaled % 2.0 != 0.0;
    if !is_tie {
        return format!("{value:.prec$}", prec = ROOT_DECIMALS);
    }

    // The expansion of a tie stops at the next place, so this is exact.
    let mut digits = format!("{:.prec$}", value.abs(), prec = ROOT_DECIMALS + 1);
    digits.pop();
    let rounded = increment_decimal(&digits);
    if value < 0.0 {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// Add one unit in the last place of a plain decimal string.
fn increment_decimal(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();
    for ch in out.iter_mut().rev() {
        match ch.to_digit(10) {
            Some(9) => *ch = '0',
            Some(digit) => {
                *ch = char::from_digit(digit + 1, 10).unwrap_or(*ch);
                return out.into_iter().collect();
            }
            None => {}
        }
    }
    iter::once('1').chain(out).collect()
}

/// Discriminant in shortest round-trip form, unrounded. Magnitudes outside
/// `[1e-6, 1e21)` use exponent form (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_discriminant(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// `x` for a lone root, `x1`/`x2` when there are two.
#[must_use]
pub fn root_label(index: usize, count: usize) -> String {
    if count > 1 {
        format!("x{}", index + 1)
    } else {
        "x".to_string()
    }
}

fn error_message(outcome: &ResolutionOutcome, catalog: &Catalog) -> Option<String> {
    match outcome {
        ResolutionOutcome::InvalidInput { coefficient } => Some(format!(
            "{} ({})",
            catalog.invalid_input,
            field_label(*coefficient, catalog).trim_end_matches(':')
        )),
        ResolutionOutcome::DegenerateA => Some(catalog.degenerate_a.to_string()),
        ResolutionOutcome::Resolved(_) => None,
    }
}

#[must_use]
pub fn field_label(coefficient: Coefficient, catalog: &Catalog) -> &'static str {
    catalog.field_labels[coefficient.index()]
}

/// One row of the result panel. The renderer styles each part; `Display`
/// gives the plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelLine {
    Error(String),
    Discriminant { label: &'static str, value: String },
    Conclusion { label: &'static str, text: &'static str },
    RootsHeading(&'static str),
    Root { label: String, value: String },
}

impl fmt::Display for PanelLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(message) => f.write_str(message),
            Self::Discriminant { label, value } => write!(f, "{label} {value}"),
            Self::Conclusion { label, text } => write!(f, "{label} {text}"),
            Self::RootsHeading(label) => f.write_str(label),
            Self::Root { label, value } => write!(f, "{label} = {value}"),
        }
    }
}

/// Rows of the result panel for `outcome`: the error line, or discriminant,
/// conclusion and the roots (if any).
#[must_use]
pub fn panel_lines(outcome: &ResolutionOutcome, catalog: &Catalog) -> Vec<PanelLine> {
    if let Some(message) = error_message(outcome, catalog) {
        return vec![PanelLine::Error(message)];
    }
    let Some(resolution) = outcome.resolution() else {
        return Vec::new();
    };

    let mut lines = vec![
        PanelLine::Discriminant {
            label: catalog.discriminant_label,
            value: format_discriminant(resolution.discriminant()),
        },
        PanelLine::Conclusion {
            label: catalog.conclusion_label,
            text: catalog.conclusion(resolution.classification()),
        },
    ];

    let roots = resolution.solutions().as_slice();
    if !roots.is_empty() {
        lines.push(PanelLine::RootsHeading(catalog.roots_label));
        lines.extend(roots.iter().enumerate().map(|(index, root)| PanelLine::Root {
            label: root_label(index, roots.len()),
            value: format_root(*root),
        }));
    }
    lines
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::{Language, resolve};

    fn render(a: &str, b: &str, c: &str, language: Language) -> String {
        panel_lines(&resolve(a, b, c), language.catalog())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn root_rounds_to_four_places() {
        assert_eq!(format_root(2.0), "2.0000");
        assert_eq!(format_root(-3.0), "-3.0000");
        assert_eq!(format_root(1.0 / 3.0), "0.3333");
        assert_eq!(format_root(0.123_456), "0.1235");
        assert_eq!(format_root(0.123_449_9), "0.1234");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_root(0.031_25), "0.0313");
        assert_eq!(format_root(-0.031_25), "-0.0313");
        assert_eq!(format_root(0.093_75), "0.0938");
        assert_eq!(format_root(12.343_75), "12.3438");
    }

    #[test]
    fn increment_carries_through_nines() {
        assert_eq!(increment_decimal("0.0312"), "0.0313");
        assert_eq!(increment_decimal("0.9999"), "1.0000");
        assert_eq!(increment_decimal("99.99"), "100.00");
    }

    #[test]
    fn tie_root_in_panel() {
        assert_snapshot!(render("32", "-1", "0", Language::English), @r"
        Delta (Δ): 1
        Conclusion: The equation has 2 distinct roots
        Roots:
        x1 = 0.0313
        x2 = 0.0000
        ");
    }

    #[test]
    fn negative_zero_root_prints_unsigned() {
        assert_eq!(format_root(-0.0), "0.0000");
    }

    #[test]
    fn non_finite_values_use_words() {
        assert_eq!(format_root(f64::INFINITY), "Infinity");
        assert_eq!(format_root(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_discriminant(f64::NAN), "NaN");
    }

    #[test]
    fn discriminant_is_unrounded() {
        assert_eq!(format_discriminant(49.0), "49");
        assert_eq!(format_discriminant(-4.0), "-4");
        assert_eq!(format_discriminant(0.125), "0.125");
        assert_eq!(format_discriminant(-0.0), "0");
    }

    #[test]
    fn discriminant_switches_to_exponent_form() {
        assert_eq!(format_discriminant(1e20), "100000000000000000000");
        assert_eq!(format_discriminant(1e21), "1e+21");
        assert_eq!(format_discriminant(-2.5e30), "-2.5e+30");
        assert_eq!(format_discriminant(1e-6), "0.000001");
        assert_eq!(format_discriminant(1e-7), "1e-7");
        assert_eq!(format_discriminant(1.5e-7), "1.5e-7");
    }

    #[test]
    fn labels_depend_on_root_count() {
        assert_eq!(root_label(0, 1), "x");
        assert_eq!(root_label(0, 2), "x1");
        assert_eq!(root_label(1, 2), "x2");
    }

    #[test]
    fn two_roots_panel() {
        assert_snapshot!(render("2", "5", "-3", Language::English), @r"
        Delta (Δ): 49
        Conclusion: The equation has 2 distinct roots
        Roots:
        x1 = 0.5000
        x2 = -3.0000
        ");
    }

    #[test]
    fn repeated_root_panel() {
        assert_snapshot!(render("1", "2", "1", Language::English), @r"
        Delta (Δ): 0
        Conclusion: The equation has a repeated root
        Roots:
        x = -1.0000
        ");
    }

    #[test]
    fn no_root_panel_has_no_roots_section() {
        assert_snapshot!(render("1", "0", "1", Language::English), @r"
        Delta (Δ): -4
        Conclusion: The equation has no real roots (delta < 0)
        ");
    }

    #[test]
    fn error_panels() {
        assert_eq!(
            render("x", "1", "1", Language::English),
            "Please enter valid coefficients! (Coefficient a)"
        );
        assert_eq!(
            render("0", "5", "1", Language::Vietnamese),
            "Hệ số a phải khác 0 để có phương trình bậc 2!"
        );
    }
}
