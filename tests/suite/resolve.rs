//! Resolver behavior through the public API.

use quadra_types::{
    Classification, Coefficient, Language, PanelLine, ResolutionOutcome, ResolveError, panel_lines,
    resolve, try_resolve,
};

fn roots(outcome: &ResolutionOutcome) -> Vec<f64> {
    outcome
        .resolution()
        .map(|resolution| resolution.solutions().as_slice().to_vec())
        .unwrap_or_default()
}

#[test]
fn worked_examples() {
    let cases: [(&str, &str, &str, f64, Classification, &[f64]); 4] = [
        ("1", "-3", "2", 1.0, Classification::TwoDistinctRoots, &[2.0, 1.0]),
        ("1", "2", "1", 0.0, Classification::RepeatedRoot, &[-1.0]),
        ("1", "0", "1", -4.0, Classification::NoRealRoot, &[]),
        ("2", "5", "-3", 49.0, Classification::TwoDistinctRoots, &[0.5, -3.0]),
    ];

    for (a, b, c, discriminant, classification, expected) in cases {
        let outcome = resolve(a, b, c);
        let resolution = outcome.resolution().expect("resolved");
        assert_eq!(resolution.discriminant(), discriminant, "{a} {b} {c}");
        assert_eq!(resolution.classification(), classification, "{a} {b} {c}");
        assert_eq!(roots(&outcome), expected, "{a} {b} {c}");
    }
}

#[test]
fn degenerate_and_invalid() {
    assert_eq!(resolve("0", "5", "1"), ResolutionOutcome::DegenerateA);
    assert_eq!(resolve("-0", "x", "1"), ResolutionOutcome::InvalidInput {
        coefficient: Coefficient::B
    });
    assert_eq!(resolve("x", "1", "1"), ResolutionOutcome::InvalidInput {
        coefficient: Coefficient::A
    });
    assert_eq!(try_resolve("0.0", "1", "1"), Err(ResolveError::DegenerateA));
}

#[test]
fn repeated_calls_agree() {
    for (a, b, c) in [("3", "-7.5", "0.25"), ("1", "1", "1"), ("", "1", "1")] {
        assert_eq!(resolve(a, b, c), resolve(a, b, c));
    }
}

#[test]
fn classification_follows_discriminant_sign() {
    for (a, b, c) in [("1", "5", "6"), ("1", "4", "4"), ("1", "1", "5"), ("-2", "3", "9")] {
        let outcome = resolve(a, b, c);
        let resolution = outcome.resolution().expect("resolved");
        let expected = match resolution.discriminant() {
            d if d > 0.0 => Classification::TwoDistinctRoots,
            d if d == 0.0 => Classification::RepeatedRoot,
            _ => Classification::NoRealRoot,
        };
        assert_eq!(resolution.classification(), expected);
    }
}

#[test]
fn panel_rows_in_both_languages() {
    let outcome = resolve("1", "2", "1");
    assert_eq!(
        panel_lines(&outcome, Language::English.catalog()),
        vec![
            PanelLine::Discriminant {
                label: "Delta (Δ):",
                value: "0".to_string(),
            },
            PanelLine::Conclusion {
                label: "Conclusion:",
                text: "The equation has a repeated root",
            },
            PanelLine::RootsHeading("Roots:"),
            PanelLine::Root {
                label: "x".to_string(),
                value: "-1.0000".to_string(),
            },
        ]
    );
    assert_eq!(
        panel_lines(&resolve("0", "1", "1"), Language::Vietnamese.catalog()),
        vec![PanelLine::Error(
            "Hệ số a phải khác 0 để có phương trình bậc 2!".to_string()
        )]
    );
}

#[test]
fn tied_roots_round_away_from_zero() {
    let rows = panel_lines(&resolve("32", "-1", "0"), Language::English.catalog());
    assert!(rows.contains(&PanelLine::Root {
        label: "x1".to_string(),
        value: "0.0313".to_string(),
    }));

    let rows = panel_lines(&resolve("-32", "-1", "0"), Language::English.catalog());
    let text: Vec<String> = rows.iter().map(ToString::to_string).collect();
    assert!(text.contains(&"x1 = -0.0313".to_string()), "{text:?}");
}
