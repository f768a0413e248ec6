//! Config file handling as the binary sees it.

use std::fs;

use quadra_config::{DEFAULT_LINEAR_SOLVER_URL, QuadraConfig, resolve_linear_solver_url};
use quadra_engine::{App, Language};

use crate::common::RecordingOpener;

#[test]
fn language_round_trips_through_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(".quadra").join("config.toml");

    let mut app = App::with_config(
        None,
        Some(path.clone()),
        Box::new(RecordingOpener::default()),
    );
    app.toggle_language();
    assert!(path.exists());

    let config = QuadraConfig::load_from(&path)
        .expect("readable")
        .expect("present");
    let restarted = App::with_config(
        Some(&config),
        Some(path),
        Box::new(RecordingOpener::default()),
    );
    assert_eq!(restarted.language(), Language::Vietnamese);
    assert_eq!(restarted.catalog().tab_linear, "Giải Hệ Phương Trình");
}

#[test]
fn persisted_language_keeps_user_comments() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "# solver settings\n[linear_solver]\nurl = \"https://solver.example.com/\" # prod\n",
    )
    .expect("write");

    QuadraConfig::persist_language_at(&path, Language::Vietnamese).expect("persist");

    let written = fs::read_to_string(&path).expect("read");
    assert!(written.contains("# solver settings"));
    assert!(written.contains("# prod"));
    assert!(written.contains("language = \"vi\""));
}

#[test]
fn bad_url_in_config_falls_back_to_default() {
    assert_eq!(
        resolve_linear_solver_url(None, Some("localhost 5000")),
        DEFAULT_LINEAR_SOLVER_URL
    );
}

#[test]
fn ui_flags_reach_the_session() {
    let config: QuadraConfig =
        toml::from_str("[app]\nascii_only = true\nhigh_contrast = true\n").expect("valid");
    let app = App::with_config(Some(&config), None, Box::new(RecordingOpener::default()));
    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
    assert_eq!(app.language(), Language::English);
}
