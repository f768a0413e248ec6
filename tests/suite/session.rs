//! Keyboard-driven session flows: keys go through `quadra_tui::apply_event`
//! exactly as they do in the running binary.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use quadra_engine::{App, Coefficient, InputMode, NoticeLevel, ResolutionOutcome, Tab};
use quadra_tui::apply_event;

use crate::common::{RecordingOpener, app_with_config, test_app};

fn press(app: &mut App, code: KeyCode) -> bool {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill all three fields from Normal mode and solve.
fn solve_with(app: &mut App, a: &str, b: &str, c: &str) {
    press(app, KeyCode::Char('c'));
    press(app, KeyCode::Char('i'));
    type_text(app, a);
    press(app, KeyCode::Tab);
    type_text(app, b);
    press(app, KeyCode::Tab);
    type_text(app, c);
    press(app, KeyCode::Enter);
    press(app, KeyCode::Esc);
}

#[test]
fn solve_clear_solve() {
    let mut app = test_app();

    solve_with(&mut app, "1", "-3", "2");
    assert_eq!(
        app.last_outcome().map(ResolutionOutcome::kind),
        Some("two_distinct_roots")
    );

    press(&mut app, KeyCode::Char('x'));
    assert!(app.last_outcome().is_none());
    for coefficient in Coefficient::ALL {
        assert_eq!(app.field_text(coefficient), "");
    }

    solve_with(&mut app, "1", "0", "1");
    assert_eq!(app.last_outcome().map(ResolutionOutcome::kind), Some("no_real_root"));
}

#[test]
fn every_outcome_kind_is_reachable_from_keys() {
    let mut app = test_app();
    let cases = [
        (("abc", "1", "1"), "invalid_input"),
        (("0", "5", "1"), "degenerate_a"),
        (("1", "0", "1"), "no_real_root"),
        (("1", "2", "1"), "repeated_root"),
        (("2", "5", "-3"), "two_distinct_roots"),
    ];
    for ((a, b, c), kind) in cases {
        solve_with(&mut app, a, b, c);
        assert_eq!(app.last_outcome().map(ResolutionOutcome::kind), Some(kind), "{a} {b} {c}");
    }
}

#[test]
fn whitespace_around_numbers_is_accepted() {
    let mut app = test_app();
    solve_with(&mut app, " 1 ", "2 ", " 1");
    assert_eq!(app.last_outcome().map(ResolutionOutcome::kind), Some("repeated_root"));
}

#[test]
fn editing_after_solve_keeps_result_visible() {
    let mut app = test_app();
    solve_with(&mut app, "1", "2", "1");

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Esc);

    // `a` appends to the focused field, which is still `c` after solving.
    assert_eq!(app.focus(), Coefficient::C);
    assert_eq!(app.field_text(Coefficient::C), "");
    assert_eq!(app.last_outcome().map(ResolutionOutcome::kind), Some("repeated_root"));
}

#[test]
fn linear_tab_opens_external_solver() {
    let opener = RecordingOpener::default();
    let mut app = app_with_config(
        "[linear_solver]\nurl = \"http://127.0.0.1:5000/\"\n",
        opener.clone(),
    );

    // Enter on the quadratic tab solves; it never opens anything.
    press(&mut app, KeyCode::Enter);
    assert!(opener.opened.borrow().is_empty());

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.tab(), Tab::LinearSystem);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('o'));

    assert_eq!(
        *opener.opened.borrow(),
        vec!["http://127.0.0.1:5000/".to_string(); 2]
    );
    assert_eq!(app.notice().map(|notice| notice.level), Some(NoticeLevel::Info));
}

#[test]
fn switching_tabs_keeps_quadratic_state() {
    let mut app = test_app();
    solve_with(&mut app, "2", "5", "-3");
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.tab(), Tab::LinearSystem);
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.tab(), Tab::Quadratic);

    assert_eq!(app.field_text(Coefficient::C), "-3");
    assert_eq!(
        app.last_outcome().map(ResolutionOutcome::kind),
        Some("two_distinct_roots")
    );
}

#[test]
fn insert_mode_survives_solve() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::Insert);
    assert_eq!(app.last_outcome().map(ResolutionOutcome::kind), Some("invalid_input"));
}

#[test]
fn q_quits_from_normal_mode() {
    let mut app = test_app();
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.should_quit());
}
