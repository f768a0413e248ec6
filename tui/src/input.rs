//! Input handling for the Quadra TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use quadra_engine::{App, InputMode, InsertModeAccess, Tab};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the input thread
        // fails and the thread can observe `stop`.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain up to a frame's worth of queued terminal events into `app`.
///
/// Returns `Ok(true)` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event to the session. Returns `true` when the app
/// should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            match app.input_mode() {
                InputMode::Normal => handle_normal_mode(app, key),
                InputMode::Insert => handle_insert_mode(app, key),
            }
        }
        Event::Paste(text) => {
            if let InsertModeAccess::InInsert(mut insert) = app.insert_mode_mut() {
                debug!(bytes = text.len(), "Paste into focused field");
                insert.enter_text(&text);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Tab switching and global keys work on either tab.
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Char('1') => {
            app.select_tab(Tab::Quadratic);
            return;
        }
        KeyCode::Char('2') => {
            app.select_tab(Tab::LinearSystem);
            return;
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Char('h' | 'l') => {
            app.next_tab();
            return;
        }
        KeyCode::Char('L') => {
            app.toggle_language();
            return;
        }
        KeyCode::Esc => {
            app.dismiss_notice();
            return;
        }
        _ => {}
    }

    match app.tab() {
        Tab::Quadratic => match key.code {
            KeyCode::Char('i') => app.enter_insert_mode(),
            KeyCode::Char('a') => app.enter_insert_mode_at_end(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.focus_prev(),
            KeyCode::Enter | KeyCode::Char('s') => app.solve(),
            KeyCode::Char('c' | 'x') => app.clear(),
            _ => {}
        },
        Tab::LinearSystem => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('o')) {
                app.open_linear_solver();
            }
        }
    }
}

fn handle_insert_mode(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.enter_normal_mode();
        return;
    }

    let InsertModeAccess::InInsert(mut insert) = app.insert_mode_mut() else {
        return;
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('u') => insert.clear_line(),
            KeyCode::Char('w') => insert.delete_word_backwards(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => insert.solve(),
        KeyCode::Tab => insert.next_field(),
        KeyCode::BackTab => insert.prev_field(),
        KeyCode::Char(c) => insert.enter_char(c),
        KeyCode::Backspace => insert.delete_char(),
        KeyCode::Delete => insert.delete_char_forward(),
        KeyCode::Left => insert.move_cursor_left(),
        KeyCode::Right => insert.move_cursor_right(),
        KeyCode::Home => insert.reset_cursor(),
        KeyCode::End => insert.move_cursor_end(),
        _ => {}
    }
}

/// Key hints for the status bar, per mode and tab.
#[must_use]
pub fn key_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    match (app.input_mode(), app.tab()) {
        (InputMode::Insert, _) => &[
            ("Enter", "solve"),
            ("Tab", "next field"),
            ("Ctrl+U", "clear field"),
            ("Esc", "normal"),
        ],
        (InputMode::Normal, Tab::Quadratic) => &[
            ("i", "edit"),
            ("Tab", "field"),
            ("Enter", "solve"),
            ("c", "clear"),
            ("2", "linear"),
            ("L", "language"),
            ("q", "quit"),
        ],
        (InputMode::Normal, Tab::LinearSystem) => &[
            ("Enter", "open"),
            ("1", "quadratic"),
            ("L", "language"),
            ("q", "quit"),
        ],
    }
}
