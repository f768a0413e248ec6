//! Borrow-scoped access to Insert-mode editing.

use quadra_types::ui::{DraftInput, InputMode};

use super::App;

pub struct InsertMode<'a> {
    pub(crate) app: &'a mut App,
}

pub enum InsertModeAccess<'a> {
    InInsert(InsertMode<'a>),
    NotInsert,
}

impl App {
    /// Borrow-scoped access to Insert-mode operations.
    ///
    /// The returned guard holds `&mut App`, so the input mode cannot be
    /// changed while the guard exists.
    pub fn insert_mode_mut(&mut self) -> InsertModeAccess<'_> {
        match self.input_mode {
            InputMode::Insert => InsertModeAccess::InInsert(InsertMode { app: self }),
            InputMode::Normal => InsertModeAccess::NotInsert,
        }
    }
}

impl InsertMode<'_> {
    fn draft_mut(&mut self) -> &mut DraftInput {
        let focus = self.app.focus;
        self.app.fields.get_mut(focus)
    }

    pub fn move_cursor_left(&mut self) {
        self.draft_mut().move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.draft_mut().move_cursor_right();
    }

    pub fn enter_char(&mut self, new_char: char) {
        self.draft_mut().enter_char(new_char);
    }

    /// Paste support. Line breaks and other control characters are dropped.
    pub fn enter_text(&mut self, text: &str) {
        self.draft_mut().enter_text(text);
    }

    pub fn delete_char(&mut self) {
        self.draft_mut().delete_char();
    }

    pub fn delete_char_forward(&mut self) {
        self.draft_mut().delete_char_forward();
    }

    pub fn delete_word_backwards(&mut self) {
        self.draft_mut().delete_word_backwards();
    }

    pub fn reset_cursor(&mut self) {
        self.draft_mut().reset_cursor();
    }

    pub fn move_cursor_end(&mut self) {
        self.draft_mut().move_cursor_end();
    }

    pub fn clear_line(&mut self) {
        self.draft_mut().clear();
    }

    /// Move to the next field, cursor at its end.
    pub fn next_field(&mut self) {
        self.app.focus_next();
        self.move_cursor_end();
    }

    pub fn prev_field(&mut self) {
        self.app.focus_prev();
        self.move_cursor_end();
    }

    /// Solve without leaving Insert mode.
    pub fn solve(self) {
        self.app.solve();
    }
}
