//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use quadra_engine::{App, ExternalOpener, OpenError, QuadraConfig};

/// Records every address it is asked to open.
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, address: &str) -> Result<(), OpenError> {
        self.opened.borrow_mut().push(address.to_string());
        Ok(())
    }
}

/// Session with default config and no persistence.
pub fn test_app() -> App {
    App::with_config(None, None, Box::new(RecordingOpener::default()))
}

/// Session built from an inline TOML config.
pub fn app_with_config(toml_src: &str, opener: RecordingOpener) -> App {
    let config: QuadraConfig = toml::from_str(toml_src).expect("valid test config");
    App::with_config(Some(&config), None, Box::new(opener))
}
