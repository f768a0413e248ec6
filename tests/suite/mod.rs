//! Integration test suite modules

mod config;
mod resolve;
mod session;
