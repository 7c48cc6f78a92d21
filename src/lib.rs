//! Rollcall - a terminal admin dashboard for an attendance backend
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod traits;
pub mod ui;
pub mod view_state;
