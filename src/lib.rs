//! arbkeys - exchange credential management for an arbitrage dashboard
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod health;
pub mod logging;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod workflows;
