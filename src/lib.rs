//! # valbar - live Valorant matches in a terminal widget
//!
//! A small always-on-top terminal widget showing live Valorant matches
//! with Polymarket odds for the match on screen. Built with ratatui and
//! tokio.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the main loop
//! - **Session**: The data engine, usable without a terminal
//! - **State**: Centralized store and reducers
//! - **Sync**: Refresh timer, odds lookups, and focus-loss auto-hide
//! - **API**: Match feed and odds sources
//! - **UI**: Layout and rendering logic
//! - **Events**: Input handling and event processing
//! - **Config**: Configuration and preference storage

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod session;
pub mod state;
pub mod sync;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use session::Session;
