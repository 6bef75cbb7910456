//! Weather card - a bilingual current-weather widget for the terminal
//!
//! The library exposes the card's modules for the binary and for tests.

pub mod action;
pub mod api;
pub mod art;
pub mod components;
pub mod config;
pub mod effect;
pub mod i18n;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod task;
