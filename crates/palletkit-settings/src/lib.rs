//! PalletKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;

pub use config::{BlockSettings, Config, InteractionSettings, PlatformSettings};
