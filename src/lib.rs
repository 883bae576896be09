//! # PalletKit
//!
//! A pallet layout engine for rectangular workpieces with support for:
//! - Batch placement along either pallet axis with a wrapping cursor
//! - Drag with grid snapping, boundary clamping and collision rejection
//! - 90 degree rotation with center preservation
//! - Snapshot-based undo/redo
//! - JSON layout persistence
//!
//! ## Architecture
//!
//! PalletKit is organized as a workspace with multiple crates:
//!
//! 1. **palletkit-core** - Geometry primitives, errors, events, constants
//! 2. **palletkit-layout** - The layout engine: placement, drag, rotation, history
//! 3. **palletkit-settings** - Configuration file handling
//! 4. **palletkit** - Main binary with the interactive console driver

pub mod console;

pub use palletkit_core::{
    Axis, Error, EventDispatcher, LayoutError, LayoutEvent, Point, Rect, Result, StorageError,
};
pub use palletkit_layout::{
    EngineParams, LayoutCommand, LayoutEngine, LayoutFile, Pallet, Rotation, Workpiece,
};
pub use palletkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
