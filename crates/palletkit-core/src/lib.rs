//! # PalletKit Core
//!
//! Core types, geometry utilities, errors and events for PalletKit.
//! Provides the fundamental abstractions shared by the layout engine
//! and the settings layer.

pub mod constants;
pub mod error;
pub mod event;
pub mod geometry;

pub use error::{Error, LayoutError, Result, StorageError};
pub use event::{EventDispatcher, LayoutEvent};
pub use geometry::{clamp, rects_overlap, snap_to_grid, Axis, Point, Rect};
