//! Error handling for PalletKit
//!
//! Provides error types for the two layers of the application:
//! - Layout errors (placement validation, selection, lookup)
//! - Storage errors (layout file format)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::geometry::Axis;
use thiserror::Error;

/// Layout error type
///
/// Represents validation failures raised by the layout engine. These are
/// user-action failures: they leave the layout unchanged and are reported
/// back to the caller for display.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Exactly one of the X/Y workpiece counts must be positive
    #[error("Exactly one of the X and Y workpiece counts must be positive")]
    InvalidAxisSelection,

    /// Requested batch does not fit the pallet
    #[error("{requested} workpieces exceed the pallet {axis} extent (at most {max_feasible} fit)")]
    BoundaryExceeded {
        /// The axis the batch was laid out along.
        axis: Axis,
        /// The requested workpiece count.
        requested: u32,
        /// The largest count that fits the pallet along that axis.
        max_feasible: u32,
    },

    /// Rotate/delete-selected invoked with nothing selected
    #[error("No workpiece is selected")]
    NoSelection,

    /// Referenced workpiece does not exist in the layout
    #[error("Workpiece {id} not found")]
    WorkpieceNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// Dimensions must be strictly positive
    #[error("Dimensions must be positive, got {width} x {height}")]
    InvalidDimensions {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
}

/// Storage error type
///
/// Represents errors in the persisted layout exchange format.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Layout file extension is not a supported format
    #[error("Unsupported layout file format: {extension}")]
    UnsupportedFormat {
        /// The offending file extension.
        extension: String,
    },

    /// Layout file content does not describe a valid layout
    #[error("Invalid layout data: {reason}")]
    InvalidLayout {
        /// Why the layout data was rejected.
        reason: String,
    },
}

/// Main error type for PalletKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout validation error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a boundary-exceeded error
    pub fn is_boundary_exceeded(&self) -> bool {
        matches!(self, Error::Layout(LayoutError::BoundaryExceeded { .. }))
    }

    /// Check if this is a storage error
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
