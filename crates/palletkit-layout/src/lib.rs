//! # PalletKit Layout
//!
//! The workpiece layout engine: a bounded pallet onto which rectangular
//! workpieces are batch-placed, dragged under grid-snap/boundary/collision
//! constraints, rotated in 90 degree steps and tracked through a
//! snapshot-based undo/redo history.
//!
//! The engine is toolkit-agnostic: callers translate pointer and button
//! events into [`LayoutCommand`]s (or direct method calls on
//! [`LayoutEngine`]) and render the resulting layout themselves.

pub mod collision;
pub mod command;
pub mod engine;
pub mod feedback;
pub mod fields;
pub mod layout;
pub mod pallet;
pub mod selection;
pub mod serialization;
pub mod workpiece;

pub use collision::find_collision;
pub use command::LayoutCommand;
pub use engine::{EngineParams, LayoutEngine};
pub use feedback::{CollisionFlash, FeedbackState, Toast};
pub use fields::{parse_count_field, parse_dimension_field};
pub use layout::{Layout, LayoutSnapshot};
pub use pallet::Pallet;
pub use selection::SelectionState;
pub use serialization::{ElementState, LayoutFile};
pub use workpiece::{Rotation, Workpiece};
