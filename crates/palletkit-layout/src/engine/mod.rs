//! Layout engine context for UI integration.
//! Owns the live layout and every piece of interaction state around it.
//!
//! This module is split into submodules for better organization:
//! - `placement`: batch workpiece placement with the wrapping cursor
//! - `drag`: the pointer-down/move/up gesture state machine
//! - `rotation`: selection-based 90 degree rotation
//! - `history`: snapshot-based undo/redo
//! - `workpieces`: delete, clear, reset, toggles, live settings changes

mod drag;
mod history;
mod placement;
mod rotation;
mod workpieces;

pub use drag::DragGesture;

use crate::feedback::FeedbackState;
use crate::layout::{Layout, LayoutSnapshot};
use crate::pallet::Pallet;
use crate::selection::SelectionState;
use crate::workpiece::Workpiece;
use palletkit_core::constants::{
    DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH, DEFAULT_PALLET_HEIGHT, DEFAULT_PALLET_WIDTH,
};
use palletkit_core::error::{LayoutError, Result};
use palletkit_core::event::{EventDispatcher, LayoutEvent};
use palletkit_core::geometry::{snap_to_grid, Point};
use std::time::Instant;

/// Seed positions for the three fixed blocks.
pub(crate) const FIXED_BLOCK_SEATS: [(u64, f64, f64); 3] =
    [(1, 50.0, 50.0), (2, 150.0, 50.0), (3, 250.0, 50.0)];

/// Initial engine dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    /// Pallet width (Y-axis length).
    pub pallet_width: f64,
    /// Pallet height (X-axis length).
    pub pallet_height: f64,
    /// Block width applied to newly added workpieces.
    pub block_width: f64,
    /// Block height applied to newly added workpieces.
    pub block_height: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            pallet_width: DEFAULT_PALLET_WIDTH,
            pallet_height: DEFAULT_PALLET_HEIGHT,
            block_width: DEFAULT_BLOCK_WIDTH,
            block_height: DEFAULT_BLOCK_HEIGHT,
        }
    }
}

/// The workpiece layout engine.
///
/// All operations execute synchronously on the caller's thread; the engine
/// reports mutations through [`LayoutEvent`]s and exposes the live layout
/// for rendering.
pub struct LayoutEngine {
    pub(crate) layout: Layout,
    pub(crate) pallet: Pallet,
    pub(crate) block_width: f64,
    pub(crate) block_height: f64,
    pub(crate) selection: SelectionState,
    pub(crate) drag: Option<DragGesture>,
    pub(crate) snap_to_grid: bool,
    pub(crate) collision_detection: bool,
    pub(crate) cursor: Point,
    pub(crate) undo_stack: Vec<LayoutSnapshot>,
    pub(crate) redo_stack: Vec<LayoutSnapshot>,
    pub(crate) feedback: FeedbackState,
    pub(crate) events: EventDispatcher,
}

impl LayoutEngine {
    /// Creates an engine with an empty pallet.
    pub fn new(params: EngineParams) -> Result<Self> {
        let pallet = Pallet::new(params.pallet_width, params.pallet_height)?;
        if params.block_width <= 0.0 || params.block_height <= 0.0 {
            return Err(LayoutError::InvalidDimensions {
                width: params.block_width,
                height: params.block_height,
            }
            .into());
        }

        let layout = Layout::new();
        let cursor = Point::default();
        let undo_stack = vec![layout.snapshot(cursor)];

        Ok(Self {
            layout,
            pallet,
            block_width: params.block_width,
            block_height: params.block_height,
            selection: SelectionState::new(),
            drag: None,
            snap_to_grid: true,
            collision_detection: true,
            cursor,
            undo_stack,
            redo_stack: Vec::new(),
            feedback: FeedbackState::new(),
            events: EventDispatcher::default(),
        })
    }

    /// Creates an engine whose pallet is seeded with the three fixed
    /// blocks, the fixture layout the interactive application starts from.
    pub fn with_fixed_blocks(params: EngineParams) -> Result<Self> {
        let mut engine = Self::new(params)?;
        for (id, x, y) in FIXED_BLOCK_SEATS {
            engine.layout.insert(Workpiece::fixed_block(
                id,
                Point::new(x, y),
                params.block_width,
                params.block_height,
            ));
        }
        // Re-capture the initial snapshot so the undo floor includes the
        // fixture blocks.
        engine.undo_stack = vec![engine.layout.snapshot(engine.cursor)];
        Ok(engine)
    }

    /// The live layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Iterates over all placed pieces in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = &Workpiece> {
        self.layout.iter()
    }

    /// The pallet bounds.
    pub fn pallet(&self) -> Pallet {
        self.pallet
    }

    /// Block size applied to newly added workpieces.
    pub fn block_size(&self) -> (f64, f64) {
        (self.block_width, self.block_height)
    }

    /// The currently selected workpiece, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selection.selected_id()
    }

    /// Whether grid snapping is applied to drags.
    pub fn grid_snap_enabled(&self) -> bool {
        self.snap_to_grid
    }

    /// Whether collision detection is applied to drags and rotations.
    pub fn collision_detection_enabled(&self) -> bool {
        self.collision_detection
    }

    /// The placement cursor the next batch add continues from.
    pub fn placement_cursor(&self) -> Point {
        self.cursor
    }

    /// Subscribes to layout events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<LayoutEvent> {
        self.events.subscribe()
    }

    /// The event dispatcher, for sharing with other publishers.
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Active transient feedback (collision flash, toast).
    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    /// Expires stale transient feedback.
    pub fn tick_feedback(&mut self, now: Instant) {
        self.feedback.tick(now);
    }

    /// Applies the drag constraint pipeline to a candidate top-left
    /// position: boundary clamp, optional grid snap, clamp again so the
    /// snapped value cannot escape the pallet.
    pub(crate) fn constrain(&self, candidate: Point, width: f64, height: f64) -> Point {
        let mut position = self.pallet.clamp_position(candidate, width, height);
        if self.snap_to_grid {
            position = Point::new(
                snap_to_grid(position.x, palletkit_core::constants::GRID_SIZE),
                snap_to_grid(position.y, palletkit_core::constants::GRID_SIZE),
            );
            position = self.pallet.clamp_position(position, width, height);
        }
        position
    }
}
