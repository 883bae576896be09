//! Event system for layout change notifications
//!
//! Provides:
//! - Event types for layout mutations and rejected operations
//! - Event dispatcher for publishing events to subscribers
//!
//! The engine runs synchronously on the caller's thread; events exist so
//! the presentation layer can re-render and surface feedback without the
//! engine knowing anything about widgets.

use crate::geometry::Axis;
use tokio::sync::broadcast;

/// Layout event types
#[derive(Debug, Clone)]
pub enum LayoutEvent {
    /// The layout was mutated and should be re-rendered
    LayoutChanged,
    /// A candidate move was rejected because it would overlap another piece
    CollisionRejected {
        /// The piece that was being moved.
        moving: u64,
        /// The piece that blocked the move.
        blocking: u64,
    },
    /// A batch add was rejected because it does not fit the pallet
    BoundaryExceeded {
        /// The axis the batch was laid out along.
        axis: Axis,
        /// The requested workpiece count.
        requested: u32,
        /// The largest count that fits.
        max_feasible: u32,
    },
    /// The selection changed
    SelectionChanged(Option<u64>),
    /// A transient message for the user
    TemporaryMessage(String),
}

impl std::fmt::Display for LayoutEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutEvent::LayoutChanged => write!(f, "Layout changed"),
            LayoutEvent::CollisionRejected { moving, blocking } => {
                write!(f, "Move of workpiece {} blocked by {}", moving, blocking)
            }
            LayoutEvent::BoundaryExceeded {
                axis,
                requested,
                max_feasible,
            } => write!(
                f,
                "{} workpieces exceed the pallet {} extent (at most {} fit)",
                requested, axis, max_feasible
            ),
            LayoutEvent::SelectionChanged(Some(id)) => write!(f, "Selected workpiece {}", id),
            LayoutEvent::SelectionChanged(None) => write!(f, "Selection cleared"),
            LayoutEvent::TemporaryMessage(text) => write!(f, "{}", text),
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for layout events.
    tx: broadcast::Sender<LayoutEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Create a new event dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(100)
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<LayoutEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Dropped silently when no subscriber is attached; the engine does not
    /// require a listener.
    pub fn publish(&self, event: LayoutEvent) {
        let _ = self.tx.send(event);
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}
