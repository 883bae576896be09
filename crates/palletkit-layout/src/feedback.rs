//! Transient presentation state: collision flashes and toast messages.
//!
//! The engine only records these with an expiry instant; rendering and
//! timer scheduling stay with the caller. A `tick` sweep drops expired
//! records, so a flash whose piece was deleted in the meantime simply
//! expires unseen.

use palletkit_core::constants::{COLLISION_FLASH_MS, TOAST_MS};
use std::time::{Duration, Instant};

/// A short-lived collision highlight on the blocking piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionFlash {
    /// The piece that blocked the rejected move.
    pub blocking_id: u64,
    /// When the highlight should disappear.
    pub expires_at: Instant,
}

/// A short-lived message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub expires_at: Instant,
}

/// Currently active transient feedback.
#[derive(Debug, Clone, Default)]
pub struct FeedbackState {
    collision: Option<CollisionFlash>,
    toast: Option<Toast>,
}

impl FeedbackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a collision flash on `blocking_id`, replacing any active one.
    pub fn flash_collision(&mut self, blocking_id: u64, now: Instant) {
        self.collision = Some(CollisionFlash {
            blocking_id,
            expires_at: now + Duration::from_millis(COLLISION_FLASH_MS),
        });
    }

    /// Records a toast message, replacing any active one.
    pub fn show_message(&mut self, text: impl Into<String>, now: Instant) {
        self.toast = Some(Toast {
            text: text.into(),
            expires_at: now + Duration::from_millis(TOAST_MS),
        });
    }

    /// Drops expired records. Callers invoke this from their frame/timer
    /// loop before reading the accessors.
    pub fn tick(&mut self, now: Instant) {
        if self.collision.map(|c| c.expires_at <= now).unwrap_or(false) {
            self.collision = None;
        }
        if self
            .toast
            .as_ref()
            .map(|t| t.expires_at <= now)
            .unwrap_or(false)
        {
            self.toast = None;
        }
    }

    /// The piece currently highlighted as blocking, if any.
    pub fn colliding_piece(&self) -> Option<u64> {
        self.collision.map(|c| c.blocking_id)
    }

    /// The active toast text, if any.
    pub fn message(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.text.as_str())
    }
}
