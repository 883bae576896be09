//! Command surface decoupling the engine from any widget toolkit.
//!
//! The presentation layer translates its input events into
//! [`LayoutCommand`]s and hands them to [`LayoutEngine::execute`].

use crate::engine::LayoutEngine;
use palletkit_core::error::Result;
use palletkit_core::geometry::Point;

/// Every input event the engine consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCommand {
    PointerDown { id: u64, position: Point },
    PointerMove { position: Point },
    PointerUp,
    AddWorkpieces {
        x_count: u32,
        y_count: u32,
        x_margin: f64,
        y_margin: f64,
    },
    RotateLeft,
    RotateRight,
    DeleteLast,
    ClearAll,
    ToggleGridSnap,
    ToggleCollisionDetection,
    Undo,
    Redo,
    ResetLayout,
    SetPlatformSize { width: f64, height: f64 },
    SetBlockSize { width: f64, height: f64 },
}

impl LayoutEngine {
    /// Executes a command against the engine.
    ///
    /// Rejected-but-legal outcomes (a blocked rotation, an undo at the
    /// floor, a move outside a gesture) are not errors; only validation
    /// failures surface as `Err`.
    pub fn execute(&mut self, command: LayoutCommand) -> Result<()> {
        match command {
            LayoutCommand::PointerDown { id, position } => self.pointer_down(id, position),
            LayoutCommand::PointerMove { position } => {
                self.pointer_move(position);
                Ok(())
            }
            LayoutCommand::PointerUp => {
                self.pointer_up();
                Ok(())
            }
            LayoutCommand::AddWorkpieces {
                x_count,
                y_count,
                x_margin,
                y_margin,
            } => self
                .add_workpieces(x_count, y_count, x_margin, y_margin)
                .map(|_| ()),
            LayoutCommand::RotateLeft => self.rotate_left().map(|_| ()),
            LayoutCommand::RotateRight => self.rotate_right().map(|_| ()),
            LayoutCommand::DeleteLast => {
                self.delete_last();
                Ok(())
            }
            LayoutCommand::ClearAll => {
                self.clear_all();
                Ok(())
            }
            LayoutCommand::ToggleGridSnap => {
                self.toggle_grid_snap();
                Ok(())
            }
            LayoutCommand::ToggleCollisionDetection => {
                self.toggle_collision_detection();
                Ok(())
            }
            LayoutCommand::Undo => {
                self.undo();
                Ok(())
            }
            LayoutCommand::Redo => {
                self.redo();
                Ok(())
            }
            LayoutCommand::ResetLayout => {
                self.reset_layout();
                Ok(())
            }
            LayoutCommand::SetPlatformSize { width, height } => {
                self.set_platform_size(width, height)
            }
            LayoutCommand::SetBlockSize { width, height } => self.set_block_size(width, height),
        }
    }
}
