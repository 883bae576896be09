//! Layout file save/load.
//!
//! The on-disk schema is JSON with PascalCase keys, kept compatible with
//! the files written by earlier versions of the application:
//!
//! ```json
//! {"Elements":[{"Name":"Workpiece4","Left":0.0,"Top":0.0}]}
//! ```
//!
//! `Rotation`, `Width` and `Height` are optional; files written before
//! those fields existed still load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::engine::LayoutEngine;
use crate::layout::Layout;
use crate::workpiece::{Rotation, Workpiece};
use palletkit_core::error::StorageError;
use palletkit_core::geometry::Point;

/// Persisted state of a single placed element.
///
/// `Width` and `Height` are the unrotated outer dimensions; `Left` and
/// `Top` locate the outer rectangle's corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementState {
    pub name: String,
    pub left: f64,
    pub top: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Complete layout file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LayoutFile {
    pub elements: Vec<ElementState>,
}

impl LayoutFile {
    /// Captures the persistable state of a layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let elements = layout
            .iter()
            .map(|piece| ElementState {
                name: piece.name.clone(),
                left: piece.position.x,
                top: piece.position.y,
                rotation: piece.rotation.degrees(),
                width: Some(piece.base_width + 2.0 * piece.x_margin),
                height: Some(piece.base_height + 2.0 * piece.y_margin),
            })
            .collect();
        Self { elements }
    }

    /// Rebuilds workpieces from the persisted elements.
    ///
    /// Element identity is recovered from the name: `Block{n}` elements
    /// become fixed blocks, `Workpiece{n}` elements become workpieces.
    /// Loaded pieces carry their persisted outer dimensions directly, with
    /// no separate margin; elements without dimensions get the supplied
    /// defaults.
    ///
    /// # Arguments
    /// * `default_width` - Outer width for elements without a `Width` field
    /// * `default_height` - Outer height for elements without a `Height` field
    pub fn to_pieces(
        &self,
        default_width: f64,
        default_height: f64,
    ) -> std::result::Result<Vec<Workpiece>, StorageError> {
        self.elements
            .iter()
            .map(|element| {
                let position = Point::new(element.left, element.top);
                let width = element.width.unwrap_or(default_width);
                let height = element.height.unwrap_or(default_height);

                let mut piece = if let Some(id) = parse_element_id(&element.name, "Block") {
                    Workpiece::fixed_block(id, position, width, height)
                } else if let Some(id) = parse_element_id(&element.name, "Workpiece") {
                    Workpiece::new(id, position, width, height, 0.0, 0.0)
                } else {
                    return Err(StorageError::InvalidLayout {
                        reason: format!("unrecognized element name '{}'", element.name),
                    });
                };
                piece.rotation = Rotation::from_degrees(element.rotation);
                Ok(piece)
            })
            .collect()
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layout")
    }

    /// Parses a layout from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse layout file")
    }

    /// Saves the layout to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;
        Ok(())
    }

    /// Loads a layout from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        Self::from_json(&content)
    }
}

/// Extracts the numeric id from names like `Workpiece12`.
fn parse_element_id(name: &str, prefix: &str) -> Option<u64> {
    name.strip_prefix(prefix)?.parse().ok()
}

impl LayoutEngine {
    /// Captures the current layout for persistence.
    pub fn export_layout(&self) -> LayoutFile {
        LayoutFile::from_layout(&self.layout)
    }

    /// Replaces the live layout with the contents of a layout file and
    /// records the result in history. Selection is re-derived, the
    /// placement cursor resets to the origin and id numbering resumes
    /// above the highest loaded id.
    ///
    /// Returns how many elements were loaded.
    pub fn import_layout(
        &mut self,
        file: &LayoutFile,
    ) -> std::result::Result<usize, StorageError> {
        let pieces = file.to_pieces(self.block_width, self.block_height)?;
        let count = pieces.len();

        self.layout.replace_pieces(pieces);
        self.selection.reconcile(&self.layout);
        self.drag = None;
        self.cursor = Point::default();
        self.push_snapshot();
        self.events
            .publish(palletkit_core::event::LayoutEvent::LayoutChanged);
        Ok(count)
    }

    /// Saves the current layout to a file.
    pub fn save_layout_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.export_layout().save_to_file(path.as_ref())?;
        info!("Saved layout to {}", path.as_ref().display());
        Ok(())
    }

    /// Loads a layout file, replacing the current layout.
    pub fn load_layout_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let file = LayoutFile::load_from_file(path.as_ref())?;
        let count = self
            .import_layout(&file)
            .context("Failed to apply layout file")?;
        info!("Loaded {} elements from {}", count, path.as_ref().display());
        Ok(count)
    }
}
