//! Shared constants for the layout engine.

/// Grid cell size in mm used for snap-to-grid quantization.
pub const GRID_SIZE: f64 = 10.0;

/// Tolerance in mm applied to overlap tests so edge-adjacent rectangles
/// do not register as collisions through floating-point error.
pub const COLLISION_TOLERANCE: f64 = 0.001;

/// Default pallet width in mm (Y-axis length in the machine convention).
pub const DEFAULT_PALLET_WIDTH: f64 = 400.0;

/// Default pallet height in mm (X-axis length in the machine convention).
pub const DEFAULT_PALLET_HEIGHT: f64 = 300.0;

/// Default workpiece block width in mm.
pub const DEFAULT_BLOCK_WIDTH: f64 = 60.0;

/// Default workpiece block height in mm.
pub const DEFAULT_BLOCK_HEIGHT: f64 = 60.0;

/// Default margin in mm added around a block on each side.
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Id assigned to the first user-added workpiece. Ids 1..FIRST_WORKPIECE_ID
/// are reserved for the fixed seed blocks.
pub const FIRST_WORKPIECE_ID: u64 = 4;

/// How long a collision flash stays active, in milliseconds.
pub const COLLISION_FLASH_MS: u64 = 200;

/// How long a temporary toast message stays active, in milliseconds.
pub const TOAST_MS: u64 = 3000;
