//! Shared crate-wide constants.
//!
//! The reference values mirror the desktop layout the application was
//! designed against and are the defaults of [`GeometryLimits`] and
//! [`SpawnConfig`]. The terminal front end injects the cell-scale values
//! from [`cell`] instead.
//!
//! [`GeometryLimits`]: crate::window::GeometryLimits
//! [`SpawnConfig`]: crate::window::SpawnConfig

/// Minimum window width while resizing (reference configuration).
pub const MIN_WINDOW_WIDTH: i32 = 250;

/// Minimum window height while resizing (reference configuration).
pub const MIN_WINDOW_HEIGHT: i32 = 150;

/// Spawn position of the first detail window (reference configuration).
pub const SPAWN_BASE_X: i32 = 300;
pub const SPAWN_BASE_Y: i32 = 150;

/// Stagger applied per already-open detail window so sequentially spawned
/// windows do not overlap exactly.
pub const SPAWN_OFFSET: i32 = 30;

/// Default detail window size, used when clamping spawn positions into the
/// container (reference configuration).
pub const DETAIL_WIDTH: i32 = 380;
pub const DETAIL_HEIGHT: i32 = 320;

/// Rank every window holds before it is first brought to front.
pub const BASE_RANK: u64 = 10;

/// Cell-scale equivalents used by the terminal front end.
pub mod cell {
    pub const MIN_WINDOW_WIDTH: i32 = 24;
    pub const MIN_WINDOW_HEIGHT: i32 = 6;

    pub const SPAWN_BASE_X: i32 = 30;
    pub const SPAWN_BASE_Y: i32 = 8;
    pub const SPAWN_OFFSET: i32 = 2;

    pub const DETAIL_WIDTH: i32 = 46;
    pub const DETAIL_HEIGHT: i32 = 15;
}
