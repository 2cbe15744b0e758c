//! Layer geometry definitions
//!
//! The model treats geometry as opaque. The only thing it asks of one is how a
//! continuous position lands on its grid, which `Level::center_of_mass` needs.

use crate::foundation::math::{Point, Vec2};
use std::fmt::Debug;

/// Coordinate system of a layer
pub trait Geometry: Debug + Send + Sync {
    /// Short identifier, e.g. `"square"`
    fn name(&self) -> &str;

    /// Snap a continuous position onto this geometry's granularity
    fn snap(&self, position: Vec2) -> Point;
}

/// Unit square cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareGrid;

impl Geometry for SquareGrid {
    fn name(&self) -> &str {
        "square"
    }

    fn snap(&self, position: Vec2) -> Point {
        Point::new(round_to_i32(position.x), round_to_i32(position.y))
    }
}

/// Rectangular cells; positions snap to the nearest multiple of the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectGrid {
    cell_width: i32,
    cell_height: i32,
}

impl RectGrid {
    /// Create a grid; non-positive dimensions are clamped to 1
    pub fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Cell width
    pub const fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Cell height
    pub const fn cell_height(&self) -> i32 {
        self.cell_height
    }
}

impl Geometry for RectGrid {
    fn name(&self) -> &str {
        "rect"
    }

    fn snap(&self, position: Vec2) -> Point {
        let w = f64::from(self.cell_width);
        let h = f64::from(self.cell_height);
        // Multiply in f64 so cells near the i32 limits clamp instead of overflowing
        Point::new(
            round_to_i32((position.x / w).round() * w),
            round_to_i32((position.y / h).round() * h),
        )
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(value: f64) -> i32 {
    // `as` saturates out-of-range floats
    value.round() as i32
}
