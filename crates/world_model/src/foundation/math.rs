//! Math utilities and types
//!
//! Integer grid coordinates for placed content, plus the continuous vector
//! type used while averaging positions.

pub use nalgebra::{Point2, Vector2};

/// Integer grid position
pub type Point = Point2<i32>;

/// Integer extent (width, height)
pub type Size = Vector2<i32>;

/// Continuous 2D vector used for intermediate spatial math
pub type Vec2 = Vector2<f64>;

/// Arithmetic mean of a set of grid positions, every point weighted equally
///
/// Returns `None` for an empty input.
pub fn centroid<I>(points: I) -> Option<Vec2>
where
    I: IntoIterator<Item = Point>,
{
    let mut sum = Vec2::zeros();
    let mut count = 0usize;
    for point in points {
        sum += Vec2::new(f64::from(point.x), f64::from(point.y));
        count += 1;
    }
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = count as f64;
    Some(sum / count)
}

/// Midpoint of a `width` x `height` rectangle anchored at the origin
///
/// Integer division truncates toward zero.
pub fn midpoint(width: i32, height: i32) -> Point {
    Point::new(width / 2, height / 2)
}
