//! Pure geometry for the drawer gesture engine
//!
//! Points, sizes and rectangles in logical pixels, plus the drag axis and
//! the panel side that decides which direction along it means "closing".

mod axis;
mod geometry;

pub use axis::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::axis::{Axis, Side};
    pub use crate::geometry::{Point, Rect, Size};
}
