use crate::geometry::{Point, Rect, Size};

/// The single spatial dimension along which a drag is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// x axis, used by left/right panels.
    Horizontal,
    /// y axis, used by top/bottom panels.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Component of `point` along this axis.
    #[inline]
    pub fn component(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }
}

/// Edge of the viewport a panel is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Top | Side::Bottom => Axis::Vertical,
        }
    }

    /// Sign of axis movement that pushes the panel back toward its edge.
    ///
    /// Left and top panels close with negative movement, right and bottom
    /// panels with positive movement.
    #[inline]
    pub fn closing_sign(self) -> f32 {
        match self {
            Side::Left | Side::Top => -1.0,
            Side::Right | Side::Bottom => 1.0,
        }
    }

    /// Projects a raw pointer delta onto the closing direction of this side.
    ///
    /// Positive results move the panel toward closed.
    #[inline]
    pub fn project(self, delta: Point) -> f32 {
        self.axis().component(delta) * self.closing_sign()
    }

    /// Panel extent along the drag axis.
    #[inline]
    pub fn axis_extent(self, rect: Rect) -> f32 {
        self.axis().extent(rect.size())
    }

    /// True for sides whose height can be negotiated.
    #[inline]
    pub fn is_vertical(self) -> bool {
        self.axis().is_vertical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_projection_follows_side() {
        let left = Point::new(-40.0, 3.0);
        assert_eq!(Side::Left.project(left), 40.0);
        assert_eq!(Side::Right.project(left), -40.0);

        let down = Point::new(2.0, 25.0);
        assert_eq!(Side::Bottom.project(down), 25.0);
        assert_eq!(Side::Top.project(down), -25.0);
    }

    #[test]
    fn axis_extent_reads_matching_dimension() {
        let rect = Rect::new(0.0, 280.0, 300.0, 520.0);
        assert_eq!(Side::Left.axis_extent(rect), 300.0);
        assert_eq!(Side::Bottom.axis_extent(rect), 520.0);
        assert_eq!(Axis::Vertical.cross_axis(), Axis::Horizontal);
    }
}
