//! Geometric primitives for rasterization.
//!
//! Provides the point, segment, and cubic-curve types consumed by the
//! rasterization routines in [`render`](crate::render).

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// A cubic Bézier segment.
///
/// The curve passes through `p0` and `p3`. The middle two points are guide
/// points only: the curve is tangent to `p0→p1` at the start and to `p2→p3`
/// at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point.
    pub p0: Point,
    /// First control point.
    pub p1: Point,
    /// Second control point.
    pub p2: Point,
    /// End point.
    pub p3: Point,
}

impl CubicBezier {
    /// Create a curve from its four control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Create a curve from eight coordinates in `[x0, y0, …, x3, y3]` order.
    #[must_use]
    pub const fn from_coords(c: [f32; 8]) -> Self {
        Self::new(
            Point::new(c[0], c[1]),
            Point::new(c[2], c[3]),
            Point::new(c[4], c[5]),
            Point::new(c[6], c[7]),
        )
    }

    /// Create a curve from eight integer coordinates in `[x0, y0, …]` order.
    #[must_use]
    pub fn from_int_coords(c: [i32; 8]) -> Self {
        Self::new(
            Point::from((c[0], c[1])),
            Point::from((c[2], c[3])),
            Point::from((c[4], c[5])),
            Point::from((c[6], c[7])),
        )
    }

    /// Length of the control polygon `p0→p1→p2→p3`.
    ///
    /// A coarse upper bound on the true arc length, used to pick the sample
    /// density when rasterizing.
    #[must_use]
    pub fn polygon_length(&self) -> f32 {
        self.p0.distance(self.p1) + self.p1.distance(self.p2) + self.p2.distance(self.p3)
    }
}
