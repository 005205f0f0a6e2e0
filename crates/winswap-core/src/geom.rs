// Geometry primitives shared by windows and displays.
// All values live in the global top-left screen coordinate space used by CoreGraphics.

/// A point in global screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from origin and size components.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Origin (top-left corner).
    #[inline]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Size component.
    #[inline]
    pub const fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }

    /// Same size, moved to `origin`.
    #[inline]
    pub const fn with_origin(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    /// Left edge.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }
    /// Right edge (exclusive).
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }
    /// Top edge.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }
    /// Bottom edge (exclusive).
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    /// True when the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// True when both rectangles share a region of non-zero area.
    ///
    /// Rectangles that merely touch along an edge do not intersect, matching
    /// `CGRectIntersectsRect`. Empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}
