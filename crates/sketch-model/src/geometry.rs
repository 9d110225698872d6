#![forbid(unsafe_code)]

//! Geometry value types shared by the regenerable caches.

/// A point or direction in model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Create a vector from components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edge {
    pub a: Vector,
    pub b: Vector,
}

/// Triangle with a flat normal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub a: Vector,
    pub b: Vector,
    pub c: Vector,
    pub normal: Vector,
}

/// Triangle mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Closed piecewise-linear loop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Vector>,
}

/// Rational cubic Bezier curve, by control points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BezierCurve {
    pub control: Vec<Vector>,
}

/// Ordered chain of curves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BezierLoop {
    pub curves: Vec<BezierCurve>,
}

/// Boundary representation: a set of trimmed faces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shell {
    pub faces: Vec<Polygon>,
}

impl Shell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::WHITE
    }
}
