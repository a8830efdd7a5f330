//! Plane geometry for sub-grid placement and alignment.

use std::ops::{Add, Sub};

/// A point (or vector) in the drawing plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// A point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point rotated by `degrees` counterclockwise about the origin.
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// This point scaled uniformly about the origin.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean length of this point treated as a vector.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of this point treated as a vector, in degrees.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Where a sub-grid sits in the shared drawing plane.
///
/// [`Placement::transform`] applies scale, then translation, then rotation
/// — the order every composite surface in the preset library was authored
/// against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Translation applied after scaling.
    pub location: Point,
    /// Rotation in degrees, applied last.
    pub rotation: f64,
    /// Uniform scale, applied first.
    pub scale: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            location: Point::default(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Placement {
    /// A pure translation.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            location: Point::new(x, y),
            ..Self::default()
        }
    }

    /// A translation plus rotation (degrees).
    pub fn rotated(x: f64, y: f64, degrees: f64) -> Self {
        Self {
            location: Point::new(x, y),
            rotation: degrees,
            scale: 1.0,
        }
    }

    /// Map a point from sub-grid coordinates into the shared plane.
    pub fn transform(&self, point: Point) -> Point {
        (point.scaled(self.scale) + self.location).rotated(self.rotation)
    }
}

/// Corners of the bounding box of `points` as `[min_x, min_y, max_x, max_y]`.
///
/// The box always contains the origin, matching how grid geometry is
/// anchored for rendering.
pub fn bounding_box(points: &[Point]) -> [f64; 4] {
    let mut bbox = [0.0f64; 4];
    for p in points {
        bbox[0] = bbox[0].min(p.x);
        bbox[1] = bbox[1].min(p.y);
        bbox[2] = bbox[2].max(p.x);
        bbox[3] = bbox[3].max(p.y);
    }
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn identity_placement_is_a_no_op() {
        let p = Point::new(3.0, -2.0);
        assert!(close(Placement::default().transform(p), p));
    }

    #[test]
    fn transform_scales_then_translates_then_rotates() {
        let placement = Placement {
            location: Point::new(1.0, 0.0),
            rotation: 90.0,
            scale: 2.0,
        };
        // (1, 0) -> scaled (2, 0) -> translated (3, 0) -> rotated (0, 3)
        let out = placement.transform(Point::new(1.0, 0.0));
        assert!(close(out, Point::new(0.0, 3.0)));
    }

    #[test]
    fn rotation_is_counterclockwise() {
        let out = Point::new(1.0, 0.0).rotated(90.0);
        assert!(close(out, Point::new(0.0, 1.0)));
    }

    #[test]
    fn bounding_box_includes_origin() {
        let bbox = bounding_box(&[Point::new(2.0, 3.0), Point::new(5.0, 1.0)]);
        assert_eq!(bbox, [0.0, 0.0, 5.0, 3.0]);
    }

    #[test]
    fn angle_and_norm() {
        let v = Point::new(0.0, 2.0);
        assert!((v.angle() - 90.0).abs() < 1e-9);
        assert!((v.norm() - 2.0).abs() < 1e-9);
    }
}
