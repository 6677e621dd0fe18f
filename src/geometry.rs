//! Coordinate and curve value types handed to the rendering layer.

use std::ops::{Add, Mul, Sub};

/// Control-point offset for self-loop curves, in layout units.
const LOOP_SIZE: f64 = 1.0;

/// A position in scene space. Planar layouts leave `z` at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// X coordinate.
	pub x: f64,
	/// Y coordinate.
	pub y: f64,
	/// Z coordinate.
	pub z: f64,
}

impl Point {
	/// A point from its three coordinates.
	pub fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Planar polar coordinates, `z = 0`.
	pub fn polar(radius: f64, angle: f64) -> Self {
		Self::new(radius * angle.cos(), radius * angle.sin(), 0.0)
	}

	/// This point shifted by the given offsets.
	pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
		Self::new(self.x + dx, self.y + dy, self.z + dz)
	}

	/// Euclidean length.
	pub fn norm(self) -> f64 {
		(self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
	}

	/// Euclidean distance to another point.
	pub fn distance(self, other: Point) -> f64 {
		(other - self).norm()
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
	}
}

/// A drawable curve descriptor. The renderer decides stroke, color and
/// animation; this type only fixes the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
	/// Straight segment.
	Line {
		/// Start position.
		from: Point,
		/// End position.
		to: Point,
	},
	/// Circular arc; the sign of `angle` flips the concavity.
	Arc {
		/// Start position.
		from: Point,
		/// End position.
		to: Point,
		/// Signed subtended angle.
		angle: f64,
	},
	/// Closed self-loop: a cubic through two symmetric control points, so a
	/// loop is visually distinct from a zero-length arc.
	Loop {
		/// Anchor position (both endpoints of the closed curve).
		at: Point,
		/// First control point.
		control_a: Point,
		/// Second control point.
		control_b: Point,
	},
}

/// An edge of a laid-out graph: endpoints, bend, and color family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDescriptor {
	/// Start vertex index.
	pub start: usize,
	/// End vertex index.
	pub end: usize,
	/// Signed bend passed through to [`edge_curve`].
	pub curvature: f64,
	/// Color class grouping edges of one family.
	pub family: u32,
}

/// Builds the drawable curve between two laid-out positions.
///
/// Coincident endpoints produce a [`Curve::Loop`] anchored there; otherwise
/// zero curvature gives a straight [`Curve::Line`] and any other value a
/// [`Curve::Arc`] bending by that signed angle. Pure: identical inputs
/// always yield an identical curve.
pub fn edge_curve(from: Point, to: Point, curvature: f64) -> Curve {
	if from == to {
		Curve::Loop {
			at: from,
			control_a: from.offset(LOOP_SIZE, LOOP_SIZE, LOOP_SIZE),
			control_b: from.offset(-LOOP_SIZE, LOOP_SIZE, -LOOP_SIZE),
		}
	} else if curvature == 0.0 {
		Curve::Line { from, to }
	} else {
		Curve::Arc {
			from,
			to,
			angle: curvature,
		}
	}
}
