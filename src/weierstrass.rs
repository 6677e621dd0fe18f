//! Real locus of a short Weierstrass curve and the chord group law.
//!
//! The curve is written `y² = (x − a)(x² + ax + c)`, with one zero of the
//! cubic pinned at `a` so a scene can control where the unbounded branch
//! starts.

use crate::geometry::Point;

/// Which half of the real locus to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
	/// The `y ≥ 0` half.
	Upper,
	/// The `y ≤ 0` half.
	Lower,
}

/// `y² = (x − a)(x² + ax + c)` over the reals.
#[derive(Clone, Debug)]
pub struct ShortWeierstrass {
	a: f64,
	c: f64,
	discriminant: f64,
	zeros: Vec<f64>,
}

impl ShortWeierstrass {
	/// A curve from its two coefficients. The real zero set of the cubic is
	/// computed up front: always `a`, plus the roots of the quadratic factor
	/// when its discriminant `a² − 4c` allows them, sorted ascending.
	pub fn new(a: f64, c: f64) -> Self {
		let discriminant = a * a - 4.0 * c;
		let mut zeros = vec![a];
		if discriminant == 0.0 {
			zeros.push(-a / 2.0);
		} else if discriminant > 0.0 {
			zeros.push((-a + discriminant.sqrt()) / 2.0);
			zeros.push((-a - discriminant.sqrt()) / 2.0);
		}
		zeros.sort_by(f64::total_cmp);
		Self {
			a,
			c,
			discriminant,
			zeros,
		}
	}

	/// Discriminant `a² − 4c` of the quadratic factor.
	pub fn discriminant(&self) -> f64 {
		self.discriminant
	}

	/// Real zeros of the cubic, ascending.
	pub fn zeros(&self) -> &[f64] {
		&self.zeros
	}

	/// Right-hand side `(x − a)(x² + ax + c)`.
	pub fn y_squared(&self, x: f64) -> f64 {
		(x - self.a) * (x * x + self.a * x + self.c)
	}

	/// Nonnegative square root at `x`, or `None` off the real locus.
	pub fn y_at(&self, x: f64) -> Option<f64> {
		let y2 = self.y_squared(x);
		(y2 >= 0.0).then(|| y2.sqrt())
	}

	/// Branch height at `x`. At a zero of the cubic this is exactly 0; off
	/// the real locus it returns the `y = 0` placeholder the existing plots
	/// rely on instead of failing (see DESIGN.md on this clamping).
	pub fn branch_y(&self, x: f64, branch: Branch) -> f64 {
		let y2 = self.y_squared(x);
		if y2 > 0.0 {
			match branch {
				Branch::Upper => y2.sqrt(),
				Branch::Lower => -y2.sqrt(),
			}
		} else {
			0.0
		}
	}

	/// X-intervals of the real components inside the window, in draw order.
	/// With fewer than three real zeros there is a single unbounded branch
	/// pair; with three zeros `x0 ≤ x1 ≤ x2` the unbounded component over
	/// `[x2, x_max]` comes first, then the oval over `[x0, x1]`. Interval
	/// ends are clamped into the window.
	pub fn components(&self, x_min: f64, x_max: f64) -> Vec<(f64, f64)> {
		let clamp = |x: f64| x.max(x_min).min(x_max);
		if self.zeros.len() < 3 {
			vec![(clamp(self.zeros[0]), x_max)]
		} else {
			vec![
				(clamp(self.zeros[2]), x_max),
				(clamp(self.zeros[0]), clamp(self.zeros[1])),
			]
		}
	}

	/// Samples one branch over `[x_min, x_max]`. The upper branch runs right
	/// to left and the lower left to right, so the two strokes of a
	/// component join end to end when drawn in sequence.
	pub fn sample_branch(
		&self,
		x_min: f64,
		x_max: f64,
		samples: usize,
		branch: Branch,
	) -> Vec<Point> {
		let samples = samples.max(2);
		(0..samples)
			.map(|i| {
				let t = i as f64 / (samples - 1) as f64;
				let t = match branch {
					Branch::Lower => t,
					Branch::Upper => 1.0 - t,
				};
				let x = x_min + (x_max - x_min) * t;
				Point::new(x, self.branch_y(x, branch), 0.0)
			})
			.collect()
	}

	/// All branch polylines of every real component, in draw order: upper
	/// then lower per component.
	pub fn plot(&self, x_min: f64, x_max: f64, samples: usize) -> Vec<Vec<Point>> {
		self.components(x_min, x_max)
			.into_iter()
			.flat_map(|(lo, hi)| {
				[
					self.sample_branch(lo, hi, samples, Branch::Upper),
					self.sample_branch(lo, hi, samples, Branch::Lower),
				]
			})
			.collect()
	}

	/// Chord addition of two distinct affine points.
	///
	/// Requires `x0 ≠ x1`. Doubling and the point at infinity never occur in
	/// the scenes this serves and are not handled.
	pub fn group_law(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> (f64, f64) {
		let slope = (y0 - y1) / (x0 - x1);
		let x = slope * slope - x0 - x1;
		let y = -y0 - slope * (x - x0);
		(x, y)
	}
}
