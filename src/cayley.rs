//! Cayley graph of a cyclic group, laid out on a circle.
//!
//! Vertex `i` stands for the group element `g^i` in the unit group modulo
//! `N + 1`, where `N` is the graph order. Edge families are generated from
//! fixed jump offsets modulo `N`, and the enumeration orders here (reveal
//! order, coset cycles, walks) are what the animations stage, so they must
//! be reproducible.

use std::f64::consts::PI;

use crate::error::GraphGeometryError;
use crate::geometry::{self, Curve, EdgeDescriptor, Point};

/// One edge family: a fixed step applied modulo the group order, drawn with
/// a fixed bend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpFamily {
	/// Signed step applied modulo the graph order.
	pub jump: i64,
	/// Signed arc angle for the family's edges.
	pub curvature: f64,
}

/// The Cayley graph of the cyclic group of the given order.
#[derive(Clone, Copy, Debug)]
pub struct CayleyGraph {
	order: usize,
	radius: f64,
}

impl CayleyGraph {
	/// A graph with `order` vertices on a circle of the given radius.
	pub fn new(order: usize, radius: f64) -> Self {
		Self { order, radius }
	}

	/// Number of vertices.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Circle radius of the layout.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Position of vertex `v`, at angle `2πv/N`. Indices wrap modulo the
	/// order, so `v` and `v + N` coincide.
	pub fn position(&self, v: usize) -> Point {
		let angle = 2.0 * PI * (v % self.order) as f64 / self.order as f64;
		Point::polar(self.radius, angle)
	}

	/// Positions of all vertices, by index.
	pub fn layout(&self) -> Vec<Point> {
		(0..self.order).map(|v| self.position(v)).collect()
	}

	/// Discrete-log table modulo `order + 1`: `table[g^i] = i`, built in one
	/// pass over the powers of the generator.
	fn dlog_table(&self, generator: u64) -> Result<Vec<Option<usize>>, GraphGeometryError> {
		let modulus = self.order as u64 + 1;
		let generator = generator % modulus;
		let mut table = vec![None; modulus as usize];
		let mut element = 1 % modulus;
		for exponent in 0..self.order {
			if table[element as usize].is_some() {
				return Err(GraphGeometryError::InvalidGenerator { generator, modulus });
			}
			table[element as usize] = Some(exponent);
			element = element * generator % modulus;
		}
		Ok(table)
	}

	/// Vertex reveal order: group elements `1..=N` visited in numeric order,
	/// each mapped back to its vertex index (the exponent) through the
	/// discrete-log table. The result is a permutation of `0..N`.
	///
	/// Fails with [`GraphGeometryError::InvalidGenerator`] unless the powers
	/// of `generator` enumerate every unit modulo `order + 1`.
	pub fn cyclic_order(&self, generator: u64) -> Result<Vec<usize>, GraphGeometryError> {
		let table = self.dlog_table(generator)?;
		let modulus = self.order as u64 + 1;
		(1..=self.order)
			.map(|element| {
				table[element].ok_or(GraphGeometryError::InvalidGenerator { generator, modulus })
			})
			.collect()
	}

	/// Visiting order that groups vertices into `gcd(N, jump)` cosets, each
	/// traversed as one cycle of length `N / gcd(N, jump)`. A family's edges
	/// animate coset by coset in exactly this order.
	pub fn coset_cycle_order(&self, jump: i64) -> Vec<usize> {
		let n = self.order as i64;
		let cosets = gcd(n, jump);
		let cycle_len = n / cosets;
		let mut sequence = Vec::with_capacity(self.order);
		for coset in 0..cosets {
			for step in 0..cycle_len {
				sequence.push((coset + step * jump).rem_euclid(n) as usize);
			}
		}
		sequence
	}

	/// The `N` arcs of one jump family, each coset's cycle drawn
	/// contiguously and closed back on its start before the next coset
	/// begins. `class` tags the descriptors for coloring.
	pub fn family_edges(&self, family: &JumpFamily, class: u32) -> Vec<EdgeDescriptor> {
		let n = self.order as i64;
		let cosets = gcd(n, family.jump);
		let cycle_len = n / cosets;
		let mut edges = Vec::with_capacity(self.order);
		for coset in 0..cosets {
			for step in 0..cycle_len {
				edges.push(EdgeDescriptor {
					start: (coset + step * family.jump).rem_euclid(n) as usize,
					end: (coset + (step + 1) * family.jump).rem_euclid(n) as usize,
					curvature: family.curvature,
					family: class,
				});
			}
		}
		edges
	}

	/// A private-key walk: each signed entry of `steps` is paired
	/// round-robin with a jump family and applied `|steps[k]|` times in the
	/// direction of its sign, vertex indices wrapping modulo `N`. Returns
	/// the edges walked and the vertex reached.
	pub fn walk(
		&self,
		steps: &[i64],
		families: &[JumpFamily],
		start: usize,
	) -> (Vec<EdgeDescriptor>, usize) {
		let start = start % self.order;
		if families.is_empty() {
			return (Vec::new(), start);
		}
		let n = self.order as i64;
		let mut current = start as i64;
		let mut edges = Vec::new();
		for (k, &count) in steps.iter().enumerate() {
			let class = k % families.len();
			let family = &families[class];
			let step = if count < 0 { -family.jump } else { family.jump };
			for _ in 0..count.unsigned_abs() {
				let next = (current + step).rem_euclid(n);
				edges.push(EdgeDescriptor {
					start: current as usize,
					end: next as usize,
					curvature: family.curvature,
					family: class as u32,
				});
				current = next;
			}
		}
		(edges, current as usize)
	}

	/// Drawable curve for an edge of this graph.
	pub fn edge_curve(&self, edge: &EdgeDescriptor) -> Curve {
		geometry::edge_curve(
			self.position(edge.start),
			self.position(edge.end),
			edge.curvature,
		)
	}
}

/// Greatest common divisor, nonnegative; `gcd(n, 0) = n`.
fn gcd(a: i64, b: i64) -> i64 {
	let (mut a, mut b) = (a.abs(), b.abs());
	while b != 0 {
		(a, b) = (b, a % b);
	}
	a
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positions_wrap_and_stay_on_circle() {
		let graph = CayleyGraph::new(12, 2.5);
		for v in 0..12 {
			assert_eq!(graph.position(v), graph.position(v + 12));
			let radius = graph.position(v).norm();
			assert!((radius - 2.5).abs() < 1e-12, "vertex {v} at radius {radius}");
		}
		assert_eq!(graph.layout().len(), 12);
	}

	#[test]
	fn cyclic_order_matches_dlog_of_two_mod_thirteen() {
		// 2 is primitive mod 13; reveal order is dlog[1], dlog[2], ..
		let graph = CayleyGraph::new(12, 1.0);
		let order = graph.cyclic_order(2).unwrap();
		assert_eq!(order, vec![0, 1, 4, 2, 9, 5, 11, 3, 8, 10, 7, 6]);
	}

	#[test]
	fn cyclic_order_is_a_bijection() {
		let graph = CayleyGraph::new(18, 1.0);
		let order = graph.cyclic_order(2).unwrap();
		let mut seen = vec![false; 18];
		for v in order {
			assert!(!seen[v]);
			seen[v] = true;
		}
		assert!(seen.into_iter().all(|s| s));
	}

	#[test]
	fn dlog_table_inverts_powers_mod_nineteen() {
		let graph = CayleyGraph::new(18, 1.0);
		let table = graph.dlog_table(2).unwrap();
		let mut power = 1u64;
		for exponent in 0..18 {
			assert_eq!(table[power as usize], Some(exponent));
			power = power * 2 % 19;
		}
	}

	#[test]
	fn non_primitive_generator_is_rejected() {
		// 3 has order 3 mod 13.
		let graph = CayleyGraph::new(12, 1.0);
		assert!(matches!(
			graph.cyclic_order(3),
			Err(GraphGeometryError::InvalidGenerator {
				generator: 3,
				modulus: 13
			})
		));
	}

	#[test]
	fn coset_order_partitions_the_vertices() {
		for &(n, jump) in &[(12i64, 4i64), (12, -3), (12, 1), (19, 5), (10, 6)] {
			let graph = CayleyGraph::new(n as usize, 1.0);
			let sequence = graph.coset_cycle_order(jump);
			assert_eq!(sequence.len(), n as usize);
			let mut seen = vec![false; n as usize];
			for v in &sequence {
				assert!(!seen[*v], "vertex {v} visited twice for jump {jump}");
				seen[*v] = true;
			}
			// each coset is one cycle: consecutive entries differ by `jump`
			let cosets = gcd(n, jump) as usize;
			let cycle_len = n as usize / cosets;
			for chunk in sequence.chunks(cycle_len) {
				for pair in chunk.windows(2) {
					assert_eq!(pair[1] as i64, (pair[0] as i64 + jump).rem_euclid(n));
				}
			}
		}
	}

	#[test]
	fn family_edges_close_each_coset_cycle() {
		let graph = CayleyGraph::new(12, 2.5);
		let family = JumpFamily {
			jump: 4,
			curvature: -1.0,
		};
		let edges = graph.family_edges(&family, 1);
		assert_eq!(edges.len(), 12);
		// 4 cosets of length 3, each chaining back to its start
		for cycle in edges.chunks(3) {
			for pair in cycle.windows(2) {
				assert_eq!(pair[0].end, pair[1].start);
			}
			assert_eq!(cycle[2].end, cycle[0].start);
		}
		assert!(edges.iter().all(|e| e.curvature == -1.0 && e.family == 1));
	}

	#[test]
	fn walk_wraps_and_reports_the_end_vertex() {
		let graph = CayleyGraph::new(12, 1.0);
		let families = [
			JumpFamily {
				jump: 1,
				curvature: 1.0,
			},
			JumpFamily {
				jump: 4,
				curvature: -1.0,
			},
			JumpFamily {
				jump: -3,
				curvature: 0.5,
			},
		];
		let (edges, end) = graph.walk(&[2, -1, 3], &families, 0);
		assert_eq!(edges.len(), 6);
		assert_eq!(end, 1);
		// 0 →1→ 2, then one step of -4 wraps to 10, then three steps of -3
		let visited: Vec<usize> = edges.iter().map(|e| e.end).collect();
		assert_eq!(visited, vec![1, 2, 10, 7, 4, 1]);
		for pair in edges.windows(2) {
			assert_eq!(pair[0].end, pair[1].start);
		}
	}

	#[test]
	fn walk_with_no_families_stays_put() {
		let graph = CayleyGraph::new(12, 1.0);
		let (edges, end) = graph.walk(&[3], &[], 5);
		assert!(edges.is_empty());
		assert_eq!(end, 5);
	}
}
