//! Force-directed 3D embedding.
//!
//! A spring embedder over the arena graph: charge repulsion between every
//! vertex pair, spring attraction along edges, per-vertex force clamping and
//! damped cooling. The embedding is computed once per graph and treated as
//! immutable afterwards, since every curve drawn assumes its endpoints stay
//! put.

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::geometry::Point;

use super::types::Graph;

/// Solver tuning. Defaults are calibrated for graphs of up to a few hundred
/// vertices.
#[derive(Clone, Copy, Debug)]
pub struct LayoutParameters {
	/// Pairwise repulsion strength.
	pub force_charge: f64,
	/// Spring constant pulling adjacent vertices toward `rest_length`.
	pub force_spring: f64,
	/// Per-vertex force magnitude cap.
	pub force_max: f64,
	/// Spring rest length.
	pub rest_length: f64,
	/// Displacement per unit force on the first iteration.
	pub step_size: f64,
	/// Cooling factor applied to the step each iteration.
	pub damping_factor: f64,
	/// Number of relaxation iterations.
	pub iterations: usize,
	/// Radius the finished embedding is scaled to.
	pub scale: f64,
	/// Seed for the initial placement.
	pub seed: u64,
}

impl Default for LayoutParameters {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			rest_length: 1.0,
			step_size: 0.02,
			damping_factor: 0.98,
			iterations: 250,
			scale: 5.0,
			seed: 0x5eed,
		}
	}
}

/// Embeds a graph in 3D with a spring-electrical relaxation.
///
/// The initial placement is drawn from a seeded RNG, so the result is
/// reproducible for a given graph and parameter set. Self-loops contribute
/// no force; parallel edges pull proportionally harder. The finished layout
/// is centered on its centroid and scaled so the farthest vertex sits at
/// `params.scale`.
pub fn force_layout<L>(graph: &Graph<L>, params: &LayoutParameters) -> Vec<Point> {
	let n = graph.vertex_count();
	let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
	let mut positions: Vec<Point> = (0..n)
		.map(|_| {
			Point::new(
				rng.r#gen::<f64>() * 2.0 - 1.0,
				rng.r#gen::<f64>() * 2.0 - 1.0,
				rng.r#gen::<f64>() * 2.0 - 1.0,
			)
		})
		.collect();
	if n < 2 {
		return positions;
	}

	let mut step = params.step_size;
	for _ in 0..params.iterations {
		let mut forces = vec![Point::default(); n];

		// charge repulsion between every pair
		for i in 0..n {
			for j in (i + 1)..n {
				let delta = positions[j] - positions[i];
				let dist = delta.norm().max(0.01);
				let push = params.force_charge / (dist * dist);
				let unit = delta * (1.0 / dist);
				forces[i] = forces[i] - unit * push;
				forces[j] = forces[j] + unit * push;
			}
		}

		// spring attraction along edges; self-loops exert none
		for &(a, b) in graph.edges() {
			if a == b {
				continue;
			}
			let delta = positions[b] - positions[a];
			let dist = delta.norm().max(0.01);
			let pull = params.force_spring * (dist - params.rest_length);
			let unit = delta * (1.0 / dist);
			forces[a] = forces[a] + unit * pull;
			forces[b] = forces[b] - unit * pull;
		}

		// clamp and displace
		for (position, force) in positions.iter_mut().zip(&forces) {
			let magnitude = force.norm();
			let force = if magnitude > params.force_max {
				*force * (params.force_max / magnitude)
			} else {
				*force
			};
			*position = *position + force * step;
		}
		step *= params.damping_factor;
	}

	center_and_scale(&mut positions, params.scale);
	debug!(
		"embedded {} vertices / {} edges in {} iterations",
		n,
		graph.edge_count(),
		params.iterations
	);
	positions
}

/// Centers the layout on its centroid and scales the farthest vertex out to
/// `radius`.
fn center_and_scale(positions: &mut [Point], radius: f64) {
	let n = positions.len() as f64;
	let centroid = positions
		.iter()
		.fold(Point::default(), |sum, &p| sum + p)
		* (1.0 / n);
	let mut extent = 0.0f64;
	for position in positions.iter_mut() {
		*position = *position - centroid;
		extent = extent.max(position.norm());
	}
	if extent > 0.0 {
		for position in positions.iter_mut() {
			*position = *position * (radius / extent);
		}
	}
}
