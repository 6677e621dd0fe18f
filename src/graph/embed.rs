//! A graph paired with its fixed embedding.

use crate::error::GraphGeometryError;
use crate::geometry::{self, Curve, EdgeDescriptor, Point};

use super::layout::{LayoutParameters, force_layout};
use super::path;
use super::types::Graph;

/// A graph whose vertex positions were fixed at construction.
///
/// The embedding is computed exactly once; recomputing it would move the
/// endpoints of every curve already drawn, so positions are immutable for
/// the life of the value.
#[derive(Clone, Debug)]
pub struct GraphEmbedding<L> {
	graph: Graph<L>,
	positions: Vec<Point>,
}

impl<L> GraphEmbedding<L> {
	/// Embeds the graph with the force-directed solver.
	pub fn new(graph: Graph<L>, params: &LayoutParameters) -> Self {
		let positions = force_layout(&graph, params);
		Self { graph, positions }
	}

	/// Adopts positions from an existing embedding, so a second edge family
	/// over the same vertex set (say, 3-isogenies over the 2-isogeny layout)
	/// draws onto identical coordinates.
	pub fn with_positions(
		graph: Graph<L>,
		positions: Vec<Point>,
	) -> Result<Self, GraphGeometryError> {
		if positions.len() != graph.vertex_count() {
			return Err(GraphGeometryError::InvalidGraph(format!(
				"{} positions for {} vertices",
				positions.len(),
				graph.vertex_count()
			)));
		}
		Ok(Self { graph, positions })
	}

	/// The underlying graph.
	pub fn graph(&self) -> &Graph<L> {
		&self.graph
	}

	/// Every vertex position, by index.
	pub fn positions(&self) -> &[Point] {
		&self.positions
	}

	/// Position of vertex `v`.
	pub fn position(&self, v: usize) -> Point {
		self.positions[v]
	}

	/// Drawable curve for one edge descriptor.
	pub fn curve(&self, edge: &EdgeDescriptor) -> Curve {
		geometry::edge_curve(
			self.position(edge.start),
			self.position(edge.end),
			edge.curvature,
		)
	}

	/// Curve between two vertices; a loop when they coincide.
	pub fn edge(&self, start: usize, end: usize, curvature: f64) -> Curve {
		geometry::edge_curve(self.position(start), self.position(end), curvature)
	}

	/// Curves of every edge in enumeration order, drawn straight.
	pub fn edge_curves(&self) -> Vec<Curve> {
		self.graph
			.edges()
			.iter()
			.map(|&(a, b)| self.edge(a, b, 0.0))
			.collect()
	}

	/// Shortest-path curves from `source` to `dest`.
	pub fn path_curves(
		&self,
		source: usize,
		dest: usize,
	) -> Result<Vec<Curve>, GraphGeometryError> {
		let edges = path::shortest_path(&self.graph, source, dest)?;
		Ok(edges.iter().map(|e| self.curve(e)).collect())
	}

	/// Curves of the closed walk through three waypoints.
	pub fn cycle_curves(
		&self,
		a: usize,
		b: usize,
		c: usize,
	) -> Result<Vec<Curve>, GraphGeometryError> {
		let edges = path::cycle(&self.graph, a, b, c)?;
		Ok(edges.iter().map(|e| self.curve(e)).collect())
	}
}
