//! The graph structure itself.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GraphGeometryError;

/// A finite undirected multigraph over hashable vertex labels.
///
/// Vertices get dense indices in the order their labels appear as adjacency
/// keys, and edges are enumerated in listing order; both orders are part of
/// the contract, since the animations stage reveals by them. The structure
/// is immutable once built.
#[derive(Clone, Debug)]
pub struct Graph<L> {
	labels: Vec<L>,
	index: HashMap<L, usize>,
	neighbors: Vec<Vec<usize>>,
	edges: Vec<(usize, usize)>,
}

impl<L: Clone + Eq + Hash + Debug> Graph<L> {
	/// Builds a graph from an ordered adjacency listing. Every `(v, [w, ..])`
	/// row contributes one undirected edge per listed neighbor; self-loops
	/// and repeated pairs are kept, so the result is a multigraph.
	///
	/// Fails with [`GraphGeometryError::InvalidGraph`] when a key repeats or
	/// a listed neighbor is not itself a key.
	pub fn from_adjacency(rows: &[(L, Vec<L>)]) -> Result<Self, GraphGeometryError> {
		let mut labels = Vec::with_capacity(rows.len());
		let mut index = HashMap::with_capacity(rows.len());
		for (label, _) in rows {
			if index.insert(label.clone(), labels.len()).is_some() {
				return Err(GraphGeometryError::InvalidGraph(format!(
					"duplicate vertex {label:?}"
				)));
			}
			labels.push(label.clone());
		}

		let mut neighbors = vec![Vec::new(); labels.len()];
		let mut edges = Vec::new();
		for (label, row) in rows {
			let from = index[label];
			for other in row {
				let to = *index.get(other).ok_or_else(|| {
					GraphGeometryError::InvalidGraph(format!(
						"vertex {other:?} is not an adjacency key"
					))
				})?;
				edges.push((from, to));
				neighbors[from].push(to);
				if from != to {
					neighbors[to].push(from);
				}
			}
		}

		Ok(Self {
			labels,
			index,
			neighbors,
			edges,
		})
	}

	/// Index of a label, if present.
	pub fn index_of(&self, label: &L) -> Option<usize> {
		self.index.get(label).copied()
	}
}

impl<L> Graph<L> {
	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.labels.len()
	}

	/// Number of edges, counting parallels and self-loops.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Label of a vertex index.
	pub fn label(&self, v: usize) -> &L {
		&self.labels[v]
	}

	/// Neighbor indices of `v`, in insertion order. A self-loop lists `v`
	/// once.
	pub fn neighbors(&self, v: usize) -> &[usize] {
		&self.neighbors[v]
	}

	/// Edge list as index pairs, in input order.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}
}
