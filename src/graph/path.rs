//! BFS shortest paths and three-waypoint cycles.

use std::collections::VecDeque;

use log::trace;

use crate::error::GraphGeometryError;
use crate::geometry::EdgeDescriptor;

use super::types::Graph;

/// Shortest path between two vertices by unweighted BFS.
///
/// Ties between equal-length paths go to the earlier neighbor in adjacency
/// insertion order, so the result is reproducible for a given graph. Returns
/// the edge sequence from `source` to `dest` (curvature 0, family 0); empty
/// when the two coincide. Fails with [`GraphGeometryError::NoPath`] when
/// `dest` is unreachable.
pub fn shortest_path<L>(
	graph: &Graph<L>,
	source: usize,
	dest: usize,
) -> Result<Vec<EdgeDescriptor>, GraphGeometryError> {
	let mut parent: Vec<Option<usize>> = vec![None; graph.vertex_count()];
	let mut queue = VecDeque::new();
	parent[source] = Some(source);
	queue.push_back(source);
	while let Some(v) = queue.pop_front() {
		if v == dest {
			break;
		}
		for &next in graph.neighbors(v) {
			if parent[next].is_none() {
				parent[next] = Some(v);
				queue.push_back(next);
			}
		}
	}

	if parent[dest].is_none() {
		return Err(GraphGeometryError::NoPath {
			from: source,
			to: dest,
		});
	}

	let mut edges = Vec::new();
	let mut v = dest;
	while v != source {
		// the parent chain is rooted at `source` by construction
		let Some(prev) = parent[v] else { break };
		edges.push(EdgeDescriptor {
			start: prev,
			end: v,
			curvature: 0.0,
			family: 0,
		});
		v = prev;
	}
	edges.reverse();
	trace!("path {source} -> {dest}: {} edges", edges.len());
	Ok(edges)
}

/// Closed walk visiting `a`, `b`, `c` in order: the shortest paths `a -> b`,
/// `b -> c` and `c -> a` concatenated. Starts and ends at `a`.
pub fn cycle<L>(
	graph: &Graph<L>,
	a: usize,
	b: usize,
	c: usize,
) -> Result<Vec<EdgeDescriptor>, GraphGeometryError> {
	let mut edges = shortest_path(graph, a, b)?;
	edges.extend(shortest_path(graph, b, c)?);
	edges.extend(shortest_path(graph, c, a)?);
	Ok(edges)
}
