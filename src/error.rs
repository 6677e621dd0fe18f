//! Error taxonomy shared by the graph modules.

use thiserror::Error;

/// Errors raised by graph construction and traversal.
///
/// Every operation here is pure and deterministic, so a failed call fails
/// identically on retry; callers should treat these as input bugs rather
/// than transient conditions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphGeometryError {
	/// The adjacency mapping is malformed.
	#[error("invalid graph: {0}")]
	InvalidGraph(String),

	/// The generator does not enumerate the unit group the Cayley
	/// construction is built on.
	#[error("{generator} does not generate the units modulo {modulus}")]
	InvalidGenerator {
		/// The offending generator.
		generator: u64,
		/// The modulus of the group, i.e. graph order plus one.
		modulus: u64,
	},

	/// The destination is unreachable from the source.
	#[error("no path from vertex {from} to vertex {to}")]
	NoPath {
		/// Source vertex index.
		from: usize,
		/// Destination vertex index.
		to: usize,
	},
}
