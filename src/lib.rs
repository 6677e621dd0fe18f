//! Graph geometry and traversal for isogeny-based cryptography animations.
//!
//! Lays out Cayley graphs and supersingular isogeny graphs, generates the
//! edge curves a rendering layer can draw, and computes the vertex and edge
//! orderings the animations stage: discrete-log reveal order, coset cycles,
//! BFS shortest paths and three-waypoint cycles, private-key walks, and the
//! real branches of a short Weierstrass curve.
//!
//! The crate never draws anything itself; it only produces [`Point`]s,
//! [`Curve`]s and ordered [`EdgeDescriptor`] sequences for the renderer.

// Modules
pub mod cayley;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod weierstrass;

pub use error::GraphGeometryError;
pub use geometry::{Curve, EdgeDescriptor, Point};

#[cfg(test)]
use env_logger as _;
