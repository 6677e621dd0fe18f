//! Arena-style multigraph with force-directed embedding and BFS traversal.

mod embed;
mod layout;
mod path;
mod types;

pub use embed::GraphEmbedding;
pub use layout::{LayoutParameters, force_layout};
pub use path::{cycle, shortest_path};
pub use types::Graph;
