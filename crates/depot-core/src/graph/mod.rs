//! Route graph and path-finding
//!
//! - `RouteGraph`: sparse weighted undirected graph over named points
//! - Dijkstra path-finding for minimum-cost routes
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod route;
pub mod traversal;
pub mod types;

pub use algos::dijkstra_find_path;
pub use route::RouteGraph;
pub use traversal::GraphProvider;
pub use types::{Neighbor, PathResult, Point, Weight};
