//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted single-source shortest path
//! - `path`: predecessor-chain reconstruction shared by path searches

pub mod dijkstra;
pub mod path;

pub use dijkstra::dijkstra_find_path;
pub use path::reconstruct_path;
