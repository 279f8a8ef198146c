//! Depot Core Library
//!
//! In-memory containers for a warehouse stage pipeline:
//! - [`queue::Queue`]: FIFO conveyor belt
//! - [`store::OrderedStore`]: unbalanced BST keyed by item id
//! - [`graph::RouteGraph`]: weighted undirected floor graph with Dijkstra routing
//!
//! The three containers are independent; [`pipeline::Depot`] composes them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod id;
pub mod item;
pub mod logging;
pub mod pipeline;
pub mod queue;
pub mod records;
pub mod store;

pub use error::{DepotError, Result};
pub use graph::{PathResult, Point, RouteGraph};
pub use item::Item;
pub use pipeline::{Depot, ProcessOutcome};
pub use queue::Queue;
pub use store::OrderedStore;
