//! Receive → process → route pipeline
//!
//! `Depot` wires the three containers together the way the warehouse floor
//! uses them: packages arrive on the belt (queue), are processed one at a
//! time onto the shelf (ordered store), and robots are routed over the
//! floor graph. The containers themselves never call each other.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::graph::{PathResult, RouteGraph};
use crate::item::Item;
use crate::queue::Queue;
use crate::store::OrderedStore;

/// What happened to a package taken off the belt
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// Filed on the shelf under its id
    Filed(Item),
    /// Another package with the same id was already shelved; this one was dropped
    Duplicate(Item),
}

impl ProcessOutcome {
    pub fn item(&self) -> &Item {
        match self {
            ProcessOutcome::Filed(item) | ProcessOutcome::Duplicate(item) => item,
        }
    }

    pub fn is_filed(&self) -> bool {
        matches!(self, ProcessOutcome::Filed(_))
    }
}

#[derive(Debug, Default)]
pub struct Depot {
    belt: Queue<Item>,
    shelf: OrderedStore,
    graph: RouteGraph,
}

impl Depot {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            belt: Queue::new(),
            shelf: OrderedStore::new(),
            graph,
        }
    }

    /// Build a depot from a layout: the graph is constructed and every
    /// layout item is placed on the belt in file order.
    pub fn from_layout(layout: &LayoutConfig) -> Result<Self> {
        let mut depot = Depot::new(layout.build_graph()?);
        for item in layout.items() {
            depot.receive(item);
        }
        Ok(depot)
    }

    /// Put a package on the belt
    pub fn receive(&mut self, item: Item) {
        tracing::debug!(id = %item.id, "receive");
        self.belt.enqueue(item);
    }

    /// Take the next package off the belt and file it on the shelf.
    ///
    /// Returns `None` when the belt is empty.
    pub fn process_next(&mut self) -> Option<ProcessOutcome> {
        let Some(item) = self.belt.dequeue() else {
            tracing::debug!("belt is empty");
            return None;
        };

        if self.shelf.insert(item.clone()) {
            tracing::debug!(id = %item.id, "filed");
            Some(ProcessOutcome::Filed(item))
        } else {
            tracing::warn!(id = %item.id, "duplicate id dropped");
            Some(ProcessOutcome::Duplicate(item))
        }
    }

    /// Process up to `limit` packages (all of them when `None`)
    pub fn process(&mut self, limit: Option<usize>) -> Vec<ProcessOutcome> {
        let mut outcomes = Vec::new();
        while limit.is_none_or(|max| outcomes.len() < max) {
            match self.process_next() {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
        outcomes
    }

    /// Process everything on the belt; returns how many packages were taken
    pub fn process_all(&mut self) -> usize {
        self.process(None).len()
    }

    pub fn route(&self, from: &str, to: &str) -> PathResult {
        self.graph.shortest_route(from, to)
    }

    pub fn belt(&self) -> &Queue<Item> {
        &self.belt
    }

    pub fn shelf(&self) -> &OrderedStore {
        &self.shelf
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }
}
