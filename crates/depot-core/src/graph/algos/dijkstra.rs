use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{PathResult, Weight};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// then by point id so equal distances pop lowest id first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub node_id: String,
    pub accumulated_cost: Weight,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// State tracked during a Dijkstra search
struct DijkstraState {
    visited: HashSet<String>,
    distances: HashMap<String, Weight>,
    predecessors: HashMap<String, String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(start: &str) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
        };
        state.distances.insert(start.to_string(), Weight::ZERO);
        state.heap.push(Reverse(HeapEntry {
            node_id: start.to_string(),
            accumulated_cost: Weight::ZERO,
        }));
        state
    }

    /// Pop the closest unvisited point, skipping stale heap entries
    fn pop_closest(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.visited.contains(&entry.node_id) {
                return Some(entry);
            }
        }
        None
    }

    /// Relax a single edge, recording `current` as predecessor on strict improvement
    fn relax(&mut self, current: &str, current_cost: Weight, neighbor: &str, weight: Weight) {
        if self.visited.contains(neighbor) {
            return;
        }
        let candidate = current_cost + weight;
        let improves = self
            .distances
            .get(neighbor)
            .is_none_or(|known| candidate < *known);
        if !improves {
            return;
        }

        tracing::trace!(from = current, to = neighbor, cost = candidate.value(), "relax");
        self.distances.insert(neighbor.to_string(), candidate);
        self.predecessors
            .insert(neighbor.to_string(), current.to_string());
        self.heap.push(Reverse(HeapEntry {
            node_id: neighbor.to_string(),
            accumulated_cost: candidate,
        }));
    }
}

/// Find the minimum-cost route from `start` to `end`.
///
/// Points with no tentative distance are treated as infinitely far. The
/// search stops as soon as `end` is finalized or nothing reachable is left.
/// Unknown endpoints and unreachable targets yield a not-found result rather
/// than an error.
#[tracing::instrument(skip_all, fields(start = %start, end = %end))]
pub fn dijkstra_find_path(provider: &dyn GraphProvider, start: &str, end: &str) -> PathResult {
    if !provider.contains(start) || !provider.contains(end) {
        tracing::debug!("unknown endpoint");
        return PathResult::not_found(start, end);
    }

    let mut state = DijkstraState::new(start);
    let mut reached = false;

    while let Some(HeapEntry {
        node_id: current_id,
        accumulated_cost,
    }) = state.pop_closest()
    {
        state.visited.insert(current_id.clone());
        if current_id == end {
            reached = true;
            break;
        }

        for neighbor in provider.neighbors(&current_id) {
            state.relax(&current_id, accumulated_cost, &neighbor.id, neighbor.weight);
        }
    }

    if !reached {
        tracing::debug!(visited = state.visited.len(), "target unreachable");
        return PathResult::not_found(start, end);
    }

    let points = reconstruct_path(start, end, &state.predecessors);
    if points.is_empty() {
        return PathResult::not_found(start, end);
    }

    let total_cost = state
        .distances
        .get(end)
        .map(Weight::value)
        .unwrap_or_default();
    tracing::debug!(hops = points.len() - 1, total_cost, "route found");

    PathResult {
        from: start.to_string(),
        to: end.to_string(),
        found: true,
        points,
        total_cost,
    }
}
