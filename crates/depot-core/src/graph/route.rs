//! Route graph over named warehouse points

use std::collections::HashMap;

use crate::bail_unknown_point;
use crate::error::Result;
use crate::graph::algos::dijkstra_find_path;
use crate::graph::types::{Neighbor, PathResult, Point, Weight};

/// Sparse weighted undirected graph.
///
/// Every registered point has an adjacency list, created once on
/// registration and only ever appended to. Each edge is stored twice, once
/// in each endpoint's list. Parallel edges are kept as-is.
#[derive(Debug, Default, Clone)]
pub struct RouteGraph {
    points: HashMap<String, Point>,
    adjacency: HashMap<String, Vec<Neighbor>>,
    edge_count: usize,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a point.
    ///
    /// Returns `false` if the id was already registered; the existing record
    /// and its edges are left untouched.
    pub fn add_point(&mut self, point: Point) -> bool {
        if self.points.contains_key(&point.id) {
            tracing::debug!(id = %point.id, "point already registered");
            return false;
        }
        self.adjacency.entry(point.id.clone()).or_default();
        self.points.insert(point.id.clone(), point);
        true
    }

    /// Connect two registered points with an undirected edge.
    ///
    /// Fails with `InvalidWeight` for negative or non-finite weights and with
    /// `UnknownPoint` if either endpoint is missing. Nothing is modified on
    /// failure.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let weight = Weight::new(weight)?;
        for id in [from, to] {
            if !self.adjacency.contains_key(id) {
                bail_unknown_point!(id);
            }
        }

        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Neighbor {
                id: to.to_string(),
                weight,
            });
        }
        if let Some(list) = self.adjacency.get_mut(to) {
            list.push(Neighbor {
                id: from.to_string(),
                weight,
            });
        }
        self.edge_count += 1;

        tracing::trace!(from, to, weight = weight.value(), "add_edge");
        Ok(())
    }

    /// Shortest route as a list of point ids.
    ///
    /// Empty when either point is unknown or `end` is unreachable;
    /// `[start]` when `start == end`.
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        self.shortest_route(start, end).points
    }

    /// Shortest route with its total cost
    pub fn shortest_route(&self, start: &str, end: &str) -> PathResult {
        dijkstra_find_path(self, start, end)
    }

    pub fn point(&self, id: &str) -> Option<&Point> {
        self.points.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.points.contains_key(id)
    }

    /// All points, sorted by id
    pub fn points(&self) -> Vec<&Point> {
        let mut points: Vec<&Point> = self.points.values().collect();
        points.sort_by(|a, b| a.id.cmp(&b.id));
        points
    }

    /// Adjacency list for a point, in insertion order
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of undirected edges added (parallel edges counted separately)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
