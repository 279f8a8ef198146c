use serde::{Deserialize, Serialize};

use crate::error::{DepotError, Result};

/// A named location on the warehouse floor.
///
/// `x`/`y` are for display only. `is_obstacle` is carried for callers that
/// want to filter routes; shortest-path search does not consult it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, alias = "obstacle")]
    pub is_obstacle: bool,
}

impl Point {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            is_obstacle: false,
        }
    }

    pub fn obstacle(mut self, is_obstacle: bool) -> Self {
        self.is_obstacle = is_obstacle;
        self
    }
}

/// Cost of traversing a single edge.
///
/// Always finite and non-negative; Dijkstra is only correct under that
/// condition, so the constructor is the one place it is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DepotError::InvalidWeight { value });
        }
        // Normalise -0.0 so it sorts and prints as zero
        Ok(Weight(value.abs()))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Weight {
    type Error = DepotError;

    fn try_from(value: f64) -> Result<Self> {
        Weight::new(value)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One adjacency-list entry: the point on the other end and the edge cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: String,
    pub weight: Weight,
}

/// Result of a shortest-route query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    /// Point ids from `from` to `to`; empty when no route exists
    pub points: Vec<String>,
    /// Sum of edge weights along `points` (0 when not found)
    pub total_cost: f64,
}

impl PathResult {
    pub fn not_found(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            points: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Number of edges along the route
    pub fn hops(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}
