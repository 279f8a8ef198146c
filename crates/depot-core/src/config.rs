//! Warehouse layout configuration
//!
//! A layout is stored as TOML (default `depot.toml`) and describes the route
//! graph plus the packages to feed onto the belt.

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{DepotError, Result};
use crate::graph::{Point, RouteGraph};
use crate::id::generate_order_id;
use crate::item::Item;

pub use types::{EdgeSpec, ItemSpec, LayoutConfig, DEFAULT_LAYOUT_FILE, LAYOUT_FORMAT_VERSION};

impl LayoutConfig {
    /// Load a layout from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DepotError::LayoutNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config: LayoutConfig =
            toml::from_str(&content).map_err(|e| DepotError::InvalidLayout {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if config.version > LAYOUT_FORMAT_VERSION {
            return Err(DepotError::InvalidLayout {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported version {} (newest supported: {})",
                    config.version, LAYOUT_FORMAT_VERSION
                ),
            });
        }

        tracing::debug!(
            path = %path.display(),
            points = config.points.len(),
            edges = config.edges.len(),
            items = config.items.len(),
            "load_layout"
        );
        Ok(config)
    }

    /// Parse a layout from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save the layout to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DepotError::Other(format!("failed to serialize layout: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the route graph: all points first, then every edge.
    ///
    /// Duplicate point ids keep the first definition. An edge naming an
    /// unknown point or carrying a bad weight aborts the build.
    pub fn build_graph(&self) -> Result<RouteGraph> {
        let mut graph = RouteGraph::new();
        for point in &self.points {
            if !graph.add_point(point.clone()) {
                tracing::warn!(id = %point.id, "duplicate point in layout, keeping first");
            }
        }
        for (index, edge) in self.edges.iter().enumerate() {
            if let Err(e) = graph.add_edge(&edge.from, &edge.to, edge.weight) {
                tracing::warn!(index, from = %edge.from, to = %edge.to, error = %e, "bad edge in layout");
                return Err(e);
            }
        }
        Ok(graph)
    }

    /// Materialize the layout's packages, generating ids where missing
    pub fn items(&self) -> Vec<Item> {
        let mut taken: HashSet<String> = self.items.iter().filter_map(|i| i.id.clone()).collect();
        let now = Utc::now().timestamp_millis();

        self.items
            .iter()
            .map(|spec| {
                let id = match &spec.id {
                    Some(id) => id.clone(),
                    None => {
                        let id = generate_order_id(&spec.name, &taken);
                        taken.insert(id.clone());
                        id
                    }
                };
                Item::with_timestamp(
                    id,
                    spec.name.clone(),
                    spec.category.clone(),
                    spec.weight,
                    spec.timestamp.unwrap_or(now),
                )
            })
            .collect()
    }

    /// Starter layout written by `depot init`.
    ///
    /// The fast aisle Gate → A1 → B1 → Shelf costs 13; the bypass through C1
    /// costs 14, and the pillar is an obstacle with no aisles.
    pub fn default_layout() -> Self {
        Self {
            version: LAYOUT_FORMAT_VERSION,
            name: Some("Sample warehouse".to_string()),
            points: vec![
                Point::new("Gate", 0.0, 0.0),
                Point::new("A1", 1.0, 0.0),
                Point::new("B1", 2.0, 0.0),
                Point::new("C1", 1.0, 1.0),
                Point::new("Pillar", 2.0, 1.0).obstacle(true),
                Point::new("Shelf", 3.0, 0.0),
            ],
            edges: vec![
                EdgeSpec::new("Gate", "A1", 5.0),
                EdgeSpec::new("A1", "B1", 5.0),
                EdgeSpec::new("B1", "Shelf", 3.0),
                EdgeSpec::new("Gate", "C1", 7.0),
                EdgeSpec::new("C1", "Shelf", 7.0),
            ],
            items: vec![
                ItemSpec::new("P3", "Ladder", "Tools", 7.5),
                ItemSpec::new("P1", "Drill", "Tools", 2.0),
                ItemSpec::new("P2", "Gloves", "Safety", 0.4),
            ],
        }
    }
}

/// Resolve which layout file to use: an explicit path wins, otherwise
/// `depot.toml` under `root`.
pub fn resolve_layout_path(explicit: Option<&Path>, root: &Path) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => root.join(DEFAULT_LAYOUT_FILE),
    }
}
