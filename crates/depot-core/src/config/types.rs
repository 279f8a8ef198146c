//! Layout type definitions

use serde::{Deserialize, Serialize};

use crate::graph::Point;

/// Current layout format version
pub const LAYOUT_FORMAT_VERSION: u32 = 1;

/// Default layout file name, looked up in the working directory
pub const DEFAULT_LAYOUT_FILE: &str = "depot.toml";

/// Warehouse layout: floor points, aisles between them, and the packages
/// waiting to be received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Layout format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Display name for the warehouse (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub points: Vec<Point>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// An undirected aisle between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// A package as written in the layout file.
///
/// `id` may be omitted; a fresh `ORD-` id is generated on load.
/// `timestamp` defaults to the time the layout is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

fn default_version() -> u32 {
    LAYOUT_FORMAT_VERSION
}

fn default_category() -> String {
    "General".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            version: LAYOUT_FORMAT_VERSION,
            name: None,
            points: Vec::new(),
            edges: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl EdgeSpec {
    pub fn new(from: &str, to: &str, weight: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }
}

impl ItemSpec {
    pub fn new(id: &str, name: &str, category: &str, weight: f64) -> Self {
        Self {
            id: Some(id.to_string()),
            name: name.to_string(),
            category: category.to_string(),
            weight,
            timestamp: None,
        }
    }
}
