//! Items carried through the belt and filed on the shelf

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A package moving through the depot.
///
/// Only `id` takes part in container logic: it orders the shelf store and
/// is what lookups match on. The remaining fields ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Package weight in kilograms
    pub weight: f64,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Item {
    /// Create an item stamped with the current time
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self::with_timestamp(id, name, category, weight, Utc::now().timestamp_millis())
    }

    /// Create an item with an explicit timestamp
    pub fn with_timestamp(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        weight: f64,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            weight,
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) - {:.2}kg",
            self.id, self.name, self.category, self.weight
        )
    }
}
