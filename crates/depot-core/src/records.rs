use std::path::Path;

use crate::graph::{Neighbor, Point};
use crate::item::Item;

/// Utilities for records output format
/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Convert an absolute path to a path relative to the current working directory
pub fn path_relative_to_cwd(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        path.strip_prefix(&cwd)
            .ok()
            .map(|p| {
                let s = p.display().to_string();
                if s.is_empty() {
                    ".".to_string()
                } else {
                    s
                }
            })
            .unwrap_or_else(|| path.display().to_string())
    } else {
        path.display().to_string()
    }
}

/// Format the H-line that opens every records payload
pub fn format_header(layout: &Path, mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!(
        "H depot=1 records=1 layout={} mode={}",
        path_relative_to_cwd(layout),
        mode
    );
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format an item as an I-line
pub fn format_item_record(item: &Item) -> String {
    format!(
        "I {} \"{}\" category=\"{}\" weight={:.2} ts={}",
        item.id,
        escape_quotes(&item.name),
        escape_quotes(&item.category),
        item.weight,
        item.timestamp
    )
}

/// Format a point as a P-line
pub fn format_point_record(point: &Point, degree: usize) -> String {
    format!(
        "P {} x={} y={} obstacle={} degree={}",
        point.id, point.x, point.y, point.is_obstacle, degree
    )
}

/// Format one step of a route as an E-line
pub fn format_edge_record(from: &str, to: &Neighbor) -> String {
    format!("E {} {} weight={}", from, to.id, to.weight)
}
