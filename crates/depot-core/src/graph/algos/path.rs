//! Path reconstruction from predecessor links

use std::collections::HashMap;

/// Walk predecessor links back from `to` and return the route `from..=to`.
///
/// Returns an empty route if the chain does not end at `from` (target never
/// reached, or a broken chain).
pub fn reconstruct_path(
    from: &str,
    to: &str,
    predecessors: &HashMap<String, String>,
) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;

    // A well-formed chain visits each point at most once
    while current != from && path.len() <= predecessors.len() + 1 {
        match predecessors.get(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred.as_str();
            }
            None => break,
        }
    }

    path.reverse();
    if path.first().map(String::as_str) != Some(from) {
        return Vec::new();
    }
    path
}
