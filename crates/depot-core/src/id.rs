//! Order ID generation
//!
//! Items received without an explicit id get an `ORD-<hex>` id derived
//! from a SHA-256 hash of the item name, the current time and a process
//! local counter.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use sha2::{Digest, Sha256};

/// Prefix shared by all generated order ids
pub const ORDER_PREFIX: &str = "ORD-";

const MIN_HASH_LEN: usize = 6;
const MAX_HASH_LEN: usize = 16;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a new order id that does not collide with `existing_ids`.
///
/// Starts at six hex characters and grows the suffix until it is unique.
pub fn generate_order_id(name: &str, existing_ids: &HashSet<String>) -> String {
    let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let input = format!("{}:{}:{}", name, timestamp, seq);

    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let full_hex = hex::encode(hasher.finalize());

    let mut len = MIN_HASH_LEN;
    loop {
        let candidate = format!("{}{}", ORDER_PREFIX, &full_hex[..len]);
        if !existing_ids.contains(&candidate) || len >= MAX_HASH_LEN {
            return candidate;
        }
        len += 1;
    }
}
