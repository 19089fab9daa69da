//! Identifier minting: internal UUIDs, external NIDs, and the process-wide
//! `incrementor` counter registry used by the field-mapping engine.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Mints a fresh internal row key. Never exposed externally; a row owns
/// this for its lifetime in the store.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Mints a fresh external-stable identifier, same shape as `new_uuid` but
/// semantically distinct: an `nid` is either minted here or carried
/// forward from a prior vintage (§4.6), never derived.
pub fn new_nid() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

static COUNTERS: Lazy<Mutex<HashMap<String, i64>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// The `incrementor` field-mapping function: a monotonic integer counter
/// keyed by name, shared across the whole run. `start`/`step` only take
/// effect the first time a given counter name is used; subsequent calls
/// ignore them and simply advance the existing counter.
pub fn next_increment(counter: &str, start: i64, step: i64) -> i64 {
    let mut counters = COUNTERS.lock().unwrap();
    let entry = counters.entry(counter.to_string()).or_insert(start - step);
    *entry += step;
    *entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_starts_at_declared_value() {
        let name = "test_counter_start";
        assert_eq!(next_increment(name, 5, 1), 5);
        assert_eq!(next_increment(name, 5, 1), 6);
    }

    #[test]
    fn increment_respects_step() {
        let name = "test_counter_step";
        assert_eq!(next_increment(name, 0, 10), 0);
        assert_eq!(next_increment(name, 0, 10), 10);
        assert_eq!(next_increment(name, 0, 10), 20);
    }

    #[test]
    fn distinct_counters_are_independent() {
        assert_eq!(next_increment("counter_a", 1, 1), 1);
        assert_eq!(next_increment("counter_b", 100, 1), 100);
    }
}
