use constcat::concat;
use serde_json::{json, Map, Value};

const FIXTURES_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

pub const STATS: &str = concat!(FIXTURES_DIR, "/stats.json");
pub const MISSING_IN_PROGRESS: &str =
    concat!(FIXTURES_DIR, "/missing_in_progress.json");
pub const TRUNCATED: &str = concat!(FIXTURES_DIR, "/truncated.json");
pub const ARRAY: &str = concat!(FIXTURES_DIR, "/array.json");
pub const NONEXISTENT: &str = concat!(FIXTURES_DIR, "/nonexistent.json");

/// Same counters as the `stats.json` fixture.
pub fn stats_json() -> Map<String, Value> {
    match json!({
        "total": 10,
        "open": 2,
        "received": 1,
        "in_progress": 3,
        "resolved": 2,
        "closed": 2,
        "critical": 1,
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

pub fn stats_json_with(key: &str, value: Value) -> Map<String, Value> {
    let mut json = stats_json();
    json.insert(key.to_string(), value);
    json
}

pub fn stats_json_without(key: &str) -> Map<String, Value> {
    let mut json = stats_json();
    json.remove(key).expect("unknown stats key");
    json
}
