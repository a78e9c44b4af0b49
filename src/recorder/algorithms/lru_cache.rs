//! Least-recently-used cache driven by an operation list.
//!
//! Cases for this algorithm use [`CaseInput::Ops`]: the first operation
//! must be `new(capacity)`, followed by any mix of `put(key, value)` and
//! `get(key)`. The cache is modeled as a vector ordered from least to
//! most recently used, which keeps every recency move visible in the
//! snapshots.
//!
//! [`CaseInput::Ops`]: crate::testcase::CaseInput

use serde_json::json;

use crate::recorder::{Algorithm, AlgorithmId, RecordError, TraceBuilder};
use crate::testcase::{Operation, TestCase};
use crate::trace::Trace;

const SOURCE: &str = "\
struct LruCache {
    capacity: usize,
    entries: Vec<(i64, i64)>, // least recent first
}

fn get(cache: &mut LruCache, key: i64) -> i64 {
    match cache.entries.iter().position(|(k, _)| *k == key) {
        Some(pos) => {
            let (key, value) = cache.entries.remove(pos);
            cache.entries.push((key, value));
            value
        }
        None => -1,
    }
}

fn put(cache: &mut LruCache, key: i64, value: i64) {
    if let Some(pos) = cache.entries.iter().position(|(k, _)| *k == key) {
        cache.entries.remove(pos);
    } else if cache.entries.len() == cache.capacity {
        cache.entries.remove(0);
    }
    cache.entries.push((key, value));
}";

pub struct LruCache;

impl Algorithm for LruCache {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::LruCache
    }

    fn name(&self) -> &'static str {
        "LRU Cache"
    }

    fn summary(&self) -> &'static str {
        "Bounded key-value cache that evicts the least recently used entry"
    }

    fn source(&self) -> &'static str {
        SOURCE
    }

    fn cases(&self) -> Vec<TestCase> {
        vec![
            TestCase::ops(
                "eviction-then-miss",
                vec![
                    op("new", &[2]),
                    op("put", &[1, 10]),
                    op("get", &[1]),
                    op("put", &[2, 20]),
                    op("put", &[3, 30]),
                    op("get", &[2]),
                    op("get", &[1]),
                ],
            ),
            TestCase::ops(
                "refresh-changes-the-victim",
                vec![
                    op("new", &[2]),
                    op("put", &[1, 1]),
                    op("put", &[2, 2]),
                    op("get", &[1]),
                    op("put", &[3, 3]),
                    op("get", &[2]),
                    op("get", &[1]),
                ],
            ),
            TestCase::ops(
                "overwrite-existing-key",
                vec![
                    op("new", &[2]),
                    op("put", &[1, 1]),
                    op("put", &[1, 99]),
                    op("get", &[1]),
                ],
            ),
            TestCase::ops("no-operations", vec![op("new", &[3])]),
            TestCase::ops("get-on-empty", vec![op("new", &[1]), op("get", &[5])]),
        ]
    }

    fn record(&self, case: &TestCase) -> Result<Trace, RecordError> {
        let id = self.id();
        let ops = case
            .operations()
            .ok_or_else(|| RecordError::invalid_input(id, "expected an operation list"))?;

        let mut iter = ops.iter();
        let capacity = match iter.next() {
            Some(first) if first.name == "new" => int_arg(first, 0).ok_or_else(|| {
                RecordError::invalid_input(id, "new expects one integer capacity")
            })?,
            _ => {
                return Err(RecordError::invalid_input(
                    id,
                    "the first operation must be new(capacity)",
                ))
            }
        };
        if capacity < 1 {
            return Err(RecordError::invalid_input(id, "capacity must be at least 1"));
        }
        let capacity = capacity as usize;

        let mut t = TraceBuilder::new();
        let mut entries: Vec<(i64, i64)> = Vec::new();

        t.step(2, format!("create a cache holding at most {capacity} entries"))
            .insight("the entry vector is ordered least recent first, so index 0 is always the eviction victim")
            .phase("init")
            .var("capacity", json!(capacity))
            .var("cache", json!(entries));

        for operation in iter {
            match operation.name.as_str() {
                "get" => {
                    let key = int_arg(operation, 0).ok_or_else(|| {
                        RecordError::invalid_input(id, "get expects one integer key")
                    })?;
                    record_get(&mut t, &mut entries, key);
                }
                "put" => {
                    let (key, value) = int_arg(operation, 0)
                        .zip(int_arg(operation, 1))
                        .ok_or_else(|| {
                            RecordError::invalid_input(id, "put expects integer key and value")
                        })?;
                    record_put(&mut t, &mut entries, capacity, key, value);
                }
                other => {
                    return Err(RecordError::invalid_input(
                        id,
                        format!("unknown operation {other:?}"),
                    ))
                }
            }
        }

        t.finish().map_err(Into::into)
    }
}

fn record_get(t: &mut TraceBuilder, entries: &mut Vec<(i64, i64)>, key: i64) {
    t.step(7, format!("get({key}): scan the entries for the key"))
        .phase("lookup")
        .var("key", json!(key))
        .var("cache", json!(entries));

    match entries.iter().position(|(k, _)| *k == key) {
        Some(pos) => {
            let entry = entries.remove(pos);
            entries.push(entry);
            t.step(10, format!("get({key}) hits, move the entry to the most-recent end"))
                .insight("using a key counts as a use, which is what protects it from eviction")
                .phase("hit")
                .var("result", json!(entry.1))
                .var("cache", json!(entries));
        }
        None => {
            t.step(13, format!("get({key}) misses"))
                .phase("miss")
                .var("result", json!(-1))
                .var("cache", json!(entries));
        }
    }
}

fn record_put(
    t: &mut TraceBuilder,
    entries: &mut Vec<(i64, i64)>,
    capacity: usize,
    key: i64,
    value: i64,
) {
    if let Some(pos) = entries.iter().position(|(k, _)| *k == key) {
        entries.remove(pos);
        t.step(19, format!("put({key}, {value}): the key exists, drop its old entry"))
            .phase("update")
            .var("cache", json!(entries));
    } else if entries.len() == capacity {
        let (evicted_key, evicted_value) = entries.remove(0);
        t.step(21, format!("cache is full, evict least-recent key {evicted_key}"))
            .insight("the front of the vector has gone longest without a use")
            .phase("evict")
            .var("evicted_key", json!(evicted_key))
            .var("evicted_value", json!(evicted_value))
            .var("cache", json!(entries));
    }

    entries.push((key, value));
    t.step(23, format!("insert ({key}, {value}) as the most recent entry"))
        .phase("insert")
        .var("cache", json!(entries));
}

fn op(name: &str, args: &[i64]) -> Operation {
    Operation::new(name, args.iter().map(|a| json!(a)).collect())
}

fn int_arg(operation: &Operation, index: usize) -> Option<i64> {
    operation.args.get(index).and_then(serde_json::Value::as_i64)
}
