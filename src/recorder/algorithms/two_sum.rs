//! Two-sum by complement lookup.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::recorder::{Algorithm, AlgorithmId, RecordError, TraceBuilder};
use crate::testcase::TestCase;
use crate::trace::Trace;

const SOURCE: &str = "\
fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (i, &value) in nums.iter().enumerate() {
        let complement = target - value;
        if let Some(&j) = seen.get(&complement) {
            return Some((j, i));
        }
        seen.insert(value, i);
    }
    None
}";

pub struct TwoSum;

impl Algorithm for TwoSum {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::TwoSum
    }

    fn name(&self) -> &'static str {
        "Two Sum"
    }

    fn summary(&self) -> &'static str {
        "Find two indices summing to a target with one pass and a complement map"
    }

    fn source(&self) -> &'static str {
        SOURCE
    }

    fn cases(&self) -> Vec<TestCase> {
        vec![
            sum_case("pair-found", &[2, 7, 11, 15], 9),
            sum_case("late-pair", &[3, 2, 4], 6),
            sum_case("duplicates", &[3, 3], 6),
            sum_case("no-pair", &[1, 2, 3], 100),
        ]
    }

    fn record(&self, case: &TestCase) -> Result<Trace, RecordError> {
        let id = self.id();
        let nums = case
            .int_array_arg("nums")
            .ok_or_else(|| RecordError::invalid_input(id, "expected integer array \"nums\""))?;
        let target = case
            .int_arg("target")
            .ok_or_else(|| RecordError::invalid_input(id, "expected integer \"target\""))?;

        let mut t = TraceBuilder::new();
        // BTreeMap rather than HashMap so map snapshots serialize in a
        // stable order.
        let mut seen: BTreeMap<i64, usize> = BTreeMap::new();

        t.step(2, "start with an empty value-to-index map")
            .insight("the map answers \"have we already seen the number that completes this one?\"")
            .phase("init")
            .var("nums", json!(nums))
            .var("target", json!(target))
            .var("seen", map_snapshot(&seen));

        for (i, &value) in nums.iter().enumerate() {
            let complement = target - value;
            t.step(5, format!("index {i} holds {value}, look up its complement {complement}"))
                .phase("lookup")
                .var("i", json!(i))
                .var("value", json!(value))
                .var("complement", json!(complement))
                .var("seen", map_snapshot(&seen))
                .highlight([i]);

            if let Some(&j) = seen.get(&complement) {
                t.step(6, format!("{complement} was seen at index {j}, the pair is complete"))
                    .insight("one lookup replaces scanning every earlier element again")
                    .phase("done")
                    .var("result", json!([j, i]))
                    .highlight([j, i]);
                return t.finish().map_err(Into::into);
            }

            seen.insert(value, i);
            t.step(8, format!("remember {value} at index {i}"))
                .phase("store")
                .var("seen", map_snapshot(&seen));
        }

        t.step(10, "every element was tried, no pair sums to the target")
            .phase("done")
            .var("result", json!(null));
        t.finish().map_err(Into::into)
    }
}

/// Freeze the working map into a JSON object keyed by the value's
/// decimal form.
fn map_snapshot(seen: &BTreeMap<i64, usize>) -> Value {
    let view: BTreeMap<String, usize> = seen.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    json!(view)
}

fn sum_case(name: &str, nums: &[i64], target: i64) -> TestCase {
    let mut args = BTreeMap::new();
    args.insert("nums".to_string(), json!(nums));
    args.insert("target".to_string(), json!(target));
    TestCase::args(name, args)
}
