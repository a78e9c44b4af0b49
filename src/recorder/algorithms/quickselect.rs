//! Quickselect with a random pivot.
//!
//! The pivot index is drawn from an RNG seeded by the test case, and
//! every draw is also written into the step that narrates it. Replaying
//! the same case with the same seed reproduces the identical trace.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::recorder::{Algorithm, AlgorithmId, RecordError, TraceBuilder};
use crate::testcase::TestCase;
use crate::trace::Trace;

const SOURCE: &str = "\
fn quickselect(array: &mut [i64], k: usize, rng: &mut impl Rng) -> i64 {
    let (mut lo, mut hi) = (0, array.len());
    loop {
        let pivot_index = rng.random_range(lo..hi);
        let pivot = array[pivot_index];
        array.swap(pivot_index, hi - 1);
        let mut store = lo;
        for i in lo..hi - 1 {
            if array[i] < pivot {
                array.swap(i, store);
                store += 1;
            }
        }
        array.swap(store, hi - 1);
        if store == k {
            return array[store];
        } else if store < k {
            lo = store + 1;
        } else {
            hi = store;
        }
    }
}";

pub struct Quickselect;

impl Algorithm for Quickselect {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Quickselect
    }

    fn name(&self) -> &'static str {
        "Quickselect"
    }

    fn summary(&self) -> &'static str {
        "Find the k-th smallest element by partitioning around random pivots"
    }

    fn source(&self) -> &'static str {
        SOURCE
    }

    fn cases(&self) -> Vec<TestCase> {
        vec![
            select_case("median", &[7, 2, 9, 4, 1], 2),
            select_case("minimum", &[5, 3, 8], 0),
            select_case("with-duplicates", &[4, 4, 2, 4], 2),
            select_case("single", &[3], 0),
        ]
    }

    fn record(&self, case: &TestCase) -> Result<Trace, RecordError> {
        let id = self.id();
        let mut array = case
            .int_array_arg("array")
            .ok_or_else(|| RecordError::invalid_input(id, "expected integer array \"array\""))?;
        let k = case
            .int_arg("k")
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| RecordError::invalid_input(id, "expected non-negative integer \"k\""))?;
        if array.is_empty() {
            return Err(RecordError::invalid_input(id, "array must not be empty"));
        }
        if k >= array.len() {
            return Err(RecordError::invalid_input(
                id,
                format!("k must be below the array length {}", array.len()),
            ));
        }

        let seed = case.effective_seed();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut t = TraceBuilder::new();
        let mut lo = 0usize;
        let mut hi = array.len();

        t.step(2, format!("select rank {k} from {} elements", array.len()))
            .insight("rank is 0-based, rank 0 is the minimum")
            .phase("init")
            .var("array", json!(array))
            .var("k", json!(k))
            .var("lo", json!(lo))
            .var("hi", json!(hi))
            .var("seed", json!(seed));

        loop {
            let pivot_index = rng.random_range(lo..hi);
            let pivot = array[pivot_index];
            array.swap(pivot_index, hi - 1);
            t.step(4, format!("draw pivot index {pivot_index}, value {pivot}"))
                .insight("a random pivot keeps adversarial inputs from forcing quadratic behavior")
                .phase("pivot")
                .var("pivot_index", json!(pivot_index))
                .var("pivot", json!(pivot))
                .var("lo", json!(lo))
                .var("hi", json!(hi))
                .var("array", json!(array))
                .highlight([pivot_index]);

            let mut store = lo;
            for i in lo..hi - 1 {
                t.step(9, format!("is array[{i}] = {} below the pivot {pivot}?", array[i]))
                    .phase("compare")
                    .var("i", json!(i))
                    .var("store", json!(store))
                    .highlight([i]);

                if array[i] < pivot {
                    array.swap(i, store);
                    store += 1;
                    t.step(10, format!("move it into the small side at index {}", store - 1))
                        .phase("swap")
                        .var("array", json!(array))
                        .var("store", json!(store))
                        .highlight([store - 1]);
                }
            }

            array.swap(store, hi - 1);
            t.step(14, format!("settle the pivot {pivot} at index {store}"))
                .phase("place")
                .var("array", json!(array))
                .var("store", json!(store))
                .highlight([store]);

            if store == k {
                t.step(16, format!("index {store} is exactly rank {k}"))
                    .insight("everything left of the pivot is smaller, everything right is not smaller")
                    .phase("done")
                    .var("result", json!(array[store]))
                    .highlight([store]);
                return t.finish().map_err(Into::into);
            } else if store < k {
                lo = store + 1;
                t.step(18, format!("rank {k} lies right of index {store}, keep the right part"))
                    .phase("narrow")
                    .var("lo", json!(lo))
                    .var("hi", json!(hi));
            } else {
                hi = store;
                t.step(20, format!("rank {k} lies left of index {store}, keep the left part"))
                    .phase("narrow")
                    .var("lo", json!(lo))
                    .var("hi", json!(hi));
            }
        }
    }
}

fn select_case(name: &str, array: &[i64], k: usize) -> TestCase {
    let mut args = BTreeMap::new();
    args.insert("array".to_string(), json!(array));
    args.insert("k".to_string(), json!(k));
    TestCase::args(name, args)
}
