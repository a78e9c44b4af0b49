//! Binary search over a sorted array.

use std::collections::BTreeMap;

use serde_json::json;

use crate::recorder::{Algorithm, AlgorithmId, RecordError, TraceBuilder};
use crate::testcase::TestCase;
use crate::trace::Trace;

const SOURCE: &str = "\
fn binary_search(array: &[i64], target: i64) -> Option<usize> {
    let (mut lo, mut hi) = (0, array.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if array[mid] == target {
            return Some(mid);
        } else if array[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    None
}";

pub struct BinarySearch;

impl Algorithm for BinarySearch {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BinarySearch
    }

    fn name(&self) -> &'static str {
        "Binary Search"
    }

    fn summary(&self) -> &'static str {
        "Halve a sorted range until the target is found or the range is empty"
    }

    fn source(&self) -> &'static str {
        SOURCE
    }

    fn cases(&self) -> Vec<TestCase> {
        vec![
            args_case("found-middle", &[1, 3, 5, 7, 9, 11], 7),
            args_case("absent", &[1, 3, 5, 7, 9, 11], 4),
            args_case("first-element", &[2, 4, 6, 8], 2),
            args_case("empty", &[], 5),
        ]
    }

    fn record(&self, case: &TestCase) -> Result<Trace, RecordError> {
        let id = self.id();
        let array = case
            .int_array_arg("array")
            .ok_or_else(|| RecordError::invalid_input(id, "expected integer array \"array\""))?;
        let target = case
            .int_arg("target")
            .ok_or_else(|| RecordError::invalid_input(id, "expected integer \"target\""))?;

        let mut t = TraceBuilder::new();
        let mut lo = 0usize;
        let mut hi = array.len();

        t.step(2, format!("bracket all {} elements with a half-open range", array.len()))
            .insight("every index in lo..hi could still hold the target")
            .phase("init")
            .var("array", json!(array))
            .var("target", json!(target))
            .var("lo", json!(lo))
            .var("hi", json!(hi));

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let probed = array[mid];
            t.step(4, format!("probe the middle at index {mid}"))
                .phase("compare")
                .var("lo", json!(lo))
                .var("hi", json!(hi))
                .var("mid", json!(mid))
                .var("probed", json!(probed))
                .highlight([mid]);

            if probed == target {
                t.step(6, format!("array[{mid}] equals the target"))
                    .insight("a sorted array lets one comparison settle the whole probe")
                    .phase("done")
                    .var("result", json!(mid))
                    .highlight([mid]);
                return t.finish().map_err(Into::into);
            } else if probed < target {
                lo = mid + 1;
                t.step(8, format!("array[{mid}] = {probed} is too small, discard the left half"))
                    .phase("move")
                    .var("lo", json!(lo))
                    .var("hi", json!(hi));
            } else {
                hi = mid;
                t.step(10, format!("array[{mid}] = {probed} is too large, discard the right half"))
                    .phase("move")
                    .var("lo", json!(lo))
                    .var("hi", json!(hi));
            }
        }

        t.step(13, "the range is empty, the target is not present")
            .insight("lo met hi without ever landing on the target")
            .phase("done")
            .var("result", json!(null));
        t.finish().map_err(Into::into)
    }
}

fn args_case(name: &str, array: &[i64], target: i64) -> TestCase {
    let mut args = BTreeMap::new();
    args.insert("array".to_string(), json!(array));
    args.insert("target".to_string(), json!(target));
    TestCase::args(name, args)
}
