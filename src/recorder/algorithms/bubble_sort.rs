//! Bubble sort with the early-exit optimization.

use std::collections::BTreeMap;

use serde_json::json;

use crate::recorder::{Algorithm, AlgorithmId, RecordError, TraceBuilder};
use crate::testcase::TestCase;
use crate::trace::Trace;

const SOURCE: &str = "\
fn bubble_sort(array: &mut [i64]) {
    let mut unsorted = array.len();
    while unsorted > 1 {
        let mut swapped = false;
        for i in 1..unsorted {
            if array[i - 1] > array[i] {
                array.swap(i - 1, i);
                swapped = true;
            }
        }
        unsorted -= 1;
        if !swapped {
            break;
        }
    }
}";

pub struct BubbleSort;

impl Algorithm for BubbleSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BubbleSort
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn summary(&self) -> &'static str {
        "Bubble large elements to the end with adjacent swaps, stopping on a clean pass"
    }

    fn source(&self) -> &'static str {
        SOURCE
    }

    fn cases(&self) -> Vec<TestCase> {
        vec![
            array_case("small", &[5, 1, 4, 2, 8]),
            array_case("already-sorted", &[1, 2, 3, 4]),
            array_case("reverse", &[3, 2, 1]),
            array_case("single", &[7]),
        ]
    }

    fn record(&self, case: &TestCase) -> Result<Trace, RecordError> {
        let mut array = case.int_array_arg("array").ok_or_else(|| {
            RecordError::invalid_input(self.id(), "expected integer array \"array\"")
        })?;

        let mut t = TraceBuilder::new();
        let mut unsorted = array.len();

        t.step(2, format!("{} elements are unsorted", array.len()))
            .insight("each pass settles the largest remaining element at the end")
            .phase("init")
            .var("array", json!(array))
            .var("unsorted", json!(unsorted));

        let mut pass = 0u32;
        while unsorted > 1 {
            pass += 1;
            t.step(4, format!("pass {pass}: walk the first {unsorted} elements"))
                .phase("pass")
                .var("pass", json!(pass))
                .var("unsorted", json!(unsorted));

            let mut swapped = false;
            for i in 1..unsorted {
                t.step(6, format!("compare neighbors at {} and {}", i - 1, i))
                    .phase("compare")
                    .var("left", json!(array[i - 1]))
                    .var("right", json!(array[i]))
                    .highlight([i - 1, i]);

                if array[i - 1] > array[i] {
                    array.swap(i - 1, i);
                    swapped = true;
                    t.step(7, format!("swap {} and {}", array[i], array[i - 1]))
                        .phase("swap")
                        .var("array", json!(array))
                        .highlight([i - 1, i]);
                }
            }

            unsorted -= 1;
            t.step(11, format!("pass {pass} settled index {unsorted}"))
                .phase("pass")
                .var("array", json!(array))
                .var("swapped", json!(swapped))
                .var("unsorted", json!(unsorted));

            if !swapped {
                t.step(13, "no swaps in the whole pass, everything is in order")
                    .insight("a clean pass proves the array is sorted, skipping the remaining passes")
                    .phase("done")
                    .var("array", json!(array));
                return t.finish().map_err(Into::into);
            }
        }

        t.step(16, "every element has settled into place")
            .phase("done")
            .var("array", json!(array));
        t.finish().map_err(Into::into)
    }
}

fn array_case(name: &str, array: &[i64]) -> TestCase {
    let mut args = BTreeMap::new();
    args.insert("array".to_string(), json!(array));
    TestCase::args(name, args)
}
