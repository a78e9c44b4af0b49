//! In-place merge of two sorted arrays, writing from the back.

use std::collections::BTreeMap;

use serde_json::json;

use crate::recorder::{Algorithm, AlgorithmId, RecordError, TraceBuilder};
use crate::testcase::TestCase;
use crate::trace::Trace;

const SOURCE: &str = "\
fn merge(nums1: &mut [i64], m: usize, nums2: &[i64], n: usize) {
    let mut i = m;
    let mut j = n;
    let mut k = m + n;
    while j > 0 {
        if i > 0 && nums1[i - 1] > nums2[j - 1] {
            nums1[k - 1] = nums1[i - 1];
            i -= 1;
        } else {
            nums1[k - 1] = nums2[j - 1];
            j -= 1;
        }
        k -= 1;
    }
}";

pub struct MergeSorted;

impl Algorithm for MergeSorted {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::MergeSorted
    }

    fn name(&self) -> &'static str {
        "Merge Sorted Arrays"
    }

    fn summary(&self) -> &'static str {
        "Merge a second sorted array into the spare tail of the first, back to front"
    }

    fn source(&self) -> &'static str {
        SOURCE
    }

    fn cases(&self) -> Vec<TestCase> {
        vec![
            merge_case("interleaved", &[1, 2, 3, 0, 0, 0], 3, &[2, 5, 6]),
            merge_case("second-runs-out-first", &[7, 8, 9, 0, 0, 0], 3, &[1, 2, 3]),
            merge_case("first-empty", &[0, 0], 0, &[4, 5]),
            merge_case("second-empty", &[1, 2, 3], 3, &[]),
        ]
    }

    fn record(&self, case: &TestCase) -> Result<Trace, RecordError> {
        let id = self.id();
        let mut nums1 = case
            .int_array_arg("nums1")
            .ok_or_else(|| RecordError::invalid_input(id, "expected integer array \"nums1\""))?;
        let nums2 = case
            .int_array_arg("nums2")
            .ok_or_else(|| RecordError::invalid_input(id, "expected integer array \"nums2\""))?;
        let m = case
            .int_arg("m")
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| RecordError::invalid_input(id, "expected non-negative integer \"m\""))?;
        let n = case
            .int_arg("n")
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| RecordError::invalid_input(id, "expected non-negative integer \"n\""))?;
        if nums1.len() != m + n {
            return Err(RecordError::invalid_input(id, "nums1 must have length m + n"));
        }
        if nums2.len() != n {
            return Err(RecordError::invalid_input(id, "nums2 must have length n"));
        }

        let mut t = TraceBuilder::new();
        let mut i = m;
        let mut j = n;
        let mut k = m + n;

        t.step(4, format!("fill nums1 from the back, starting at index {}", k.max(1) - 1))
            .insight("writing into the spare tail never clobbers a value that is still unread")
            .phase("init")
            .var("nums1", json!(nums1))
            .var("nums2", json!(nums2))
            .var("i", json!(i))
            .var("j", json!(j))
            .var("k", json!(k));

        while j > 0 {
            let take_first = i > 0 && nums1[i - 1] > nums2[j - 1];
            if i > 0 {
                t.step(6, format!("compare nums1[{}] = {} with nums2[{}] = {}",
                    i - 1, nums1[i - 1], j - 1, nums2[j - 1]))
                    .phase("compare")
                    .var("candidate1", json!(nums1[i - 1]))
                    .var("candidate2", json!(nums2[j - 1]));
            } else {
                t.step(6, "nums1's own values are exhausted, take from nums2")
                    .phase("compare")
                    .var("candidate2", json!(nums2[j - 1]));
            }

            if take_first {
                nums1[k - 1] = nums1[i - 1];
                i -= 1;
                k -= 1;
                t.step(7, format!("place {} at index {k}", nums1[k]))
                    .phase("place")
                    .var("nums1", json!(nums1))
                    .var("i", json!(i))
                    .var("j", json!(j))
                    .var("k", json!(k))
                    .highlight([k]);
            } else {
                nums1[k - 1] = nums2[j - 1];
                j -= 1;
                k -= 1;
                t.step(10, format!("place {} at index {k}", nums1[k]))
                    .phase("place")
                    .var("nums1", json!(nums1))
                    .var("i", json!(i))
                    .var("j", json!(j))
                    .var("k", json!(k))
                    .highlight([k]);
            }
        }

        t.step(15, "nums2 is exhausted, nums1 holds the merged result")
            .insight("whatever remains of nums1's prefix is already sorted and in place")
            .phase("done")
            .var("nums1", json!(nums1));
        t.finish().map_err(Into::into)
    }
}

fn merge_case(name: &str, nums1: &[i64], m: usize, nums2: &[i64]) -> TestCase {
    let mut args = BTreeMap::new();
    args.insert("nums1".to_string(), json!(nums1));
    args.insert("m".to_string(), json!(m));
    args.insert("nums2".to_string(), json!(nums2));
    args.insert("n".to_string(), json!(nums2.len()));
    TestCase::args(name, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Trace {
        let algo = MergeSorted;
        let case = algo
            .cases()
            .into_iter()
            .find(|c| c.name == name)
            .expect("built-in case");
        algo.record(&case).unwrap()
    }

    #[test]
    fn interleaved_merge_produces_the_expected_array() {
        let trace = record("interleaved");
        assert_eq!(
            trace.last().var("nums1"),
            Some(&json!([1, 2, 2, 3, 5, 6]))
        );
        assert_eq!(trace.last().phase.as_deref(), Some("done"));
    }

    #[test]
    fn empty_second_array_is_a_narrated_no_op() {
        let trace = record("second-empty");
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().var("nums1"), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn exhausted_first_array_drains_the_second() {
        let trace = record("first-empty");
        assert_eq!(trace.last().var("nums1"), Some(&json!([4, 5])));
        assert!(trace
            .steps()
            .iter()
            .any(|s| s.description.contains("exhausted")));
    }

    #[test]
    fn write_index_walks_strictly_backwards() {
        let trace = record("interleaved");
        let ks: Vec<u64> = trace
            .steps()
            .iter()
            .filter(|s| s.phase.as_deref() == Some("place"))
            .map(|s| s.var("k").and_then(|v| v.as_u64()).unwrap())
            .collect();
        assert!(!ks.is_empty());
        assert!(ks.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn rejects_inconsistent_lengths() {
        let case = merge_case("bad", &[1, 0, 0], 1, &[2]);
        let err = MergeSorted.record(&case).unwrap_err();
        assert!(matches!(err, RecordError::InvalidInput { .. }));
    }
}
