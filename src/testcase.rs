//! Named input configurations for the recorder.
//!
//! A `TestCase` bundles everything one recording run needs: a name, the
//! input values (or an operation list for stateful structures), and an
//! optional RNG seed. Algorithms that draw random values read the seed
//! through [`TestCase::effective_seed`], so a case without an explicit
//! seed still records deterministically.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seed used when a case does not pin one.
pub const DEFAULT_SEED: u64 = 42;

/// A named input configuration for one recording run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Case name, unique within one algorithm's built-in set.
    pub name: String,
    pub input: CaseInput,
    /// Seed for algorithms that draw random values. Absent means
    /// [`DEFAULT_SEED`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Input shape of a test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseInput {
    /// Literal argument values keyed by parameter name.
    Args(BTreeMap<String, Value>),
    /// An ordered operation list, for algorithms that model a stateful
    /// structure rather than a single function call.
    Ops(Vec<Operation>),
}

/// One operation in a [`CaseInput::Ops`] list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
}

impl Operation {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl TestCase {
    /// Case built from literal arguments.
    pub fn args(name: impl Into<String>, args: BTreeMap<String, Value>) -> Self {
        Self {
            name: name.into(),
            input: CaseInput::Args(args),
            seed: None,
        }
    }

    /// Case built from an operation list.
    pub fn ops(name: impl Into<String>, ops: Vec<Operation>) -> Self {
        Self {
            name: name.into(),
            input: CaseInput::Ops(ops),
            seed: None,
        }
    }

    /// Pin the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The seed recording actually uses.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Look up a literal argument by name. `None` for operation-list
    /// cases or missing keys.
    pub fn arg(&self, name: &str) -> Option<&Value> {
        match &self.input {
            CaseInput::Args(args) => args.get(name),
            CaseInput::Ops(_) => None,
        }
    }

    /// The operation list, if this case has one.
    pub fn operations(&self) -> Option<&[Operation]> {
        match &self.input {
            CaseInput::Args(_) => None,
            CaseInput::Ops(ops) => Some(ops),
        }
    }

    /// Integer argument, accepting any JSON number that fits in i64.
    pub fn int_arg(&self, name: &str) -> Option<i64> {
        self.arg(name).and_then(Value::as_i64)
    }

    /// Integer-array argument.
    pub fn int_array_arg(&self, name: &str) -> Option<Vec<i64>> {
        let values = self.arg(name)?.as_array()?;
        values.iter().map(Value::as_i64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args_case() -> TestCase {
        let mut args = BTreeMap::new();
        args.insert("array".to_string(), json!([3, 1, 2]));
        args.insert("target".to_string(), json!(2));
        TestCase::args("small", args)
    }

    #[test]
    fn effective_seed_falls_back_to_default() {
        let case = args_case();
        assert_eq!(case.effective_seed(), DEFAULT_SEED);
        assert_eq!(case.with_seed(7).effective_seed(), 7);
    }

    #[test]
    fn arg_lookup() {
        let case = args_case();
        assert_eq!(case.int_arg("target"), Some(2));
        assert_eq!(case.int_array_arg("array"), Some(vec![3, 1, 2]));
        assert_eq!(case.arg("missing"), None);
        assert_eq!(case.operations(), None);
    }

    #[test]
    fn int_array_rejects_mixed_values() {
        let mut args = BTreeMap::new();
        args.insert("array".to_string(), json!([1, "two", 3]));
        let case = TestCase::args("mixed", args);
        assert_eq!(case.int_array_arg("array"), None);
    }

    #[test]
    fn ops_case_exposes_operations() {
        let case = TestCase::ops(
            "puts",
            vec![
                Operation::new("put", vec![json!(1), json!(10)]),
                Operation::new("get", vec![json!(1)]),
            ],
        );
        let ops = case.operations().unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].name, "put");
        assert_eq!(ops[1].args, vec![json!(1)]);
        assert_eq!(case.arg("anything"), None);
    }

    #[test]
    fn serde_roundtrip_both_shapes() {
        let literal = args_case().with_seed(9);
        let json_text = serde_json::to_string(&literal).unwrap();
        let back: TestCase = serde_json::from_str(&json_text).unwrap();
        assert_eq!(back, literal);

        let ops = TestCase::ops("ops", vec![Operation::new("get", vec![json!(5)])]);
        let json_text = serde_json::to_string(&ops).unwrap();
        let back: TestCase = serde_json::from_str(&json_text).unwrap();
        assert_eq!(back, ops);
    }
}
