//! Trace recording for the built-in reference algorithms.
//!
//! A recording run is pure and synchronous: the recorder executes the
//! algorithm against a [`TestCase`], emits one [`Step`] per semantically
//! meaningful transition (initialization, comparison, branch, mutation,
//! loop boundary, return), and blocks until the whole [`Trace`] exists.
//! No renderer, clock, or I/O is involved, so recording the same
//! (algorithm, input, seed) twice yields byte-identical traces.
//!
//! [`Step`]: crate::trace::Step

pub mod algorithms;
mod builder;

pub use builder::{StepBuilder, TraceBuilder};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::testcase::TestCase;
use crate::trace::{Trace, TraceError};

/// Identifier for a built-in algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    BinarySearch,
    BubbleSort,
    MergeSorted,
    TwoSum,
    LruCache,
    Quickselect,
}

impl AlgorithmId {
    /// Every built-in algorithm, in catalog order.
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::BinarySearch,
        AlgorithmId::BubbleSort,
        AlgorithmId::MergeSorted,
        AlgorithmId::TwoSum,
        AlgorithmId::LruCache,
        AlgorithmId::Quickselect,
    ];

    /// Stable kebab-case code used on the CLI and in trace file headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::MergeSorted => "merge-sorted",
            AlgorithmId::TwoSum => "two-sum",
            AlgorithmId::LruCache => "lru-cache",
            AlgorithmId::Quickselect => "quickselect",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RecordError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// A reference algorithm the recorder knows how to narrate.
///
/// Implementations are stateless; all input comes from the `TestCase`.
pub trait Algorithm {
    fn id(&self) -> AlgorithmId;

    /// Human-readable display name.
    fn name(&self) -> &'static str;

    /// One-line description for the catalog listing.
    fn summary(&self) -> &'static str;

    /// Reference listing the trace narrates. `Step::line_number` is a
    /// 1-based index into these lines.
    fn source(&self) -> &'static str;

    /// Built-in cases. Never empty; the first entry is the default.
    fn cases(&self) -> Vec<TestCase>;

    /// Execute the algorithm against `case`, emitting a step for every
    /// meaningful transition.
    fn record(&self, case: &TestCase) -> Result<Trace, RecordError>;
}

/// Look up the implementation for an algorithm id.
pub fn algorithm(id: AlgorithmId) -> Box<dyn Algorithm> {
    match id {
        AlgorithmId::BinarySearch => Box::new(algorithms::BinarySearch),
        AlgorithmId::BubbleSort => Box::new(algorithms::BubbleSort),
        AlgorithmId::MergeSorted => Box::new(algorithms::MergeSorted),
        AlgorithmId::TwoSum => Box::new(algorithms::TwoSum),
        AlgorithmId::LruCache => Box::new(algorithms::LruCache),
        AlgorithmId::Quickselect => Box::new(algorithms::Quickselect),
    }
}

/// Recording failures surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown algorithm {name:?} (expected one of: binary-search, bubble-sort, merge-sorted, two-sum, lru-cache, quickselect)")]
    UnknownAlgorithm { name: String },
    #[error("{algorithm} has no built-in case named {name:?}")]
    UnknownCase {
        algorithm: AlgorithmId,
        name: String,
    },
    #[error("invalid input for {algorithm}: {reason}")]
    InvalidInput {
        algorithm: AlgorithmId,
        reason: String,
    },
    /// A recording produced an invalid step sequence. Indicates a defect
    /// in the algorithm module itself, not in user input.
    #[error(transparent)]
    Trace(#[from] TraceError),
}

impl RecordError {
    pub(crate) fn invalid_input(algorithm: AlgorithmId, reason: impl Into<String>) -> Self {
        RecordError::InvalidInput {
            algorithm,
            reason: reason.into(),
        }
    }
}

/// Entry point for producing traces.
pub struct Recorder;

impl Recorder {
    /// Record `case` with the given algorithm.
    pub fn record(id: AlgorithmId, case: &TestCase) -> Result<Trace, RecordError> {
        let algo = algorithm(id);
        let trace = algo.record(case)?;
        debug!(
            algorithm = %id,
            case = %case.name,
            steps = trace.len(),
            "recorded trace"
        );
        Ok(trace)
    }

    /// Record a built-in case by name.
    pub fn record_case(id: AlgorithmId, case_name: &str) -> Result<Trace, RecordError> {
        let case = Self::find_case(id, case_name)?;
        Self::record(id, &case)
    }

    /// Look up a built-in case by name.
    pub fn find_case(id: AlgorithmId, case_name: &str) -> Result<TestCase, RecordError> {
        algorithm(id)
            .cases()
            .into_iter()
            .find(|c| c.name == case_name)
            .ok_or_else(|| RecordError::UnknownCase {
                algorithm: id,
                name: case_name.to_string(),
            })
    }

    /// The default case for an algorithm (the first built-in one).
    pub fn default_case(id: AlgorithmId) -> TestCase {
        let mut cases = algorithm(id).cases();
        cases.remove(0)
    }
}
