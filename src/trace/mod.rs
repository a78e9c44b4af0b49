//! Trace and snapshot model for recorded algorithm executions.
//!
//! A [`Trace`] is the ordered, immutable sequence of [`Step`] snapshots
//! produced by recording one algorithm against one test case. Each step
//! captures a source position, narration, and the full variable state at
//! that instant - by value, so later simulation never changes an emitted
//! step.
//!
//! Validation happens once, at construction: [`Trace::new`] is the only
//! way to obtain a `Trace`, and it rejects empty sequences and steps that
//! are missing the fields a player needs. Everything downstream (player,
//! file writer, CLI) can therefore rely on the invariants without
//! re-checking them.

mod file;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use file::{TraceFile, TraceHeader, FORMAT_VERSION};

/// Validation errors raised at the trace boundary.
///
/// A trace that fails validation never becomes a [`Trace`], so a player
/// can never be bound to a malformed step sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    /// The step sequence is empty. Every recording, including one that
    /// narrates a no-op outcome, must produce at least one step.
    #[error("trace contains no steps")]
    Empty,
    /// A step has an empty description.
    #[error("step {index}: description is empty")]
    EmptyDescription { index: usize },
    /// A step has line number 0; listings are 1-based.
    #[error("step {index}: line number must be 1 or greater")]
    LineNumberZero { index: usize },
    /// A trace file declares a format version this build cannot read.
    #[error("only trace format version {} is supported (got version {version})", FORMAT_VERSION)]
    UnsupportedVersion { version: u8 },
}

/// One point-in-time snapshot of an algorithm execution.
///
/// `variables` maps stable semantic names ("nums1", "lo", "cache") to
/// plain JSON values - primitives, arrays, or nested objects, never
/// references into live state. A `BTreeMap` keeps key order stable so
/// serializing the same trace twice yields identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based line in the algorithm's reference listing.
    pub line_number: u32,
    /// Short narration of the transition.
    pub description: String,
    /// Longer rationale; may be empty on imported traces.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub insight: String,
    /// Short categorical tag ("init", "compare", "evict") used for
    /// grouping by consumers; carries no control-flow meaning here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Named variable state at this instant, by value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, Value>,
    /// Indices highlighted in the primary structure, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<usize>,
}

impl Step {
    /// Create a step with the required fields.
    pub fn new(line_number: u32, description: impl Into<String>) -> Self {
        Self {
            line_number,
            description: description.into(),
            insight: String::new(),
            phase: None,
            variables: BTreeMap::new(),
            highlights: Vec::new(),
        }
    }

    /// Attach the longer rationale.
    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = insight.into();
        self
    }

    /// Attach a phase tag.
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Record a named variable value.
    ///
    /// The value is stored as given; callers snapshot live state by
    /// building a fresh `Value` (e.g. via `serde_json::json!`) at the
    /// call site, which is what guarantees snapshot isolation.
    pub fn with_var(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Record highlighted indices.
    pub fn with_highlights(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlights = indices.into_iter().collect();
        self
    }

    /// Look up a recorded variable by name.
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}

/// The ordered sequence of steps for one (algorithm, input) pair.
///
/// Never empty, and immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Validate a step sequence and seal it into a trace.
    pub fn new(steps: Vec<Step>) -> Result<Self, TraceError> {
        validate_steps(&steps)?;
        Ok(Self { steps })
    }

    /// Number of steps. Always at least 1.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; present for completeness of the collection surface.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Step at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The initial snapshot.
    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    /// The final snapshot.
    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// All steps, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

fn validate_steps(steps: &[Step]) -> Result<(), TraceError> {
    if steps.is_empty() {
        return Err(TraceError::Empty);
    }
    for (index, step) in steps.iter().enumerate() {
        if step.description.trim().is_empty() {
            return Err(TraceError::EmptyDescription { index });
        }
        if step.line_number == 0 {
            return Err(TraceError::LineNumberZero { index });
        }
    }
    Ok(())
}
