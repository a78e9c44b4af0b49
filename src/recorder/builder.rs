//! Step-emission ergonomics shared by all algorithm recordings.

use serde_json::Value;

use crate::trace::{Step, Trace, TraceError};

/// Accumulates steps during a recording run and validates the result.
///
/// Values passed to [`StepBuilder::var`] are plain `serde_json::Value`s
/// built at the call site, so every snapshot is a value copy of the
/// working state at emit time. Mutating the working state afterwards
/// cannot reach into an emitted step.
#[derive(Debug, Default)]
pub struct TraceBuilder {
    steps: Vec<Step>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a step for the given listing line. Returns a builder for
    /// attaching insight, phase, and variable snapshots.
    pub fn step(&mut self, line_number: u32, description: impl Into<String>) -> StepBuilder<'_> {
        self.steps.push(Step::new(line_number, description));
        let last = self.steps.len() - 1;
        StepBuilder {
            step: &mut self.steps[last],
        }
    }

    /// Number of steps emitted so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validate the accumulated steps into a [`Trace`].
    pub fn finish(self) -> Result<Trace, TraceError> {
        Trace::new(self.steps)
    }
}

/// Chained configuration for the step just emitted.
pub struct StepBuilder<'a> {
    step: &'a mut Step,
}

impl StepBuilder<'_> {
    /// Attach a teaching note explaining what this step reveals.
    pub fn insight(self, text: impl Into<String>) -> Self {
        self.step.insight = text.into();
        self
    }

    /// Tag the step with a phase label.
    pub fn phase(self, tag: impl Into<String>) -> Self {
        self.step.phase = Some(tag.into());
        self
    }

    /// Snapshot one named variable.
    pub fn var(self, name: impl Into<String>, value: Value) -> Self {
        self.step.variables.insert(name.into(), value);
        self
    }

    /// Emphasize indices in the step's primary structure, for example
    /// the pair an adjacent-swap pass is currently comparing.
    pub fn highlight(self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.step.highlights.extend(indices);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_steps_in_emission_order() {
        let mut builder = TraceBuilder::new();
        builder
            .step(2, "initialize")
            .phase("init")
            .var("total", json!(0));
        builder
            .step(4, "accumulate")
            .var("total", json!(3))
            .insight("running total grows by each element");

        let trace = builder.finish().unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().phase.as_deref(), Some("init"));
        assert_eq!(trace.get(1).unwrap().var("total"), Some(&json!(3)));
    }

    #[test]
    fn empty_builder_fails_validation() {
        let err = TraceBuilder::new().finish().unwrap_err();
        assert_eq!(err, TraceError::Empty);
    }

    #[test]
    fn highlights_accumulate() {
        let mut builder = TraceBuilder::new();
        builder.step(5, "swap").highlight([6, 7]).highlight([8]);
        let trace = builder.finish().unwrap();
        assert_eq!(trace.first().highlights, vec![6, 7, 8]);
    }

    #[test]
    fn snapshots_are_value_copies() {
        let mut working = vec![1, 2, 3];
        let mut builder = TraceBuilder::new();
        builder.step(1, "before").var("array", json!(working));
        working[0] = 99;
        builder.step(2, "after").var("array", json!(working));

        let trace = builder.finish().unwrap();
        assert_eq!(trace.get(0).unwrap().var("array"), Some(&json!([1, 2, 3])));
        assert_eq!(trace.get(1).unwrap().var("array"), Some(&json!([99, 2, 3])));
    }
}
