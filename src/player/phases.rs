//! Phase collection and navigation.
//!
//! Phase tags are the trace counterpart of markers in a screen
//! recording: coarse waypoints for jumping over stretches of detail.
//! Consecutive steps with the same tag form a run; untagged steps
//! continue whatever run they are in. Navigation moves between the
//! first steps of runs.

use crate::trace::Trace;

/// Start of a phase run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseBoundary {
    /// Index of the run's first step.
    pub index: usize,
    /// The phase tag.
    pub label: String,
}

/// Collect the phase boundaries of a trace in step order.
pub fn collect_phases(trace: &Trace) -> Vec<PhaseBoundary> {
    let mut phases = Vec::new();
    let mut current: Option<&str> = None;

    for (index, step) in trace.steps().iter().enumerate() {
        if let Some(tag) = step.phase.as_deref() {
            if current != Some(tag) {
                phases.push(PhaseBoundary {
                    index,
                    label: tag.to_string(),
                });
                current = Some(tag);
            }
        }
    }

    phases
}

/// First step of the next phase run strictly after `from`.
pub fn next_phase_index(phases: &[PhaseBoundary], from: usize) -> Option<usize> {
    phases.iter().map(|p| p.index).find(|&index| index > from)
}

/// Start of the phase run strictly before `from`: the current run's
/// first step when `from` is inside a run, the previous run's when
/// `from` sits exactly on a boundary.
pub fn prev_phase_index(phases: &[PhaseBoundary], from: usize) -> Option<usize> {
    phases
        .iter()
        .rev()
        .map(|p| p.index)
        .find(|&index| index < from)
}
