//! The player state machine.
//!
//! A `Player` owns a cursor over one bound trace plus the play/pause,
//! speed, and tick-scheduling state. It never renders anything and never
//! reads a wall clock on its own: mutators that arm a tick take the
//! current instant from the caller, which is what makes the autoplay
//! behavior testable against a simulated clock.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::player::autoplay::{TickFire, TickToken};
use crate::recorder::{AlgorithmId, RecordError, Recorder};
use crate::testcase::TestCase;
use crate::trace::{Step, Trace};

/// Coarse player state, derived from the bound trace and play flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No trace bound.
    Idle,
    Paused,
    Playing,
}

/// Cursor and playback controller over one bound trace.
///
/// Invariants kept by every mutator: the index stays in
/// `[0, len - 1]`, `Playing` implies a bound trace with the cursor
/// before the last step, and at most one tick is armed.
#[derive(Debug)]
pub struct Player {
    trace: Option<Trace>,
    index: usize,
    playing: bool,
    speed_ms: u64,
    armed: Option<TickToken>,
    generation: u64,
}

impl Player {
    /// Fastest allowed autoplay interval.
    pub const MIN_SPEED_MS: u64 = 25;
    /// Slowest allowed autoplay interval.
    pub const MAX_SPEED_MS: u64 = 30_000;
    /// Interval used until the caller picks one.
    pub const DEFAULT_SPEED_MS: u64 = 600;

    pub fn new() -> Self {
        Self {
            trace: None,
            index: 0,
            playing: false,
            speed_ms: Self::DEFAULT_SPEED_MS,
            armed: None,
            generation: 0,
        }
    }

    // === Binding ===

    /// Bind a trace, replacing any previous one: index 0, paused, and
    /// any outstanding tick cancelled.
    pub fn bind(&mut self, trace: Trace) {
        self.armed = None;
        self.playing = false;
        self.index = 0;
        debug!(steps = trace.len(), "bound trace");
        self.trace = Some(trace);
    }

    /// Re-record through the [`Recorder`] and bind the result.
    ///
    /// On error the previously bound trace and the playback state are
    /// left untouched.
    pub fn select_case(&mut self, id: AlgorithmId, case: &TestCase) -> Result<(), RecordError> {
        let trace = Recorder::record(id, case)?;
        self.bind(trace);
        Ok(())
    }

    // === Transport ===

    /// `Paused` → `Playing`, arming a tick at `now + speed`. No-op when
    /// idle, already playing, or already at the last step.
    pub fn play(&mut self, now: Instant) {
        if self.state() != PlayerState::Paused || self.at_last_step() {
            return;
        }
        self.playing = true;
        self.arm_at(now + Duration::from_millis(self.speed_ms));
        debug!(index = self.index, speed_ms = self.speed_ms, "playing");
    }

    /// `Playing` → `Paused`, index unchanged, tick cancelled.
    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.armed = None;
            debug!(index = self.index, "paused");
        }
    }

    /// Toggle between playing and paused.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Back to the first step, paused. No-op when idle.
    pub fn reset(&mut self) {
        if self.trace.is_some() {
            self.armed = None;
            self.playing = false;
            self.index = 0;
        }
    }

    // === Navigation ===

    /// Advance one step, clamped at the end.
    pub fn next(&mut self) {
        self.move_to(self.index.saturating_add(1));
    }

    /// Go back one step, clamped at the start.
    pub fn previous(&mut self) {
        self.move_to(self.index.saturating_sub(1));
    }

    /// Jump to an arbitrary index, clamped to the valid range.
    pub fn goto(&mut self, index: usize) {
        self.move_to(index);
    }

    fn move_to(&mut self, target: usize) {
        let Some(trace) = &self.trace else { return };
        self.index = target.min(trace.last_index());
        if self.playing && self.at_last_step() {
            self.playing = false;
            self.armed = None;
            debug!("reached the last step, pausing");
        }
    }

    // === Speed ===

    /// Change the autoplay interval, clamped to
    /// `[MIN_SPEED_MS, MAX_SPEED_MS]`. While playing, the outstanding
    /// tick is replaced by one with the new interval measured from the
    /// same arming instant, so the elapsed fraction is kept.
    pub fn set_speed(&mut self, speed_ms: u64) {
        let new_ms = speed_ms.clamp(Self::MIN_SPEED_MS, Self::MAX_SPEED_MS);
        let old_ms = self.speed_ms;
        self.speed_ms = new_ms;
        if let Some(token) = self.armed {
            let due = if new_ms >= old_ms {
                token.due + Duration::from_millis(new_ms - old_ms)
            } else {
                token.due - Duration::from_millis(old_ms - new_ms)
            };
            self.arm_at(due);
        }
    }

    /// Halve the interval (faster playback).
    pub fn speed_up(&mut self) {
        self.set_speed(self.speed_ms / 2);
    }

    /// Double the interval (slower playback).
    pub fn slow_down(&mut self) {
        self.set_speed(self.speed_ms.saturating_mul(2));
    }

    // === Ticking ===

    /// The currently armed tick, if any.
    pub fn scheduled_tick(&self) -> Option<TickToken> {
        self.armed
    }

    /// Fire one captured token against the current schedule.
    pub fn fire_tick(&mut self, token: TickToken, now: Instant) -> TickFire {
        let Some(armed) = self.armed else {
            debug!(generation = token.generation, "dropping tick, nothing armed");
            return TickFire::Stale;
        };
        if armed.generation != token.generation {
            debug!(
                fired = token.generation,
                armed = armed.generation,
                "dropping stale tick"
            );
            return TickFire::Stale;
        }
        if now < armed.due {
            return TickFire::Early;
        }
        let Some(trace) = &self.trace else {
            self.armed = None;
            return TickFire::Stale;
        };

        self.index = (self.index + 1).min(trace.last_index());
        if self.at_last_step() {
            self.playing = false;
            self.armed = None;
            debug!(index = self.index, "autoplay finished");
            TickFire::Finished
        } else {
            // Re-arm from the old deadline, not from `now`, so k elapsed
            // intervals produce exactly k advances.
            self.arm_at(armed.due + Duration::from_millis(self.speed_ms));
            TickFire::Advanced
        }
    }

    /// Fire every tick that is due by `now`. Returns how many steps the
    /// index advanced.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut advanced = 0;
        while let Some(token) = self.armed {
            match self.fire_tick(token, now) {
                TickFire::Advanced => advanced += 1,
                TickFire::Finished => {
                    advanced += 1;
                    break;
                }
                TickFire::Stale | TickFire::Early => break,
            }
        }
        advanced
    }

    fn arm_at(&mut self, due: Instant) {
        self.generation += 1;
        self.armed = Some(TickToken {
            due,
            generation: self.generation,
        });
    }

    // === Observers ===

    pub fn state(&self) -> PlayerState {
        match (&self.trace, self.playing) {
            (None, _) => PlayerState::Idle,
            (Some(_), false) => PlayerState::Paused,
            (Some(_), true) => PlayerState::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The step under the cursor, `None` when idle.
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.as_ref().and_then(|t| t.get(self.index))
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Steps in the bound trace, 0 when idle.
    pub fn total_steps(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// The bound trace, for consumers that show context around the
    /// current step.
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    fn at_last_step(&self) -> bool {
        match &self.trace {
            Some(trace) => self.index == trace.last_index(),
            None => false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
