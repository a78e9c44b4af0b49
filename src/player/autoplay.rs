//! Tick scheduling types for autoplay.
//!
//! While the player is `Playing`, exactly one tick is armed. The driver
//! receives that schedule as a [`TickToken`] copy and fires it back into
//! the player when the deadline passes. At fire time the token's
//! generation is compared against the currently armed schedule, so a
//! token that outlived a rebind, pause, or speed change is dropped
//! instead of advancing a trace it no longer owns. Comparing generations
//! rather than checking a cancelled handle matters because the driver
//! may capture a token, block on input, and only then fire it.

use std::time::Instant;

/// Handle to the currently armed autoplay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    /// When the tick is due.
    pub due: Instant,
    /// Arming generation, fresh on every (re)arm.
    pub generation: u64,
}

/// Outcome of firing a tick token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFire {
    /// The index advanced by one and the follow-up tick is armed.
    Advanced,
    /// The index advanced onto the last step and playback auto-paused.
    Finished,
    /// The token no longer matches the armed schedule. No-op.
    Stale,
    /// The token matches but its deadline has not passed yet. No-op.
    Early,
}
