//! Playback control over recorded traces.
//!
//! The player is a pure state machine: it owns a cursor over a bound
//! [`Trace`](crate::trace::Trace), the play/pause and speed state, and
//! at most one armed autoplay tick. Rendering and the real clock live
//! with the driver, which feeds instants in and fires tick tokens back.
//!
//! # Module structure
//!
//! - [`state`]: the `Player` state machine itself
//! - [`autoplay`]: tick token and fire-outcome types
//! - [`input`]: key-to-action mapping and action dispatch
//! - [`phases`]: phase-run collection and navigation

pub mod autoplay;
pub mod input;
pub mod phases;
pub mod state;

pub use autoplay::{TickFire, TickToken};
pub use input::{apply, map_key, PlayerAction};
pub use phases::{collect_phases, next_phase_index, prev_phase_index, PhaseBoundary};
pub use state::{Player, PlayerState};
