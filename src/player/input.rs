//! Keyboard dispatch for the interactive driver.
//!
//! Key handling is split in two: [`map_key`] turns a crossterm key
//! event into a [`PlayerAction`], and [`apply`] maps each action onto
//! exactly one player method. Everything between the two is data, so
//! the bindings and the effects are testable without a terminal.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::phases::{next_phase_index, prev_phase_index, PhaseBoundary};
use crate::player::state::Player;

/// A discrete user action, decoupled from the keys that trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    StepForward,
    StepBack,
    TogglePlay,
    JumpToStart,
    JumpToEnd,
    NextPhase,
    PrevPhase,
    SpeedUp,
    SlowDown,
    Quit,
}

/// Translate a key event into an action, if the key is bound.
pub fn map_key(key: KeyEvent) -> Option<PlayerAction> {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => Some(PlayerAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PlayerAction::Quit)
        }

        // === Transport ===
        KeyCode::Char(' ') => Some(PlayerAction::TogglePlay),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(PlayerAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(PlayerAction::SlowDown),

        // === Stepping ===
        KeyCode::Right | KeyCode::Char('l') => Some(PlayerAction::StepForward),
        KeyCode::Left | KeyCode::Char('h') => Some(PlayerAction::StepBack),

        // === Jumps ===
        KeyCode::Home | KeyCode::Char('g') => Some(PlayerAction::JumpToStart),
        KeyCode::End | KeyCode::Char('G') => Some(PlayerAction::JumpToEnd),

        // === Phase navigation ===
        KeyCode::Char(']') => Some(PlayerAction::NextPhase),
        KeyCode::Char('[') => Some(PlayerAction::PrevPhase),

        _ => None,
    }
}

/// Apply one action to the player.
///
/// Returns `false` when the driver should exit.
pub fn apply(
    action: PlayerAction,
    player: &mut Player,
    phases: &[PhaseBoundary],
    now: Instant,
) -> bool {
    match action {
        PlayerAction::StepForward => player.next(),
        PlayerAction::StepBack => player.previous(),
        PlayerAction::TogglePlay => player.toggle_play(now),
        PlayerAction::JumpToStart => player.goto(0),
        PlayerAction::JumpToEnd => {
            let last = player.total_steps().saturating_sub(1);
            player.goto(last);
        }
        PlayerAction::NextPhase => {
            if let Some(index) = next_phase_index(phases, player.current_index()) {
                player.goto(index);
            }
        }
        PlayerAction::PrevPhase => {
            if let Some(index) = prev_phase_index(phases, player.current_index()) {
                player.goto(index);
            }
        }
        PlayerAction::SpeedUp => player.speed_up(),
        PlayerAction::SlowDown => player.slow_down(),
        PlayerAction::Quit => return false,
    }
    true
}
