//! `stepscope play` subcommand handler.
//!
//! A minimal terminal driver: raw mode, one printed line per step, and a
//! poll loop that wakes exactly when the next autoplay tick is due.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use stepscope::cli::PlayArgs;
use stepscope::player::{apply, collect_phases, map_key, PhaseBoundary, Player};
use stepscope::recorder::AlgorithmId;
use stepscope::trace::{Trace, TraceFile};
use stepscope::{Config, Recorder};

use super::render;

/// Poll interval while no tick is armed, so quit keys stay responsive.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub fn handle(args: PlayArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("play needs an interactive terminal; use `stepscope trace` for plain output");
    }

    let (title, trace) = load_trace(&args)?;
    let config = Config::load()?;

    let mut player = Player::new();
    player.bind(trace);
    player.set_speed(args.speed.unwrap_or_else(|| config.effective_speed_ms()));

    run_session(&title, &mut player, &config)
}

/// Resolve the trace to play: a recorded file or a fresh recording.
fn load_trace(args: &PlayArgs) -> Result<(String, Trace)> {
    if let Some(path) = &args.file {
        let file = TraceFile::parse(path)
            .with_context(|| format!("{} is not a playable trace file", path.display()))?;
        let title = match &file.header.case {
            Some(case) => format!("{} / {case}", file.header.algorithm),
            None => file.header.algorithm.clone(),
        };
        return Ok((title, file.trace));
    }

    let Some(algorithm) = &args.algorithm else {
        bail!("pass an algorithm to play, or --file for a recorded trace");
    };
    let id: AlgorithmId = algorithm.parse()?;
    let case = super::resolve_case(id, args.case.as_deref(), args.input.as_deref(), args.seed)?;
    let trace = Recorder::record(id, &case)?;
    Ok((format!("{id} / {}", case.name), trace))
}

#[cfg(not(tarpaulin_include))]
fn run_session(title: &str, player: &mut Player, config: &Config) -> Result<()> {
    let phases = player.trace().map(collect_phases).unwrap_or_default();

    enable_raw_mode()?;
    let result = drive(title, player, &phases, config);
    disable_raw_mode()?;
    result
}

#[cfg(not(tarpaulin_include))]
fn drive(
    title: &str,
    player: &mut Player,
    phases: &[PhaseBoundary],
    config: &Config,
) -> Result<()> {
    let mut out = io::stdout();
    write!(
        out,
        "{title}  ({} steps, {}ms)\r\n",
        player.total_steps(),
        player.speed_ms()
    )?;
    write!(
        out,
        "space play/pause  h/l step  g/G ends  [/] phases  +/- speed  q quit\r\n\r\n"
    )?;
    render_current(&mut out, player, config)?;

    loop {
        let timeout = match player.scheduled_tick() {
            Some(token) => token.due.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };

        let before_index = player.current_index();
        let before_state = player.state();

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = map_key(key) {
                        if !apply(action, player, phases, Instant::now()) {
                            break;
                        }
                    }
                }
                _ => {}
            }
        } else {
            player.tick(Instant::now());
        }

        if player.current_index() != before_index || player.state() != before_state {
            render_current(&mut out, player, config)?;
        }
    }

    write!(out, "\r\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn render_current(out: &mut impl Write, player: &Player, config: &Config) -> Result<()> {
    let Some(step) = player.current_step() else {
        return Ok(());
    };
    let marker = if player.is_playing() { ">" } else { " " };
    write!(
        out,
        "{marker} {}\r\n",
        render::step_line(player.current_index(), player.total_steps(), step)
    )?;
    if config.display.show_insights {
        if let Some(insight) = render::insight_line(step) {
            write!(out, "           {insight}\r\n")?;
        }
    }
    if config.display.show_variables {
        if let Some(vars) = render::variables_line(step) {
            write!(out, "           {vars}\r\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
