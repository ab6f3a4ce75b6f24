//! Terminal front-end for the playback engine.
//!
//! Owns the real terminal (raw mode + alternate screen, restored by an
//! RAII guard on every exit path) and runs the timed event loop: sleep
//! until the nearest deadline - engine timer or cursor blink - advance
//! the engine, redraw, handle keys.
//!
//! Keys: `q`/`Esc`/`Ctrl-C` quit, `Space` pauses, `+`/`-` change speed,
//! `r` restarts the pass.
//!
//! Two time bases meet here: the engine runs on the logical clock (so
//! pause and speed work), while the cursor blink runs on wall time, as
//! a terminal cursor would.

pub mod theme;

pub use theme::Theme;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::player::{CursorBlink, PlaybackClock, Player, Snapshot, Timing};
use crate::render::{build_transcript, scroll_offset};
use crate::script::Script;

/// Options for a TUI playback session.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Initial speed multiplier.
    pub speed: f64,
    /// Exit after one pass instead of looping.
    pub once: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            speed: 1.0,
            once: false,
        }
    }
}

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputResult {
    Continue,
    Quit,
}

/// Poll timeout when no deadline is near (keeps input responsive while
/// paused).
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Raw-mode + alternate-screen guard. Dropping it restores the terminal,
/// so errors and early returns can never leave the shell broken.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = crossterm::execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("failed to enter alternate screen");
        }
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to initialize terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Playback status shown in the footer.
struct StatusLine {
    speed: f64,
    paused: bool,
}

/// Play a script in the terminal until the user quits (or, with
/// `options.once`, until the first pass completes).
#[cfg(not(tarpaulin_include))]
pub fn run(script: Script, timing: Timing, theme: Theme, options: &TuiOptions) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;

    let started = Instant::now();
    let blink_period = timing.cursor_blink();
    let mut player = Player::new(script, timing);
    let mut blink = CursorBlink::new(blink_period);
    let mut clock = PlaybackClock::new(started, options.speed);

    loop {
        let wall = Instant::now();
        player.run_until(clock.now(wall));
        blink.advance_to(wall.duration_since(started));

        let snapshot = player.snapshot(blink.visible());
        let status = StatusLine {
            speed: clock.speed(),
            paused: clock.paused(),
        };
        guard
            .terminal
            .draw(|frame| draw(frame, &snapshot, &theme, &status))?;

        if options.once && player.pass_finished() {
            debug!("single pass complete");
            return Ok(());
        }

        let timeout = next_timeout(&player, &blink, &clock, wall, started);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key(key, &mut clock, &mut player, Instant::now())
                        == InputResult::Quit
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Render one frame: transcript viewport pinned to the bottom, one-line
/// footer with key hints and playback status.
fn draw(frame: &mut Frame, snapshot: &Snapshot<'_>, theme: &Theme, status: &StatusLine) {
    let [viewport, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let lines = build_transcript(snapshot, theme, viewport.width as usize);
    let offset = scroll_offset(lines.len(), viewport.height as usize);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), viewport);

    frame.render_widget(footer_line(status, theme), footer);
}

fn footer_line(status: &StatusLine, theme: &Theme) -> Paragraph<'static> {
    let state = if status.paused {
        "  [paused]".to_string()
    } else {
        format!("  [{:.1}x]", status.speed)
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            "space pause  +/- speed  r restart  q quit",
            theme.chrome_style(),
        ),
        Span::styled(state, theme.chrome_style()),
    ]))
}

/// How long the event loop may sleep before something needs attention.
fn next_timeout(
    player: &Player,
    blink: &CursorBlink,
    clock: &PlaybackClock,
    wall: Instant,
    started: Instant,
) -> Duration {
    let mut timeout = IDLE_TICK;
    if let Some(token) = player.armed() {
        // None while paused: the engine deadline will not arrive on its own
        if let Some(wait) = clock.wall_until(wall, token.due()) {
            timeout = timeout.min(wait);
        }
    }
    let blink_wait = blink.next_due().saturating_sub(wall.duration_since(started));
    timeout.min(blink_wait)
}

fn handle_key(
    key: KeyEvent,
    clock: &mut PlaybackClock,
    player: &mut Player,
    wall: Instant,
) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char(' ') => {
            clock.toggle_pause(wall);
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            clock.speed_up(wall);
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            clock.speed_down(wall);
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            player.restart(clock.now(wall));
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
