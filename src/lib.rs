//! demotape - scripted terminal demo player
//!
//! Plays a fixed script of prompt/command/output lines as if someone were
//! typing them: per-character reveal with a slower cadence for commands,
//! a blinking cursor, an auto-scrolling viewport, and an endless loop.
//! Nothing is executed and no input reaches a shell; it is a
//! deterministic illusion of a terminal session.
//!
//! The crate splits into a headless engine and a thin terminal front-end:
//!
//! - [`script`]: the immutable script store and TOML script files
//! - [`player`]: the timer-driven playback state machine and blink timer
//! - [`render`]: snapshot-to-styled-lines conversion and autoscroll math
//! - [`tui`]: the crossterm/ratatui event loop and themes
//! - [`config`]: the user config file
//!
//! The engine runs on a logical clock and is driven by firing timer
//! tokens, so playback is exactly reproducible and testable without a
//! terminal - see [`Player`].

pub mod config;
pub mod player;
pub mod render;
pub mod script;
pub mod tui;

pub use config::Config;
pub use player::{
    CurrentLine, CursorBlink, Phase, PlaybackClock, PlaybackState, Player, Snapshot, TimerToken,
    Timing,
};
pub use script::{LineKind, Script, ScriptError, ScriptLine};
