//! Scripted playback engine
//!
//! The engine that "types out" a [`Script`](crate::script::Script):
//! character-by-character reveal with per-kind cadence, a settle pause
//! after each line, an endless replay loop, and an independent cursor
//! blink timer.
//!
//! # Architecture
//!
//! - `timing`: every delay as configuration with documented defaults
//! - `state`: [`PlaybackState`] and the [`Phase`] enum
//! - `scheduler`: [`Player`], the timer-driven state machine
//! - `cursor`: [`CursorBlink`], the fixed-period visibility toggle
//! - `snapshot`: [`Snapshot`], the read-only projection for rendering
//! - `clock`: [`PlaybackClock`], wall-to-logical time with pause/speed
//!
//! The engine is headless and deterministic: it runs on a logical clock
//! driven through [`Player::run_until`], so a front-end (or a test) can
//! advance it to any point in time without sleeping.
//!
//! # Usage
//!
//! ```
//! use demotape::{Player, Timing};
//!
//! let mut player = Player::new(demotape::script::builtin(), Timing::default());
//! player.complete_pass();
//! assert_eq!(
//!     player.state().completed.len(),
//!     demotape::script::builtin().len()
//! );
//! ```

mod clock;
mod cursor;
mod scheduler;
mod snapshot;
mod state;
mod timing;

pub use clock::PlaybackClock;
pub use cursor::CursorBlink;
pub use scheduler::{Player, TimerToken};
pub use snapshot::{CurrentLine, Snapshot};
pub use state::{Phase, PlaybackState};
pub use timing::Timing;
