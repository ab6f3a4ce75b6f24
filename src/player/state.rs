//! Playback state owned by the scheduler.
//!
//! `PlaybackState` is the mutable half of the engine: which line is
//! current, how much of it is revealed, and the transcript committed so
//! far. It is mutated exclusively by [`Player`](super::Player) transitions
//! and read by everyone else through snapshots.

use crate::script::ScriptLine;

/// The scheduler's position within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Current line selected, waiting out its lead delay.
    Pending,
    /// Revealing the current line one character at a time.
    Typing,
    /// Line fully revealed, pausing before it is committed.
    Settle,
    /// Every line committed; holding the transcript before the restart.
    Finished,
}

/// Mutable playback state.
///
/// Invariants (upheld by the scheduler):
/// - `current_line <= script.len()`, equality meaning the pass is done
/// - `revealed <= current line's char count` while a current line exists
/// - `is_typing` is true only between lead-delay-elapsed and full reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    /// Lines fully revealed and committed, in script order.
    /// Append-only within a pass; cleared only by a reset.
    pub completed: Vec<ScriptLine>,
    /// Index of the current line in the script store.
    pub current_line: usize,
    /// Characters of the current line already shown.
    pub revealed: usize,
    /// Whether the current line is actively being typed.
    pub is_typing: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            completed: Vec::new(),
            current_line: 0,
            revealed: 0,
            is_typing: false,
        }
    }

    /// Return to the initial state in one step. There is no observable
    /// intermediate: callers see either the old pass or a fresh one.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.current_line = 0;
        self.revealed = 0;
        self.is_typing = false;
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::LineKind;

    #[test]
    fn new_state_is_at_the_start() {
        let state = PlaybackState::new();
        assert!(state.completed.is_empty());
        assert_eq!(state.current_line, 0);
        assert_eq!(state.revealed, 0);
        assert!(!state.is_typing);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = PlaybackState::new();
        state.completed.push(ScriptLine {
            id: 0,
            kind: LineKind::Output,
            content: "hello".to_string(),
            lead_delay_ms: None,
        });
        state.current_line = 3;
        state.revealed = 2;
        state.is_typing = true;

        state.reset();

        assert_eq!(state, PlaybackState::new());
    }
}
