//! Read-only snapshots of playback state.
//!
//! A [`Snapshot`] is the engine's only output: the committed transcript,
//! the in-progress prefix of the current line, the typing flag, and the
//! blink timer's visibility, all taken at the same instant. Render sinks
//! consume snapshots and never reach back into the engine.

use crate::script::{LineKind, ScriptLine};

/// The current line's visible portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentLine<'a> {
    pub kind: LineKind,
    /// The characters revealed so far, always a char-boundary prefix.
    pub prefix: &'a str,
    /// Number of characters revealed.
    pub revealed: usize,
}

/// A point-in-time projection of playback + cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Fully committed lines, in script order.
    pub completed: &'a [ScriptLine],
    /// The line currently being revealed; `None` once the pass finished.
    pub current: Option<CurrentLine<'a>>,
    pub is_typing: bool,
    /// Blink timer visibility at the snapshot instant.
    pub cursor_visible: bool,
}

impl<'a> Snapshot<'a> {
    /// Total transcript rows: committed lines plus the in-progress one.
    pub fn rows(&self) -> usize {
        self.completed.len() + usize::from(self.current.is_some())
    }

    /// Whether a cursor glyph should be drawn at the end of the transcript.
    ///
    /// The glyph appears while a line is actively being typed or already
    /// partially revealed, while idling at a bare prompt, and on the
    /// trailing prompt of a finished pass - always gated on the blink
    /// visibility.
    pub fn cursor_glyph_visible(&self) -> bool {
        if !self.cursor_visible {
            return false;
        }
        match self.current {
            Some(current) => {
                self.is_typing || current.revealed > 0 || current.kind == LineKind::Prompt
            }
            // Finished pass: keep the cursor alive on a trailing bare prompt
            None => matches!(self.completed.last(), Some(line) if line.kind == LineKind::Prompt),
        }
    }
}
