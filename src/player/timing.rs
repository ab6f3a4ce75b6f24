//! Timing configuration for the playback engine.
//!
//! All of the engine's delays are configuration, not fixed law: the
//! defaults below reproduce the demo's rhythm, and any of them can be
//! overridden from the config file's `[timing]` table.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::script::{LineKind, ScriptLine};

/// Wait before a line starts typing, when the script line gives none.
pub const DEFAULT_LEAD_DELAY_MS: u64 = 100;
/// Per-character delay for command lines (typed by the "user").
pub const DEFAULT_COMMAND_CHAR_MS: u64 = 80;
/// Per-character delay for prompt and output lines (printed by the "program").
pub const DEFAULT_PRINT_CHAR_MS: u64 = 30;
/// Pause after a line is fully revealed, before it is committed.
pub const DEFAULT_SETTLE_MS: u64 = 100;
/// Hold on the finished transcript before the pass restarts.
pub const DEFAULT_RESTART_MS: u64 = 3000;
/// Cursor blink half-period.
pub const DEFAULT_CURSOR_BLINK_MS: u64 = 530;

/// The engine's timing constants, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub lead_delay_ms: u64,
    pub command_char_ms: u64,
    pub print_char_ms: u64,
    pub settle_ms: u64,
    pub restart_ms: u64,
    pub cursor_blink_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            lead_delay_ms: DEFAULT_LEAD_DELAY_MS,
            command_char_ms: DEFAULT_COMMAND_CHAR_MS,
            print_char_ms: DEFAULT_PRINT_CHAR_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            restart_ms: DEFAULT_RESTART_MS,
            cursor_blink_ms: DEFAULT_CURSOR_BLINK_MS,
        }
    }
}

impl Timing {
    /// Lead delay for a line: the line's own value, or the default.
    pub fn lead_delay(&self, line: &ScriptLine) -> Duration {
        Duration::from_millis(line.lead_delay_ms.unwrap_or(self.lead_delay_ms))
    }

    /// Inter-character delay for a line of the given kind.
    pub fn char_delay(&self, kind: LineKind) -> Duration {
        let ms = match kind {
            LineKind::Command => self.command_char_ms,
            LineKind::Prompt | LineKind::Output => self.print_char_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn restart(&self) -> Duration {
        Duration::from_millis(self.restart_ms)
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }
}
