//! The playback scheduler: a discrete-event state machine over the script.
//!
//! The usual pattern for this kind of animation is a timer callback
//! that schedules the next timer from inside itself. Here that is made
//! explicit: one [`Phase`], one transition function, and one armed timer
//! slot. Every transition arms exactly one one-shot [`TimerToken`]; firing
//! a token that is no longer the armed one (superseded, or from before a
//! reset) is a silent no-op. That single rule is the whole cancellation
//! discipline: no two in-flight timers for the same transition can both
//! fire, and nothing mutates state after a restart it didn't know about.
//!
//! The engine runs on a logical clock - a `Duration` since engine start -
//! and never reads wall time itself. Deadlines chain from the previous
//! deadline, not from "now", so a pass's event times are exactly
//! reproducible; this is what makes the engine testable without sleeping.

use std::time::Duration;

use tracing::{debug, trace};

use crate::script::Script;

use super::snapshot::{CurrentLine, Snapshot};
use super::state::{Phase, PlaybackState};
use super::timing::Timing;

/// Handle to the player's single armed one-shot timer.
///
/// Carries the generation it was issued under; a token from a previous
/// generation (or one that has already fired) is stale and fires as a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    due: Duration,
}

impl TimerToken {
    /// Logical time at which this timer is due.
    pub fn due(&self) -> Duration {
        self.due
    }
}

/// The playback engine: script store, timing, state, and the armed timer.
#[derive(Debug)]
pub struct Player {
    script: Script,
    timing: Timing,
    state: PlaybackState,
    phase: Phase,
    generation: u64,
    timer: Option<TimerToken>,
}

impl Player {
    /// Create a player positioned at the start of the script, with the
    /// first timer armed. An empty script starts directly in
    /// [`Phase::Finished`] and idles through restart pauses.
    pub fn new(script: Script, timing: Timing) -> Self {
        let mut player = Self {
            script,
            timing,
            state: PlaybackState::new(),
            phase: Phase::Pending,
            generation: 0,
            timer: None,
        };
        player.arm_for_current(Duration::ZERO);
        player
    }

    /// The currently armed timer. Always `Some` in practice: every
    /// transition arms the next one, and the machine never terminates.
    pub fn armed(&self) -> Option<TimerToken> {
        self.timer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the machine holds the finished transcript, before the
    /// restart timer fires.
    pub fn pass_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Fire a timer token, applying one transition.
    ///
    /// Returns `false` without touching any state if the token is stale:
    /// not the armed timer, or issued before the last reset.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if token.generation != self.generation || self.timer != Some(token) {
            trace!(?token, generation = self.generation, "stale timer ignored");
            return false;
        }
        self.transition(token.due);
        true
    }

    /// Fire every timer due at or before `now`, in deadline order.
    ///
    /// This is the pull-based driver: callers sleep until
    /// [`armed`](Self::armed) is due, then catch the engine up.
    pub fn run_until(&mut self, now: Duration) {
        while let Some(token) = self.timer {
            if token.due > now {
                break;
            }
            self.fire(token);
        }
    }

    /// Drive the machine to the end of the current pass, ignoring real
    /// time. Used by headless transcript output and by tests.
    pub fn complete_pass(&mut self) {
        while !self.pass_finished() {
            match self.timer {
                Some(token) => self.run_until(token.due),
                None => break,
            }
        }
    }

    /// Restart playback from the top of the script at logical time `now`.
    ///
    /// Bumps the generation so any outstanding token fires as a no-op,
    /// and resets the playback state in the same step - there is no
    /// observable half-cleared state.
    pub fn restart(&mut self, now: Duration) {
        self.generation += 1;
        self.state.reset();
        self.timer = None;
        self.arm_for_current(now);
        debug!(generation = self.generation, "playback restarted");
    }

    /// Read-only projection of the playback state for rendering, combined
    /// with the blink timer's visibility at the same instant.
    pub fn snapshot(&self, cursor_visible: bool) -> Snapshot<'_> {
        let current = self.script.get(self.state.current_line).map(|line| CurrentLine {
            kind: line.kind,
            prefix: line.prefix(self.state.revealed),
            revealed: self.state.revealed,
        });
        Snapshot {
            completed: &self.state.completed,
            current,
            is_typing: self.state.is_typing,
            cursor_visible,
        }
    }

    /// Arm the single timer slot: `delay` after the previous deadline.
    fn arm(&mut self, from: Duration, delay: Duration) {
        self.timer = Some(TimerToken {
            generation: self.generation,
            due: from + delay,
        });
    }

    /// Enter Pending for the line at `current_line`, or Finished when the
    /// index is past the end of the script.
    fn arm_for_current(&mut self, now: Duration) {
        let lead = self
            .script
            .get(self.state.current_line)
            .map(|line| self.timing.lead_delay(line));
        match lead {
            Some(delay) => {
                self.phase = Phase::Pending;
                self.arm(now, delay);
            }
            None => {
                let hold = self.timing.restart();
                self.phase = Phase::Finished;
                self.arm(now, hold);
            }
        }
    }

    /// The single transition function. `now` is the deadline of the timer
    /// that fired; all follow-up deadlines chain from it.
    fn transition(&mut self, now: Duration) {
        match self.phase {
            Phase::Pending => {
                let Some((kind, len)) = self
                    .script
                    .get(self.state.current_line)
                    .map(|line| (line.kind, line.char_len()))
                else {
                    // Index overrun is the finished condition, not a fault.
                    self.arm_for_current(now);
                    return;
                };
                if len == 0 {
                    // Blank line: no typing, straight to the settle pause.
                    self.phase = Phase::Settle;
                    self.arm(now, self.timing.settle());
                } else {
                    self.state.is_typing = true;
                    self.phase = Phase::Typing;
                    self.arm(now, self.timing.char_delay(kind));
                }
            }
            Phase::Typing => {
                let Some((id, kind, len)) = self
                    .script
                    .get(self.state.current_line)
                    .map(|line| (line.id, line.kind, line.char_len()))
                else {
                    self.arm_for_current(now);
                    return;
                };
                self.state.revealed += 1;
                trace!(line = id, revealed = self.state.revealed, "char revealed");
                if self.state.revealed >= len {
                    self.state.is_typing = false;
                    self.phase = Phase::Settle;
                    self.arm(now, self.timing.settle());
                } else {
                    self.arm(now, self.timing.char_delay(kind));
                }
            }
            Phase::Settle => {
                if let Some(line) = self.script.get(self.state.current_line) {
                    debug!(line = line.id, "line committed");
                    self.state.completed.push(line.clone());
                }
                self.state.current_line += 1;
                self.state.revealed = 0;
                self.state.is_typing = false;
                self.arm_for_current(now);
            }
            Phase::Finished => {
                debug!("pass complete, resetting");
                self.restart(now);
            }
        }
    }
}
