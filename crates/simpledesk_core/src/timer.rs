//! Countdown timer state machine.
//!
//! Pure state: the owner decides when a second has passed and calls
//! [`Countdown::tick`]. Idle, Running and Paused are the only phases.

use crate::constants::DEFAULT_TIMER_SECONDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

/// Result of [`Countdown::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Already running; nothing changed.
    Ignored,
    Started,
    /// Started with nothing left on the clock and finished immediately.
    Finished,
}

/// Result of [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; the tick was dropped.
    Stopped,
    /// One second elapsed; this many remain.
    Counted(u64),
    /// The countdown just reached zero and returned to idle.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u64,
    phase: TimerPhase,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_TIMER_SECONDS)
    }
}

impl Countdown {
    /// Idle countdown holding `remaining_secs`.
    pub fn new(remaining_secs: u64) -> Self {
        Self {
            remaining_secs,
            phase: TimerPhase::Idle,
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Replace the remaining time with `minutes`; the phase is kept, so a
    /// running countdown carries on from the new value.
    pub fn set_preset(&mut self, minutes: u64) {
        self.remaining_secs = minutes.saturating_mul(60);
    }

    pub fn start(&mut self) -> StartOutcome {
        if self.is_running() {
            return StartOutcome::Ignored;
        }
        if self.remaining_secs == 0 {
            self.phase = TimerPhase::Idle;
            return StartOutcome::Finished;
        }
        self.phase = TimerPhase::Running;
        StartOutcome::Started
    }

    /// Running → Paused. Returns `false` when not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = TimerPhase::Paused;
        true
    }

    /// Back to idle with the default 25 minutes, from any phase.
    pub fn reset(&mut self) {
        self.remaining_secs = DEFAULT_TIMER_SECONDS;
        self.phase = TimerPhase::Idle;
    }

    /// Count one elapsed second.
    pub fn tick(&mut self) -> Tick {
        if !self.is_running() {
            return Tick::Stopped;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = TimerPhase::Idle;
            return Tick::Finished;
        }
        Tick::Counted(self.remaining_secs)
    }

    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// Formats seconds as `MM:SS`; minutes are not capped at 59.
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
