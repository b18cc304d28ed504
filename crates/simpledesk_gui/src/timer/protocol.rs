//! Protocol types for the countdown worker.

use simpledesk_core::Countdown;

/// Commands sent from the UI thread to the timer worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCmd {
    Start,
    Pause,
    Reset,
    SetPreset { minutes: u64 },
}

/// Events sent from the timer worker back to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Snapshot after any change to the countdown.
    Changed { countdown: Countdown },
    /// The countdown reached zero. Sent once per run.
    Finished,
}
