//! Background worker thread that owns the countdown.

use crate::timer::{TimerCmd, TimerEvent};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use simpledesk_core::{Countdown, StartOutcome, Tick};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Wall-clock length of one countdown step.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct TimerHandle {
    pub cmd_tx: Sender<TimerCmd>,
    pub evt_rx: Receiver<TimerEvent>,
}

/// Spawn the countdown worker with the standard one-second tick.
pub fn spawn_timer(initial: Countdown) -> TimerHandle {
    spawn_timer_with_interval(initial, TICK_INTERVAL)
}

/// Spawn the countdown worker with a custom tick interval.
///
/// The worker is the only writer of the countdown. It exits once the
/// handle's command sender is dropped.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_timer_with_interval(initial: Countdown, interval: Duration) -> TimerHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("simpledesk-timer".to_string())
        .spawn(move || run_worker(initial, interval, cmd_rx, evt_tx))
        .expect("spawn timer thread");

    TimerHandle { cmd_tx, evt_rx }
}

fn run_worker(
    mut countdown: Countdown,
    interval: Duration,
    cmd_rx: Receiver<TimerCmd>,
    evt_tx: Sender<TimerEvent>,
) {
    let mut next_tick: Option<Instant> = None;
    let changed = |countdown: Countdown| {
        let _ = evt_tx.send(TimerEvent::Changed { countdown });
    };
    let finished = || {
        info!("countdown finished");
        let _ = evt_tx.send(TimerEvent::Finished);
    };

    loop {
        let received = match next_tick {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match cmd_rx.recv_timeout(wait) {
                    Ok(cmd) => Some(cmd),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match cmd_rx.recv() {
                Ok(cmd) => Some(cmd),
                Err(_) => break,
            },
        };

        let Some(cmd) = received else {
            match countdown.tick() {
                Tick::Counted(_) => {
                    next_tick = next_tick.map(|deadline| deadline + interval);
                    changed(countdown);
                }
                Tick::Finished => {
                    next_tick = None;
                    changed(countdown);
                    finished();
                }
                Tick::Stopped => next_tick = None,
            }
            continue;
        };

        debug!("timer command: {:?}", cmd);
        match cmd {
            TimerCmd::Start => match countdown.start() {
                StartOutcome::Ignored => {}
                StartOutcome::Started => {
                    next_tick = Some(Instant::now() + interval);
                    changed(countdown);
                }
                StartOutcome::Finished => {
                    next_tick = None;
                    changed(countdown);
                    finished();
                }
            },
            TimerCmd::Pause => {
                if countdown.pause() {
                    next_tick = None;
                    changed(countdown);
                }
            }
            TimerCmd::Reset => {
                next_tick = None;
                countdown.reset();
                changed(countdown);
            }
            // A running countdown keeps its tick schedule.
            TimerCmd::SetPreset { minutes } => {
                countdown.set_preset(minutes);
                changed(countdown);
            }
        }
    }
    debug!("timer worker exiting");
}
