//! Countdown timer panel. The countdown itself lives on the worker thread;
//! this panel mirrors the latest snapshot it reported.

use super::super::context::ApplicationContext;
use super::super::style::{COLOR_ACCENT, COLOR_TEXT_MUTED, COLOR_TEXT_PRIMARY};
use crate::timer::{spawn_timer, TimerCmd, TimerEvent, TimerHandle};
use eframe::egui::{self, RichText};
use simpledesk_core::constants::TIMER_PRESETS_MINUTES;
use simpledesk_core::{Countdown, TimerPhase};
use tracing::warn;

const CLOCK_FONT_SIZE: f32 = 56.0;

pub(crate) struct TimerPanel {
    handle: TimerHandle,
    countdown: Countdown,
}

impl TimerPanel {
    /// Spawn a worker holding the default 25-minute countdown.
    pub(crate) fn new() -> Self {
        Self::with_handle(spawn_timer(Countdown::default()), Countdown::default())
    }

    pub(crate) fn with_handle(handle: TimerHandle, countdown: Countdown) -> Self {
        Self { handle, countdown }
    }

    #[cfg(test)]
    pub(crate) fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub(crate) fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Forward a control to the worker.
    ///
    /// # Returns
    /// Status text when the worker is gone.
    pub(crate) fn send(&self, cmd: TimerCmd) -> Option<String> {
        if self.handle.cmd_tx.send(cmd).is_err() {
            warn!("timer worker unavailable; dropped {:?}", cmd);
            return Some("Timer unavailable.".to_string());
        }
        None
    }

    /// Apply worker events queued since the last frame.
    ///
    /// A finished countdown is announced with one info dialog per event.
    pub(crate) fn poll(&mut self, context: &ApplicationContext) {
        while let Ok(event) = self.handle.evt_rx.try_recv() {
            match event {
                TimerEvent::Changed { countdown } => self.countdown = countdown,
                TimerEvent::Finished => context.show_info("Time's up!"),
            }
        }
    }

    pub(crate) fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let mut pending: Option<TimerCmd> = None;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new(self.countdown.display())
                    .size(CLOCK_FONT_SIZE)
                    .monospace()
                    .color(if self.is_running() {
                        COLOR_ACCENT
                    } else {
                        COLOR_TEXT_PRIMARY
                    }),
            );
            let phase_label = match self.countdown.phase() {
                TimerPhase::Idle => "Ready",
                TimerPhase::Running => "Running",
                TimerPhase::Paused => "Paused",
            };
            ui.label(RichText::new(phase_label).color(COLOR_TEXT_MUTED));
            ui.add_space(16.0);

            egui::Grid::new("timer_controls")
                .spacing(egui::vec2(8.0, 8.0))
                .show(ui, |ui| {
                    if ui.button("Start").clicked() {
                        pending = Some(TimerCmd::Start);
                    }
                    if ui.button("Pause").clicked() {
                        pending = Some(TimerCmd::Pause);
                    }
                    if ui.button("Reset").clicked() {
                        pending = Some(TimerCmd::Reset);
                    }
                    ui.end_row();
                    for minutes in TIMER_PRESETS_MINUTES {
                        if ui.button(format!("{} min", minutes)).clicked() {
                            pending = Some(TimerCmd::SetPreset { minutes });
                        }
                    }
                    ui.end_row();
                });
        });

        self.send(pending?)
    }
}
