//! Quick-file launching and timer event handling.

use super::*;
use simpledesk_core::TimerPhase;

#[test]
fn added_paths_are_stored_and_opened_verbatim() {
    let mut h = make_app();
    let path = PathBuf::from("/tmp/some dir/report final.pdf");
    h.dialogs.queue_pick(Some(path.clone()));
    h.dialogs.queue_pick(Some(path.clone()));
    h.app.quick_files.add(&h.app.context);
    h.app.quick_files.add(&h.app.context);

    let expected = path.to_string_lossy().into_owned();
    assert_eq!(h.stored_quick_files(), vec![expected.clone(), expected.clone()]);

    h.app.quick_files.selected = Some(1);
    h.app.quick_files.open_selected(&h.app.context);
    assert_eq!(h.launcher.opened(), vec![expected]);
}

#[test]
fn cancelled_pick_and_missing_selection_do_nothing() {
    let mut h = make_app();
    h.dialogs.queue_pick(None);
    h.app.quick_files.add(&h.app.context);
    assert!(h.app.quick_files.entries().is_empty());
    assert!(!h.app.context.config().quick_files_path().exists());

    h.app.quick_files.open_selected(&h.app.context);
    h.app.quick_files.remove_selected(&h.app.context);
    assert!(h.launcher.opened().is_empty());
    assert!(h.dialogs.errors().is_empty());
}

#[test]
fn remove_clears_selection_and_persists() {
    let mut h = make_app();
    h.dialogs.queue_pick(Some(PathBuf::from("a.txt")));
    h.dialogs.queue_pick(Some(PathBuf::from("b.txt")));
    h.app.quick_files.add(&h.app.context);
    h.app.quick_files.add(&h.app.context);

    h.app.quick_files.selected = Some(0);
    h.app.quick_files.remove_selected(&h.app.context);

    assert_eq!(h.app.quick_files.selected, None);
    assert_eq!(h.stored_quick_files(), vec!["b.txt".to_string()]);
}

#[test]
fn launch_failure_names_the_path() {
    let mut h = make_app();
    h.dialogs.queue_pick(Some(PathBuf::from("gone.txt")));
    h.app.quick_files.add(&h.app.context);
    h.launcher.fail.set(true);

    h.app.quick_files.selected = Some(0);
    h.app.quick_files.open_selected(&h.app.context);

    let errors = h.dialogs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Could not open gone.txt"), "{}", errors[0]);
}

#[test]
fn timer_controls_are_forwarded_to_the_worker() {
    let h = make_app();
    assert!(h.app.timer.send(TimerCmd::SetPreset { minutes: 5 }).is_none());
    assert!(h.app.timer.send(TimerCmd::Start).is_none());
    let sent: Vec<TimerCmd> = h.cmd_rx.try_iter().collect();
    assert_eq!(
        sent,
        vec![TimerCmd::SetPreset { minutes: 5 }, TimerCmd::Start]
    );
}

#[test]
fn timer_snapshots_update_display_and_finish_notifies_once() {
    let mut h = make_app();
    let mut running = Countdown::new(2);
    running.start();
    h.evt_tx
        .send(TimerEvent::Changed { countdown: running })
        .expect("send changed");
    h.app.poll(std::time::Instant::now());
    assert!(h.app.timer.is_running());
    assert_eq!(h.app.timer.countdown().display(), "00:02");

    h.evt_tx
        .send(TimerEvent::Changed {
            countdown: Countdown::new(0),
        })
        .expect("send changed");
    h.evt_tx.send(TimerEvent::Finished).expect("send finished");
    h.app.poll(std::time::Instant::now());
    h.app.poll(std::time::Instant::now());

    assert_eq!(h.app.timer.countdown().phase(), TimerPhase::Idle);
    assert_eq!(h.dialogs.infos(), vec!["Time's up!".to_string()]);
}

#[test]
fn timer_reports_missing_worker() {
    let TestHarness { app, cmd_rx, .. } = make_app();
    drop(cmd_rx);
    assert_eq!(
        app.timer.send(TimerCmd::Start).as_deref(),
        Some("Timer unavailable.")
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_pick_is_refused_with_a_dialog() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut h = make_app();
    let raw = PathBuf::from(OsStr::from_bytes(b"/tmp/caf\xe9.txt"));
    h.dialogs.queue_pick(Some(raw));

    h.app.quick_files.add(&h.app.context);

    assert!(h.app.quick_files.entries().is_empty());
    assert!(!h.app.context.config().quick_files_path().exists());
    let errors = h.dialogs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("not valid UTF-8"), "{}", errors[0]);
}

#[test]
fn spawned_timer_panel_talks_to_a_live_worker() {
    let h = make_app();
    let mut panel = TimerPanel::new();
    assert_eq!(panel.countdown(), Countdown::default());

    assert!(panel.send(TimerCmd::SetPreset { minutes: 5 }).is_none());
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
    while panel.countdown().remaining_secs() != 300 && std::time::Instant::now() < deadline {
        panel.poll(&h.app.context);
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert_eq!(panel.countdown().remaining_secs(), 300);
    assert!(!panel.is_running());
}
