//! SimpleDesk desktop UI.
//!
//! Exposes a `run` helper so the workspace root binary stays a thin launcher.

mod app;
/// Host desktop seams: dialogs and the OS file opener.
pub mod platform;
/// Countdown worker + protocol types used by the GUI and headless tests.
pub mod timer;

use app::SimpleDeskApp;
use eframe::egui;
use simpledesk_core::constants::APP_NAME;
use simpledesk_core::Config;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "simpledesk=warn,simpledesk_core=info,simpledesk_gui=info";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Start the SimpleDesk window with tracing enabled.
///
/// Configuration comes from the environment; see [`Config::from_env`].
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let app = SimpleDeskApp::new(Config::from_env());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(APP_NAME, options, Box::new(|_cc| Ok(Box::new(app))))
}
