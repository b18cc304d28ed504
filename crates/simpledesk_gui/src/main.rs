//! SimpleDesk binary entry point.

fn main() {
    let exit_code = run_and_report(simpledesk_gui::run);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_and_report<F, E>(runner: F) -> i32
where
    F: FnOnce() -> Result<(), E>,
    E: std::fmt::Display,
{
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("simpledesk failed to start: {}", err);
            1
        }
    }
}
