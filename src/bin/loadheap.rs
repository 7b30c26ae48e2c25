//! Console entry point.
//!
//! Usage: `loadheap [CSV_FILE]`. The optional file is loaded before the
//! menu is shown. Diagnostics go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use flexi_logger::Logger;
use log::error;
use std::io;
use std::process::ExitCode;
use u_loadheap::session::Session;

const DEFAULT_LOG_SPEC: &str = "warn";

fn main() -> ExitCode {
    // Keep the handle alive for the whole process.
    let _logger = match Logger::try_with_env_or_str(DEFAULT_LOG_SPEC).and_then(|l| l.start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logging disabled: {err}");
            None
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    if let Some(path) = std::env::args().nth(1) {
        if let Err(err) = session.load_file(&path) {
            error!("event=console_failed module=main error=\"{err}\"");
            return ExitCode::FAILURE;
        }
    }

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=console_failed module=main error=\"{err}\"");
            ExitCode::FAILURE
        }
    }
}
