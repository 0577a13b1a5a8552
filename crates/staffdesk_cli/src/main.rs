//! Interactive console for the employee roster.
//!
//! # Responsibility
//! - Wire the in-memory roster and use-case service into the menu loop.
//! - Keep parsing and rendering concerns out of the core crate.

mod menu;

use staffdesk_core::{default_log_level, init_logging, EmployeeService, InMemoryEmployeeRepository};

fn main() {
    // Logging is best-effort for an interactive tool; a failed init must not
    // block the console.
    let log_dir = std::env::temp_dir().join("staffdesk").join("logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        None => eprintln!("warning: logging disabled: log directory is not valid UTF-8"),
    }
    log::info!(
        "event=cli_start module=cli status=ok core_version={}",
        staffdesk_core::core_version()
    );

    let mut service = EmployeeService::new(InMemoryEmployeeRepository::new());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(err) = menu::run(&mut service, &mut stdin.lock(), &mut stdout.lock()) {
        log::error!("event=cli_io_failure module=cli status=error error={err}");
        eprintln!("console I/O failure: {err}");
        std::process::exit(1);
    }

    log::info!("event=cli_exit module=cli status=ok");
}
