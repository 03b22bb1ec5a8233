//! Interactive attendance tracker.
//!
//! # Responsibility
//! - Resolve configuration and start core logging.
//! - Run the text menu over stdin/stdout until the user exits.

mod menu;
mod seed;

use attendance_core::{init_logging, AppConfig, AttendanceService, InMemoryAttendanceRepository};
use log::info;
use menu::Console;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    if let Err(message) = init_logging(&config.log_level, &config.log_dir) {
        // Logging is diagnostics only; the tracker still works without it.
        eprintln!("warning: logging disabled: {message}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        attendance_core::core_version()
    );

    let stdin = io::stdin();
    let service = AttendanceService::new(InMemoryAttendanceRepository::new());
    let mut console = Console::new(stdin.lock(), io::stdout(), service, config);
    console.run()?;

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}
