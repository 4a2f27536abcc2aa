//! Roster — interactive student and course record keeper.
//!
//! # Usage
//!
//! ```text
//! roster [--data-file <PATH>] [--verbose]
//! ```
//!
//! Menu:
//!
//! ```text
//! 1. Add New Student          5. Display Student Details
//! 2. Add New Course           6. Display Course Details
//! 3. Enroll Student in Course 7. Save Data to File
//! 4. Add Grade for Student    8. Load Data from File
//! 0. Exit
//! ```

mod commands;
mod prompt;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use prompt::Prompt;
use roster_core::store::DEFAULT_DATA_FILE;
use session::Session;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Track students, courses, enrollments and grades",
    long_about = None,
)]
struct Cli {
    /// JSON file used by the save and load menu options.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v')]
    verbose: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = Prompt::new(stdin.lock(), stdout.lock());
    Session::new(cli.data_file).run(&mut prompt)
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
