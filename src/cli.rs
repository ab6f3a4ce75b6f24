//! Command-line interface definition.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

/// Scripted terminal demo player.
///
/// Plays a scripted shell session in your terminal: commands are "typed"
/// character by character, output is "printed", and the whole thing loops
/// until you quit. Nothing is executed.
#[derive(Debug, Parser)]
#[command(name = "demotape", version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Script file to play (TOML). Plays the built-in demo when omitted.
    pub script: Option<PathBuf>,

    /// Initial playback speed multiplier.
    #[arg(long, default_value_t = 1.0, value_name = "MULT")]
    pub speed: f64,

    /// Color theme: classic, mono, or ocean.
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Exit after a single pass instead of looping.
    #[arg(long)]
    pub once: bool,

    /// Print the finished transcript to stdout and exit (no TUI).
    #[arg(long)]
    pub transcript: bool,

    /// Validate the script and exit.
    #[arg(long)]
    pub check: bool,

    /// Generate shell completions and exit.
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Version string for `--version`: the crate version, with git SHA and
/// build date appended on dev builds (the `release` feature emits the
/// clean string).
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{version} ({sha} {})", env!("DEMOTAPE_BUILD_DATE")),
        None => version.to_string(),
    }
}

/// Write completions for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "demotape", &mut io::stdout());
}
