//! demotape binary entry point.

mod cli;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use demotape::player::Timing;
use demotape::script::{self, Script};
use demotape::tui::{self, Theme, TuiOptions};
use demotape::{Config, Player};

use cli::Cli;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return Ok(());
    }

    let config = Config::load()?;
    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => script::builtin(),
    };

    if cli.check {
        let name = cli
            .script
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string());
        println!("{}: ok ({} lines)", name, script.len());
        return Ok(());
    }

    let theme = resolve_theme(cli.theme.as_deref().or(config.theme.as_deref()))?;

    if cli.transcript {
        print_transcript(script, config.timing);
        return Ok(());
    }

    let options = TuiOptions {
        speed: cli.speed,
        once: cli.once,
    };
    tui::run(script, config.timing, theme, &options)
}

/// Filtered by the `DEMOTAPE_LOG` environment variable; quiet by default.
#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("DEMOTAPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_theme(name: Option<&str>) -> Result<Theme> {
    match name {
        None => Ok(Theme::default()),
        Some(name) => match Theme::by_name(name) {
            Some(theme) => Ok(theme),
            None => bail!(
                "unknown theme '{}', expected one of: {}",
                name,
                Theme::NAMES.join(", ")
            ),
        },
    }
}

/// Complete one pass headlessly and print the plain transcript.
fn print_transcript(script: Script, timing: Timing) {
    let mut player = Player::new(script, timing);
    player.complete_pass();
    for line in &player.state().completed {
        println!("{}", line.content);
    }
}
