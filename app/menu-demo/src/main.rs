mod config;
mod console;
mod logger;
mod suite;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::*;
use config::Config;
use console::{StdClock, StdioChannel};
use log::{info, LevelFilter};
use test_menu::{command::trim_trailing_space, Command, ConsoleReport, LineChannel, MenuRunner};

/// Run the demo test suite through the interactive test menu
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file, `menu.toml` in the working directory by default
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Run a menu command (`*`, `[tag]`, `"name"` or a number) and exit.
    /// May be given more than once.
    #[arg(short = 'x', long = "command")]
    commands: Vec<String>,
    /// Overrides `log.level` from the config
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = Config::load(args.config.as_deref())?;
    let level = args.log_level.as_deref().unwrap_or(&config.log.level);
    let level: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("invalid log level `{level}`"))?;
    logger::init(level);

    let registry = suite::registry();
    info!("{} test cases registered", registry.len());

    let mut runner = MenuRunner::with_config(
        registry,
        StdioChannel::new(),
        ConsoleReport::new(),
        StdClock::new(),
        config.runner,
    );

    if args.commands.is_empty() {
        runner.run_menu();
    }

    let mut failures = 0;
    for line in &args.commands {
        let line = trim_trailing_space(line);
        if line.is_empty() {
            continue;
        }
        let dispatch = runner.execute(&Command::parse(line));
        info!("`{line}`: {} selected", dispatch.selected);
        failures += dispatch.stats.failures;
    }
    runner.channel_mut().wait_until_idle();

    if failures > 0 {
        bail!("{failures} test(s) failed");
    }
    Ok(())
}
