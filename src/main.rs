use shkit::{actions, app, commands, config, logging, ui};

use anyhow::{Context, Result};
use app::AppState;
use clap::Parser;
use commands::Cli;
use config::load_config;
use std::io;
use std::process::ExitCode;
use ui::{Palette, Tone};

fn main() -> ExitCode {
    logging::init();

    // Parse command line arguments
    let args = Cli::parse();
    let color = args.color.unwrap_or_default();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            let palette = Palette::resolve(color);
            eprintln!("{}", palette.paint(Tone::Error, &format!("Error: {:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<u8> {
    // Load configuration
    let config = load_config(&args).context("Failed to load configuration")?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(actions::SUCCESS);
    }

    let app = AppState::new(config);
    let mut stdout = io::stdout().lock();
    actions::execute_action(args.command, &app, &mut stdout)
}
