// Scheduler drag-and-drop replay tool
// Main entry point

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use scheduler_dnd::services::replay::{self, ReplayScript};
use scheduler_dnd::services::settings::SettingsService;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        bail!("usage: scheduler-dnd <script.toml> [settings.toml]");
    };
    let settings = match args.next() {
        Some(path) => SettingsService::load(&PathBuf::from(path))?,
        None => SettingsService::load_default()?,
    };

    log::info!("Replaying drag script {:?}", script_path);

    let text = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read {:?}", script_path))?;
    let script = ReplayScript::parse(&text)?;
    let report = replay::run(&script, settings)?;

    for event in &report.events {
        println!("{}", serde_json::to_string(event)?);
    }
    log::info!("Drag finished in {:?}", report.final_phase);
    Ok(())
}
