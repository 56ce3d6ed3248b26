use std::path::PathBuf;

use anyhow::Context;
use engine_logging::{engine_info, engine_warn, LogDestination};
use log::LevelFilter;
use prayer_core::AppViewModel;
use prayer_engine::{FetchSettings, Orchestrator};

use crate::render::render;
use crate::settings::{read_settings, AppSettings};

/// Runs one orchestration and prints the loading indicator followed by the outcome.
pub fn run_app() -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = read_settings(&working_dir);

    let log_file = match &loaded {
        Ok(Some(settings)) => settings.log_file.clone(),
        _ => None,
    };
    let destination = match log_file {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    if let Err(err) = engine_logging::initialize(destination, LevelFilter::Info) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let settings = match loaded {
        Ok(Some(settings)) => {
            engine_info!("Using settings from {:?}", working_dir);
            settings
        }
        Ok(None) => AppSettings::default(),
        Err(err) => {
            engine_warn!("{}; falling back to built-in sources", err);
            AppSettings::default()
        }
    };

    println!("{}", render(&AppViewModel::Loading));

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let orchestrator = Orchestrator::new(settings.sources, FetchSettings::default())
        .context("failed to build HTTP client")?;
    let state = runtime.block_on(orchestrator.run());

    println!("{}", render(&state.view()));
    Ok(())
}
