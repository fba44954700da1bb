//! Application entry point and dispatch.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use rentcalc_cli::CliEstimatePresenter;
use rentcalc_core::constants::TICK_INTERVAL_MS;
use rentcalc_core::Estimate;
use rentcalc_tui::{CalcApp, OpenerLauncher, SearchLauncher, TuiMessage};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if config.interactive() {
        return run_tui(config);
    }
    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let raw_income = config.income.clone().unwrap_or_default();
    let estimate = Estimate::derive(&raw_income, config.city);

    let presenter = CliEstimatePresenter::new(config.quiet);
    presenter.present(&raw_income, config.city, &estimate);

    if config.open {
        if let Some(url) = &estimate.search {
            if let Err(err) = OpenerLauncher.open(url.as_str()) {
                tracing::warn!(%err, "browser launch failed");
                eprintln!("Warning: {err}");
            }
        }
    }

    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();

    // Create the app, prefilled from flags
    let mut app = CalcApp::new(rx, config.animation(), Box::new(OpenerLauncher));
    if let Some(income) = &config.income {
        app.set_income(income.clone());
    }
    app.set_city(config.city);

    // Spawn the frame ticker thread; it exits when the channel closes.
    thread::spawn(move || {
        let interval = Duration::from_millis(TICK_INTERVAL_MS);
        loop {
            if tx.send(TuiMessage::Tick).is_err() {
                break; // channel closed, TUI exited
            }
            thread::sleep(interval);
        }
    });

    // Run the TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
