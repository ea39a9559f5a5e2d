//! Application entry point and dispatch.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;

use rackcalc_cli::output::write_to_file;
use rackcalc_cli::presenter::{CLIResultPresenter, JsonResultPresenter, ResultPresenter};
use rackcalc_cli::ui;
use rackcalc_core::RackError;
use rackcalc_tui::{TuiApp, TuiMessage};

use crate::config::{AppConfig, OutputFormat};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        rackcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;

    // Handle TUI mode
    if config.tui {
        return run_tui(config);
    }

    // CLI mode
    run_cli(config)
}

fn presenter_for(config: &AppConfig) -> Box<dyn ResultPresenter> {
    match config.format {
        OutputFormat::Text => Box::new(CLIResultPresenter::new(
            config.show_distribution,
            config.quiet,
        )),
        OutputFormat::Json => Box::new(JsonResultPresenter),
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let inputs = config.inputs()?;
    let layout = inputs.layout();
    tracing::debug!(
        ?inputs,
        valid = layout.valid,
        capacity_exceeded = layout.capacity_exceeded,
        "layout computed"
    );

    let presenter = presenter_for(config);
    presenter.present_layout(&inputs, &layout);

    // Write to file if requested
    if let Some(ref path) = config.output {
        let report = presenter.render(&inputs, &layout)?;
        write_to_file(path, &report).map_err(RackError::from)?;
        if config.format == OutputFormat::Text && !config.quiet {
            ui::print_success(&format!("Report written to {path}"));
        }
    }

    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    // Strict mode still rejects bad seed values before the terminal is taken.
    if config.strict {
        config.inputs()?;
    }

    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();

    let mut app = TuiApp::new(rx);
    app.show_distribution = config.show_distribution;

    // Seed the form with whatever came in on the command line
    tx.send(TuiMessage::SetInputs(config.raw_inputs()))
        .context("seeding TUI inputs")?;
    app.update();

    // Set up Ctrl+C handler
    ctrlc_handler(tx)?;

    // Run TUI event loop on the main thread
    app.run().map_err(RackError::from)?;

    Ok(())
}

fn ctrlc_handler(tx: Sender<TuiMessage>) -> Result<()> {
    ctrlc::set_handler(move || {
        // The receiver is gone once the TUI has exited.
        let _ = tx.send(TuiMessage::Quit);
    })
    .context("setting Ctrl+C handler")
}
