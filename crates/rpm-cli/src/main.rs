//! RPM CLI Application
//!
//! Command-line interface for drafting lesson plans (Rencana Pembelajaran
//! Mendalam) with a hosted text-generation model.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use rpm_core::{ConfigBuilder, DispatchMode};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        model,
        parallel,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_config_file(config)
        .with_model(model)
        .with_dispatch(parallel.then_some(DispatchMode::Parallel));
    let cli = Cli::new(config, TerminalRenderer::new(!no_color));

    info!("RPM started");

    match command {
        Generate(args) => cli.generate(args).await,
        Toolbox(args) => cli.toolbox(args).await,
        Export(args) => cli.export(args),
        Request { command } => cli.handle_request_command(command),
    }
}
