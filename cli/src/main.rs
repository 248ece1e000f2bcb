mod cli;
mod commands;
mod kube;
mod table_theme;

use anyhow::Result;
use chemanager_core::instrumentation::init_instrumentation;
use clap::Parser;
use cli::Cli;
use commands::handle_command;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        init_instrumentation("debug");
    } else {
        init_instrumentation("info");
    }

    handle_command(&cli).await
}
