//! CLI command handling
//!
//! Dispatches CLI commands and returns the exit code the process should end with.

use std::path::Path;

use colored::Colorize;

use crate::commands::{Commands, TestArgs};
use crate::common::config::DetoxSettings;
use crate::common::Result;
use crate::device_registry::DeviceRegistry;
use crate::options::ResolvedOptions;
use crate::runner::{self, TestRunner};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<i32> {
    let root = std::env::current_dir()?;

    match command {
        Commands::Test(args) => run_tests(&args, &root).await,
    }
}

/// Run the e2e suite for the project at `root`
///
/// The device registry is reset first, even when the run later fails on bad
/// settings or an unsupported runner.
pub async fn run_tests(args: &TestArgs, root: &Path) -> Result<i32> {
    DeviceRegistry::new(root).reset()?;

    let settings = DetoxSettings::load(root)?;
    let opts = ResolvedOptions::resolve(args, &settings)?;

    let test_runner: TestRunner = opts.test_runner().parse()?;
    let program = runner::locate_binary(root, test_runner)?;
    let command = test_runner.build_command(program, &opts, &settings);

    eprintln!("{} {}", "Running:".cyan().bold(), command.command_line().dimmed());
    for (key, value) in &command.env {
        match value {
            Some(value) => tracing::debug!("env {key}={value}"),
            None => tracing::debug!("env {key} cleared"),
        }
    }

    let status = command.execute(root).await?;
    let code = runner::exit_code(status);
    if code != 0 {
        tracing::info!("{test_runner} exited with code {code}");
    }

    Ok(code)
}
