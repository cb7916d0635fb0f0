//! Detox CLI - runs end-to-end test suites through mocha or jest

use clap::Parser;
use detox_cli::commands::Commands;
use detox_cli::{cli, common::logging};

#[derive(Parser)]
#[command(name = "detox", about = "Detox end-to-end testing CLI")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
