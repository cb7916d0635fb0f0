//! CLI command definitions
//!
//! Defines the clap commands for the detox CLI.

use clap::{Args, Subcommand};

use crate::options::Platform;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the e2e test suite with the test runner configured in package.json
    Test(TestArgs),
}

/// Flags accepted by `detox test`
///
/// Every flag is optional; anything left out falls back to the `detox`
/// section of package.json and then to a built-in default.
#[derive(Args, Debug, Clone, Default)]
pub struct TestArgs {
    /// Test runner config file, defaults to e2e/mocha.opts for mocha and e2e/config.json for jest
    #[arg(short = 'o', long, value_name = "CONFIG")]
    pub runner_config: Option<String>,

    /// Root of test folder
    #[arg(short = 's', long, value_name = "RELATIVE_PATH")]
    pub specs: Option<String>,

    /// Detox log level: info, debug, verbose, silly, wss
    #[arg(short = 'l', long, value_name = "VALUE")]
    pub loglevel: Option<String>,

    /// Select a device configuration from your defined configurations.
    /// If not supplied and there is only one configuration, detox defaults to it
    #[arg(short = 'c', long, value_name = "DEVICE_CONFIGURATION")]
    pub configuration: Option<String>,

    /// Reuse existing installed app (do not delete and re-install) for a faster run
    #[arg(short = 'r', long)]
    pub reuse: bool,

    /// Shutdown simulator when test is over, useful for CI scripts
    #[arg(short = 'u', long)]
    pub cleanup: bool,

    /// Print device synchronization status when an action takes more than MS
    /// milliseconds to complete (3000 when given without a value)
    #[arg(short = 'd', long, value_name = "MS", num_args = 0..=1)]
    pub debug_synchronization: Option<Option<u64>>,

    /// Artifacts destination path (currently will contain only logs)
    #[arg(short = 'a', long, value_name = "PATH")]
    pub artifacts_location: Option<String>,

    /// Run platform specific tests: tests tagged ':ios:' are skipped for
    /// android and tests tagged ':android:' are skipped for ios
    #[arg(short = 'p', long, value_enum)]
    pub platform: Option<Platform>,
}
