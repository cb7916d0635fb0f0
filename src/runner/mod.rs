//! Test runner dispatch
//!
//! Turns [`ResolvedOptions`] into a concrete [`CommandDescriptor`] for the
//! selected runner and executes it with the terminal's stdio attached.

mod jest;
mod mocha;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::str::FromStr;

use tokio::process::Command;

use crate::common::config::DetoxSettings;
use crate::common::{paths, Error, Result};
use crate::options::ResolvedOptions;

/// Supported test runners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestRunner {
    /// BDD-style runner driven by flags and an opts file
    Mocha,
    /// Snapshot-style runner driven by a JSON config and environment variables
    Jest,
}

impl FromStr for TestRunner {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mocha" => Ok(TestRunner::Mocha),
            "jest" => Ok(TestRunner::Jest),
            other => Err(Error::UnsupportedRunner(other.to_string())),
        }
    }
}

impl fmt::Display for TestRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

impl TestRunner {
    /// Executable name under `node_modules/.bin`
    pub fn binary_name(self) -> &'static str {
        match self {
            TestRunner::Mocha => "mocha",
            TestRunner::Jest => "jest",
        }
    }

    /// Runner config file used when none is configured
    pub fn default_config(self) -> &'static str {
        match self {
            TestRunner::Mocha => "e2e/mocha.opts",
            TestRunner::Jest => "e2e/config.json",
        }
    }

    /// Build the full invocation for this runner
    pub fn build_command(
        self,
        program: PathBuf,
        opts: &ResolvedOptions,
        settings: &DetoxSettings,
    ) -> CommandDescriptor {
        match self {
            TestRunner::Mocha => CommandDescriptor {
                program,
                args: mocha::args(opts),
                env: BTreeMap::new(),
            },
            TestRunner::Jest => {
                let workers = jest::max_test_workers(opts, settings);
                CommandDescriptor {
                    program,
                    args: jest::args(opts, workers),
                    env: jest::env(opts, workers),
                }
            }
        }
    }
}

/// A fully formatted runner invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Changes to the inherited parent environment: `Some` sets a variable,
    /// `None` removes it
    pub env: BTreeMap<String, Option<String>>,
}

impl CommandDescriptor {
    /// Shell-quoted rendering, for display only
    pub fn command_line(&self) -> String {
        let program = self.program.to_string_lossy();
        let words = std::iter::once(&*program).chain(self.args.iter().map(String::as_str));
        shlex::try_join(words).unwrap_or_else(|_| {
            let mut line = program.to_string();
            for arg in &self.args {
                line.push(' ');
                line.push_str(arg);
            }
            line
        })
    }

    /// Run the command in `cwd` and wait for it to exit
    pub async fn execute(&self, cwd: &Path) -> Result<ExitStatus> {
        let mut command = Command::new(&self.program);
        for (key, value) in &self.env {
            match value {
                Some(value) => command.env(key, value),
                None => command.env_remove(key),
            };
        }

        command
            .args(&self.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                Error::SpawnFailed(format!("{}: {}", self.program.display(), e))
            })
    }
}

/// Find the runner executable
///
/// Prefers the project-local `node_modules/.bin` copy, then falls back to PATH.
pub fn locate_binary(root: &Path, runner: TestRunner) -> Result<PathBuf> {
    let local = paths::local_bin_path(root, runner.binary_name());
    if local.exists() {
        return Ok(local);
    }

    which::which(runner.binary_name()).map_err(|_| {
        Error::runner_not_found(
            runner.binary_name(),
            &[local.display().to_string(), "PATH".to_string()],
        )
    })
}

/// Map a child's exit status onto our own exit code
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
