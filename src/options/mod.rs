//! Option resolution for the `test` command
//!
//! Merges command-line flags with the `detox` settings object and built-in
//! defaults into one [`ResolvedOptions`]. Each value records which source won
//! so the merge can be inspected and tested.

mod keys;
mod resolve;

pub use keys::SettingKey;
pub use resolve::{resolve, Resolved, SettingValue, Source};

use std::fmt;

use serde_json::Value;

use crate::commands::TestArgs;
use crate::common::config::DetoxSettings;
use crate::common::{Error, Result};
use crate::runner::TestRunner;

/// Test folder used when nothing else is configured
pub const DEFAULT_SPECS: &str = "e2e";

/// Runner used when nothing else is configured
pub const DEFAULT_TEST_RUNNER: &str = "mocha";

/// Threshold used when debug synchronization is switched on without a value
pub const DEFAULT_DEBUG_SYNCHRONIZATION_MS: u64 = 3000;

/// Target platform for platform-specific test filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Tag of the tests that must be skipped on this platform
    pub fn excluded_tag(self) -> &'static str {
        match self {
            Platform::Ios => ":android:",
            Platform::Android => ":ios:",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

impl SettingValue for Platform {
    fn from_setting(key: &str, value: &Value) -> Result<Self> {
        match value.as_str() {
            Some("ios") => Ok(Platform::Ios),
            Some("android") => Ok(Platform::Android),
            _ => Err(Error::invalid_setting(
                key,
                &format!("expected \"ios\" or \"android\", found {value}"),
            )),
        }
    }
}

/// Debug synchronization threshold in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugSynchronization(pub u64);

impl DebugSynchronization {
    /// Normalize the `--debug-synchronization [ms]` flag
    ///
    /// A bare flag means "on" and maps to the default threshold.
    pub fn from_flag(flag: Option<Option<u64>>) -> Option<Self> {
        flag.map(|ms| Self(ms.unwrap_or(DEFAULT_DEBUG_SYNCHRONIZATION_MS)))
    }
}

impl fmt::Display for DebugSynchronization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SettingValue for DebugSynchronization {
    fn from_setting(key: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Bool(true) => Ok(Self(DEFAULT_DEBUG_SYNCHRONIZATION_MS)),
            Value::Number(n) => n.as_u64().map(Self).ok_or_else(|| {
                Error::invalid_setting(key, &format!("expected milliseconds, found {n}"))
            }),
            Value::String(s) => s.trim().parse().map(Self).map_err(|_| {
                Error::invalid_setting(key, &format!("expected milliseconds, found \"{s}\""))
            }),
            other => Err(Error::invalid_setting(
                key,
                &format!("expected milliseconds, found {other}"),
            )),
        }
    }
}

/// Every setting of a test run after precedence resolution
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub specs: Resolved<String>,
    pub test_runner: Resolved<String>,
    pub runner_config: Resolved<String>,
    pub loglevel: Resolved<String>,
    pub configuration: Resolved<String>,
    pub reuse: Resolved<bool>,
    pub cleanup: Resolved<bool>,
    pub debug_synchronization: Resolved<DebugSynchronization>,
    pub artifacts_location: Resolved<String>,
    pub platform: Resolved<Platform>,
}

/// Empty strings and switched-off booleans count as "not passed"
fn flag_str(flag: &Option<String>) -> Option<String> {
    flag.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn flag_bool(flag: bool) -> Option<bool> {
    flag.then_some(true)
}

/// Default runner config for a runner name
///
/// Unknown runners get no default. That is only worth a warning here; the
/// runner name itself is rejected later, when the command is built.
pub fn default_runner_config(runner: &str) -> Option<String> {
    match runner.parse::<TestRunner>() {
        Ok(runner) => Some(runner.default_config().to_string()),
        Err(_) => {
            tracing::warn!(
                "Missing 'runner-config' value in detox config in package.json, \
                 and there is no default for runner '{runner}'"
            );
            None
        }
    }
}

impl ResolvedOptions {
    /// Resolve all settings from flags, the settings object and defaults
    pub fn resolve(args: &TestArgs, settings: &DetoxSettings) -> Result<Self> {
        let specs = resolve(
            SettingKey::Specs,
            flag_str(&args.specs),
            settings,
            Some(DEFAULT_SPECS.to_string()),
        )?;

        let test_runner = resolve(
            SettingKey::TestRunner,
            None,
            settings,
            Some(DEFAULT_TEST_RUNNER.to_string()),
        )?;

        // The default depends on the runner, so only compute it when needed
        let runner_config = match resolve(
            SettingKey::RunnerConfig,
            flag_str(&args.runner_config),
            settings,
            None,
        )? {
            resolved if resolved.is_set() => resolved,
            _ => {
                let runner = test_runner.get().map(String::as_str).unwrap_or_default();
                match default_runner_config(runner) {
                    Some(path) => Resolved::new(path, Source::Default),
                    None => Resolved::unset(),
                }
            }
        };

        let configuration = resolve(
            SettingKey::Configuration,
            flag_str(&args.configuration),
            settings,
            settings.sole_configuration().map(str::to_string),
        )?;

        let options = Self {
            specs,
            test_runner,
            runner_config,
            loglevel: resolve(SettingKey::Loglevel, flag_str(&args.loglevel), settings, None)?,
            configuration,
            reuse: resolve(SettingKey::Reuse, flag_bool(args.reuse), settings, None)?,
            cleanup: resolve(SettingKey::Cleanup, flag_bool(args.cleanup), settings, None)?,
            debug_synchronization: resolve(
                SettingKey::DebugSynchronization,
                DebugSynchronization::from_flag(args.debug_synchronization),
                settings,
                None,
            )?,
            artifacts_location: resolve(
                SettingKey::ArtifactsLocation,
                flag_str(&args.artifacts_location),
                settings,
                None,
            )?,
            platform: resolve(SettingKey::Platform, args.platform, settings, None)?,
        };

        options.trace_sources();
        Ok(options)
    }

    fn trace_sources(&self) {
        let sources = [
            (SettingKey::Specs, self.specs.source),
            (SettingKey::TestRunner, self.test_runner.source),
            (SettingKey::RunnerConfig, self.runner_config.source),
            (SettingKey::Loglevel, self.loglevel.source),
            (SettingKey::Configuration, self.configuration.source),
            (SettingKey::Reuse, self.reuse.source),
            (SettingKey::Cleanup, self.cleanup.source),
            (SettingKey::DebugSynchronization, self.debug_synchronization.source),
            (SettingKey::ArtifactsLocation, self.artifacts_location.source),
            (SettingKey::Platform, self.platform.source),
        ];
        for (key, source) in sources {
            tracing::debug!(setting = %key, ?source, "resolved");
        }
    }

    /// Test folder; always set because it has a default
    pub fn specs(&self) -> &str {
        self.specs.get().map(String::as_str).unwrap_or(DEFAULT_SPECS)
    }

    /// Runner name as configured, not yet validated
    pub fn test_runner(&self) -> &str {
        self.test_runner
            .get()
            .map(String::as_str)
            .unwrap_or(DEFAULT_TEST_RUNNER)
    }

    pub fn reuse(&self) -> bool {
        self.reuse.get().copied().unwrap_or(false)
    }

    pub fn cleanup(&self) -> bool {
        self.cleanup.get().copied().unwrap_or(false)
    }
}
