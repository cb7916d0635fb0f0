//! Jest invocation
//!
//! Only the test folder, config file, worker count and name filter go on the
//! command line. The remaining options reach the test environment through
//! environment variables. Every such variable is either set or cleared, so
//! a value inherited from the calling shell never leaks into the run.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::common::config::DetoxSettings;
use crate::options::ResolvedOptions;

/// Parse a `maxTestWorkers` hint
///
/// `Ok(None)` for falsy values (absent, `null`, `false`, `""`, `0`), `Err`
/// for anything that is not a whole number of workers.
fn worker_hint(value: Option<&Value>) -> Result<Option<u64>, String> {
    let value = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(None),
        Some(Value::String(s)) if s.is_empty() => return Ok(None),
        Some(value) => value,
    };

    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match parsed {
        Some(0) => Ok(None),
        Some(n) => Ok(Some(n)),
        None => Err(value.to_string()),
    }
}

/// Worker count from the selected device configuration, 1 when absent
pub fn max_test_workers(opts: &ResolvedOptions, settings: &DetoxSettings) -> u64 {
    let Some(name) = opts.configuration.get() else {
        tracing::warn!("No device configuration selected, running jest with 1 worker");
        return 1;
    };

    let Some(conf) = settings.configuration(name) else {
        tracing::warn!(
            "Device configuration '{name}' not found in package.json, running jest with 1 worker"
        );
        return 1;
    };

    match worker_hint(conf.get("maxTestWorkers")) {
        Ok(hint) => hint.unwrap_or(1),
        Err(found) => {
            tracing::warn!(
                "Ignoring maxTestWorkers {found} of configuration '{name}', running jest with 1 worker"
            );
            1
        }
    }
}

/// Arguments following the jest executable
pub fn args(opts: &ResolvedOptions, workers: u64) -> Vec<String> {
    let mut args = vec![opts.specs().to_string()];

    if let Some(config) = opts.runner_config.get() {
        args.push(format!("--config={config}"));
    }
    args.push(format!("--maxWorkers={workers}"));
    if let Some(platform) = opts.platform.get() {
        args.push(format!(
            "--testNamePattern=^((?!{}).)*$",
            platform.excluded_tag()
        ));
    }

    args
}

/// Environment overlay for the jest process
///
/// `None` marks a variable to remove from the inherited environment.
pub fn env(opts: &ResolvedOptions, workers: u64) -> BTreeMap<String, Option<String>> {
    let enabled = |on: bool| on.then(|| "true".to_string());

    BTreeMap::from([
        ("configuration".to_string(), opts.configuration.get().cloned()),
        ("loglevel".to_string(), opts.loglevel.get().cloned()),
        ("cleanup".to_string(), enabled(opts.cleanup())),
        ("reuse".to_string(), enabled(opts.reuse())),
        (
            "debugSynchronization".to_string(),
            opts.debug_synchronization.get().map(ToString::to_string),
        ),
        (
            "artifactsLocation".to_string(),
            opts.artifacts_location.get().cloned(),
        ),
        ("maxTestWorkers".to_string(), Some(workers.to_string())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TestArgs;
    use crate::options::Platform;
    use serde_json::json;

    fn jest_settings() -> DetoxSettings {
        DetoxSettings::from_value(json!({
            "testRunner": "jest",
            "configurations": {
                "ios.sim": { "maxTestWorkers": 4 },
                "android.emu": {},
                "string.hint": { "maxTestWorkers": "3" },
                "fractional.hint": { "maxTestWorkers": 2.5 },
                "list.hint": { "maxTestWorkers": [2] },
                "null.entry": null
            }
        }))
        .unwrap()
    }

    fn workers_for(configuration: &str) -> u64 {
        let opts = resolve(TestArgs {
            configuration: Some(configuration.to_string()),
            ..Default::default()
        });
        max_test_workers(&opts, &jest_settings())
    }

    fn var<'a>(env: &'a BTreeMap<String, Option<String>>, key: &str) -> Option<&'a str> {
        env.get(key).and_then(|v| v.as_deref())
    }

    fn resolve(args: TestArgs) -> ResolvedOptions {
        ResolvedOptions::resolve(&args, &jest_settings()).unwrap()
    }

    #[test]
    fn test_workers_from_configuration() {
        assert_eq!(workers_for("ios.sim"), 4);
    }

    #[test]
    fn test_workers_accept_numeric_string() {
        assert_eq!(workers_for("string.hint"), 3);
    }

    #[test]
    fn test_unusable_worker_hint_falls_back_to_one() {
        assert_eq!(workers_for("fractional.hint"), 1);
        assert_eq!(workers_for("list.hint"), 1);
        assert_eq!(workers_for("null.entry"), 1);
    }

    #[test]
    fn test_worker_hint_parsing() {
        assert_eq!(worker_hint(None), Ok(None));
        assert_eq!(worker_hint(Some(&json!(0))), Ok(None));
        assert_eq!(worker_hint(Some(&json!(""))), Ok(None));
        assert_eq!(worker_hint(Some(&json!(" 6 "))), Ok(Some(6)));
        assert_eq!(worker_hint(Some(&json!("many"))), Err("\"many\"".to_string()));
    }

    #[test]
    fn test_workers_default_to_one() {
        assert_eq!(workers_for("android.emu"), 1);
        assert_eq!(workers_for("missing"), 1);

        // Several configurations and none selected
        let opts = resolve(TestArgs::default());
        assert_eq!(max_test_workers(&opts, &jest_settings()), 1);
    }

    #[test]
    fn test_args_with_platform() {
        let opts = resolve(TestArgs {
            platform: Some(Platform::Android),
            ..Default::default()
        });
        assert_eq!(
            args(&opts, 2),
            vec![
                "e2e",
                "--config=e2e/config.json",
                "--maxWorkers=2",
                "--testNamePattern=^((?!:ios:).)*$",
            ]
        );
    }

    #[test]
    fn test_env_overlay() {
        let opts = resolve(TestArgs {
            configuration: Some("ios.sim".to_string()),
            loglevel: Some("trace".to_string()),
            cleanup: true,
            debug_synchronization: Some(Some(1000)),
            artifacts_location: Some("artifacts".to_string()),
            ..Default::default()
        });
        let env = env(&opts, 4);

        assert_eq!(var(&env, "configuration"), Some("ios.sim"));
        assert_eq!(var(&env, "loglevel"), Some("trace"));
        assert_eq!(var(&env, "cleanup"), Some("true"));
        assert_eq!(var(&env, "debugSynchronization"), Some("1000"));
        assert_eq!(var(&env, "artifactsLocation"), Some("artifacts"));
        assert_eq!(var(&env, "maxTestWorkers"), Some("4"));
        assert_eq!(var(&env, "reuse"), None);
    }

    #[test]
    fn test_unset_options_are_cleared() {
        let env = env(&resolve(TestArgs::default()), 1);

        for key in [
            "configuration",
            "loglevel",
            "cleanup",
            "reuse",
            "debugSynchronization",
            "artifactsLocation",
        ] {
            assert_eq!(env.get(key), Some(&None), "{key} should be cleared");
        }
        assert_eq!(var(&env, "maxTestWorkers"), Some("1"));
    }
}
