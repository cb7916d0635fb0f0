//! Mocha invocation: every option travels as a command-line flag

use crate::options::ResolvedOptions;

/// Arguments following the mocha executable, in mocha's expected order
pub fn args(opts: &ResolvedOptions) -> Vec<String> {
    let mut args = vec![opts.specs().to_string()];

    if let Some(config) = opts.runner_config.get() {
        args.extend(["--opts".to_string(), config.clone()]);
    }
    if let Some(configuration) = opts.configuration.get() {
        args.extend(["--configuration".to_string(), configuration.clone()]);
    }
    if let Some(loglevel) = opts.loglevel.get() {
        args.extend(["--loglevel".to_string(), loglevel.clone()]);
    }
    if opts.cleanup() {
        args.push("--cleanup".to_string());
    }
    if opts.reuse() {
        args.push("--reuse".to_string());
    }
    if let Some(ms) = opts.debug_synchronization.get() {
        args.extend(["--debug-synchronization".to_string(), ms.to_string()]);
    }
    if let Some(platform) = opts.platform.get() {
        args.extend([
            "--grep".to_string(),
            platform.excluded_tag().to_string(),
            "--invert".to_string(),
        ]);
    }
    if let Some(location) = opts.artifacts_location.get() {
        args.extend(["--artifacts-location".to_string(), location.clone()]);
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TestArgs;
    use crate::common::config::DetoxSettings;
    use crate::options::Platform;

    fn mocha_args(args: TestArgs) -> Vec<String> {
        let opts = ResolvedOptions::resolve(&args, &DetoxSettings::default()).unwrap();
        super::args(&opts)
    }

    #[test]
    fn test_all_flags_in_order() {
        let args = mocha_args(TestArgs {
            specs: Some("e2e/specs".to_string()),
            configuration: Some("ios.sim.debug".to_string()),
            loglevel: Some("verbose".to_string()),
            cleanup: true,
            reuse: true,
            debug_synchronization: Some(None),
            platform: Some(Platform::Ios),
            artifacts_location: Some("/tmp/artifacts".to_string()),
            ..Default::default()
        });

        assert_eq!(
            args,
            vec![
                "e2e/specs",
                "--opts",
                "e2e/mocha.opts",
                "--configuration",
                "ios.sim.debug",
                "--loglevel",
                "verbose",
                "--cleanup",
                "--reuse",
                "--debug-synchronization",
                "3000",
                "--grep",
                ":android:",
                "--invert",
                "--artifacts-location",
                "/tmp/artifacts",
            ]
        );
    }

    #[test]
    fn test_android_greps_out_ios() {
        let args = mocha_args(TestArgs {
            platform: Some(Platform::Android),
            ..Default::default()
        });
        let line = args.join(" ");
        assert!(line.contains("--grep :ios: --invert"));
    }

    #[test]
    fn test_minimal() {
        assert_eq!(mocha_args(TestArgs::default()), vec!["e2e", "--opts", "e2e/mocha.opts"]);
    }

    #[test]
    fn test_explicit_debug_synchronization() {
        let args = mocha_args(TestArgs {
            debug_synchronization: Some(Some(250)),
            ..Default::default()
        });
        assert!(args.join(" ").ends_with("--debug-synchronization 250"));
    }
}
