//! Setting key alias table
//!
//! Each setting is declared once under its camelCase name. The kebab-case
//! alias is derived, so `runnerConfig` is also accepted as `runner-config`.

use std::fmt;

use crate::common::naming::camel_to_kebab_case;

/// Every setting the `test` command resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Specs,
    TestRunner,
    RunnerConfig,
    Loglevel,
    Configuration,
    Reuse,
    Cleanup,
    DebugSynchronization,
    ArtifactsLocation,
    Platform,
}

impl SettingKey {
    pub const ALL: [SettingKey; 10] = [
        SettingKey::Specs,
        SettingKey::TestRunner,
        SettingKey::RunnerConfig,
        SettingKey::Loglevel,
        SettingKey::Configuration,
        SettingKey::Reuse,
        SettingKey::Cleanup,
        SettingKey::DebugSynchronization,
        SettingKey::ArtifactsLocation,
        SettingKey::Platform,
    ];

    /// Declared (camelCase) spelling
    pub fn camel_case(self) -> &'static str {
        match self {
            SettingKey::Specs => "specs",
            SettingKey::TestRunner => "testRunner",
            SettingKey::RunnerConfig => "runnerConfig",
            SettingKey::Loglevel => "loglevel",
            SettingKey::Configuration => "configuration",
            SettingKey::Reuse => "reuse",
            SettingKey::Cleanup => "cleanup",
            SettingKey::DebugSynchronization => "debugSynchronization",
            SettingKey::ArtifactsLocation => "artifactsLocation",
            SettingKey::Platform => "platform",
        }
    }

    /// Alternate (kebab-case) spelling, if it differs from the declared one
    pub fn alias(self) -> Option<String> {
        let kebab = camel_to_kebab_case(self.camel_case());
        (kebab != self.camel_case()).then_some(kebab)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.camel_case())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(SettingKey::RunnerConfig.alias().as_deref(), Some("runner-config"));
        assert_eq!(SettingKey::TestRunner.alias().as_deref(), Some("test-runner"));
        assert_eq!(
            SettingKey::ArtifactsLocation.alias().as_deref(),
            Some("artifacts-location")
        );
        assert!(SettingKey::Specs.alias().is_none());
        assert!(SettingKey::Loglevel.alias().is_none());
    }

    #[test]
    fn test_all_keys_unique() {
        let mut names: Vec<_> = SettingKey::ALL.iter().map(|k| k.camel_case()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SettingKey::ALL.len());
    }
}
