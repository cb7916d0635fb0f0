//! Precedence resolution for a single setting
//!
//! Order: flag, settings under the declared key, settings under the
//! kebab-case alias, default. Falsy settings values (`null`, `false`, `""`)
//! count as absent and fall through to the next source.

use serde_json::Value;

use super::keys::SettingKey;
use crate::common::config::DetoxSettings;
use crate::common::{Error, Result};

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Command-line flag
    Flag,
    /// Settings object, declared camelCase key
    Settings,
    /// Settings object, kebab-case alias
    SettingsAlias,
    /// Built-in default
    Default,
    /// No source supplied a value
    Unset,
}

/// A resolved setting together with the source that won
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: Option<T>,
    pub source: Source,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: Source) -> Self {
        Self {
            value: Some(value),
            source,
        }
    }

    pub fn unset() -> Self {
        Self {
            value: None,
            source: Source::Unset,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// Conversion from a raw settings value
pub trait SettingValue: Sized {
    /// Convert a supplied (non-falsy) JSON value
    fn from_setting(key: &str, value: &Value) -> Result<Self>;
}

impl SettingValue for String {
    fn from_setting(key: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(Error::invalid_setting(
                key,
                &format!("expected a string, found {other}"),
            )),
        }
    }
}

impl SettingValue for bool {
    fn from_setting(key: &str, value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| {
            Error::invalid_setting(key, &format!("expected a boolean, found {value}"))
        })
    }
}

/// Is this settings value present and truthy enough to win?
fn is_supplied(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

fn lookup<T: SettingValue>(settings: &DetoxSettings, key: &str) -> Result<Option<T>> {
    match settings.get(key) {
        Some(value) if is_supplied(value) => T::from_setting(key, value).map(Some),
        _ => Ok(None),
    }
}

/// Resolve one setting across flag, settings object and default
pub fn resolve<T: SettingValue>(
    key: SettingKey,
    flag: Option<T>,
    settings: &DetoxSettings,
    default: Option<T>,
) -> Result<Resolved<T>> {
    if let Some(value) = flag {
        return Ok(Resolved::new(value, Source::Flag));
    }

    if let Some(value) = lookup(settings, key.camel_case())? {
        return Ok(Resolved::new(value, Source::Settings));
    }

    if let Some(alias) = key.alias() {
        if let Some(value) = lookup(settings, &alias)? {
            return Ok(Resolved::new(value, Source::SettingsAlias));
        }
    }

    Ok(match default {
        Some(value) => Resolved::new(value, Source::Default),
        None => Resolved::unset(),
    })
}
