//! Tagging configuration.
//!
//! Everything a run depends on is resolved once at startup and passed down by value:
//! there is no process-wide region or lazily initialised global.
use std::fmt;

use serde::{Deserialize, Serialize};

use fleettag_model::{CollisionPolicy, Digits, ENV_REGION, ENV_REGION_FALLBACK};

use crate::error::CoreError;

/// Allocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagConfig {
    /// Minimum width of the numeric suffix.
    pub digits: Digits,
    /// How duplicate suffixes are resolved.
    pub collision: CollisionPolicy,
    /// Extra membership queries after a retryable allocation error.
    pub refetch_attempts: u32,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            digits: Digits::default(),
            collision: CollisionPolicy::default(),
            refetch_attempts: 1,
        }
    }
}

/// Provider region (e.g. `eu-west-1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::RegionUnresolved);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Resolves the region from an explicit value, then `AWS_REGION`, then `AWS_DEFAULT_REGION`.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, CoreError> {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    /// Same as [`Region::resolve`] with a custom variable lookup.
    pub fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        explicit
            .map(str::to_string)
            .into_iter()
            .chain(lookup(ENV_REGION))
            .chain(lookup(ENV_REGION_FALLBACK))
            .find(|r| !r.trim().is_empty())
            .ok_or(CoreError::RegionUnresolved)
            .and_then(|r| Self::new(r))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn explicit_region_wins() {
        let r = Region::resolve_with(Some("us-east-1"), env(&[(ENV_REGION, "eu-west-1")])).unwrap();
        assert_eq!(r.as_str(), "us-east-1");
    }

    #[test]
    fn falls_back_through_environment() {
        let r = Region::resolve_with(None, env(&[(ENV_REGION_FALLBACK, "ap-south-1")])).unwrap();
        assert_eq!(r.as_str(), "ap-south-1");

        let r = Region::resolve_with(
            Some("  "),
            env(&[(ENV_REGION, "eu-central-1"), (ENV_REGION_FALLBACK, "ap-south-1")]),
        )
        .unwrap();
        assert_eq!(r.as_str(), "eu-central-1");
    }

    #[test]
    fn missing_region_is_an_error() {
        assert!(matches!(
            Region::resolve_with(None, env(&[])),
            Err(CoreError::RegionUnresolved)
        ));
        assert!(Region::new("").is_err());
    }

    #[test]
    fn tag_config_defaults() {
        let cfg: TagConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, TagConfig::default());
        assert_eq!(cfg.digits.get(), 2);
        assert_eq!(cfg.refetch_attempts, 1);

        let cfg: TagConfig =
            serde_json::from_str(r#"{"digits":3,"collision":"reject","refetchAttempts":0}"#).unwrap();
        assert_eq!(cfg.digits.get(), 3);
        assert_eq!(cfg.collision, CollisionPolicy::Reject);
        assert!(serde_json::from_str::<TagConfig>(r#"{"digits":0}"#).is_err());
    }
}
