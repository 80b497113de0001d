use serde::{Deserialize, Serialize};

use crate::Identity;

/// Lifecycle of a fleet member as reported by the membership provider.
///
/// Only `Terminated` is significant to slot allocation: terminated members are dropped
/// before any slot is computed.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleState {
    /// Running / in service.
    #[default]
    Active,
    /// Gone for good; never counted.
    Terminated,
    /// Pending, stopping, stopped and any state the provider adds later.
    Other,
}

impl LifecycleState {
    /// Returns `true` if the member must be excluded from slot computation.
    pub fn is_terminated(&self) -> bool {
        matches!(self, LifecycleState::Terminated)
    }
}

impl From<&str> for LifecycleState {
    /// Maps a provider state name onto a lifecycle.
    ///
    /// Matching is case-insensitive; unrecognised names become [`LifecycleState::Other`].
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" | "active" | "inservice" | "in-service" => LifecycleState::Active,
            "terminated" => LifecycleState::Terminated,
            _ => LifecycleState::Other,
        }
    }
}

/// One member of a fleet, as observed in a single membership query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Provider identity, immutable.
    identity: Identity,
    /// Current value of the name tag (may be empty).
    #[serde(default)]
    display_name: String,
    /// Current lifecycle.
    #[serde(default)]
    lifecycle: LifecycleState,
}

impl Member {
    /// Create a new member.
    pub fn new<I, N>(identity: I, display_name: N, lifecycle: LifecycleState) -> Self
    where
        I: Into<Identity>,
        N: Into<String>,
    {
        Self {
            identity: identity.into(),
            display_name: display_name.into(),
            lifecycle,
        }
    }

    /// Create an active member.
    pub fn active<I, N>(identity: I, display_name: N) -> Self
    where
        I: Into<Identity>,
        N: Into<String>,
    {
        Self::new(identity, display_name, LifecycleState::Active)
    }

    /// Get the identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Get the display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Get the lifecycle state.
    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_states_map_onto_lifecycle() {
        assert_eq!(LifecycleState::from("running"), LifecycleState::Active);
        assert_eq!(LifecycleState::from("InService"), LifecycleState::Active);
        assert_eq!(LifecycleState::from("TERMINATED"), LifecycleState::Terminated);
        assert_eq!(LifecycleState::from("stopped"), LifecycleState::Other);
        assert_eq!(LifecycleState::from("shutting-down"), LifecycleState::Other);
        assert_eq!(LifecycleState::from(""), LifecycleState::Other);
    }

    #[test]
    fn only_terminated_is_terminated() {
        assert!(LifecycleState::Terminated.is_terminated());
        assert!(!LifecycleState::Active.is_terminated());
        assert!(!LifecycleState::Other.is_terminated());
    }

    #[test]
    fn active_constructor_sets_fields() {
        let m = Member::active("i-1", "web");
        assert_eq!(m.identity(), "i-1");
        assert_eq!(m.display_name(), "web");
        assert_eq!(m.lifecycle(), LifecycleState::Active);
    }

    #[test]
    fn serde_uses_camel_case_and_defaults() {
        let m = Member::new("i-9", "db-02", LifecycleState::Terminated);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"displayName\":\"db-02\""));
        assert!(json.contains("\"lifecycle\":\"terminated\""));

        let bare: Member = serde_json::from_str(r#"{"identity":"i-3"}"#).unwrap();
        assert_eq!(bare.display_name(), "");
        assert_eq!(bare.lifecycle(), LifecycleState::Active);
    }
}
