use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Defines what happens when two live members claim the same numeric suffix.
///
/// Members are visited in identity order while building the occupied-slot map,
/// so "first" and "last" refer to that order, never to provider order.
///
/// Strategies:
/// - `LastWins`: the later member overwrites the earlier claim.
/// - `FirstWins`: the earlier member keeps the claim.
/// - `Reject`: the snapshot is refused and nothing is assigned.
///
/// Under every strategy the losing member is still considered tagged and is never renamed.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The later member in identity order owns the slot.
    #[default]
    LastWins,
    /// The earlier member in identity order owns the slot.
    FirstWins,
    /// A duplicate suffix aborts allocation.
    Reject,
}

impl FromStr for CollisionPolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-wins" | "last" => Ok(CollisionPolicy::LastWins),
            "first-wins" | "first" => Ok(CollisionPolicy::FirstWins),
            "reject" | "error" => Ok(CollisionPolicy::Reject),
            other => Err(ModelError::UnknownCollision(other.to_string())),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CollisionPolicy::LastWins => "last-wins",
            CollisionPolicy::FirstWins => "first-wins",
            CollisionPolicy::Reject => "reject",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_last_wins() {
        assert_eq!(CollisionPolicy::default(), CollisionPolicy::LastWins);
    }

    #[test]
    fn parses_aliases_case_insensitive() {
        assert_eq!("LAST".parse::<CollisionPolicy>().unwrap(), CollisionPolicy::LastWins);
        assert_eq!("first-wins".parse::<CollisionPolicy>().unwrap(), CollisionPolicy::FirstWins);
        assert_eq!(" Reject ".parse::<CollisionPolicy>().unwrap(), CollisionPolicy::Reject);
        assert!(matches!(
            "random".parse::<CollisionPolicy>(),
            Err(ModelError::UnknownCollision(_))
        ));
    }

    #[test]
    fn display_matches_serde_names() {
        for p in [
            CollisionPolicy::LastWins,
            CollisionPolicy::FirstWins,
            CollisionPolicy::Reject,
        ] {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{p}\""));
        }
    }
}
