use serde::{Deserialize, Serialize};

use crate::{FleetSize, Member};

/// Membership observed by one provider query.
///
/// No consistency is assumed across queries: every invocation fetches a fresh snapshot.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Members in provider order.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Desired capacity declared by a scaling group; `None` for name-pattern groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_desired_size: Option<FleetSize>,
}

impl Snapshot {
    /// Create a snapshot without a declared size.
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            declared_desired_size: None,
        }
    }

    /// Attach the desired size declared by a scaling group.
    pub fn with_desired_size(mut self, size: FleetSize) -> Self {
        self.declared_desired_size = Some(size);
        self
    }

    /// Returns `true` if no members were observed.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members that are not terminated.
    pub fn live_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| !m.lifecycle().is_terminated())
            .count()
    }

    /// Find a member by identity, including terminated ones.
    pub fn get(&self, identity: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.identity() == identity)
    }
}
