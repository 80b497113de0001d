use serde::{Deserialize, Serialize};

use crate::{Digits, Identity, Member, SlotNumber};

/// A live member paired with the slot parsed from its current name, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMember {
    pub member: Member,
    pub slot: Option<SlotNumber>,
}

impl TaggedMember {
    /// Returns `true` if the member already carries a numeric suffix.
    #[inline]
    pub fn is_tagged(&self) -> bool {
        self.slot.is_some()
    }

    #[inline]
    pub fn identity(&self) -> &str {
        self.member.identity()
    }
}

/// The single output of one allocation: give `slot` to `member_identity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAssignment {
    pub member_identity: Identity,
    pub slot: SlotNumber,
    pub digits: Digits,
}
