use thiserror::Error;

use fleettag_model::{Identity, SlotNumber};

/// Reasons an allocation produced no assignment.
///
/// None of these ever fall back to a guessed slot: the caller must not write a tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    /// Empty snapshot, or every member terminated. A successful no-op for the caller.
    #[error("no live members to allocate among")]
    NoCandidates,

    /// Target is not a live member of the snapshot. Re-fetch membership and retry.
    #[error("member {0} is not part of the live membership")]
    UnknownMember(Identity),

    /// Fewer free slots than untagged members ahead of the target; the snapshot is stale.
    #[error("no free slot for {identity}: position {position} but only {available} free")]
    SlotExhausted {
        identity: Identity,
        position: usize,
        available: usize,
    },

    /// Two members carry the same suffix and the collision policy is `reject`.
    #[error("slot {slot} claimed by both {first} and {second}")]
    DuplicateSlot {
        slot: SlotNumber,
        first: Identity,
        second: Identity,
    },
}

impl AllocError {
    /// Returns `true` if a fresh membership query may resolve the error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AllocError::UnknownMember(_) | AllocError::SlotExhausted { .. }
        )
    }
}
