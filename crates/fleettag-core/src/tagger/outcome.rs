use serde::{Deserialize, Serialize};

use fleettag_model::{Identity, SlotNumber};

/// Final result of one tagging run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum TagOutcome {
    /// Nothing to allocate among; no tag written.
    NoCandidates,
    /// Target already carries a suffix; no tag written.
    AlreadyTagged { identity: Identity, name: String },
    /// A new name was handed to the writer.
    Assigned {
        identity: Identity,
        slot: SlotNumber,
        name: String,
    },
}

impl TagOutcome {
    /// Name the target ends up with, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            TagOutcome::NoCandidates => None,
            TagOutcome::AlreadyTagged { name, .. } | TagOutcome::Assigned { name, .. } => {
                Some(name.as_str())
            }
        }
    }
}
