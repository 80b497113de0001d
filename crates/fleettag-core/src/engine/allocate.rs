use fleettag_model::{Digits, FleetSize, Identity, SlotAssignment};
use tracing::{debug, instrument, trace};

use super::{AllocError, Normalized};

/// Outcome of a successful allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The target already carries a suffix; it is never renamed.
    NoAction {
        identity: Identity,
        display_name: String,
    },
    /// Give the target this slot.
    Assign(SlotAssignment),
}

/// Decides which slot, if any, `target` should receive.
///
/// The n-th untagged member in identity order receives the n-th smallest free slot
/// in `[1, fleet_size]`. Every member runs the same walk over the same snapshot, so
/// all of them agree on every slot without coordinating.
#[instrument(level = "debug", skip(normalized), fields(live = normalized.members().len()))]
pub fn allocate(
    normalized: &Normalized,
    fleet_size: FleetSize,
    digits: Digits,
    target: &str,
) -> Result<Decision, AllocError> {
    let Some(me) = normalized.get(target) else {
        return Err(AllocError::UnknownMember(target.to_string()));
    };

    if me.is_tagged() {
        debug!(name = me.member.display_name(), "member already tagged");
        return Ok(Decision::NoAction {
            identity: target.to_string(),
            display_name: me.member.display_name().to_string(),
        });
    }

    let position = normalized
        .members()
        .iter()
        .take_while(|m| m.identity() != target)
        .filter(|m| !m.is_tagged())
        .count();
    trace!(position, "untagged members ahead of target");

    match normalized.availability(fleet_size).nth(position) {
        Some(slot) => {
            debug!(slot, "slot selected");
            Ok(Decision::Assign(SlotAssignment {
                member_identity: target.to_string(),
                slot,
                digits,
            }))
        }
        None => Err(AllocError::SlotExhausted {
            identity: target.to_string(),
            position,
            available: normalized.availability(fleet_size).count(),
        }),
    }
}
