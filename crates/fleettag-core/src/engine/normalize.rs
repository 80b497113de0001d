use std::collections::{BTreeMap, btree_map::Entry};

use fleettag_model::{CollisionPolicy, FleetSize, Identity, Member, SlotNumber, Snapshot, TaggedMember};
use tracing::{debug, trace, warn};

use super::{AllocError, parse_suffix};

/// Canonical working set derived from one snapshot.
///
/// Holds only live members, deduplicated and sorted by identity, plus the map of
/// occupied slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    members: Vec<TaggedMember>,
    used: BTreeMap<SlotNumber, Identity>,
}

impl Normalized {
    /// Live members in ascending identity order.
    pub fn members(&self) -> &[TaggedMember] {
        &self.members
    }

    /// Occupied slots and the member recorded as owning each.
    pub fn used(&self) -> &BTreeMap<SlotNumber, Identity> {
        &self.used
    }

    /// Look up a live member by identity.
    pub fn get(&self, identity: &str) -> Option<&TaggedMember> {
        self.members
            .binary_search_by(|m| m.identity().cmp(identity))
            .ok()
            .map(|i| &self.members[i])
    }

    /// Number of members still waiting for a suffix.
    pub fn untagged_count(&self) -> usize {
        self.members.iter().filter(|m| !m.is_tagged()).count()
    }

    /// `max(declared, live member count)`.
    ///
    /// A stale or missing declared size never shrinks the fleet below what was observed.
    pub fn fleet_size(&self, declared: Option<FleetSize>) -> FleetSize {
        let observed = FleetSize::try_from(self.members.len()).unwrap_or(FleetSize::MAX);
        declared.unwrap_or(0).max(observed)
    }

    /// Ascending free slots in `[1, fleet_size]`.
    pub fn availability(&self, fleet_size: FleetSize) -> impl Iterator<Item = SlotNumber> + '_ {
        (1..=fleet_size).filter(move |n| !self.used.contains_key(n))
    }
}

/// Builds the canonical working set for `snapshot`.
///
/// Terminated members are dropped. Repeated identities keep the last entry seen in
/// provider order. Members are then walked in identity order to record occupied
/// slots; duplicate suffixes are resolved by `policy`.
pub fn normalize(snapshot: &Snapshot, policy: CollisionPolicy) -> Result<Normalized, AllocError> {
    let mut by_identity: BTreeMap<&str, &Member> = BTreeMap::new();
    for member in &snapshot.members {
        if by_identity.insert(member.identity(), member).is_some() {
            trace!(identity = member.identity(), "duplicate identity in snapshot, keeping latest");
        }
    }

    let members: Vec<TaggedMember> = by_identity
        .into_values()
        .filter(|m| !m.lifecycle().is_terminated())
        .map(|m| TaggedMember {
            member: m.clone(),
            slot: parse_suffix(m.display_name()),
        })
        .collect();

    if members.is_empty() {
        debug!(observed = snapshot.members.len(), "no live members in snapshot");
        return Err(AllocError::NoCandidates);
    }

    let mut used: BTreeMap<SlotNumber, Identity> = BTreeMap::new();
    for tagged in &members {
        let Some(slot) = tagged.slot else { continue };
        match used.entry(slot) {
            Entry::Vacant(e) => {
                e.insert(tagged.identity().to_string());
            }
            Entry::Occupied(mut e) => {
                warn!(
                    slot,
                    first = %e.get(),
                    second = tagged.identity(),
                    policy = %policy,
                    "slot claimed by more than one member"
                );
                match policy {
                    CollisionPolicy::LastWins => {
                        e.insert(tagged.identity().to_string());
                    }
                    CollisionPolicy::FirstWins => {}
                    CollisionPolicy::Reject => {
                        return Err(AllocError::DuplicateSlot {
                            slot,
                            first: e.get().clone(),
                            second: tagged.identity().to_string(),
                        });
                    }
                }
            }
        }
    }

    debug!(live = members.len(), occupied = used.len(), "snapshot normalized");
    Ok(Normalized { members, used })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleettag_model::LifecycleState;

    fn snap(members: Vec<Member>) -> Snapshot {
        Snapshot::new(members)
    }

    #[test]
    fn empty_snapshot_has_no_candidates() {
        let res = normalize(&Snapshot::default(), CollisionPolicy::default());
        assert_eq!(res, Err(AllocError::NoCandidates));
    }

    #[test]
    fn all_terminated_has_no_candidates() {
        let s = snap(vec![
            Member::new("i-1", "web-01", LifecycleState::Terminated),
            Member::new("i-2", "web", LifecycleState::Terminated),
        ]);
        assert_eq!(normalize(&s, CollisionPolicy::default()), Err(AllocError::NoCandidates));
    }

    #[test]
    fn sorts_by_identity_and_drops_terminated() {
        let s = snap(vec![
            Member::active("i-c", "web"),
            Member::new("i-z", "web-02", LifecycleState::Terminated),
            Member::active("i-a", "web-03"),
            Member::new("i-b", "web", LifecycleState::Other),
        ]);
        let n = normalize(&s, CollisionPolicy::default()).unwrap();

        let ids: Vec<_> = n.members().iter().map(|m| m.identity()).collect();
        assert_eq!(ids, ["i-a", "i-b", "i-c"]);
        assert_eq!(n.used().len(), 1);
        assert_eq!(n.used().get(&3).map(String::as_str), Some("i-a"));
        assert!(!n.used().contains_key(&2), "terminated member must not occupy a slot");
        assert_eq!(n.untagged_count(), 2);
    }

    #[test]
    fn duplicate_identity_keeps_latest_entry() {
        let s = snap(vec![
            Member::active("i-1", "web"),
            Member::new("i-1", "web", LifecycleState::Terminated),
        ]);
        assert_eq!(normalize(&s, CollisionPolicy::default()), Err(AllocError::NoCandidates));

        let s = snap(vec![Member::active("i-1", "web"), Member::active("i-1", "web-02")]);
        let n = normalize(&s, CollisionPolicy::default()).unwrap();
        assert_eq!(n.members().len(), 1);
        assert_eq!(n.members()[0].slot, Some(2));
    }

    #[test]
    fn collision_policies() {
        let s = snap(vec![
            Member::active("i-2", "web-01"),
            Member::active("i-1", "web-01"),
        ]);

        let last = normalize(&s, CollisionPolicy::LastWins).unwrap();
        assert_eq!(last.used().get(&1).map(String::as_str), Some("i-2"));

        let first = normalize(&s, CollisionPolicy::FirstWins).unwrap();
        assert_eq!(first.used().get(&1).map(String::as_str), Some("i-1"));

        assert_eq!(
            normalize(&s, CollisionPolicy::Reject),
            Err(AllocError::DuplicateSlot {
                slot: 1,
                first: "i-1".into(),
                second: "i-2".into(),
            })
        );
    }

    #[test]
    fn fleet_size_is_at_least_live_count() {
        let s = snap(vec![Member::active("i-1", "web"), Member::active("i-2", "web")]);
        let n = normalize(&s, CollisionPolicy::default()).unwrap();

        assert_eq!(n.fleet_size(None), 2);
        assert_eq!(n.fleet_size(Some(1)), 2);
        assert_eq!(n.fleet_size(Some(5)), 5);
    }

    #[test]
    fn availability_skips_occupied_slots() {
        let s = snap(vec![
            Member::active("i-1", "web-01"),
            Member::active("i-2", "web-03"),
            Member::active("i-3", "web"),
        ]);
        let n = normalize(&s, CollisionPolicy::default()).unwrap();

        let free: Vec<_> = n.availability(5).collect();
        assert_eq!(free, [2, 4, 5]);
        assert_eq!(n.availability(0).count(), 0);
    }
}
