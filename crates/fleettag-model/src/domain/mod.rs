mod member;
pub use member::{LifecycleState, Member};

mod snapshot;
pub use snapshot::Snapshot;

mod digits;
pub use digits::Digits;

mod assignment;
pub use assignment::{SlotAssignment, TaggedMember};

mod constants;
pub use constants::{DEFAULT_DIGITS, ENV_INSTANCE_ID, ENV_REGION, ENV_REGION_FALLBACK};

/// Opaque, provider-issued member identifier (e.g. an EC2 instance id).
///
/// Unique within a snapshot and never changes for the life of a member.
pub type Identity = String;

/// Numeric suffix carried by a member name (`web-03` has slot `3`).
pub type SlotNumber = u32;

/// Number of slots the fleet is expected to occupy.
///
/// Always `max(declared desired size, non-terminated member count)`.
pub type FleetSize = u32;
