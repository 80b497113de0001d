mod domain;
pub use domain::{DEFAULT_DIGITS, ENV_INSTANCE_ID, ENV_REGION, ENV_REGION_FALLBACK};
pub use domain::{Digits, FleetSize, Identity, LifecycleState, Member, SlotNumber, Snapshot};
pub use domain::{SlotAssignment, TaggedMember};

mod error;
pub use error::{ModelError, ModelResult};

mod selector;
pub use selector::GroupSelector;

mod strategy;
pub use strategy::CollisionPolicy;
