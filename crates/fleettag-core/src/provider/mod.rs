//! Collaborator seams: where membership comes from and where names go.
//!
//! The allocation engine never talks to these directly; [`crate::tagger::Tagger`]
//! fetches a snapshot through a [`MembershipProvider`], runs the engine, and hands
//! the formatted name to a [`TagWriter`].
mod error;
pub use error::ProviderError;

mod context;
pub use context::TagContext;

mod document;
pub use document::{GroupInstance, GroupRecord, InstanceRecord, InventoryDocument};

mod memory;
pub use memory::MemoryInventory;

mod file;
pub use file::InventoryFile;

mod dry_run;
pub use dry_run::DryRunWriter;

use async_trait::async_trait;
use fleettag_model::{GroupSelector, Snapshot};

/// Source of fleet membership.
#[async_trait]
pub trait MembershipProvider: Send + Sync {
    /// Provider name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Query the current members of `group`.
    ///
    /// Scaling groups also report their declared desired size.
    async fn snapshot(&self, group: &GroupSelector, ctx: &TagContext)
    -> Result<Snapshot, ProviderError>;

    /// Name of the scaling group containing `identity`, if any.
    async fn locate_group(
        &self,
        identity: &str,
        ctx: &TagContext,
    ) -> Result<Option<String>, ProviderError>;
}

/// Sink that persists a member's new name.
#[async_trait]
pub trait TagWriter: Send + Sync {
    /// Writer name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Set the name tag of `identity` to `name`.
    async fn write_name(&self, identity: &str, name: &str, ctx: &TagContext)
    -> Result<(), ProviderError>;
}
