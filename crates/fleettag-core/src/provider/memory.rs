use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use fleettag_model::{GroupSelector, Snapshot};

use super::{InventoryDocument, MembershipProvider, ProviderError, TagContext, TagWriter};

/// In-process inventory serving as both provider and writer.
///
/// Writes are visible to the next snapshot, which makes it convenient for
/// simulating a whole fleet booting one member at a time.
#[derive(Debug, Default)]
pub struct MemoryInventory {
    doc: RwLock<InventoryDocument>,
}

impl MemoryInventory {
    pub fn new(doc: InventoryDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }

    /// Copy of the current document.
    pub async fn document(&self) -> InventoryDocument {
        self.doc.read().await.clone()
    }

    /// Current name of `identity`, if the instance exists.
    pub async fn name_of(&self, identity: &str) -> Option<String> {
        self.doc
            .read()
            .await
            .instances
            .iter()
            .find(|i| i.id == identity)
            .map(|i| i.name.clone())
    }
}

#[async_trait]
impl MembershipProvider for MemoryInventory {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn snapshot(
        &self,
        group: &GroupSelector,
        ctx: &TagContext,
    ) -> Result<Snapshot, ProviderError> {
        let doc = self.doc.read().await;
        doc.check_region(ctx)?;
        doc.snapshot(group)
    }

    async fn locate_group(
        &self,
        identity: &str,
        ctx: &TagContext,
    ) -> Result<Option<String>, ProviderError> {
        let doc = self.doc.read().await;
        doc.check_region(ctx)?;
        Ok(doc.locate_group(identity))
    }
}

#[async_trait]
impl TagWriter for MemoryInventory {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn write_name(
        &self,
        identity: &str,
        name: &str,
        ctx: &TagContext,
    ) -> Result<(), ProviderError> {
        let mut doc = self.doc.write().await;
        doc.check_region(ctx)?;
        doc.rename(identity, name)?;
        debug!(identity, name, "name stored in memory inventory");
        Ok(())
    }
}
