use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use fleettag_model::{GroupSelector, Snapshot};

use super::{InventoryDocument, MembershipProvider, ProviderError, TagContext, TagWriter};

/// Inventory stored as a JSON file on disk.
///
/// Every call re-reads the file, so a snapshot always reflects the latest saved state.
/// Writes go to a sibling temporary file that is then renamed over the original.
/// Writers in other processes are not coordinated with.
#[derive(Debug)]
pub struct InventoryFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<InventoryDocument, ProviderError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        InventoryDocument::from_json(&text)
    }

    async fn save(&self, doc: &InventoryDocument) -> Result<(), ProviderError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, doc.to_json()?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl MembershipProvider for InventoryFile {
    fn name(&self) -> &'static str {
        "inventory-file"
    }

    async fn snapshot(
        &self,
        group: &GroupSelector,
        ctx: &TagContext,
    ) -> Result<Snapshot, ProviderError> {
        let doc = self.load().await?;
        doc.check_region(ctx)?;
        let snap = doc.snapshot(group)?;
        debug!(path = %self.path.display(), %group, members = snap.members.len(), "inventory snapshot");
        Ok(snap)
    }

    async fn locate_group(
        &self,
        identity: &str,
        ctx: &TagContext,
    ) -> Result<Option<String>, ProviderError> {
        let doc = self.load().await?;
        doc.check_region(ctx)?;
        Ok(doc.locate_group(identity))
    }
}

#[async_trait]
impl TagWriter for InventoryFile {
    fn name(&self) -> &'static str {
        "inventory-file"
    }

    async fn write_name(
        &self,
        identity: &str,
        name: &str,
        ctx: &TagContext,
    ) -> Result<(), ProviderError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.load().await?;
        doc.check_region(ctx)?;
        doc.rename(identity, name)?;
        self.save(&doc).await?;

        info!(identity, name, path = %self.path.display(), "name written to inventory");
        Ok(())
    }
}
