use async_trait::async_trait;
use tracing::info;

use super::{ProviderError, TagContext, TagWriter};

/// Writer that only logs the name it would have applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunWriter;

#[async_trait]
impl TagWriter for DryRunWriter {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    async fn write_name(
        &self,
        identity: &str,
        name: &str,
        ctx: &TagContext,
    ) -> Result<(), ProviderError> {
        info!(identity, name, region = %ctx.region(), "dry run, name not written");
        Ok(())
    }
}
