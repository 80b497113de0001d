//! Tagging run: resolve the group, fetch membership, allocate, write.
//!
//! The engine is re-run from a fresh snapshot on every attempt; nothing is cached
//! between attempts or between runs.
mod outcome;
pub use outcome::TagOutcome;

mod request;
pub use request::TagRequest;

use std::sync::Arc;

use fleettag_model::{GroupSelector, SlotAssignment};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::TagConfig,
    engine::{AllocError, Decision, allocate, format_name, normalize},
    error::CoreError,
    provider::{MembershipProvider, TagContext, TagWriter},
};

/// What one attempt decided for the target.
enum Plan {
    Keep(String),
    Rename(SlotAssignment, String),
}

/// Runs tagging for one member against a provider and a writer.
pub struct Tagger {
    provider: Arc<dyn MembershipProvider>,
    writer: Arc<dyn TagWriter>,
    config: TagConfig,
    ctx: TagContext,
}

impl Tagger {
    pub fn new(
        provider: Arc<dyn MembershipProvider>,
        writer: Arc<dyn TagWriter>,
        config: TagConfig,
        ctx: TagContext,
    ) -> Self {
        Self {
            provider,
            writer,
            config,
            ctx,
        }
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Tag `req.target()` if it has no suffix yet.
    ///
    /// Retryable allocation errors trigger a fresh membership query, up to
    /// `refetch_attempts` times. No tag is written unless a slot was allocated.
    #[instrument(
        level = "info",
        skip(self, req),
        fields(target = %req.target(), provider = self.provider.name(), writer = self.writer.name())
    )]
    pub async fn run(&self, req: &TagRequest) -> Result<TagOutcome, CoreError> {
        let Some(group) = self.resolve_group(req).await? else {
            info!("no scaling group or basename, unable to determine a tagging strategy");
            return Ok(TagOutcome::NoCandidates);
        };

        let mut attempt = 0;
        let plan = loop {
            match self.plan(&group, req.target()).await {
                Ok(plan) => break plan,
                Err(CoreError::Alloc(AllocError::NoCandidates)) => {
                    info!(%group, "no live members, nothing to tag");
                    return Ok(TagOutcome::NoCandidates);
                }
                Err(CoreError::Alloc(e))
                    if e.is_retryable() && attempt < self.config.refetch_attempts =>
                {
                    attempt += 1;
                    warn!(error = %e, attempt, "allocation failed on stale membership, re-fetching");
                }
                Err(e) => return Err(e),
            }
        };

        match plan {
            Plan::Keep(name) => {
                info!(%name, "already tagged");
                Ok(TagOutcome::AlreadyTagged {
                    identity: req.target().to_string(),
                    name,
                })
            }
            Plan::Rename(assignment, name) => {
                info!(%name, slot = assignment.slot, "assigning new name");
                self.writer
                    .write_name(&assignment.member_identity, &name, &self.ctx)
                    .await?;
                Ok(TagOutcome::Assigned {
                    identity: assignment.member_identity,
                    slot: assignment.slot,
                    name,
                })
            }
        }
    }

    /// Picks the membership group the target is allocated within.
    ///
    /// An explicit scaling group wins; otherwise the group containing the target
    /// is looked up, and only then does the basename apply.
    async fn resolve_group(&self, req: &TagRequest) -> Result<Option<GroupSelector>, CoreError> {
        if let Some(explicit) = req.explicit_selector()? {
            return Ok(Some(explicit));
        }

        if let Some(name) = self.provider.locate_group(req.target(), &self.ctx).await? {
            info!(group = %name, "member belongs to scaling group");
            return Ok(Some(GroupSelector::scaling_group(name)));
        }

        Ok(req.basename().map(|b| GroupSelector::name_pattern(b)))
    }

    async fn plan(&self, group: &GroupSelector, target: &str) -> Result<Plan, CoreError> {
        let snapshot = self.provider.snapshot(group, &self.ctx).await?;
        debug!(%group, observed = snapshot.members.len(), "membership fetched");

        let normalized = normalize(&snapshot, self.config.collision)?;
        let fleet_size = normalized.fleet_size(snapshot.declared_desired_size);

        match allocate(&normalized, fleet_size, self.config.digits, target)? {
            Decision::NoAction { display_name, .. } => Ok(Plan::Keep(display_name)),
            Decision::Assign(assignment) => {
                let current = normalized
                    .get(target)
                    .map(|m| m.member.display_name())
                    .unwrap_or_default();
                let name = format_name(current, assignment.slot, assignment.digits);
                Ok(Plan::Rename(assignment, name))
            }
        }
    }
}
