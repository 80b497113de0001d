use serde::{Deserialize, Serialize};
use tracing::warn;

use fleettag_model::{GroupSelector, LifecycleState, Member, Snapshot};

use super::{ProviderError, TagContext};

/// Group lifecycle value for instances that count as members.
const IN_SERVICE: &str = "InService";

/// Inventory of scaling groups and instances, as exported from the provider.
///
/// ```json
/// { "region": "eu-west-1",
///   "groups": [ { "name": "web-asg", "desiredCapacity": 3,
///                 "instances": [ { "id": "i-1", "lifecycleState": "InService" } ] } ],
///   "instances": [ { "id": "i-1", "name": "web", "state": "running" } ] }
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDocument {
    /// Region the inventory was taken in; unchecked when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
    #[serde(default)]
    pub instances: Vec<InstanceRecord>,
}

/// An auto-scaling group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub name: String,
    pub desired_capacity: u32,
    #[serde(default)]
    pub instances: Vec<GroupInstance>,
}

/// Membership of one instance in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInstance {
    pub id: String,
    pub lifecycle_state: String,
}

/// One compute instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceRecord {
    pub id: String,
    /// Value of the `Name` tag; empty when untagged.
    #[serde(default)]
    pub name: String,
    pub state: String,
}

impl InstanceRecord {
    fn to_member(&self) -> Member {
        Member::new(
            self.id.clone(),
            self.name.clone(),
            LifecycleState::from(self.state.as_str()),
        )
    }
}

impl InventoryDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ProviderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fails if the document belongs to a different region than the run.
    pub fn check_region(&self, ctx: &TagContext) -> Result<(), ProviderError> {
        match &self.region {
            Some(r) if r != ctx.region().as_str() => Err(ProviderError::RegionMismatch {
                inventory: r.clone(),
                requested: ctx.region().to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn instance(&self, id: &str) -> Option<&InstanceRecord> {
        self.instances.iter().find(|i| i.id == id)
    }

    fn group(&self, name: &str) -> Result<&GroupRecord, ProviderError> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| ProviderError::GroupNotFound(name.to_string()))
    }

    /// Current members of `selector`.
    ///
    /// Scaling groups contribute only in-service instances and their desired capacity.
    /// Name patterns match every instance whose name starts with the basename.
    pub fn snapshot(&self, selector: &GroupSelector) -> Result<Snapshot, ProviderError> {
        match selector {
            GroupSelector::ScalingGroup { name } => {
                let group = self.group(name)?;
                let members = group
                    .instances
                    .iter()
                    .filter(|gi| gi.lifecycle_state == IN_SERVICE)
                    .filter_map(|gi| match self.instance(&gi.id) {
                        Some(rec) => Some(rec.to_member()),
                        None => {
                            warn!(group = %name, id = %gi.id, "group lists unknown instance");
                            None
                        }
                    })
                    .collect();
                Ok(Snapshot::new(members).with_desired_size(group.desired_capacity))
            }
            GroupSelector::NamePattern { basename } => Ok(Snapshot::new(
                self.instances
                    .iter()
                    .filter(|i| i.name.starts_with(basename.as_str()))
                    .map(InstanceRecord::to_member)
                    .collect(),
            )),
        }
    }

    /// Name of the first group listing `identity`, regardless of its lifecycle there.
    pub fn locate_group(&self, identity: &str) -> Option<String> {
        self.groups
            .iter()
            .find(|g| g.instances.iter().any(|gi| gi.id == identity))
            .map(|g| g.name.clone())
    }

    /// Set the `Name` of `identity`.
    pub fn rename(&mut self, identity: &str, name: &str) -> Result<(), ProviderError> {
        let rec = self
            .instances
            .iter_mut()
            .find(|i| i.id == identity)
            .ok_or_else(|| ProviderError::MemberNotFound(identity.to_string()))?;
        rec.name = name.to_string();
        Ok(())
    }
}
