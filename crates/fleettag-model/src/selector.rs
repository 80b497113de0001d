use std::fmt;

use serde::{Deserialize, Serialize};

/// Which set of members a name is allocated within.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupSelector {
    /// Members of a named auto-scaling group. The group also declares a desired size.
    ScalingGroup {
        /// Group name.
        name: String,
    },
    /// Every instance whose current name starts with `basename`.
    NamePattern {
        /// Common name prefix, without the numeric suffix.
        basename: String,
    },
}

impl GroupSelector {
    pub fn scaling_group(name: impl Into<String>) -> Self {
        GroupSelector::ScalingGroup { name: name.into() }
    }

    pub fn name_pattern(basename: impl Into<String>) -> Self {
        GroupSelector::NamePattern {
            basename: basename.into(),
        }
    }

    /// Returns the kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            GroupSelector::ScalingGroup { .. } => "scaling-group",
            GroupSelector::NamePattern { .. } => "name-pattern",
        }
    }
}

impl fmt::Display for GroupSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSelector::ScalingGroup { name } => write!(f, "scaling-group:{name}"),
            GroupSelector::NamePattern { basename } => write!(f, "name-pattern:{basename}*"),
        }
    }
}
