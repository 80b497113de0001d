use fleettag_model::{GroupSelector, Identity};

use crate::error::CoreError;

/// What to tag and where to look for its peers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRequest {
    target: Identity,
    scaling_group: Option<String>,
    basename: Option<String>,
}

impl TagRequest {
    /// Request a name for `target`, letting the provider locate its scaling group.
    pub fn new(target: impl Into<Identity>) -> Result<Self, CoreError> {
        let target = target.into();
        if target.trim().is_empty() {
            return Err(CoreError::InvalidRequest("target identity is empty".into()));
        }
        Ok(Self {
            target,
            scaling_group: None,
            basename: None,
        })
    }

    /// Allocate within this scaling group.
    pub fn with_scaling_group(mut self, name: impl Into<String>) -> Self {
        self.scaling_group = Some(name.into());
        self
    }

    /// Allocate among instances whose name starts with `basename`, unless the
    /// target turns out to belong to a scaling group.
    pub fn with_basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn scaling_group(&self) -> Option<&str> {
        self.scaling_group.as_deref()
    }

    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }

    /// Selector fixed by the request alone, before any provider lookup.
    ///
    /// A scaling group and a basename are mutually exclusive.
    pub(crate) fn explicit_selector(&self) -> Result<Option<GroupSelector>, CoreError> {
        match (&self.scaling_group, &self.basename) {
            (Some(_), Some(_)) => Err(CoreError::InvalidRequest(
                "cannot define both a scaling group and a basename".into(),
            )),
            (Some(group), None) => Ok(Some(GroupSelector::scaling_group(group.clone()))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_target_is_rejected() {
        assert!(matches!(TagRequest::new(" "), Err(CoreError::InvalidRequest(_))));
    }

    #[test]
    fn scaling_group_is_explicit() {
        let req = TagRequest::new("i-1").unwrap().with_scaling_group("web-asg");
        assert_eq!(
            req.explicit_selector().unwrap(),
            Some(GroupSelector::scaling_group("web-asg"))
        );
    }

    #[test]
    fn basename_needs_group_lookup_first() {
        let req = TagRequest::new("i-1").unwrap().with_basename("web");
        assert_eq!(req.explicit_selector().unwrap(), None);
        assert_eq!(req.basename(), Some("web"));
    }

    #[test]
    fn group_and_basename_conflict() {
        let req = TagRequest::new("i-1")
            .unwrap()
            .with_scaling_group("web-asg")
            .with_basename("web");
        assert!(matches!(req.explicit_selector(), Err(CoreError::InvalidRequest(_))));
    }
}
