use std::fmt;

use crate::config::Region;

/// Per-run values every collaborator call receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagContext {
    region: Region,
}

impl TagContext {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}

impl fmt::Display for TagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagContext(region={})", self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_region() {
        let ctx = TagContext::new(Region::new("eu-west-1").unwrap());
        assert_eq!(ctx.region().as_str(), "eu-west-1");
        assert_eq!(ctx.to_string(), "TagContext(region=eu-west-1)");
    }
}
