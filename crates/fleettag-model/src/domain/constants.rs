//! Common model-level constants.
//!
//! Well-known defaults and environment variable names shared by the tagger and the CLI.

/// Default minimum width of the zero-padded numeric suffix (`web-01`).
pub const DEFAULT_DIGITS: u32 = 2;

/// Environment variable consulted for the target identity when none is passed explicitly.
pub const ENV_INSTANCE_ID: &str = "FLEETTAG_INSTANCE_ID";

/// Primary environment variable holding the provider region.
pub const ENV_REGION: &str = "AWS_REGION";

/// Secondary environment variable holding the provider region.
pub const ENV_REGION_FALLBACK: &str = "AWS_DEFAULT_REGION";
