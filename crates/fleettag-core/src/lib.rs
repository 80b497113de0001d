pub mod config;
pub mod engine;
pub mod error;
pub mod provider;
pub mod tagger;

pub mod prelude {
    pub use crate::config::{Region, TagConfig};
    pub use crate::engine::{AllocError, Decision, Normalized, allocate, format_name, normalize};
    pub use crate::error::CoreError;
    pub use crate::provider::{
        DryRunWriter, InventoryFile, MemoryInventory, MembershipProvider, ProviderError,
        TagContext, TagWriter,
    };
    pub use crate::tagger::{TagOutcome, TagRequest, Tagger};
}
