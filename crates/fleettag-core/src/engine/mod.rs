//! Slot allocation engine.
//!
//! Everything here is a pure function of a membership snapshot: no I/O, no shared state.
//! Independent invocations (one per fleet member) agree on every slot because the
//! decision depends only on identity order and the set of occupied slots.
mod error;
pub use error::AllocError;

mod suffix;
pub use suffix::{parse_suffix, strip_suffix};

mod normalize;
pub use normalize::{Normalized, normalize};

mod allocate;
pub use allocate::{Decision, allocate};

mod format;
pub use format::format_name;
