use fleettag_model::{Digits, SlotNumber};

use super::strip_suffix;

/// Renders `<base>-<slot>` with the slot zero-padded to at least `digits`.
///
/// Any numeric suffix already on `display_name` is replaced, not appended to.
/// Slots wider than `digits` are rendered in full.
pub fn format_name(display_name: &str, slot: SlotNumber, digits: Digits) -> String {
    format!(
        "{}-{:0width$}",
        strip_suffix(display_name),
        slot,
        width = digits.width()
    )
}
