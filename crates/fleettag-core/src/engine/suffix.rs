use fleettag_model::SlotNumber;

/// Splits `name` into `(base, digits)` when it ends in `-<one or more ASCII digits>`.
fn split(name: &str) -> Option<(&str, &str)> {
    let (base, digits) = name.rsplit_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((base, digits))
}

/// Parses the numeric suffix of a member name.
///
/// Only the rightmost `-digits` run anchored at the end counts: `web-007` is 7,
/// `web--3` is 3, `web-bar` and `web-` have none. Leading zeros do not affect the
/// value. Runs too large for [`SlotNumber`] saturate, so such a member still counts
/// as tagged and is never renamed.
pub fn parse_suffix(name: &str) -> Option<SlotNumber> {
    let (_, digits) = split(name)?;
    Some(digits.bytes().fold(0 as SlotNumber, |acc, b| {
        acc.saturating_mul(10)
            .saturating_add(SlotNumber::from(b - b'0'))
    }))
}

/// Returns `name` without its numeric suffix, or `name` unchanged if it has none.
pub fn strip_suffix(name: &str) -> &str {
    split(name).map_or(name, |(base, _)| base)
}
