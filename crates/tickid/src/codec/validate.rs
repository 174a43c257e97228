use super::{COMPACT_LEN, HEX_LEN, NO_VALUE, compact, hex};

/// Returns `true` if `s` is a well-formed identifier in either text form.
///
/// Checks the length (24 for hex, 16 for compact) and that every character
/// belongs to that form's alphabet. Nothing is decoded.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    match s.len() {
        HEX_LEN => is_valid_hex(s),
        COMPACT_LEN => is_valid_compact(s),
        _ => false,
    }
}

/// Returns `true` if `s` is exactly 24 hex characters, either case.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    s.len() == HEX_LEN && all_in(s, &hex::LOOKUP)
}

/// Returns `true` if `s` is exactly 16 compact symbols.
#[must_use]
pub fn is_valid_compact(s: &str) -> bool {
    s.len() == COMPACT_LEN && all_in(s, &compact::LOOKUP)
}

fn all_in(s: &str, lookup: &[u8; 256]) -> bool {
    s.bytes().all(|b| lookup[usize::from(b)] != NO_VALUE)
}
