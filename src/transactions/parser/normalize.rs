//! Canonicalization of wire-level recipient strings.

use crate::models::Recipient;

const ALIAS_MARKER: &str = "alias:";

/// Canonicalizes a wire recipient.
///
/// Alias references arrive as `alias:<chain>:<name>`; the marker and chain
/// id are stripped and the name kept. Anything else is a direct address.
pub fn normalize_recipient(raw: &str) -> Recipient {
    match raw.strip_prefix(ALIAS_MARKER) {
        Some(rest) => match rest.split_once(':') {
            Some((_chain, name)) => Recipient::Alias(name.to_string()),
            None => Recipient::Alias(rest.to_string()),
        },
        None => Recipient::Address(raw.to_string()),
    }
}
