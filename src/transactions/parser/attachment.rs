//! Attachment payload decoding.
//!
//! Transfer and mass transfer transactions may carry a short free-form
//! payload, base58-encoded on the wire. Normalization decodes it to UTF-8
//! text while keeping the wire form; a payload that is not valid base58, or
//! whose bytes are not valid UTF-8, decodes to `None` rather than failing
//! the batch.

use log::warn;

use crate::transactions::parsed::Attachment;

/// Decodes a base58 attachment payload into UTF-8 text.
///
/// The raw payload is preserved alongside the decoded text; the empty
/// payload decodes to the empty string.
pub fn decode_attachment(raw: &str) -> Attachment {
    let decoded = decode_base58_text(raw);
    if decoded.is_none() {
        warn!(payload = raw; "Attachment is not base58-encoded UTF-8 text, keeping raw form only");
    }
    Attachment {
        decoded,
        raw: raw.to_string(),
    }
}

fn decode_base58_text(raw: &str) -> Option<String> {
    let bytes = bs58::decode(raw).into_vec().ok()?;
    String::from_utf8(bytes).ok()
}
