//! Text decoding.

use encoding_rs::Encoding;

use crate::error::{IngestError, Result};

/// Look up an encoding by WHATWG label (`utf-8`, `latin1`, `windows-1252`, ...).
///
/// Note that `latin1` and `iso-8859-1` resolve to windows-1252 per WHATWG.
///
/// Records are split on raw bytes before fields are decoded, so only
/// ASCII-compatible encodings are accepted; UTF-16 is rejected with
/// [`IngestError::UnsupportedEncoding`].
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let encoding =
        Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
            label: label.to_string(),
        })?;
    if !encoding.is_ascii_compatible() {
        return Err(IngestError::UnsupportedEncoding {
            label: label.to_string(),
            encoding: encoding.name(),
        });
    }
    Ok(encoding)
}

/// Decode one field without replacement characters.
///
/// Returns `None` when the bytes are malformed for `encoding`.
pub fn decode_field(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(std::borrow::Cow::into_owned)
}
