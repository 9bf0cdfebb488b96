//! Markup-safe encoding of JSON-serializable values.
//!
//! Values embedded as page-global exports or storage seeds land in raw
//! script text, not a sandboxed data channel, so the encoded output must
//! never contain a literal `&`, `<`, or `>`. [`encode`] JSON-encodes the
//! value and substitutes those three characters with the numeric escapes
//! `\u0026`, `\u003c`, `\u003e`. Nothing else is altered.
//!
//! Because the substitutions are legal JSON string escapes, the encoded
//! text is itself valid JSON: `serde_json::from_str` on the output of
//! [`encode`] recovers the original value directly. [`decode`] reverses
//! the textual substitution for callers that want the plain encoding back.

use serde::Serialize;

use crate::error::Result;

/// Encodes a value as JSON made safe for inline embedding in markup.
///
/// Replaces `&`, `<`, `>` in the JSON encoding with `\u0026`, `\u003c`,
/// `\u003e`. Unrepresentable values surface
/// [`EscapeError::Serialization`](crate::EscapeError::Serialization).
///
/// ```rust
/// let out = forestage_config::encode(&serde_json::json!({ "a": "<b>&c" })).unwrap();
/// assert_eq!(out, r#"{"a":"\u003cb\u003e\u0026c"}"#);
/// ```
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e"))
}

/// Reverses the textual substitution applied by [`encode`].
///
/// The input is expected to be [`encode`] output; on arbitrary strings the
/// substitution is not information-preserving (a pre-existing literal
/// `&` is indistinguishable from an encoded `&`).
pub fn decode(encoded: &str) -> String {
    encoded
        .replace("\\u0026", "&")
        .replace("\\u003c", "<")
        .replace("\\u003e", ">")
}
