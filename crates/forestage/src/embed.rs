//! Helpers that route inline-seeded values through the markup escaper.
//!
//! Anything written into the rendered document as script text — page-global
//! exports, storage seeds — must go through [`forestage_config::encode`] so
//! the embedded JSON cannot open or close a tag. These helpers produce the
//! exact script lines the engine splices in.

use forestage_config::{encode, Result};
use serde::Serialize;

/// A `window.<name> = <value>;` assignment with the value escaped for
/// inline embedding.
///
/// ```rust
/// let line = forestage::embed::global_assignment(
///     "APP_STATE",
///     &serde_json::json!({ "q": "<b>" }),
/// ).unwrap();
/// assert_eq!(line, r#"window.APP_STATE = {"q":"\u003cb\u003e"};"#);
/// ```
pub fn global_assignment<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<String> {
    Ok(format!("window.{name} = {};", encode(value)?))
}

/// A `localStorage.setItem(<key>, <value>);` line, key and stored string
/// both escaped for inline embedding.
///
/// Storage holds strings, so the value is JSON-stringified first and that
/// string is what gets stored.
pub fn storage_entry<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String> {
    let stored = serde_json::to_string(value).map_err(forestage_config::EscapeError::from)?;
    Ok(format!(
        "localStorage.setItem({}, {});",
        encode(key)?,
        encode(&stored)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn global_assignment_escapes_markup_characters() {
        let line = global_assignment("STATE", &json!({ "html": "<i>&</i>" })).unwrap();
        assert!(line.starts_with("window.STATE = "));
        assert!(!line.contains('<'));
        assert!(!line.contains('&'));
    }

    #[test]
    fn storage_entry_stringifies_the_value() {
        let line = storage_entry("cart", &json!({ "items": 2 })).unwrap();
        assert_eq!(
            line,
            r#"localStorage.setItem("cart", "{\"items\":2}");"#
        );
    }

    #[test]
    fn storage_entry_escapes_key_and_value() {
        let line = storage_entry("a&b", &json!("<script>")).unwrap();
        assert!(!line.contains('<'));
        assert!(!line.contains('>'));
        assert!(!line.contains('&'));
    }
}
