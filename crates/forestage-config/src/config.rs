//! The canonical rendering configuration and its merge policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The set of rendering options understood by the pre-rendering engine.
///
/// A `Config` doubles as a *partial* configuration: `None` scalars and empty
/// collections mean "field absent", so the same type describes both the
/// canonical state and an incremental patch. [`Config::default`] is the
/// empty partial.
///
/// Each field belongs to one merge kind (see [`Config::merge`]); no field's
/// policy depends on another field's value, and there is no removal
/// operation — a scalar stays set until overwritten, map entries accumulate
/// across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP status the engine should serve for this page. Scalar-replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Extra settle time (ms) before the engine captures the page.
    /// Scalar-replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_delay_ms: Option<u64>,

    /// Whether the engine should follow redirects while capturing.
    /// Scalar-replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,

    /// Kill switch: when set, the client treats the engine as absent.
    /// Flag (plain replace).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// CSS selectors for nodes the engine strips from the capture.
    /// List-append.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_nodes: Vec<String>,

    /// Page globals the engine seeds into the rendered document.
    /// Map-merge: overwritten key-by-key, never wholesale replaced.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub globals: BTreeMap<String, Value>,

    /// Storage entries the engine seeds into the rendered document.
    /// Map-merge.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub storage_seed: BTreeMap<String, Value>,
}

impl Config {
    /// Folds a partial configuration into this one, returning the result.
    ///
    /// Neither argument is mutated. Per-field policy:
    ///
    /// - scalar / flag: the patch's value wins when present, otherwise the
    ///   previous value is carried over.
    /// - list-append: previous entries followed by the patch's entries,
    ///   order preserved, no de-duplication.
    /// - map-merge: shallow merge, patch keys overwrite on conflict, keys
    ///   unique to the previous map survive.
    ///
    /// Merging the empty partial is a no-op.
    #[must_use]
    pub fn merge(&self, patch: &Config) -> Config {
        let mut globals = self.globals.clone();
        globals.extend(patch.globals.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut storage_seed = self.storage_seed.clone();
        storage_seed.extend(patch.storage_seed.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut remove_nodes = self.remove_nodes.clone();
        remove_nodes.extend(patch.remove_nodes.iter().cloned());

        Config {
            status: patch.status.or(self.status),
            render_delay_ms: patch.render_delay_ms.or(self.render_delay_ms),
            follow_redirects: patch.follow_redirects.or(self.follow_redirects),
            disabled: patch.disabled.or(self.disabled),
            remove_nodes,
            globals,
            storage_seed,
        }
    }

    /// True when the disable flag is set.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Sets the status code field.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the render delay field.
    #[must_use]
    pub fn with_render_delay_ms(mut self, millis: u64) -> Self {
        self.render_delay_ms = Some(millis);
        self
    }

    /// Sets the redirect-following field.
    #[must_use]
    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = Some(follow);
        self
    }

    /// Sets the disable flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Appends a node-removal selector.
    #[must_use]
    pub fn remove_node(mut self, selector: impl Into<String>) -> Self {
        self.remove_nodes.push(selector.into());
        self
    }

    /// Adds (or overwrites) a page-global export.
    #[must_use]
    pub fn export_global(mut self, name: impl Into<String>, value: Value) -> Self {
        self.globals.insert(name.into(), value);
        self
    }

    /// Adds (or overwrites) a storage-seed entry.
    #[must_use]
    pub fn seed_storage(mut self, key: impl Into<String>, value: Value) -> Self {
        self.storage_seed.insert(key.into(), value);
        self
    }
}
