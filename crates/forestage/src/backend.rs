//! The capability seam between the client and the hosted rendering engine.

use std::time::Duration;

use forestage_config::Config;
use forestage_wait::ResolveHandle;
use serde::{Deserialize, Serialize};

/// The alternate-network address assigned to the page's host.
///
/// A read-only fact pair fetched on demand from the engine; the client
/// never caches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentAddress {
    /// Canonical alternate-network domain.
    pub domain: String,
    /// Effective hostname for the current request, subdomain included.
    pub hostname: String,
}

/// Everything the engine needs to track one pending wait token.
#[derive(Debug, Clone)]
pub struct WaitRegistration {
    /// Marker string the engine matches against rendered-element attributes.
    pub marker: String,
    /// How long the engine should wait before giving up. A hint — the
    /// engine may resolve earlier or later.
    pub timeout_hint: Duration,
    /// The engine's resolution handle; firing it on marker match or timeout
    /// commutes with explicit resolution on the page side.
    pub handle: ResolveHandle,
}

/// Capabilities the hosted rendering engine exposes to the client.
///
/// Every method has a degraded default, so an engine implements only what it
/// supports: `None`/`false` from a capability makes the
/// [`Client`](crate::Client) fall back to its offline behavior for that
/// operation instead of failing. An entirely absent engine is modeled by
/// constructing the client with no backend at all.
pub trait RendererBackend: Send + Sync {
    /// Engine-side canonical merge. Returning `None` means the engine does
    /// not take over merging and the client's own algorithm runs; an engine
    /// that does implement this must match [`Config::merge`] observably.
    fn merge_opts(&self, prev: &Config, next: &Config) -> Option<Config> {
        let _ = (prev, next);
        None
    }

    /// Registers a pending wait token for DOM watching and timeout. Return
    /// `false` when waiting is unsupported; the caller then receives an
    /// inert token.
    fn register_wait(&self, registration: WaitRegistration) -> bool {
        let _ = registration;
        false
    }

    /// Looks up the alternate-network address for the current request.
    fn onion_address(&self) -> Option<EnvironmentAddress> {
        None
    }
}
