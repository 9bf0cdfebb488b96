//! The public client facade: capability gating and canonical state.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use forestage_config::Config;
use forestage_wait::{WaitCoordinator, WaitToken};

use crate::backend::{EnvironmentAddress, RendererBackend, WaitRegistration};

/// The page's entry point to the pre-rendering engine.
///
/// A `Client` owns the single canonical [`Config`] and the optional engine
/// reference, injected once at construction. Every effectful operation is
/// gated on availability — engine present *and* the disable flag unset —
/// evaluated fresh at each call. Unavailability is never an error: calls
/// degrade to echoing input, handing out inert tokens, or returning `None`,
/// so page code can use the full surface unconditionally in any hosting
/// environment.
///
/// ```rust
/// use forestage::{Client, Config};
///
/// // No engine injected: everything degrades gracefully.
/// let client = Client::offline();
/// assert!(!client.is_available());
///
/// let echoed = client.configure(Config::default().with_status(404));
/// assert_eq!(echoed.status, Some(404));           // input echoed back
/// assert_eq!(client.config(), Config::default()); // state untouched
///
/// let token = client.wait();
/// assert_eq!(token.marker(), "");
/// token.resolve(); // safe no-op
/// ```
pub struct Client {
    backend: Option<Arc<dyn RendererBackend>>,
    config: Mutex<Config>,
    coordinator: WaitCoordinator,
}

impl Client {
    /// Fixed API version published for engine compatibility checks. A
    /// contract constant, not negotiated at runtime.
    pub const API_VERSION: &'static str = "1";

    /// Timeout hint used by [`wait`](Client::wait).
    pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(15);

    /// A client with an engine attached.
    pub fn with_backend(backend: Arc<dyn RendererBackend>) -> Self {
        Self::new(Some(backend))
    }

    /// A client with no engine: all operations take their degraded branch.
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Builds a client from an optional engine reference.
    pub fn new(backend: Option<Arc<dyn RendererBackend>>) -> Self {
        Self {
            backend,
            config: Mutex::new(Config::default()),
            coordinator: WaitCoordinator::new(),
        }
    }

    /// True while the canonical config has not set the disable flag,
    /// whether or not an engine is present.
    pub fn is_enabled(&self) -> bool {
        !self.lock_config().is_disabled()
    }

    /// True when an engine is present and the canonical config has not set
    /// the disable flag. Evaluated fresh on every call.
    pub fn is_available(&self) -> bool {
        self.backend.is_some() && self.is_enabled()
    }

    /// Folds a partial configuration into the canonical one.
    ///
    /// Unavailable: returns `patch` unchanged and leaves the canonical
    /// config untouched, so offline/disabled callers still get their input
    /// back for chaining. Available: merges — engine-side when the engine
    /// claims that capability, locally otherwise — stores the result as the
    /// new canonical config, and returns it.
    ///
    /// Availability is checked at entry, before the patch lands: a patch
    /// that sets `disabled` is itself applied, and only *subsequent* calls
    /// observe the flag.
    pub fn configure(&self, patch: Config) -> Config {
        let Some(backend) = self.backend.as_ref() else {
            return patch;
        };
        let mut config = self.lock_config();
        if config.is_disabled() {
            log::trace!("configure ignored: client disabled");
            return patch;
        }

        let merged = backend
            .merge_opts(&config, &patch)
            .unwrap_or_else(|| config.merge(&patch));
        *config = merged.clone();
        log::debug!("canonical configuration updated");
        merged
    }

    /// Registers a rendering dependency with the default timeout hint.
    pub fn wait(&self) -> WaitToken {
        self.wait_with_timeout(Self::DEFAULT_WAIT_TIMEOUT)
    }

    /// Registers a rendering dependency, returning its token immediately.
    ///
    /// Resolution is out-of-band: explicit [`WaitToken::resolve`], the
    /// engine matching the token's DOM marker, or the engine's timeout —
    /// first trigger wins. When the client is unavailable, or the engine
    /// rejects the registration, the returned token is inert.
    pub fn wait_with_timeout(&self, timeout_hint: Duration) -> WaitToken {
        if !self.is_available() {
            return WaitToken::inert();
        }
        let Some(backend) = self.backend.as_ref() else {
            return WaitToken::inert();
        };

        let token = self.coordinator.issue(timeout_hint);
        let registration = WaitRegistration {
            marker: token.marker().to_string(),
            timeout_hint,
            handle: token.handle(),
        };
        if !backend.register_wait(registration) {
            // The engine has no wait capability. Resolve the issued token so
            // it cannot gate rendering, and hand back an inert one.
            token.resolve();
            return WaitToken::inert();
        }
        token
    }

    /// The alternate-network address for the current request, if the engine
    /// is present, enabled, and can resolve one.
    pub fn environment_address(&self) -> Option<EnvironmentAddress> {
        if !self.is_available() {
            return None;
        }
        self.backend.as_ref()?.onion_address()
    }

    /// DOM-marker trigger entry point: resolves the pending token whose
    /// marker matches. Returns `true` only when a token transitioned.
    pub fn resolve_marker(&self, marker: &str) -> bool {
        self.coordinator.resolve_marker(marker)
    }

    /// Number of wait tokens still pending — the engine's render gate.
    pub fn pending_waits(&self) -> usize {
        self.coordinator.pending()
    }

    /// Snapshot of the canonical configuration. Mutation stays merge-only,
    /// through [`configure`](Client::configure).
    pub fn config(&self) -> Config {
        self.lock_config().clone()
    }

    fn lock_config(&self) -> std::sync::MutexGuard<'_, Config> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("enabled", &self.is_enabled())
            .field("config", &self.lock_config())
            .field("pending_waits", &self.coordinator.pending())
            .finish()
    }
}
