//! Wait tokens and their single-assignment resolution guard.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Attribute name the engine scans for when matching DOM markers.
///
/// A rendered element carrying this attribute with a pending token's marker
/// as its value is an implicit resolution signal for that token.
pub const MARKER_ATTR: &str = "data-forestage-wait";

/// An opaque handle correlating a registered rendering dependency with its
/// eventual resolution.
///
/// Lifecycle is `Pending → Resolved`, terminal. The caller resolves via
/// [`resolve`](WaitToken::resolve); the engine resolves via a
/// [`ResolveHandle`] when it matches the DOM marker or its timeout fires.
/// Whichever trigger comes first wins; the rest are silent no-ops.
///
/// Tokens are cheap to clone — clones share the resolution guard.
#[derive(Debug, Clone)]
pub struct WaitToken {
    marker: String,
    resolved: Arc<AtomicBool>,
}

impl WaitToken {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            marker: format!("forestage-wait-{id}"),
            resolved: Arc::new(AtomicBool::new(false)),
        }
    }

    /// An inert token for when the wait capability is unavailable: empty
    /// marker, empty props, and a `resolve` that is already a no-op. Page
    /// code can hold and resolve it unconditionally.
    pub fn inert() -> Self {
        Self {
            marker: String::new(),
            resolved: Arc::new(AtomicBool::new(true)),
        }
    }

    /// The human-usable marker string identifying this token.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// True for tokens issued without a wait capability behind them.
    pub fn is_inert(&self) -> bool {
        self.marker.is_empty()
    }

    /// True once any trigger has resolved this token.
    pub fn is_resolved(&self) -> bool {
        self.resolved.load(Ordering::Acquire)
    }

    /// Explicitly resolves this token. Returns `true` only for the winning
    /// call; later calls (and calls on inert tokens) return `false` and do
    /// nothing.
    pub fn resolve(&self) -> bool {
        let won = self
            .resolved
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            log::debug!("wait token '{}' resolved", self.marker);
        }
        won
    }

    /// Attribute map to spread onto a rendered element so the engine can
    /// detect completion via the DOM marker. Empty for inert tokens.
    pub fn props(&self) -> BTreeMap<&'static str, String> {
        let mut props = BTreeMap::new();
        if !self.is_inert() {
            props.insert(MARKER_ATTR, self.marker.clone());
        }
        props
    }

    /// The engine's half of joint ownership: a handle that can resolve this
    /// token on DOM-marker match or timeout expiry.
    pub fn handle(&self) -> ResolveHandle {
        ResolveHandle {
            marker: self.marker.clone(),
            resolved: Arc::clone(&self.resolved),
        }
    }
}

/// Resolution handle held by the engine for a pending token.
///
/// Shares the token's guard, so engine-driven resolution commutes with
/// explicit resolution: exactly one of them wins.
#[derive(Debug, Clone)]
pub struct ResolveHandle {
    marker: String,
    resolved: Arc<AtomicBool>,
}

impl ResolveHandle {
    /// The marker of the token this handle resolves.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Resolves the underlying token; same idempotence as
    /// [`WaitToken::resolve`].
    pub fn resolve(&self) -> bool {
        let won = self
            .resolved
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            log::debug!("wait token '{}' resolved by engine", self.marker);
        }
        won
    }

    /// True once the underlying token has resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_resolution_wins() {
        let token = WaitToken::new(1);
        assert!(!token.is_resolved());
        assert!(token.resolve());
        assert!(token.is_resolved());
        assert!(!token.resolve());
    }

    #[test]
    fn explicit_and_engine_triggers_commute() {
        let token = WaitToken::new(2);
        let handle = token.handle();

        assert!(token.resolve());
        assert!(!handle.resolve());
        assert!(handle.is_resolved());

        let token = WaitToken::new(3);
        let handle = token.handle();
        assert!(handle.resolve());
        assert!(!token.resolve());
    }

    #[test]
    fn props_carry_the_marker_attribute() {
        let token = WaitToken::new(4);
        let props = token.props();
        assert_eq!(props.len(), 1);
        assert_eq!(props[MARKER_ATTR], token.marker());
    }

    #[test]
    fn inert_token_is_safe_and_empty() {
        let token = WaitToken::inert();
        assert!(token.is_inert());
        assert_eq!(token.marker(), "");
        assert!(token.props().is_empty());
        assert!(!token.resolve());
        assert!(!token.resolve());
    }
}
