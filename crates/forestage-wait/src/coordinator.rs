//! Issuance and tracking of pending wait tokens.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::token::{ResolveHandle, WaitToken};

/// Issues wait tokens and tracks which are still pending.
///
/// The coordinator owns identity (unique markers) and the pending registry
/// that gates rendering; it does not own timing — timeouts and DOM watching
/// live in the engine, which resolves tokens through the
/// [`ResolveHandle`]s it was registered with. The timeout passed to
/// [`issue`](WaitCoordinator::issue) is a hint the engine may honor loosely.
#[derive(Debug, Default)]
pub struct WaitCoordinator {
    next_id: AtomicU64,
    pending: Mutex<Vec<ResolveHandle>>,
}

impl WaitCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new pending token and records it in the registry.
    pub fn issue(&self, timeout_hint: Duration) -> WaitToken {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = WaitToken::new(id);
        self.lock_pending().push(token.handle());
        log::trace!(
            "issued wait token '{}' (timeout hint {}ms)",
            token.marker(),
            timeout_hint.as_millis()
        );
        token
    }

    /// Resolves the pending token whose marker matches, if any.
    ///
    /// This is the DOM-marker trigger: the engine saw a rendered element
    /// carrying [`MARKER_ATTR`](crate::MARKER_ATTR) with this value.
    /// Returns `true` only when a pending token was actually transitioned.
    pub fn resolve_marker(&self, marker: &str) -> bool {
        let pending = self.lock_pending();
        pending
            .iter()
            .find(|handle| handle.marker() == marker)
            .is_some_and(ResolveHandle::resolve)
    }

    /// Number of tokens still pending. Resolved entries are pruned here, so
    /// a token's registry footprint disappears once any trigger fires.
    pub fn pending(&self) -> usize {
        let mut pending = self.lock_pending();
        pending.retain(|handle| !handle.is_resolved());
        pending.len()
    }

    /// True when no token is pending — the engine's render gate.
    pub fn all_resolved(&self) -> bool {
        self.pending() == 0
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Vec<ResolveHandle>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HINT: Duration = Duration::from_secs(5);

    #[test]
    fn issued_tokens_have_unique_markers() {
        let coordinator = WaitCoordinator::new();
        let a = coordinator.issue(HINT);
        let b = coordinator.issue(HINT);
        assert_ne!(a.marker(), b.marker());
        assert_eq!(coordinator.pending(), 2);
    }

    #[test]
    fn marker_resolution_transitions_the_matching_token() {
        let coordinator = WaitCoordinator::new();
        let a = coordinator.issue(HINT);
        let b = coordinator.issue(HINT);

        assert!(coordinator.resolve_marker(a.marker()));
        assert!(a.is_resolved());
        assert!(!b.is_resolved());
        assert_eq!(coordinator.pending(), 1);
    }

    #[test]
    fn unknown_marker_is_a_no_op() {
        let coordinator = WaitCoordinator::new();
        let _token = coordinator.issue(HINT);
        assert!(!coordinator.resolve_marker("forestage-wait-999"));
        assert_eq!(coordinator.pending(), 1);
    }

    #[test]
    fn resolved_tokens_are_pruned_from_the_registry() {
        let coordinator = WaitCoordinator::new();
        let token = coordinator.issue(HINT);
        assert!(!coordinator.all_resolved());

        token.resolve();
        assert!(coordinator.all_resolved());
        assert_eq!(coordinator.pending(), 0);
    }

    #[test]
    fn marker_trigger_after_explicit_resolution_is_a_no_op() {
        let coordinator = WaitCoordinator::new();
        let token = coordinator.issue(HINT);

        assert!(token.resolve());
        assert!(!coordinator.resolve_marker(token.marker()));
        assert!(coordinator.all_resolved());
    }
}
