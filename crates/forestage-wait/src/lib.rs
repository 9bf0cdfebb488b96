//! Wait-token coordination for the forestage client.
//!
//! Page code that needs rendering to wait for asynchronous work asks for a
//! [`WaitToken`]. The engine will not capture the page while tokens are
//! pending; a token resolves through whichever of three triggers fires
//! first — an explicit [`WaitToken::resolve`] call, the engine spotting the
//! token's DOM marker on a rendered element, or the engine's timeout. The
//! losing triggers are silent no-ops: resolution is guarded by a
//! compare-and-set, so it happens exactly once no matter how the triggers
//! race.
//!
//! ```rust
//! use forestage_wait::{WaitCoordinator, MARKER_ATTR};
//! use std::time::Duration;
//!
//! let coordinator = WaitCoordinator::new();
//! let token = coordinator.issue(Duration::from_secs(5));
//!
//! // Spread onto a rendered element so the engine can spot completion.
//! let props = token.props();
//! assert_eq!(props[MARKER_ATTR], token.marker());
//!
//! assert!(token.resolve());      // first trigger wins
//! assert!(!token.resolve());     // later triggers are no-ops
//! assert!(coordinator.all_resolved());
//! ```

pub mod coordinator;
pub mod token;

pub use coordinator::WaitCoordinator;
pub use token::{ResolveHandle, WaitToken, MARKER_ATTR};
