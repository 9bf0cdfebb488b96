//! # Forestage — client-side contract for an external pre-rendering engine
//!
//! Forestage lets page code declare rendering options, signal that rendering
//! must wait for asynchronous work, and query environment facts — all
//! without requiring the engine to be present. The engine itself (DOM
//! scanning, timers, HTTP translation) is an external collaborator behind
//! the narrow [`RendererBackend`] capability trait; this crate owns the two
//! pieces of real logic:
//!
//! - **Option merging**: repeated, possibly-partial [`configure`](Client::configure)
//!   calls fold into one canonical [`Config`] under per-field policy
//!   (scalar-replace, flag, list-append, map-merge), with the
//!   security-sensitive [`escape`] applied to any value destined for inline
//!   embedding.
//! - **Wait coordination**: [`wait`](Client::wait) hands back a [`WaitToken`]
//!   the engine will not render past; it resolves exactly once via explicit
//!   call, DOM-marker match, or timeout — first trigger wins.
//!
//! # Quick Start
//!
//! ```rust
//! use forestage::{Client, Config};
//! use serde_json::json;
//!
//! // The engine reference is injected once at startup; `offline()` models
//! // its absence, and the whole surface stays callable either way.
//! let client = Client::offline();
//!
//! let patch = Config::default()
//!     .with_status(200)
//!     .remove_node(".cookie-banner")
//!     .export_global("APP_STATE", json!({ "ready": true }));
//!
//! // Offline: the patch is echoed back and canonical state is untouched.
//! let echoed = client.configure(patch.clone());
//! assert_eq!(echoed, patch);
//!
//! // Waiting degrades to an inert token that is safe to resolve.
//! let token = client.wait();
//! assert!(token.props().is_empty());
//! token.resolve();
//! ```
//!
//! # Availability Gating
//!
//! Every effectful operation re-evaluates `engine present AND NOT disabled`
//! at entry. Unavailability is a normal branch, never an error: `configure`
//! echoes its input, `wait` returns an inert token, and
//! [`environment_address`](Client::environment_address) returns `None`.
//! Setting `disabled` through `configure` takes hold for *subsequent*
//! calls — the setting call itself is evaluated before the flag lands.
//!
//! # Inline Embedding
//!
//! Values seeded into the rendered document as page globals or storage
//! entries pass through [`escape::encode`], which substitutes `&`, `<`, `>`
//! with `\u0026`, `\u003c`, `\u003e` in the JSON encoding. The [`embed`]
//! helpers produce ready-made script lines. Unrepresentable values surface
//! an [`EscapeError`]; that is the one error this layer reports.

pub mod backend;
pub mod client;
pub mod embed;

pub use backend::{EnvironmentAddress, RendererBackend, WaitRegistration};
pub use client::Client;

// Re-export the subcrates' public surface under one roof.
pub use forestage_config::escape;
pub use forestage_config::{Config, EscapeError};
pub use forestage_wait::{ResolveHandle, WaitCoordinator, WaitToken, MARKER_ATTR};
