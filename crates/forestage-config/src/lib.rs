//! Rendering option model and merge policy for the forestage client.
//!
//! This crate owns the two pure pieces of the client:
//!
//! - [`Config`]: the canonical set of rendering options, where each field
//!   carries one of four merge kinds (scalar-replace, flag, list-append,
//!   map-merge). Folding a partial config into the canonical one is
//!   [`Config::merge`] — pure, non-mutating, idempotent per field.
//! - [`escape`]: encoding of JSON-serializable values for inline embedding
//!   in markup. Any value destined for page-global exports or storage seeds
//!   must pass through [`escape::encode`], which substitutes `&`, `<`, `>`
//!   with their `\uXXXX` equivalents so the output cannot open or close a
//!   tag inside raw script text.
//!
//! # Quick Start
//!
//! ```rust
//! use forestage_config::Config;
//! use serde_json::json;
//!
//! let canonical = Config::default()
//!     .with_status(200)
//!     .export_global("APP_STATE", json!({ "user": "alice" }));
//!
//! let patch = Config::default()
//!     .with_status(404)
//!     .export_global("FLAGS", json!({ "beta": true }));
//!
//! let merged = canonical.merge(&patch);
//! assert_eq!(merged.status, Some(404));          // scalar: patch wins
//! assert_eq!(merged.globals.len(), 2);            // map: entries accumulate
//! ```
//!
//! # Merge Semantics
//!
//! ```text
//! scalar / flag   patch value overwrites, absent keeps previous
//! list-append     previous ++ patch, order kept, duplicates kept
//! map-merge       previous keys survive, patch keys overwrite on conflict
//! ```
//!
//! Merging `Config::default()` (the empty partial) is a no-op, so repeated
//! configuration calls are safe to replay.

pub mod config;
pub mod error;
pub mod escape;

pub use config::Config;
pub use error::{EscapeError, Result};
pub use escape::{decode, encode};
