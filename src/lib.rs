//! A set of kata-style exercises, each a small pure transformation from one value to another.
//!
//! # Contents
//! - [`objects`]: a [`Rectangle`](objects::Rectangle) value type, JSON round-tripping through
//!   serde, and an immutable builder for CSS-like selectors.
//! - [`puzzles`]: shell-style brace expansion, the 32-point compass rose, the JPEG zigzag matrix,
//!   domino chaining and integer range compression.
//!
//! Nothing here shares state. Each module can be enabled on its own via the crate features of the
//! same name.
//!
//! # Error Handling
//! Operations that can fail return strongly typed errors: small structs that implement
//! [`Error`](std::error::Error), gathered into enums where one operation can fail in more than one
//! way, so that callers can match on them rather than inspect a message.
//!
//! # Dependencies
//! Errors are derived with `derive_more` rather than written out by hand. The [`objects`] module
//! uses `serde` and `serde_json` for its JSON functions, and the property tests use `proptest`.
//!
//! # Logging
//! The crate emits [`tracing`] events at `debug` and `trace` level and never installs a
//! subscriber itself.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

#[cfg(feature = "objects")]
pub mod objects;
#[cfg(feature = "puzzles")]
pub mod puzzles;
