//! A builder for CSS-like selector strings.
//!
//! [`SelectorBuilder`] accumulates typed [`Fragment`]s and validates them as they are added: an
//! element, id or pseudo-element may only appear once, and across the whole selector, skipping
//! combinators, the fragments must follow the order element, id, class, attribute, pseudo-class,
//! pseudo-element.
//! Builders are values, every operation returns a new one and leaves the receiver untouched.

mod builder;
mod error;
mod fragment;

pub use builder::*;
pub use error::*;
pub use fragment::*;
