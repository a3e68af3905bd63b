//! Exercises on plain object types: construction, JSON round-tripping and a selector builder.

pub mod json;
pub mod rectangle;
pub mod selector;

pub use json::{JsonError, from_json, to_json};
pub use rectangle::Rectangle;
pub use selector::SelectorBuilder;
