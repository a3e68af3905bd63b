//! JSON round-tripping for any serde type.
//!
//! Rather than attaching behavior to parsed data after the fact, [`from_json`] is told the type it
//! should produce, so the result already has that type's methods.

use derive_more::{Display, Error, From};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Display, Error, From)]
#[display("invalid JSON: {_0}")]
pub struct JsonError(serde_json::Error);

impl JsonError {
    /// Returns the line and column that the error was detected at, if it came from parsing.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.0.line() {
            0 => None,
            line => Some((line, self.0.column())),
        }
    }
}

/// Returns the compact JSON representation of the provided value.
///
/// # Examples
/// ```
/// # use katas::objects::{Rectangle, to_json};
/// assert_eq!(to_json(&[1, 2, 3])?, "[1,2,3]");
/// assert_eq!(to_json(&Rectangle::new(10, 20))?, r#"{"width":10,"height":20}"#);
/// # Ok::<(), katas::objects::JsonError>(())
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses a value of type `T` from its JSON representation.
///
/// # Examples
/// ```
/// # use katas::objects::{Rectangle, from_json};
/// let r: Rectangle = from_json(r#"{"width":10, "height":20}"#)?;
/// assert_eq!(r.area(), 200);
/// # Ok::<(), katas::objects::JsonError>(())
/// ```
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    let value = serde_json::from_str(json)?;
    tracing::trace!(len = json.len(), "parsed JSON value");
    Ok(value)
}
