//! Shell-style brace expansion.
//!
//! See <https://en.wikipedia.org/wiki/Bash_(Unix_shell)#Brace_expansion>. Expansion is lazy: the
//! [`Expansions`] iterator only resolves as many groups as it needs to produce the next string, and
//! keeps its own record of what it has produced so that separate calls never affect each other.

mod error;
mod expand;

pub use error::*;
pub use expand::*;
