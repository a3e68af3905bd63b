use std::collections::HashSet;
use std::iter::FusedIterator;
use std::ops::Range;

use super::{Brace, MalformedPatternError};

/// Expands the braces of the provided pattern, in the style of shell brace expansion.
///
/// Balanced pairs of braces containing comma-separated alternatives are replaced by each of the
/// alternatives in turn. Groups may be nested and alternatives may be empty. Each distinct result
/// is produced once, in no guaranteed order.
///
/// Unmatched braces are not an error here, they are left in the output as plain text. Use
/// [`try_expand`] to reject them instead.
///
/// # Examples
/// ```
/// # use std::collections::HashSet;
/// # use katas::puzzles::braces::expand;
/// let expanded: HashSet<String> = expand("thumbnail.{png,jp{e,}g}").collect();
/// assert_eq!(
///     expanded,
///     HashSet::from(["thumbnail.png", "thumbnail.jpeg", "thumbnail.jpg"].map(String::from)),
/// );
///
/// assert_eq!(expand("nothing to do").collect::<Vec<_>>(), ["nothing to do"]);
/// ```
pub fn expand(pattern: impl Into<String>) -> Expansions {
    Expansions::new(pattern.into())
}

/// Like [`expand`], but first checks that every brace in the pattern is matched.
///
/// # Errors
/// Returns a [`MalformedPatternError`] pointing at the first `}` without a preceding `{`, or at
/// the first `{` that is never closed.
///
/// # Examples
/// ```
/// # use katas::puzzles::braces::{Brace, try_expand};
/// let err = try_expand("a{b,c").unwrap_err();
/// assert_eq!((err.offset, err.brace), (1, Brace::Unclosed));
/// assert_eq!(try_expand("{a,b}")?.count(), 2);
/// # Ok::<(), katas::puzzles::braces::MalformedPatternError>(())
/// ```
pub fn try_expand(pattern: impl Into<String>) -> Result<Expansions, MalformedPatternError> {
    let pattern = pattern.into();
    validate(&pattern)?;
    Ok(Expansions::new(pattern))
}

fn validate(pattern: &str) -> Result<(), MalformedPatternError> {
    let mut open = Vec::new();
    for (offset, c) in pattern.char_indices() {
        match c {
            '{' => open.push(offset),
            '}' => {
                if open.pop().is_none() {
                    return Err(MalformedPatternError {
                        offset,
                        brace: Brace::Unopened,
                    });
                }
            }
            _ => (),
        }
    }

    match open.first() {
        Some(&offset) => Err(MalformedPatternError {
            offset,
            brace: Brace::Unclosed,
        }),
        None => Ok(()),
    }
}

/// Finds the leftmost group which contains no other opening brace, returning the byte range of the
/// group including both braces.
fn innermost_group(s: &str) -> Option<Range<usize>> {
    let mut start = None;
    for (offset, c) in s.char_indices() {
        match (c, start) {
            ('{', _) => start = Some(offset),
            ('}', Some(open)) => return Some(open..offset + 1),
            _ => (),
        }
    }
    None
}

/// A lazy iterator over the expansions of a pattern, created by [`expand`] or [`try_expand`].
///
/// Partially expanded strings are kept on a stack and resolved depth-first, one group at a time,
/// as items are requested. Terminal strings already produced by this iterator are skipped.
#[derive(Debug, Clone)]
pub struct Expansions {
    pending: Vec<String>,
    seen: HashSet<String>,
}

impl Expansions {
    fn new(pattern: String) -> Expansions {
        Expansions {
            pending: vec![pattern],
            seen: HashSet::new(),
        }
    }
}

impl Iterator for Expansions {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.pending.pop() {
            let Some(group) = innermost_group(&current) else {
                if self.seen.insert(current.clone()) {
                    tracing::trace!(expansion = %current, "yielding brace expansion");
                    return Some(current);
                }
                tracing::trace!(expansion = %current, "skipping duplicate brace expansion");
                continue;
            };

            let (head, tail) = (&current[..group.start], &current[group.end..]);
            let interior = &current[group.start + 1..group.end - 1];
            tracing::trace!(group = interior, "resolving brace group");

            // Pushed in reverse so that alternatives are expanded in the order they are written.
            self.pending.extend(
                interior
                    .split(',')
                    .rev()
                    .map(|alternative| [head, alternative, tail].concat()),
            );
        }
        None
    }
}

impl FusedIterator for Expansions {}
