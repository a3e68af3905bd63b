//! Whether a set of dominoes can be laid out in a single row.
//!
//! Tiles are edges between their pip values, so a row is a walk that uses every edge exactly once
//! (an Euler trail). One exists iff the tiles form a single connected group and at most two pip
//! values appear an odd number of times.

use std::collections::BTreeMap;

/// A domino tile. `Domino(i, j)` may be placed either way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domino(pub u8, pub u8);

impl From<[u8; 2]> for Domino {
    fn from([a, b]: [u8; 2]) -> Domino {
        Domino(a, b)
    }
}

/// Returns true if every tile can be placed in one row, touching ends matching.
///
/// # Examples
/// ```
/// # use katas::puzzles::dominoes::{Domino, can_make_row};
/// assert!(can_make_row(&[Domino(0, 1), Domino(1, 1)]));
/// assert!(!can_make_row(&[[1, 1], [2, 2], [1, 5], [5, 6], [6, 3]].map(Domino::from)));
/// ```
pub fn can_make_row(dominoes: &[Domino]) -> bool {
    let mut degrees = BTreeMap::<u8, usize>::new();
    let mut groups = Groups::default();

    for &Domino(a, b) in dominoes {
        *degrees.entry(a).or_default() += 1;
        *degrees.entry(b).or_default() += 1;
        groups.union(a, b);
    }

    let odd = degrees.values().filter(|&&degree| degree % 2 == 1).count();
    let mut roots = degrees.keys().map(|&pips| groups.find(pips));
    let connected = match roots.next() {
        Some(first) => roots.all(|root| root == first),
        None => true,
    };

    tracing::trace!(tiles = dominoes.len(), odd, connected, "checked domino row");
    connected && odd <= 2
}

/// Union-find over pip values.
#[derive(Default)]
struct Groups {
    parents: BTreeMap<u8, u8>,
}

impl Groups {
    fn find(&mut self, pips: u8) -> u8 {
        let parent = *self.parents.entry(pips).or_insert(pips);
        if parent == pips {
            return pips;
        }
        let root = self.find(parent);
        self.parents.insert(pips, root);
        root
    }

    fn union(&mut self, a: u8, b: u8) {
        let (a, b) = (self.find(a), self.find(b));
        if a != b {
            self.parents.insert(a, b);
        }
    }
}
