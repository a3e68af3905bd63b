use derive_more::{Display, Error, From, IsVariant};

use super::{Fragment, FragmentKind};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Element, id and pseudo-element should not occur more than one time inside the selector (duplicate {kind})")]
pub struct DuplicateSelectorError {
    pub kind: FragmentKind,
}

/// Produced when appending a fragment would break the element, id, class, attribute,
/// pseudo-class, pseudo-element ordering. Holds the rejected sequence for diagnostics.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element (got {attempted} in `{}`)", render(fragments))]
pub struct InvalidOrderError {
    pub attempted: FragmentKind,
    pub fragments: Vec<Fragment>,
}

fn render(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::to_string).collect()
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum SelectorError {
    Duplicate(DuplicateSelectorError),
    InvalidOrder(InvalidOrderError),
}
