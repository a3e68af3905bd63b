use std::fmt::{self, Display, Formatter};

use derive_more::{Display, IsVariant};

/// The kind of a single selector [`Fragment`].
///
/// Variants are declared in the order they must appear within a compound selector, so the derived
/// [`Ord`] is the ordering enforced by [`SelectorBuilder`](super::SelectorBuilder).
/// [`Combinator`](FragmentKind::Combinator) is declared last but never takes part in that
/// ordering, it only separates compound selectors.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum FragmentKind {
    #[display("element")]
    Element,
    #[display("id")]
    Id,
    #[display("class")]
    Class,
    #[display("attribute")]
    Attribute,
    #[display("pseudo-class")]
    PseudoClass,
    #[display("pseudo-element")]
    PseudoElement,
    #[display("combinator")]
    Combinator,
}

impl FragmentKind {
    /// Returns true if a selector may contain at most one fragment of this kind.
    pub const fn is_unique(self) -> bool {
        matches!(self, FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement)
    }
}

/// One typed piece of a selector, such as a class name or an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub(crate) kind: FragmentKind,
    pub(crate) text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Fragment {
        Fragment {
            kind,
            text: text.into(),
        }
    }

    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = &self.text;
        match self.kind {
            FragmentKind::Element => write!(f, "{text}"),
            FragmentKind::Id => write!(f, "#{text}"),
            FragmentKind::Class => write!(f, ".{text}"),
            FragmentKind::Attribute => write!(f, "[{text}]"),
            FragmentKind::PseudoClass => write!(f, ":{text}"),
            FragmentKind::PseudoElement => write!(f, "::{text}"),
            FragmentKind::Combinator => write!(f, " {text} "),
        }
    }
}
