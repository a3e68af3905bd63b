use std::fmt::{self, Display, Formatter};

use super::{DuplicateSelectorError, Fragment, FragmentKind, InvalidOrderError, SelectorError};

/// An immutable builder for CSS-like selector strings.
///
/// Each compound selector is made up of type, id, class, attribute, pseudo-class and
/// pseudo-element fragments, in that order:
///
/// ```text
/// element#id.class[attr]:pseudoClass::pseudoElement
///           \----/\----/\----------/
///           Can occur several times
/// ```
///
/// Compound selectors are joined with [`combine`](SelectorBuilder::combine) using one of the
/// combinators `' '`, `'+'`, `'~'` or `'>'`.
///
/// Every method takes `&self` and returns a new builder, so an intermediate builder can be branched
/// into several independent selectors.
///
/// # Examples
/// ```
/// # use katas::objects::selector::SelectorBuilder;
/// let selector = SelectorBuilder::new()
///     .element("a")?
///     .attribute(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), katas::objects::selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
}

impl SelectorBuilder {
    /// Creates an empty builder, which stringifies to the empty string.
    pub const fn new() -> SelectorBuilder {
        SelectorBuilder {
            fragments: Vec::new(),
        }
    }

    /// Returns the fragments of this selector in the order they will be rendered.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns true if no fragments have been added yet.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Adds a type selector.
    ///
    /// # Errors
    /// Returns [`SelectorError::Duplicate`] if the selector already has an element, or
    /// [`SelectorError::InvalidOrder`] if any other fragment has been added before it.
    pub fn element(&self, value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        self.push(FragmentKind::Element, value.into())
    }

    /// Adds an id selector (`#value`).
    ///
    /// # Errors
    /// Returns [`SelectorError::Duplicate`] if the selector already has an id, or
    /// [`SelectorError::InvalidOrder`] if a class or later fragment precedes it.
    ///
    /// # Examples
    /// ```
    /// # use katas::objects::selector::SelectorBuilder;
    /// let selector = SelectorBuilder::new().id("main")?.class("container")?.class("editable")?;
    /// assert_eq!(selector.stringify(), "#main.container.editable");
    ///
    /// assert!(selector.id("other").unwrap_err().is_duplicate());
    /// # Ok::<(), katas::objects::selector::SelectorError>(())
    /// ```
    pub fn id(&self, value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        self.push(FragmentKind::Id, value.into())
    }

    /// Adds a class selector (`.value`). A selector may have any number of classes.
    pub fn class(&self, value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        self.push(FragmentKind::Class, value.into())
    }

    /// Adds an attribute selector (`[value]`). The value is rendered verbatim between the brackets.
    pub fn attribute(&self, value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        self.push(FragmentKind::Attribute, value.into())
    }

    /// Shorthand for [`attribute`](SelectorBuilder::attribute).
    pub fn attr(&self, value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        self.attribute(value)
    }

    /// Adds a pseudo-class selector (`:value`).
    pub fn pseudo_class(&self, value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        self.push(FragmentKind::PseudoClass, value.into())
    }

    /// Adds a pseudo-element selector (`::value`). It must be the last non-combinator fragment and
    /// may only occur once.
    pub fn pseudo_element(
        &self,
        value: impl Into<String>,
    ) -> Result<SelectorBuilder, SelectorError> {
        self.push(FragmentKind::PseudoElement, value.into())
    }

    /// Joins two selectors with a combinator. No validation is performed across the join, but any
    /// fragment appended to the result is checked against the whole sequence.
    ///
    /// # Examples
    /// ```
    /// # use katas::objects::selector::SelectorBuilder;
    /// let builder = SelectorBuilder::new();
    /// let selector = SelectorBuilder::combine(
    ///     &builder.element("div")?.id("main")?,
    ///     "+",
    ///     &builder.element("table")?.id("data")?,
    /// );
    /// assert_eq!(selector.stringify(), "div#main + table#data");
    /// # Ok::<(), katas::objects::selector::SelectorError>(())
    /// ```
    pub fn combine(
        first: &SelectorBuilder,
        combinator: impl Into<String>,
        second: &SelectorBuilder,
    ) -> SelectorBuilder {
        let mut fragments = Vec::with_capacity(first.fragments.len() + 1 + second.fragments.len());
        fragments.extend_from_slice(&first.fragments);
        fragments.push(Fragment::new(FragmentKind::Combinator, combinator));
        fragments.extend_from_slice(&second.fragments);
        SelectorBuilder { fragments }
    }

    /// Renders the selector, concatenating every fragment with no separator.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    fn push(&self, kind: FragmentKind, text: String) -> Result<SelectorBuilder, SelectorError> {
        if kind.is_unique() && self.fragments.iter().any(|f| f.kind == kind) {
            tracing::debug!(%kind, selector = %self, "rejected duplicate selector fragment");
            return Err(DuplicateSelectorError { kind }.into());
        }

        let mut fragments = self.fragments.clone();
        fragments.push(Fragment::new(kind, text));

        if !is_ordered(&fragments) {
            tracing::debug!(%kind, selector = %self, "rejected out of order selector fragment");
            return Err(InvalidOrderError {
                attempted: kind,
                fragments,
            }
            .into());
        }

        Ok(SelectorBuilder { fragments })
    }
}

/// Checks that the kinds of the whole sequence, skipping combinators, are non-decreasing.
fn is_ordered(fragments: &[Fragment]) -> bool {
    let kinds: Vec<FragmentKind> = fragments
        .iter()
        .map(Fragment::kind)
        .filter(|kind| !kind.is_combinator())
        .collect();
    kinds.windows(2).all(|pair| pair[0] <= pair[1])
}

impl Display for SelectorBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
