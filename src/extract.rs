//! Tree extractor: the per-node reducer used by the traversal.

use crate::dom::Dom;
use crate::error::Result;
use crate::style::{self, PseudoElement};
use crate::types::{PseudoStyles, StyleNode};

/// Builds one [`StyleNode`] from an element and the already-extracted
/// records of its descendants.
///
/// Pure composition: three style reads (element, `::before`, `::after`) and
/// a pass-through of `children`. Performs no validation of its own; a stale
/// handle fails through the style accessor, and `children` is stored as
/// given.
pub fn extract<D: Dom + ?Sized>(
    dom: &D,
    element: &D::Element,
    children: Vec<StyleNode>,
) -> Result<StyleNode> {
    Ok(StyleNode {
        element: style::load(dom, element, None)?,
        pseudo: PseudoStyles {
            before: style::load(dom, element, Some(PseudoElement::Before))?,
            after: style::load(dom, element, Some(PseudoElement::After))?,
        },
        children,
    })
}
