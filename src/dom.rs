//! The platform capability boundary.
//!
//! The engine never touches a browser directly. Everything it needs from the
//! rendered document comes through the [`Dom`] trait: selector resolution,
//! child enumeration, and computed-style reads. Production code implements
//! it against a real rendering surface; tests substitute an in-memory fake
//! without any global state to patch.

use crate::error::Result;
use crate::style::PseudoElement;
use crate::types::StyleMap;

/// Read-only access to a rendered document.
///
/// Implementations own all resolution behavior: what a selector matches,
/// which handles are considered live, and how styles are resolved. The
/// engine never mutates the document through this trait.
pub trait Dom {
    /// Handle to one element of the document. The engine treats handles as
    /// opaque; it only clones and passes them back.
    type Element: Clone;

    /// Resolves a CSS-style selector to a single element.
    ///
    /// No-match and ambiguous-match behavior is owned by the implementor;
    /// failures propagate unchanged to whoever triggered the resolution.
    fn query(&self, selector: &str) -> Result<Self::Element>;

    /// The element's child elements, in document order.
    fn child_elements(&self, element: &Self::Element) -> Result<Vec<Self::Element>>;

    /// The full resolved property map for the element, or for one of its
    /// generated pseudo-elements, as observed at call time.
    fn computed_style(
        &self,
        element: &Self::Element,
        pseudo: Option<PseudoElement>,
    ) -> Result<StyleMap>;
}

/// Walks the subtree rooted at `root` in post-order, reducing it with
/// `visitor`.
///
/// Every node is visited exactly once, all descendants before their parent
/// and `root` itself last. Each invocation receives the aggregated results
/// of the node's children in document order, so the visitor can build a
/// bottom-up aggregate without ever re-reading the tree. The first error
/// from the backend or the visitor aborts the walk.
pub fn traverse<D, T, F>(dom: &D, root: &D::Element, visitor: &mut F) -> Result<T>
where
    D: Dom + ?Sized,
    F: FnMut(&D::Element, Vec<T>) -> Result<T>,
{
    let children = dom.child_elements(root)?;
    let mut results = Vec::with_capacity(children.len());
    for child in &children {
        results.push(traverse(dom, child, visitor)?);
    }
    visitor(root, results)
}
