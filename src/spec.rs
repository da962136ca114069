//! Snapshot controller: owns one named root element and its capture.
//!
//! A [`Spec`] is the unit of regression checking. It is bound to a name and
//! a selector at construction, resolves the selector once, and from then on
//! moves between two states: uncaptured (`data` is `None`) and captured.
//! `capture` always re-runs the full traversal and replaces the stored tree
//! wholesale; `compare` lazily captures first if nothing is stored yet.

use crate::dom::{traverse, Dom};
use crate::error::{Result, StylesnapError};
use crate::extract::extract;
use crate::types::{Snapshot, StyleNode};

/// A named, selector-bound style snapshot lifecycle.
///
/// Holds the resolved root element by handle only; the document itself is
/// owned by the [`Dom`] backend and is never mutated through a spec.
#[derive(Debug)]
pub struct Spec<'d, D: Dom> {
    dom: &'d D,
    name: String,
    selector: String,
    element: D::Element,
    data: Option<StyleNode>,
}

impl<'d, D: Dom> Spec<'d, D> {
    /// Creates a spec bound to `name` and resolves `selector` to its root
    /// element.
    ///
    /// An empty name fails with [`InvalidName`](StylesnapError::InvalidName)
    /// before the backend is consulted; selector resolution failures
    /// propagate unchanged from [`Dom::query`].
    pub fn new(dom: &'d D, name: impl Into<String>, selector: &str) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(StylesnapError::InvalidName(name));
        }
        let element = dom.query(selector)?;
        Ok(Self {
            dom,
            name,
            selector: selector.to_string(),
            element,
            data: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The resolved root element.
    pub fn element(&self) -> &D::Element {
        &self.element
    }

    /// The stored capture, if any.
    pub fn data(&self) -> Option<&StyleNode> {
        self.data.as_ref()
    }

    /// Captures the style tree of the root's subtree and stores it.
    ///
    /// Walks the subtree post-order, extracting one [`StyleNode`] per
    /// element bottom-up, and replaces any previously stored tree with the
    /// result. The returned reference points into the stored value. On
    /// error the previous capture is left untouched.
    pub fn capture(&mut self) -> Result<&StyleNode> {
        let dom = self.dom;
        let root = traverse(dom, &self.element, &mut |el, children| {
            extract(dom, el, children)
        })?;
        Ok(self.data.insert(root))
    }

    /// Captures only if nothing is stored yet.
    pub fn ensure_captured(&mut self) -> Result<()> {
        if self.data.is_none() {
            self.capture()?;
        }
        Ok(())
    }

    /// Compares the current capture against a reference tree.
    ///
    /// If this spec has not captured yet, a single capture runs first; an
    /// already stored capture is used as-is, without re-walking the
    /// subtree. Returns `true` iff every property value at every node,
    /// including both pseudo-element maps of every descendant, is identical
    /// between the two trees.
    pub fn compare(&mut self, reference: &StyleNode) -> Result<bool> {
        self.ensure_captured()?;
        Ok(self.data.as_ref() == Some(reference))
    }

    /// The stored capture packaged with this spec's name and selector, for
    /// persistence by a harness.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.data.as_ref().map(|root| Snapshot {
            name: self.name.clone(),
            selector: self.selector.clone(),
            root: root.clone(),
        })
    }
}
