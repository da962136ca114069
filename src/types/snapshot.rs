//! Style tree records captured from a rendered subtree.
//!
//! A [`StyleNode`] holds everything the rendering engine resolved for one
//! element: its own computed styles, the styles of its two generated
//! pseudo-elements, and the records of its child elements in document order.
//! Equality is derived structural equality, which is exactly the regression
//! check: two captures of the same subtree compare equal iff no resolved
//! property anywhere in the tree changed between them.

use serde::{Deserialize, Serialize};

use super::style_map::StyleMap;

/// The per-element record of a captured style tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleNode {
    /// Computed styles of the element itself (no pseudo-element).
    pub element: StyleMap,
    /// Computed styles of the element's generated pseudo-elements.
    pub pseudo: PseudoStyles,
    /// Records of the element's child elements, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StyleNode>,
}

/// The `::before`/`::after` style pair of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudoStyles {
    pub before: StyleMap,
    pub after: StyleMap,
}

/// A captured style tree together with the name and selector that produced it.
///
/// The engine itself only needs the root [`StyleNode`]; this wrapper exists
/// so a harness can persist captures with enough context to reload them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Identifying name of the spec that produced this capture.
    pub name: String,
    /// Selector the root element was resolved from.
    pub selector: String,
    /// Root of the captured style tree.
    pub root: StyleNode,
}
