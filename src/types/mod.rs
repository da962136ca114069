//! Core data types for captured style trees.
//!
//! This module contains the fundamental data structures:
//! - [`StyleMap`] - Resolved property/value mapping for one render target
//! - [`PseudoStyles`] - The `::before`/`::after` style pair of an element
//! - [`StyleNode`] - Recursive per-element record of a style tree
//! - [`Snapshot`] - A named style tree captured from a selector-resolved root

mod snapshot;
mod style_map;

pub use snapshot::{PseudoStyles, Snapshot, StyleNode};
pub use style_map::StyleMap;
