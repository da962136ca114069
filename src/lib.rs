//! Computed-Style Snapshot Engine
//!
//! A library for visual-regression checking without pixel comparison:
//! capture the browser-resolved style values of every element in a DOM
//! subtree (including `::before`/`::after` pseudo-elements, recursively)
//! and later check whether the subtree still renders the same.
//!
//! # Module Overview
//!
//! - [`dom`] - The injected platform capability ([`Dom`]) and the generic
//!   post-order [`traverse`] walk
//! - [`style`] - Computed-style accessor and pseudo-qualifier validation
//! - [`extract`] - Per-node reducer building one [`StyleNode`] at a time
//! - [`spec`] - The [`Spec`] controller owning capture and comparison
//! - [`types`] - Style tree data model
//! - [`error`] - Error taxonomy and crate [`Result`]
//!
//! # Example
//!
//! ```no_run
//! use stylesnap::{Dom, Spec};
//!
//! fn check<D: Dom>(dom: &D) -> stylesnap::Result<bool> {
//!     // Bind a named spec to a subtree root and capture a baseline.
//!     let mut spec = Spec::new(dom, "header", ".site-header")?;
//!     let baseline = spec.capture()?.clone();
//!
//!     // Later: a fresh spec over the same subtree, compared lazily.
//!     let mut current = Spec::new(dom, "header", ".site-header")?;
//!     current.compare(&baseline)
//! }
//! ```

pub mod dom;
pub mod error;
pub mod extract;
pub mod spec;
pub mod style;
pub mod types;

pub use dom::{traverse, Dom};
pub use error::{Result, StylesnapError};
pub use extract::extract;
pub use spec::Spec;
pub use style::{PseudoElement, PSEUDO_AFTER, PSEUDO_BEFORE};
pub use types::{PseudoStyles, Snapshot, StyleMap, StyleNode};
