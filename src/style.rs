//! Style accessor: computed-style reads with boundary validation.
//!
//! The platform only knows two generated-content pseudo-elements, so the
//! qualifier domain is a closed enum validated here; everything past this
//! boundary works with [`PseudoElement`] values, never raw strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dom::Dom;
use crate::error::{Result, StylesnapError};
use crate::types::StyleMap;

/// Pseudo qualifier `::before`.
pub const PSEUDO_BEFORE: &str = "::before";

/// Pseudo qualifier `::after`.
pub const PSEUDO_AFTER: &str = "::after";

/// A generated-content pseudo-element.
///
/// "No pseudo-element" is expressed as `Option<PseudoElement>::None` at the
/// call sites that accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PseudoElement {
    Before,
    After,
}

impl PseudoElement {
    /// The platform qualifier string for this pseudo-element.
    pub const fn qualifier(self) -> &'static str {
        match self {
            PseudoElement::Before => PSEUDO_BEFORE,
            PseudoElement::After => PSEUDO_AFTER,
        }
    }
}

impl fmt::Display for PseudoElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier())
    }
}

impl FromStr for PseudoElement {
    type Err = StylesnapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            PSEUDO_BEFORE => Ok(PseudoElement::Before),
            PSEUDO_AFTER => Ok(PseudoElement::After),
            other => Err(StylesnapError::InvalidPseudo(other.to_string())),
        }
    }
}

/// Reads the computed styles of an element or one of its pseudo-elements.
///
/// Delegates to the backend's computed-style resolution at call time; the
/// result reflects current render state and is never cached.
pub fn load<D: Dom + ?Sized>(
    dom: &D,
    element: &D::Element,
    pseudo: Option<PseudoElement>,
) -> Result<StyleMap> {
    dom.computed_style(element, pseudo)
}

/// Reads computed styles with a raw qualifier string, as handed over by a
/// harness boundary.
///
/// Recognized qualifiers are [`PSEUDO_BEFORE`] and [`PSEUDO_AFTER`]; any
/// other non-absent value fails with
/// [`InvalidPseudo`](StylesnapError::InvalidPseudo) before the backend is
/// consulted.
pub fn load_qualified<D: Dom + ?Sized>(
    dom: &D,
    element: &D::Element,
    pseudo: Option<&str>,
) -> Result<StyleMap> {
    let pseudo = pseudo.map(PseudoElement::from_str).transpose()?;
    load(dom, element, pseudo)
}
