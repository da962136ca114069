//! In-memory DOM backend used by the integration tests.
//!
//! Stands in for a real rendering surface: elements are string ids, styles
//! are plain maps, and every backend call is counted so tests can assert
//! how often the engine consulted the platform.

// Not every test binary exercises every helper.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use stylesnap::{Dom, PseudoElement, Result, StyleMap, StylesnapError};

#[derive(Debug, Default)]
struct FakeElement {
    children: Vec<String>,
    element: HashMap<String, String>,
    before: HashMap<String, String>,
    after: HashMap<String, String>,
}

#[derive(Debug, Default)]
pub struct FakeDom {
    nodes: RefCell<HashMap<String, FakeElement>>,
    selectors: HashMap<String, String>,
    poisoned: RefCell<HashSet<String>>,
    pub query_calls: Cell<usize>,
    pub children_calls: Cell<usize>,
    pub style_calls: Cell<usize>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element, appending it to `parent`'s children when given.
    pub fn add_element(&mut self, id: &str, parent: Option<&str>, styles: &[(&str, &str)]) {
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes.entry(id.to_string()).or_default();
        node.element = to_map(styles);
        if let Some(parent) = parent {
            nodes
                .entry(parent.to_string())
                .or_default()
                .children
                .push(id.to_string());
        }
    }

    pub fn add_pseudo(&mut self, id: &str, pseudo: PseudoElement, styles: &[(&str, &str)]) {
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes.entry(id.to_string()).or_default();
        match pseudo {
            PseudoElement::Before => node.before = to_map(styles),
            PseudoElement::After => node.after = to_map(styles),
        }
    }

    pub fn add_selector(&mut self, selector: &str, id: &str) {
        self.selectors.insert(selector.to_string(), id.to_string());
    }

    /// Changes one resolved property, simulating a rendering change between
    /// captures.
    pub fn set_style(&self, id: &str, pseudo: Option<PseudoElement>, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes.entry(id.to_string()).or_default();
        let map = match pseudo {
            None => &mut node.element,
            Some(PseudoElement::Before) => &mut node.before,
            Some(PseudoElement::After) => &mut node.after,
        };
        map.insert(property.to_string(), value.to_string());
    }

    /// Makes every subsequent style read on `id` fail.
    pub fn poison(&self, id: &str) {
        self.poisoned.borrow_mut().insert(id.to_string());
    }
}

fn to_map(styles: &[(&str, &str)]) -> HashMap<String, String> {
    styles
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Dom for FakeDom {
    type Element = String;

    fn query(&self, selector: &str) -> Result<Self::Element> {
        self.query_calls.set(self.query_calls.get() + 1);
        self.selectors
            .get(selector)
            .cloned()
            .ok_or_else(|| StylesnapError::query(format!("no element matches \"{selector}\"")))
    }

    fn child_elements(&self, element: &Self::Element) -> Result<Vec<Self::Element>> {
        self.children_calls.set(self.children_calls.get() + 1);
        let nodes = self.nodes.borrow();
        let node = nodes
            .get(element)
            .ok_or_else(|| StylesnapError::InvalidElement(element.clone()))?;
        Ok(node.children.clone())
    }

    fn computed_style(
        &self,
        element: &Self::Element,
        pseudo: Option<PseudoElement>,
    ) -> Result<StyleMap> {
        self.style_calls.set(self.style_calls.get() + 1);
        if self.poisoned.borrow().contains(element) {
            return Err(StylesnapError::style_access(format!(
                "style read failed for \"{element}\""
            )));
        }
        let nodes = self.nodes.borrow();
        let node = nodes
            .get(element)
            .ok_or_else(|| StylesnapError::InvalidElement(element.clone()))?;
        let map = match pseudo {
            None => &node.element,
            Some(PseudoElement::Before) => &node.before,
            Some(PseudoElement::After) => &node.after,
        };
        Ok(map.clone().into())
    }
}
