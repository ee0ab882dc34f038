use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rendered bounding box of an element, in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The computed-style subset the pick filter inspects.
///
/// Values are kept as the strings the browser reports; in particular
/// `opacity` is compared literally against `"0"`, not parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    pub opacity: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".into(),
            visibility: "visible".into(),
            opacity: "1".into(),
        }
    }
}

/// One element of a captured page.
///
/// Accessible-name data (`aria-label`, `aria-labelledby`, `title`, the DOM
/// `id`) travels in `attributes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: u32,
    #[serde(rename = "type")]
    pub element_type: String, // "button", "input", "a", etc.
    /// Rendered (layout-aware) inner text.
    #[serde(default)]
    pub text: Option<String>,
    /// Raw text content, including text hidden from layout.
    #[serde(default)]
    pub raw_text: Option<String>,
    /// Form-control value, for input-like elements.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default)]
    pub style: ComputedStyle,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub children: Vec<u32>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    /// Page path plus fragment, e.g. `/inbox#unread`.
    pub route: String,
}

/// Captured page state: the live view of the page the picker operates on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    pub page: PageInfo,
    pub elements: Vec<Element>,
}

impl PageSnapshot {
    pub fn element(&self, id: u32) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Resolves a DOM `id` attribute reference (first match wins).
    pub fn element_by_dom_id(&self, dom_id: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|el| el.attribute("id") == Some(dom_id))
    }

    pub fn route(&self) -> &str {
        &self.page.route
    }
}
