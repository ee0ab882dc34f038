use crate::protocol::{Element, PageSnapshot};

/// Placeholder title substituted when no label can be derived.
pub const UNLABELED: &str = "(unlabeled)";

/// Interaction kinds whose picks carry the kind literal as their title.
const TITLE_OVERRIDE_KINDS: &[&str] = &["list-item-click", "list-item-double-click"];

/// Derives a human-readable label for an element.
///
/// Strict priority order, first non-empty trimmed candidate wins:
/// explicit `aria-label`, the text of the `aria-labelledby` referent,
/// rendered inner text, raw text content, the `title` attribute, then a
/// form-control value. Returns an empty string when every source is
/// empty or absent.
pub fn resolve_label(snapshot: &PageSnapshot, element: &Element) -> String {
    non_empty(element.attribute("aria-label"))
        .or_else(|| referenced_label(snapshot, element))
        .or_else(|| non_empty(element.text.as_deref()))
        .or_else(|| non_empty(element.raw_text.as_deref()))
        .or_else(|| non_empty(element.attribute("title")))
        .or_else(|| non_empty(element.value.as_deref()))
        .unwrap_or_default()
}

/// Applies the list-item kind override to an already-resolved title.
pub fn effective_title(kind: &str, resolved: &str) -> String {
    if TITLE_OVERRIDE_KINDS.contains(&kind) {
        kind.to_string()
    } else {
        resolved.to_string()
    }
}

fn referenced_label(snapshot: &PageSnapshot, element: &Element) -> Option<String> {
    let reference = element.attribute("aria-labelledby")?;
    let referent = snapshot.element_by_dom_id(reference)?;
    non_empty(referent.raw_text.as_deref())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
