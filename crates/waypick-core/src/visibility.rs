use crate::protocol::Element;

/// Minimum rendered extent, in layout units, for a pick target.
const MIN_PICK_EXTENT: f32 = 5.0;

/// Whether an element is a valid pick target.
///
/// Heuristic over the element's current rendered state: the bounding box
/// must exceed the minimum extent on both axes and the computed style must
/// not hide it. Not an accessibility-tree check; clipped-but-sized elements
/// pass and that false negative is accepted.
pub fn is_visible(element: &Element) -> bool {
    let rect = &element.rect;
    let style = &element.style;
    rect.width > MIN_PICK_EXTENT
        && rect.height > MIN_PICK_EXTENT
        && style.display != "none"
        && style.visibility != "hidden"
        && style.opacity != "0"
}
