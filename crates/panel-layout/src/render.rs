//! Rendered item sizes.
//!
//! Containers always take their full resolved box while leaves give up a
//! strip on each resizable edge so the drag handle can be drawn there.

use panel_core::{LayoutItem, Size, SizeMap};

use crate::options::LayoutOptions;

/// Compute the drawable size of an item from resolved sizes.
///
/// A leaf loses `options.drag_bar_thickness` on its right edge when it or its
/// parent is resizable on the right, and likewise on the bottom edge.
/// Containers are returned unchanged. Returns `None` if `item` has no entry
/// in `sizes`.
pub fn item_size(
    item: &LayoutItem,
    parent: Option<&LayoutItem>,
    sizes: &SizeMap,
    is_container: bool,
    options: &LayoutOptions,
) -> Option<Size> {
    let resolved = sizes.get(item.key.as_str())?;
    if is_container {
        return Some(resolved);
    }

    let parent_right = parent.is_some_and(|p| p.resizable_right);
    let parent_bottom = parent.is_some_and(|p| p.resizable_bottom);
    let gap = |reserved: bool| if reserved { options.drag_bar_thickness } else { 0.0 };

    Some(Size::new(
        (resolved.width - gap(item.resizable_right || parent_right)).max(0.0),
        (resolved.height - gap(item.resizable_bottom || parent_bottom)).max(0.0),
    ))
}

/// Drawable size of a leaf using the default drag handle thickness.
pub fn leaf_render_size(item: &LayoutItem, parent: Option<&LayoutItem>, sizes: &SizeMap) -> Option<Size> {
    item_size(item, parent, sizes, false, &LayoutOptions::default())
}

/// Drawable size of any item, treating it as a container if it has children.
pub fn render_size(
    item: &LayoutItem,
    parent: Option<&LayoutItem>,
    sizes: &SizeMap,
    options: &LayoutOptions,
) -> Option<Size> {
    item_size(item, parent, sizes, item.is_container(), options)
}
