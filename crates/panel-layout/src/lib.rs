//! Size resolution for resizable panel layouts.
//!
//! This crate computes the width and height of every item in a layout tree
//! so that each container's children fill the container's box.
//!
//! # Architecture
//!
//! 1. **Resolution**: [`resolve_sizes`] walks the tree top-down and produces a
//!    [`SizeMap`] covering every item
//! 2. **Render sizing**: [`item_size`] derives the drawable box of an item,
//!    reserving room for drag handles on resizable leaf edges
//! 3. **Caching**: [`SizeCache`] keeps the most recent resolution for a tree
//!
//! # Example
//!
//! ```
//! use panel_layout::{resolve_sizes, LayoutItem, Size};
//!
//! let root = LayoutItem::row("root")
//!     .with_size(100.0, 50.0)
//!     .with_children([LayoutItem::new("a").with_width(30.0), LayoutItem::new("b")]);
//!
//! let sizes = resolve_sizes(&root, false)?;
//! assert_eq!(sizes.get("b"), Some(Size::new(70.0, 50.0)));
//! # Ok::<(), panel_layout::LayoutError>(())
//! ```

mod cache;
mod options;
mod render;
mod resolve;

pub use cache::{SizeCache, SizeCacheStats};
pub use options::{LayoutOptions, DRAG_BAR_THICKNESS};
pub use render::{item_size, leaf_render_size, render_size};
pub use resolve::resolve_sizes;

pub use panel_core::{Axis, Dimension, Direction, ItemKey, LayoutError, LayoutItem, Size, SizeMap};
