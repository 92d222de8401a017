//! The layout item tree.
//!
//! A [`LayoutItem`] describes one panel: its declared dimensions, how its
//! children stack, and which of its edges carry a resize handle. Items with
//! `children` are containers, items without are leaves.

use std::borrow::Borrow;
use std::fmt;

use crate::types::{Axis, Dimension, Direction};

/// Identifier of a layout item, unique within one tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemKey(pub String);

impl ItemKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        ItemKey(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        ItemKey(s)
    }
}

impl Borrow<str> for ItemKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node in the layout tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutItem {
    pub key: ItemKey,
    /// How children are stacked. Ignored on leaves.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Direction,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Dimension::is_auto"))]
    pub width: Dimension,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Dimension::is_auto"))]
    pub height: Dimension,
    /// Explicit dimensions are starting sizes that absorb leftover space
    #[cfg_attr(feature = "serde", serde(default))]
    pub flexible: bool,
    #[cfg_attr(feature = "serde", serde(default = "default_visible"))]
    pub visible: bool,
    /// A drag handle is drawn on the right edge
    #[cfg_attr(feature = "serde", serde(default))]
    pub resizable_right: bool,
    /// A drag handle is drawn on the bottom edge
    #[cfg_attr(feature = "serde", serde(default))]
    pub resizable_bottom: bool,
    /// `Some` marks a container, even when empty
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub children: Option<Vec<LayoutItem>>,
}

#[cfg(feature = "serde")]
fn default_visible() -> bool {
    true
}

impl LayoutItem {
    /// Create a visible, auto-sized leaf.
    pub fn new(key: impl Into<ItemKey>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Row,
            width: Dimension::Auto,
            height: Dimension::Auto,
            flexible: false,
            visible: true,
            resizable_right: false,
            resizable_bottom: false,
            children: None,
        }
    }

    /// Create an empty container stacking its children in a row.
    pub fn row(key: impl Into<ItemKey>) -> Self {
        Self {
            direction: Direction::Row,
            children: Some(Vec::new()),
            ..Self::new(key)
        }
    }

    /// Create an empty container stacking its children in a column.
    pub fn column(key: impl Into<ItemKey>) -> Self {
        Self {
            direction: Direction::Column,
            children: Some(Vec::new()),
            ..Self::new(key)
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Dimension::Fixed(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Dimension::Fixed(height);
        self
    }

    /// Set both explicit dimensions.
    pub fn with_size(self, width: f64, height: f64) -> Self {
        self.with_width(width).with_height(height)
    }

    /// Mark the item as flexible.
    pub fn flexible(mut self) -> Self {
        self.flexible = true;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Mark the item as hidden.
    pub fn hidden(self) -> Self {
        self.with_visible(false)
    }

    pub fn resizable_right(mut self) -> Self {
        self.resizable_right = true;
        self
    }

    pub fn resizable_bottom(mut self) -> Self {
        self.resizable_bottom = true;
        self
    }

    /// Append a child, turning a leaf into a container.
    pub fn with_child(mut self, child: LayoutItem) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Append several children, turning a leaf into a container.
    pub fn with_children(mut self, children: impl IntoIterator<Item = LayoutItem>) -> Self {
        self.children.get_or_insert_with(Vec::new).extend(children);
        self
    }

    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    /// Children in order; empty for leaves.
    pub fn children(&self) -> &[LayoutItem] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Declared dimension along an axis.
    pub fn dimension(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Find an item by key, depth-first.
    pub fn find(&self, key: &str) -> Option<&LayoutItem> {
        self.iter().find(|item| item.key.as_str() == key)
    }

    /// Find the parent of the item with the given key.
    pub fn find_parent(&self, key: &str) -> Option<&LayoutItem> {
        self.iter()
            .find(|item| item.children().iter().any(|child| child.key.as_str() == key))
    }

    /// Iterate over this item and all descendants in pre-order.
    pub fn iter(&self) -> LayoutIter<'_> {
        LayoutIter { stack: vec![self] }
    }

    /// Number of items in this subtree, including itself.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Pre-order iterator over a layout subtree.
pub struct LayoutIter<'a> {
    stack: Vec<&'a LayoutItem>,
}

impl<'a> Iterator for LayoutIter<'a> {
    type Item = &'a LayoutItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children().iter().rev());
        Some(item)
    }
}
