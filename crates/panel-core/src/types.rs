//! Value types for panel layouts.

use std::fmt;

use indexmap::IndexMap;

use crate::item::ItemKey;

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    /// Both axes, width first.
    pub const ALL: [Axis; 2] = [Axis::Width, Axis::Height];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Stacking direction of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Children placed side by side (left to right)
    #[default]
    Row,
    /// Children stacked top to bottom
    Column,
}

impl Direction {
    /// The axis children compete for when stacked in this direction.
    pub fn main_axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Width,
            Direction::Column => Axis::Height,
        }
    }
}

/// A declared item dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Option<f64>", into = "Option<f64>"))]
pub enum Dimension {
    /// Explicit size in layout units
    Fixed(f64),
    /// Computed from the space left over by fixed siblings
    #[default]
    Auto,
}

impl Dimension {
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// The explicit value, if any.
    pub fn fixed(&self) -> Option<f64> {
        match self {
            Dimension::Fixed(value) => Some(*value),
            Dimension::Auto => None,
        }
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Fixed(value)
    }
}

impl From<Option<f64>> for Dimension {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Dimension::Auto, Dimension::Fixed)
    }
}

impl From<Dimension> for Option<f64> {
    fn from(value: Dimension) -> Self {
        value.fixed()
    }
}

/// A resolved width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Get the extent along an axis.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Set the extent along an axis.
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Width => self.width = value,
            Axis::Height => self.height = value,
        }
    }
}

/// Resolved sizes for every item of a tree, in pre-order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SizeMap {
    sizes: IndexMap<ItemKey, Size>,
}

impl SizeMap {
    /// Create an empty size map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a size map with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sizes: IndexMap::with_capacity(capacity),
        }
    }

    /// Record the size of an item, replacing any previous entry.
    pub fn insert(&mut self, key: ItemKey, size: Size) {
        self.sizes.insert(key, size);
    }

    pub fn get(&self, key: &str) -> Option<Size> {
        self.sizes.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sizes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterate entries in tree order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, &Size)> {
        self.sizes.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ItemKey> {
        self.sizes.keys()
    }
}

impl<'a> IntoIterator for &'a SizeMap {
    type Item = (&'a ItemKey, &'a Size);
    type IntoIter = indexmap::map::Iter<'a, ItemKey, Size>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter()
    }
}
