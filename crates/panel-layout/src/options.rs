//! Options for render sizing.

/// Thickness of the drag handle drawn on a resizable edge.
pub const DRAG_BAR_THICKNESS: f64 = 5.0;

/// Options for deriving rendered item sizes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Space reserved on a resizable edge of a leaf
    pub drag_bar_thickness: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            drag_bar_thickness: DRAG_BAR_THICKNESS,
        }
    }
}

impl LayoutOptions {
    /// Set the drag handle thickness.
    pub fn with_drag_bar_thickness(mut self, thickness: f64) -> Self {
        self.drag_bar_thickness = thickness;
        self
    }
}
