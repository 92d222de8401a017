//! Error types for panel layouts.

use crate::item::ItemKey;
use crate::types::Axis;
use thiserror::Error;

/// Errors raised while resolving item sizes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Layout root {key} must have an explicit {missing}")]
    InvalidRoot { key: ItemKey, missing: Axis },
}
