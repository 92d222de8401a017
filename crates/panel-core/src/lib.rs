//! Core types for resizable panel layouts.
//!
//! This crate provides the foundational types shared by the layout engine:
//! - The layout item tree ([`LayoutItem`]) with its per-axis dimensions
//! - Resolved sizes ([`Size`], [`SizeMap`])
//! - Error types

pub mod errors;
pub mod item;
pub mod types;

pub use errors::*;
pub use item::*;
pub use types::*;
