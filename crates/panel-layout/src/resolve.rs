//! Size resolution for layout trees.
//!
//! Each container is resolved in two phases per axis. Children with an
//! explicit value on the axis take it first; the space they leave over is
//! then handed to the auto-sized children, or, when there are none, added to
//! the flexible children's starting sizes. Along the container's direction
//! the leftover is split evenly; across it every child spans the container.

use panel_core::{Axis, Dimension, ItemKey, LayoutError, LayoutItem, Size, SizeMap};

/// How a child takes part in distributing one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    /// Explicit value; `flexible` children grow or shrink from it
    Fixed { value: f64, flexible: bool },
    /// Takes a share of the remaining space
    Auto,
}

impl Slot {
    fn classify(child: &LayoutItem, axis: Axis, ignore_visibility: bool) -> Slot {
        if !child.visible && !ignore_visibility {
            return Slot::Fixed { value: 0.0, flexible: false };
        }
        match child.dimension(axis) {
            Dimension::Fixed(value) => Slot::Fixed {
                value: value.max(0.0),
                flexible: child.flexible,
            },
            Dimension::Auto => Slot::Auto,
        }
    }
}

/// Resolve the size of every item in a layout tree.
///
/// The root must declare both its width and height. When `ignore_visibility`
/// is set, hidden items are sized as if they were visible.
pub fn resolve_sizes(root: &LayoutItem, ignore_visibility: bool) -> Result<SizeMap, LayoutError> {
    let root_size = match (root.width, root.height) {
        (Dimension::Fixed(width), Dimension::Fixed(height)) => {
            Size::new(width.max(0.0), height.max(0.0))
        }
        (Dimension::Auto, _) => return Err(invalid_root(&root.key, Axis::Width)),
        (_, Dimension::Auto) => return Err(invalid_root(&root.key, Axis::Height)),
    };

    let _span = tracing::debug_span!(
        "resolve_sizes",
        root = %root.key,
        ignore_visibility
    )
    .entered();

    let mut sizes = SizeMap::with_capacity(root.count());
    sizes.insert(root.key.clone(), root_size);
    resolve_children(root, root_size, ignore_visibility, &mut sizes);

    tracing::debug!(items = sizes.len(), "resolved layout sizes");
    Ok(sizes)
}

fn invalid_root(key: &ItemKey, missing: Axis) -> LayoutError {
    LayoutError::InvalidRoot {
        key: key.clone(),
        missing,
    }
}

/// Size the children of `container` inside `container_size`, then recurse.
fn resolve_children(
    container: &LayoutItem,
    container_size: Size,
    ignore_visibility: bool,
    sizes: &mut SizeMap,
) {
    let children = container.children();
    if children.is_empty() {
        return;
    }

    let mut resolved = vec![Size::ZERO; children.len()];
    for axis in Axis::ALL {
        distribute_axis(container, container_size, axis, ignore_visibility, &mut resolved);
    }

    for (child, child_size) in children.iter().zip(resolved) {
        sizes.insert(child.key.clone(), child_size);
        resolve_children(child, child_size, ignore_visibility, sizes);
    }
}

/// Fill in one axis of `resolved` for the children of `container`.
fn distribute_axis(
    container: &LayoutItem,
    container_size: Size,
    axis: Axis,
    ignore_visibility: bool,
    resolved: &mut [Size],
) {
    let available = container_size.get(axis);
    let mut remaining = available;
    let mut auto = Vec::new();
    let mut flexible = Vec::new();

    for (index, child) in container.children().iter().enumerate() {
        match Slot::classify(child, axis, ignore_visibility) {
            Slot::Fixed { value, flexible: is_flexible } => {
                remaining -= value;
                resolved[index].set(axis, value);
                if is_flexible {
                    flexible.push(index);
                }
            }
            Slot::Auto => auto.push(index),
        }
    }

    let along_direction = container.direction.main_axis() == axis;

    tracing::trace!(
        container = %container.key,
        %axis,
        available,
        remaining,
        auto = auto.len(),
        flexible = flexible.len(),
        "distributing axis"
    );

    if !auto.is_empty() {
        if along_direction && remaining < 0.0 {
            tracing::warn!(
                container = %container.key,
                %axis,
                overflow = -remaining,
                "fixed children overflow container, auto children collapse to zero"
            );
        }
        let share = if along_direction {
            (remaining / auto.len() as f64).floor().max(0.0)
        } else {
            available
        };
        for index in auto {
            resolved[index].set(axis, share);
        }
    } else if remaining != 0.0 && !flexible.is_empty() {
        let delta = if along_direction {
            (remaining / flexible.len() as f64).floor()
        } else {
            available
        };
        for index in flexible {
            let start = resolved[index].get(axis);
            resolved[index].set(axis, (start + delta).max(0.0));
        }
    }
}
