//! Errors raised by the quadtree.

use thiserror::Error;

use crate::P2;

/// An item could not be routed to any quadrant of a full node.
///
/// Quadrant containment is an open-interval test, so a point lying exactly on a dividing line
/// (or outside the node altogether) belongs to none of the four children.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("no quadrant contains point ({}, {})", .point.x, .point.y)]
pub struct PlacementError {
    point: P2,
}

impl PlacementError {
    pub(crate) fn new(point: P2) -> Self {
        Self { point }
    }

    /// The position that could not be placed
    pub fn point(&self) -> P2 {
        self.point
    }
}
