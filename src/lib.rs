//! A point quadtree over a bounded plane.
//!
//! Each node owns a [`Rect`] boundary and up to `capacity` items. Once a node is full, the
//! next insertion splits it into four quadrants and the item is routed to the first quadrant
//! whose (open) boundary contains it. Items already held by a node stay where they are.
//!
//! ```
//! use nalgebra::point;
//! use quadtree_range::{QuadTree, Rect};
//!
//! let mut qt = QuadTree::from_coords(100.0, 100.0, 100.0, 100.0, 4);
//! qt.insert(point![10.0, 20.0]).unwrap();
//! qt.insert(point![150.0, 150.0]).unwrap();
//!
//! let found = qt.query(&Rect::from_coords(10.0, 20.0, 5.0, 5.0));
//! assert_eq!(found, vec![point![10.0, 20.0]]);
//! ```

use nalgebra::{self as na, Point2};

pub mod error;
pub mod quadtree;
pub mod shapes;

pub use error::PlacementError;
pub use quadtree::{QuadTree, QuadTreeConfig};
pub use shapes::Rect;

/// 2d point with `f64` coordinates
pub type P2 = Point2<f64>;

/// Trait for getting a 2d point position of data stored in the [`QuadTree`]
pub trait Point {
    /// Get 2d point position
    fn point(&self) -> P2;

    /// Euclidean distance between the positions of two items
    fn distance_to<O: Point + ?Sized>(&self, other: &O) -> f64 {
        na::distance(&self.point(), &other.point())
    }
}

impl Point for P2 {
    fn point(&self) -> P2 {
        *self
    }
}
