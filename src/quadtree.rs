use std::fmt;

use log::trace;

use crate::{error::PlacementError, shapes::Rect, Point, P2};

/// Parameters for building a root [`QuadTree`]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadTreeConfig {
    /// The region covered by the root node
    pub boundary: Rect,
    /// The maximum number of items a node holds directly before subdividing
    pub capacity: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            boundary: Rect::from_coords(100.0, 100.0, 100.0, 100.0),
            capacity: 4,
        }
    }
}

/// A point QuadTree answering rectangular range queries.
///
/// Every node is either a leaf or split into exactly four children (top-left, top-right,
/// bottom-left, bottom-right). A node keeps the items it held when it split; later insertions
/// are routed to the children.
#[derive(Debug)]
pub struct QuadTree<T = P2> {
    boundary: Rect,
    items: Vec<T>,
    children: Option<Box<[QuadTree<T>; 4]>>,
    capacity: usize,
}

impl<T: Point + Clone> QuadTree<T> {
    /// Create a new empty quadtree
    ///
    /// ## Arguments
    /// - `boundary`: The boundary of the quadtree
    /// - `capacity`: The maximum number of items a node can hold before subdividing
    ///
    /// ## Panics
    /// If `capacity` is zero.
    pub fn new(boundary: Rect, capacity: usize) -> Self {
        assert!(capacity > 0, "quadtree node capacity must be at least 1");
        Self {
            boundary,
            items: Vec::with_capacity(capacity),
            children: None,
            capacity,
        }
    }

    /// Create a new empty quadtree centered at `(x, y)` with half-extents `width` and `height`
    pub fn from_coords(x: f64, y: f64, width: f64, height: f64, capacity: usize) -> Self {
        Self::new(Rect::from_coords(x, y, width, height), capacity)
    }

    /// Create a new empty quadtree from a [`QuadTreeConfig`]
    pub fn from_config(config: &QuadTreeConfig) -> Self {
        Self::new(config.boundary, config.capacity)
    }

    /// Insert an item into this node or one of its descendants.
    ///
    /// A full node splits first, then hands the item to the first child (in top-left,
    /// top-right, bottom-left, bottom-right order) whose boundary strictly contains it.
    ///
    /// **Returns** a [`PlacementError`] if no child contains the item, which happens for
    /// points lying exactly on a dividing line or outside the node.
    ///
    /// Repeatedly inserting the same coordinates keeps halving the quadrant around them. Once
    /// the halved extents run into `f64` precision a dividing line lands exactly on the point,
    /// and further copies fail with [`PlacementError`] instead of splitting forever.
    pub fn insert(&mut self, item: T) -> Result<(), PlacementError> {
        if self.items.len() < self.capacity {
            self.items.push(item);
            return Ok(());
        }

        let point = item.point();
        self.children_mut()
            .iter_mut()
            .find(|child| child.contains(&point))
            .ok_or(PlacementError::new(point))?
            .insert(item)
    }

    /// Split the node into four quadrants. Does nothing if the node is already split.
    ///
    /// Items already held by the node are not redistributed.
    pub fn divide(&mut self) {
        self.children_mut();
    }

    /// Collect every stored item strictly inside `rect`.
    ///
    /// Items held by a node come first, in insertion order, followed by the results of the
    /// top-left, top-right, bottom-left and bottom-right children.
    pub fn query(&self, rect: &Rect) -> Vec<T> {
        let mut results = Vec::new();
        self.query_into(rect, &mut results);
        results
    }

    /// Queries the QuadTree for items within `rect`.
    /// This method appends found items to a passed mutable vector.
    pub fn query_into(&self, rect: &Rect, results: &mut Vec<T>) {
        self.collect(rect, results, &mut || ());
    }

    /// Drop every item and child, turning the node back into an empty leaf
    pub fn clear(&mut self) {
        trace!(
            "clearing node at ({}, {}) split={}",
            self.boundary.x(),
            self.boundary.y(),
            self.is_split()
        );
        self.items.clear();
        self.children = None;
    }

    /// Check if the node's boundary strictly contains a point
    pub fn contains(&self, point: &P2) -> bool {
        self.boundary.contains(point)
    }

    /// Check if the node's boundary shares any space with a rect
    pub fn intersects(&self, rect: &Rect) -> bool {
        self.boundary.intersects(rect)
    }

    /// Get the boundary rect of the node
    pub fn boundary(&self) -> &Rect {
        &self.boundary
    }

    /// Maximum number of items held directly by each node
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items stored directly in this node, in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Check if the node has been divided into four children
    pub fn is_split(&self) -> bool {
        self.children.is_some()
    }

    /// The four children in top-left, top-right, bottom-left, bottom-right order, if split
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Walk the subtree, calling `on_visit` for every node whose boundary is tested against `rect`
    fn collect<F: FnMut()>(&self, rect: &Rect, results: &mut Vec<T>, on_visit: &mut F) {
        on_visit();
        if !self.intersects(rect) {
            return;
        }

        results.extend(
            self.items
                .iter()
                .filter(|item| rect.contains(&item.point()))
                .cloned(),
        );

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect(rect, results, on_visit);
            }
        }
    }

    fn children_mut(&mut self) -> &mut [Self; 4] {
        let (boundary, capacity) = (self.boundary, self.capacity);
        self.children.get_or_insert_with(|| {
            trace!(
                "splitting node at ({}, {}) with half-extents ({}, {})",
                boundary.x(),
                boundary.y(),
                boundary.width(),
                boundary.height()
            );
            Box::new(boundary.quarter().map(|quarter| Self::new(quarter, capacity)))
        })
    }
}

impl<T: Point> QuadTree<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize, short: bool) -> fmt::Result {
        let indent = "  ".repeat(depth);
        if short {
            writeln!(f, "{indent}|{}", PointList(&self.items))?;
        } else {
            write!(
                f,
                "{indent}Tree(x: {}, y: {}; w: {}, h: {}, points: {}, split: {})",
                self.boundary.x(),
                self.boundary.y(),
                self.boundary.width(),
                self.boundary.height(),
                self.items.len(),
                if self.children.is_some() { "yes" } else { "no" }
            )?;
            match self.children {
                Some(_) => writeln!(f, "\n{indent}  Points: {}", PointList(&self.items))?,
                None => writeln!(f, " {}", PointList(&self.items))?,
            }
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.render(f, depth + 1, short)?;
            }
        }
        Ok(())
    }
}

/// Renders the subtree one node per line, children indented two spaces below their parent in
/// top-left, top-right, bottom-left, bottom-right order.
///
/// The alternate form (`{:#}`) prints only the items held by each node.
impl<T: Point> fmt::Display for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = f.alternate();
        self.render(f, 0, short)
    }
}

struct PointList<'a, T>(&'a [T]);

impl<T: Point> fmt::Display for PointList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let p = item.point();
            write!(f, "({}, {})", p.x, p.y)?;
        }
        write!(f, "]")
    }
}
