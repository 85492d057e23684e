use nalgebra::{vector, Vector2};

use crate::P2;

/// Represents an axis-aligned rectangle defined by a center point and half-extents.
/// It is used both as the boundary of QuadTree nodes and as the area of a range query.
///
/// `width` and `height` are measured from the center to an edge, so the rect spans
/// `center.x - width .. center.x + width` horizontally.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    center: P2,
    half_extents: Vector2<f64>,
}

impl Rect {
    /// Create a new rect from a center point and half-extents
    pub fn new(center: P2, width: f64, height: f64) -> Self {
        Self {
            center,
            half_extents: vector![width, height],
        }
    }

    /// Create a new rect from raw center coordinates and half-extents
    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(P2::new(x, y), width, height)
    }

    /// Get the center point of the rect
    pub fn center(&self) -> P2 {
        self.center
    }

    /// Horizontal coordinate of the center
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Vertical coordinate of the center
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Horizontal half-extent
    pub fn width(&self) -> f64 {
        self.half_extents.x
    }

    /// Vertical half-extent
    pub fn height(&self) -> f64 {
        self.half_extents.y
    }

    /// Get the corner with the smallest coordinates
    pub fn start(&self) -> P2 {
        self.center - self.half_extents
    }

    /// Get the corner with the largest coordinates
    pub fn end(&self) -> P2 {
        self.center + self.half_extents
    }

    /// Check if a point lies strictly inside the rect.
    ///
    /// Points on an edge are not contained.
    pub fn contains(&self, point: &P2) -> bool {
        point.x > self.x() - self.width()
            && point.x < self.x() + self.width()
            && point.y > self.y() - self.height()
            && point.y < self.y() + self.height()
    }

    /// Check if the rect shares any space with another rect. Touching edges count.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x() - other.width() > self.x() + self.width()
            || other.x() + other.width() < self.x() - self.width()
            || other.y() - other.height() > self.y() + self.height()
            || other.y() + other.height() < self.y() - self.height())
    }

    /// Quarter the rect to produce four smaller rects, ordered top-left, top-right,
    /// bottom-left, bottom-right (y grows upwards).
    pub fn quarter(&self) -> [Self; 4] {
        let half = self.half_extents / 2.0;
        let (dx, dy) = (vector![half.x, 0.], vector![0., half.y]);

        [
            Self::new(self.center - dx + dy, half.x, half.y),
            Self::new(self.center + dx + dy, half.x, half.y),
            Self::new(self.center - dx - dy, half.x, half.y),
            Self::new(self.center + dx - dy, half.x, half.y),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use nalgebra::point;

    use super::*;

    pub(crate) fn make_rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_coords(x, y, w, h)
    }

    #[test]
    fn rect_properties() {
        let rect = make_rect(5.0, 5.0, 5.0, 2.0);
        assert_eq!(rect.center(), point![5.0, 5.0], "Center should be at (5.0, 5.0)");
        assert_eq!(rect.start(), point![0.0, 3.0], "Start should be at (0.0, 3.0)");
        assert_eq!(rect.end(), point![10.0, 7.0], "End should be at (10.0, 7.0)");
        assert_eq!((rect.width(), rect.height()), (5.0, 2.0));
    }

    #[test]
    fn rect_contains_point() {
        let rect = make_rect(5.0, 5.0, 5.0, 5.0);
        assert!(
            rect.contains(&point![5.0, 5.0]),
            "Rect should contain point (5.0, 5.0)"
        );
        assert!(
            !rect.contains(&point![-1.0, 5.0]),
            "Rect should not contain point (-1.0, 5.0)"
        );
        assert!(
            !rect.contains(&point![0.0, 5.0]),
            "Point on the left edge should not be contained"
        );
        assert!(
            !rect.contains(&point![5.0, 10.0]),
            "Point on the top edge should not be contained"
        );
        assert!(
            !rect.contains(&point![10.0, 10.0]),
            "Corner should not be contained"
        );
        assert!(
            rect.contains(&point![9.999, 0.001]),
            "Point just inside the corner should be contained"
        );
    }

    #[test]
    fn degenerate_rect_contains_nothing() {
        let flat = make_rect(0.0, 0.0, 0.0, 1.0);
        assert!(!flat.contains(&point![0.0, 0.0]));
        let inverted = make_rect(0.0, 0.0, -1.0, -1.0);
        assert!(!inverted.contains(&point![0.0, 0.0]));
    }

    #[test]
    fn rect_intersects_with_another_rect() {
        let rect1 = make_rect(5.0, 5.0, 5.0, 5.0);

        let rect2 = make_rect(10.0, 10.0, 5.0, 5.0);
        assert!(rect1.intersects(&rect2), "Rect1 should intersect with Rect2");

        let rect3 = make_rect(15.0, 15.0, 5.0, 5.0);
        assert!(
            rect1.intersects(&rect3),
            "Rect1 should touch Rect3 at the corner, counting as intersect"
        );

        let rect4 = make_rect(16.0, 16.0, 5.0, 5.0);
        assert!(!rect1.intersects(&rect4), "Rect1 should not intersect with Rect4");

        let rect5 = make_rect(-3.0, 5.0, 2.0, 2.0);
        assert!(
            !rect1.intersects(&rect5),
            "Rect1 should not intersect with Rect5 on the left"
        );

        let rect6 = make_rect(5.0, 5.0, 1.0, 1.0);
        assert!(
            rect1.intersects(&rect6) && rect6.intersects(&rect1),
            "Nested rects should intersect both ways"
        );

        let rect7 = make_rect(5.0, -3.0, 5.0, 2.0);
        assert!(
            !rect1.intersects(&rect7),
            "Rect1 should not intersect with Rect7 below it"
        );

        let rect8 = make_rect(5.0, 12.0, 5.0, 2.0);
        assert!(
            rect1.intersects(&rect8),
            "Rect1 should touch Rect8 at the top, counting as intersect"
        );
    }

    #[test]
    fn quartering_rect() {
        let rect = make_rect(2.0, 2.0, 2.0, 2.0);
        let quarters = rect.quarter();
        assert_eq!(
            quarters[0],
            make_rect(1.0, 3.0, 1.0, 1.0),
            "Top-left quarter should match expected dimensions"
        );
        assert_eq!(
            quarters[1],
            make_rect(3.0, 3.0, 1.0, 1.0),
            "Top-right quarter should match expected dimensions"
        );
        assert_eq!(
            quarters[2],
            make_rect(1.0, 1.0, 1.0, 1.0),
            "Bottom-left quarter should match expected dimensions"
        );
        assert_eq!(
            quarters[3],
            make_rect(3.0, 1.0, 1.0, 1.0),
            "Bottom-right quarter should match expected dimensions"
        );
    }

    #[test]
    fn quarters_tile_parent() {
        let rect = make_rect(0.0, 0.0, 8.0, 4.0);
        let quarters = rect.quarter();
        for p in [
            point![-7.0, 3.0],
            point![7.0, 3.0],
            point![-7.0, -3.0],
            point![7.0, -3.0],
            point![0.5, -0.5],
        ] {
            let owners = quarters.iter().filter(|q| q.contains(&p)).count();
            assert_eq!(owners, 1, "{p} should be owned by exactly one quarter");
        }

        let on_divider = point![0.0, 1.0];
        assert!(
            quarters.iter().all(|q| !q.contains(&on_divider)),
            "A point on the vertical divider belongs to no quarter"
        );
        assert!(rect.contains(&on_divider));
    }
}
