//! Two-dimensional points shared with C by value and by pointer.

pub mod ffi;

/// A point in the plane, laid out like the C `Point` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Shift the point by the given offsets
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

pub fn distance(p1: &Point, p2: &Point) -> f64 {
    p1.distance_to(p2)
}

pub fn translate(p: &mut Point, dx: f64, dy: f64) {
    p.translate(dx, dy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_layout_matches_c() {
        assert_eq!(std::mem::size_of::<Point>(), 16);
        assert_eq!(std::mem::align_of::<Point>(), std::mem::align_of::<f64>());
    }

    #[test]
    fn test_distance_345() {
        assert_eq!(distance(&Point::origin(), &Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(&Point::new(3.0, 4.0), &Point::origin()), 5.0);
    }

    #[test]
    fn test_translate() {
        let mut p = Point::new(1.0, 1.0);
        translate(&mut p, 2.0, 3.0);
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::origin());
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(x in -1.0e150f64..1.0e150, y in -1.0e150f64..1.0e150) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.distance_to(&p), 0.0);
        }

        #[test]
        fn distance_is_symmetric(
            x1 in -1.0e6f64..1.0e6, y1 in -1.0e6f64..1.0e6,
            x2 in -1.0e6f64..1.0e6, y2 in -1.0e6f64..1.0e6
        ) {
            let a = Point::new(x1, y1);
            let b = Point::new(x2, y2);
            prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }
    }
}
