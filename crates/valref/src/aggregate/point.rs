//! Two-dimensional points: a mutable value and an immutable record

use super::{Aggregate, Semantics};

/// A mutable point with value semantics.
///
/// Assignment copies both coordinates, so changing a copy never touches
/// the original. There is deliberately no `==`: compare coordinates
/// explicitly, or use [`Point2DRecord`].
///
/// ```
/// use valref::Point2D;
///
/// let point1 = Point2D::new(3, 5);
/// let mut point3 = point1;
/// point3.x += 1;
/// point3.y -= 1;
///
/// assert_eq!((point1.x, point1.y), (3, 5));
/// assert_eq!((point3.x, point3.y), (4, 4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: i32,

    /// Vertical coordinate
    pub y: i32,
}

impl Point2D {
    /// Create a point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Aggregate for Point2D {
    const TYPE_NAME: &'static str = "Point2D";
    const SEMANTICS: Semantics = Semantics::OwnedByCopy;
}

/// An immutable point compared by its coordinates.
///
/// The coordinates are fixed at construction. "Changing" a record means
/// building a new one with [`with_x`](Point2DRecord::with_x) or
/// [`with_y`](Point2DRecord::with_y).
///
/// ```
/// use valref::Point2DRecord;
///
/// let a = Point2DRecord::new(3, 5);
/// let b = a.with_x(4);
///
/// assert_eq!(a, Point2DRecord::new(3, 5));
/// assert_eq!(b.x(), 4);
/// ```
///
/// Fields cannot be assigned:
///
/// ```compile_fail
/// use valref::Point2DRecord;
///
/// let mut p = Point2DRecord::new(3, 5);
/// p.x += 1;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point2DRecord {
    x: i32,
    y: i32,
}

impl Point2DRecord {
    /// Create a record
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate
    pub fn y(&self) -> i32 {
        self.y
    }

    /// A copy of this record with a different `x`
    #[must_use]
    pub fn with_x(&self, x: i32) -> Self {
        Self { x, ..*self }
    }

    /// A copy of this record with a different `y`
    #[must_use]
    pub fn with_y(&self, y: i32) -> Self {
        Self { y, ..*self }
    }
}

impl PartialEq for Point2DRecord {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point2DRecord {}

impl Aggregate for Point2DRecord {
    const TYPE_NAME: &'static str = "Point2DRecord";
    const SEMANTICS: Semantics = Semantics::Immutable;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_copy_is_independent() {
        let point1 = Point2D::new(3, 5);
        let mut point3 = point1;
        point3.x += 1;
        assert_eq!(point1.x, 3);
        assert_eq!(point3.x, 4);
    }

    #[test]
    fn test_record_equality() {
        assert_eq!(Point2DRecord::new(3, 5), Point2DRecord::new(3, 5));
        assert_ne!(Point2DRecord::new(3, 5), Point2DRecord::new(5, 3));
    }

    #[test]
    fn test_with_leaves_receiver() {
        let a = Point2DRecord::new(3, 5);
        let b = a.with_y(6);
        assert_eq!((a.x(), a.y()), (3, 5));
        assert_eq!((b.x(), b.y()), (3, 6));
    }

    #[test]
    fn test_record_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Point2DRecord>();
        assert!(Point2DRecord::SEMANTICS.is_thread_shareable());
    }
}
