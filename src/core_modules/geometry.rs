// THEORY:
// The `geometry` module holds the plain value types that describe where on a
// sheet something happens: points, rectangles, sizes, offsets and margins.
// They carry no behavior beyond small measurements and their canonical
// bracketed text form, which is what option echoing prints.
//
// Validation lives with the parsers, not here. A `Rectangle` can be built
// inverted or empty; only `parse_rectangle` refuses to hand one out.

pub mod geometry {
    use std::fmt;

    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    pub type Coordinate = i32;
    pub type Dimension = i32;
    pub type PixelCount = u64;

    /// An integer position on a sheet.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Point {
        pub x: Coordinate,
        pub y: Coordinate,
    }

    impl Point {
        pub fn new(x: Coordinate, y: Coordinate) -> Self {
            Self { x, y }
        }
    }

    /// An axis-aligned region given by two opposite vertices.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Rectangle {
        pub vertex: [Point; 2],
    }

    impl Rectangle {
        pub fn new(start: Point, end: Point) -> Self {
            Self { vertex: [start, end] }
        }

        /// Number of pixels enclosed between the two vertices.
        ///
        /// Zero when either span is zero or negative, so inverted rectangles
        /// count as empty. Computed in 64 bits.
        pub fn pixel_count(&self) -> PixelCount {
            let width = self.vertex[1].x as i64 - self.vertex[0].x as i64;
            let height = self.vertex[1].y as i64 - self.vertex[0].y as i64;
            if width <= 0 || height <= 0 {
                return 0;
            }
            (width as PixelCount) * (height as PixelCount)
        }
    }

    impl fmt::Display for Rectangle {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "[{},{},{},{}]",
                self.vertex[0].x, self.vertex[0].y, self.vertex[1].x, self.vertex[1].y
            )
        }
    }

    /// Width and height in pixels.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct RectangleSize {
        pub width: Dimension,
        pub height: Dimension,
    }

    impl RectangleSize {
        pub fn new(width: Dimension, height: Dimension) -> Self {
            Self { width, height }
        }
    }

    impl fmt::Display for RectangleSize {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{},{}]", self.width, self.height)
        }
    }

    /// A signed horizontal/vertical offset. Also used for scan step sizes.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Delta {
        pub horizontal: Coordinate,
        pub vertical: Coordinate,
    }

    impl Delta {
        pub fn new(horizontal: Coordinate, vertical: Coordinate) -> Self {
            Self {
                horizontal,
                vertical,
            }
        }
    }

    impl fmt::Display for Delta {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{},{}]", self.horizontal, self.vertical)
        }
    }

    /// Margins measured inwards from each edge of a sheet.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Border {
        pub left: Dimension,
        pub top: Dimension,
        pub right: Dimension,
        pub bottom: Dimension,
    }

    impl Border {
        pub fn new(left: Dimension, top: Dimension, right: Dimension, bottom: Dimension) -> Self {
            Self {
                left,
                top,
                right,
                bottom,
            }
        }
    }

    impl fmt::Display for Border {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{},{},{},{}]", self.left, self.top, self.right, self.bottom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::geometry::*;

    #[test]
    fn pixel_count_of_regular_rectangle() {
        let rect = Rectangle::new(Point::new(0, 0), Point::new(10, 20));
        assert_eq!(rect.pixel_count(), 200);
    }

    #[test]
    fn degenerate_and_inverted_rectangles_are_empty() {
        assert_eq!(Rectangle::default().pixel_count(), 0);
        let flat = Rectangle::new(Point::new(5, 5), Point::new(15, 5));
        assert_eq!(flat.pixel_count(), 0);
        let inverted = Rectangle::new(Point::new(10, 10), Point::new(0, 0));
        assert_eq!(inverted.pixel_count(), 0);
    }

    #[test]
    fn pixel_count_does_not_overflow() {
        let rect = Rectangle::new(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
        assert_eq!(rect.pixel_count(), (u32::MAX as u64) * (u32::MAX as u64));
    }

    #[test]
    fn bracketed_text_forms() {
        let rect = Rectangle::new(Point::new(1, 2), Point::new(3, 4));
        assert_eq!(rect.to_string(), "[1,2,3,4]");
        assert_eq!(RectangleSize::new(210, 297).to_string(), "[210,297]");
        assert_eq!(Delta::new(-3, 7).to_string(), "[-3,7]");
        assert_eq!(Border::new(1, 2, 3, 4).to_string(), "[1,2,3,4]");
    }
}
