// THEORY:
// `Wipes` collects the rectangles a wipe option names, one per occurrence of the
// option. The list is bounded by `MAX_WIPES`; it is allocated once at that size
// and never grows past it. Parsing and diagnostics live in `parsers::parse_wipe`,
// this type only enforces the bound.

use crate::core_modules::geometry::geometry::Rectangle;
use crate::error::OptionError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on the number of wipe areas a single list can hold.
pub const MAX_WIPES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Rectangle>", into = "Vec<Rectangle>")
)]
pub struct Wipes {
    areas: Vec<Rectangle>,
}

impl Wipes {
    pub fn new() -> Self {
        Self {
            areas: Vec::with_capacity(MAX_WIPES),
        }
    }

    pub const fn capacity() -> usize {
        MAX_WIPES
    }

    pub fn count(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.areas.len() >= MAX_WIPES
    }

    /// Appends an area. Hands the rectangle back untouched when the list is full.
    pub fn try_push(&mut self, area: Rectangle) -> Result<(), Rectangle> {
        if self.is_full() {
            return Err(area);
        }
        self.areas.push(area);
        Ok(())
    }

    pub fn areas(&self) -> &[Rectangle] {
        &self.areas
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.areas.iter()
    }
}

impl Default for Wipes {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Rectangle>> for Wipes {
    type Error = OptionError;

    fn try_from(areas: Vec<Rectangle>) -> Result<Self, Self::Error> {
        if areas.len() > MAX_WIPES {
            return Err(OptionError::TooManyWipes {
                count: areas.len(),
                capacity: MAX_WIPES,
            });
        }
        let mut wipes = Wipes::new();
        wipes.areas.extend(areas);
        Ok(wipes)
    }
}

impl From<Wipes> for Vec<Rectangle> {
    fn from(wipes: Wipes) -> Self {
        wipes.areas
    }
}

impl<'a> IntoIterator for &'a Wipes {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::geometry::geometry::Point;

    fn area(n: i32) -> Rectangle {
        Rectangle::new(Point::new(n, n), Point::new(n + 1, n + 1))
    }

    #[test]
    fn fills_up_to_capacity() {
        let mut wipes = Wipes::new();
        for n in 0..MAX_WIPES as i32 {
            assert!(wipes.try_push(area(n)).is_ok());
        }
        assert!(wipes.is_full());
        assert_eq!(wipes.count(), MAX_WIPES);

        let rejected = wipes.try_push(area(-1));
        assert_eq!(rejected, Err(area(-1)));
        assert_eq!(wipes.count(), MAX_WIPES);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut wipes = Wipes::default();
        wipes.try_push(area(3)).unwrap();
        wipes.try_push(area(1)).unwrap();
        let order: Vec<_> = wipes.iter().map(|r| r.vertex[0].x).collect();
        assert_eq!(order, vec![3, 1]);
        assert_eq!((&wipes).into_iter().count(), 2);
    }

    #[test]
    fn conversion_from_vec_respects_capacity() {
        let fits = Wipes::try_from(vec![area(0), area(5)]).unwrap();
        assert_eq!(fits.count(), 2);

        let too_many: Vec<_> = (0..=MAX_WIPES as i32).map(area).collect();
        assert_eq!(
            Wipes::try_from(too_many),
            Err(OptionError::TooManyWipes {
                count: MAX_WIPES + 1,
                capacity: MAX_WIPES,
            })
        );
    }
}
