// THEORY:
// A `Direction` tells a scan or alignment filter which axes it may work along.
// The two flags are independent, and both being off is a real setting ("none"),
// not a missing one.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Direction {
    pub const NONE: Direction = Direction::new(false, false);
    pub const HORIZONTAL: Direction = Direction::new(true, false);
    pub const VERTICAL: Direction = Direction::new(false, true);
    pub const BOTH: Direction = Direction::new(true, true);

    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn is_none(&self) -> bool {
        !self.horizontal && !self.vertical
    }

    /// The canonical bracketed name of this direction.
    pub fn as_str(&self) -> &'static str {
        match (self.horizontal, self.vertical) {
            (true, true) => "[horizontal,vertical]",
            (true, false) => "[horizontal]",
            (false, true) => "[vertical]",
            (false, false) => "[none]",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(Direction::NONE.to_string(), "[none]");
        assert_eq!(Direction::HORIZONTAL.to_string(), "[horizontal]");
        assert_eq!(Direction::VERTICAL.to_string(), "[vertical]");
        assert_eq!(Direction::BOTH.to_string(), "[horizontal,vertical]");
    }

    #[test]
    fn default_is_none() {
        assert!(Direction::default().is_none());
        assert!(!Direction::VERTICAL.is_none());
    }
}
