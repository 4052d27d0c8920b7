use serde::{Deserialize, Serialize};

use crate::PlayerColor;

/// An undirected connection between two cells of the same owner.
///
/// The endpoints are stored in ascending order, so that the derived
/// equality is equality of the unordered pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Link {
    a: (i8, i8),
    b: (i8, i8),
    pub owner: PlayerColor,
}

impl Link {
    pub fn new(from: (i8, i8), to: (i8, i8), owner: PlayerColor) -> Self {
        let (a, b) = if from <= to { (from, to) } else { (to, from) };
        Self { a, b, owner }
    }

    pub fn endpoints(&self) -> ((i8, i8), (i8, i8)) {
        (self.a, self.b)
    }

    pub fn touches(&self, x: i8, y: i8) -> bool {
        self.a == (x, y) || self.b == (x, y)
    }

    /// The endpoint that is not `(x, y)`, if `(x, y)` is an endpoint at all.
    pub fn other_end(&self, x: i8, y: i8) -> Option<(i8, i8)> {
        if self.a == (x, y) {
            Some(self.b)
        } else if self.b == (x, y) {
            Some(self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_equality() {
        assert_eq!(
            Link::new((3, 3), (5, 4), PlayerColor::Red),
            Link::new((5, 4), (3, 3), PlayerColor::Red)
        );
        assert_ne!(
            Link::new((3, 3), (5, 4), PlayerColor::Red),
            Link::new((3, 3), (5, 4), PlayerColor::Blue)
        );
    }

    #[test]
    fn other_end() {
        let link = Link::new((5, 4), (3, 3), PlayerColor::Blue);
        assert_eq!(link.other_end(3, 3), Some((5, 4)));
        assert_eq!(link.other_end(5, 4), Some((3, 3)));
        assert_eq!(link.other_end(4, 4), None);
    }
}
