use serde::{Deserialize, Serialize};

/// A rectangle of cells represented by a min + max coordinate pair.
///
/// The two coordinates form an _inclusive_ 2D range, i.e. unlike in a
/// half-open range, a cell with `x == x_max` is contained in the area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: i8,
    pub y_min: i8,
    pub x_max: i8,
    pub y_max: i8,
}

impl BoundingBox {
    pub fn singleton(x: i8, y: i8) -> Self {
        Self {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
        }
    }

    /// The smallest rectangle containing both cells.
    pub fn spanning((x1, y1): (i8, i8), (x2, y2): (i8, i8)) -> Self {
        let mut bbox = Self::singleton(x1, y1);
        bbox.update(x2, y2);
        bbox
    }

    pub fn from_coordinates_iter(mut iter: impl Iterator<Item = (i8, i8)>) -> Option<Self> {
        let (x0, y0) = iter.next()?;
        let mut bbox = Self::singleton(x0, y0);
        for (x, y) in iter {
            bbox.update(x, y);
        }
        Some(bbox)
    }

    /// Expands the bounding box to cover cell `(x, y)`.
    pub fn update(&mut self, x: i8, y: i8) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    pub fn width(&self) -> u8 {
        self.x_min.abs_diff(self.x_max)
    }

    pub fn height(&self) -> u8 {
        self.y_min.abs_diff(self.y_max)
    }

    /// All cells in the area, in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (i8, i8)> {
        (self.y_min..=self.y_max).flat_map(move |y| (self.x_min..=self.x_max).map(move |x| (x, y)))
    }
}
