use itertools::iproduct;

use crate::Vec2i;

/// Half-open rectangle of cells: `min` inclusive, `max` exclusive.
#[derive(Default, Clone, Debug, PartialOrd, PartialEq, Eq, Hash)]
pub struct Rect {
    min: Vec2i,
    max: Vec2i,
}

impl Rect {
    pub fn new(min: Vec2i, max: Vec2i) -> Self {
        Rect { min, max }
    }

    pub fn min(&self) -> Vec2i {
        self.min
    }

    pub fn max(&self) -> Vec2i {
        self.max
    }

    /// Nearest position inside the rect. The rect must not be empty.
    pub fn clamp(&self, position: Vec2i) -> Vec2i {
        position.highest(self.min).lowest(self.max - Vec2i::both(1))
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x() < other.max.x()
            && self.max.x() > other.min.x()
            && self.min.y() < other.max.y()
            && self.max.y() > other.min.y()
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if self.overlaps(other) {
            Some(Rect::new(self.min.highest(other.min), self.max.lowest(other.max)))
        } else {
            None
        }
    }

    /// Row-major walk over every cell.
    pub fn positions(&self) -> impl Iterator<Item=Vec2i> {
        iproduct!(self.min.y()..self.max.y(), self.min.x()..self.max.x())
            .map(|(y, x)| Vec2i::new(x, y))
    }
}
