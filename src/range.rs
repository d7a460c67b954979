use crate::{Rect, Vec2f, Vec2i};

/// Disc in world space.
#[derive(Default, Clone, Debug, PartialOrd, PartialEq)]
pub struct Range {
    center: Vec2f,
    radius: f32,
}

impl Range {
    pub fn new(center: Vec2f, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Cells covered by the bounding square of the disc, unclipped.
    pub fn bounding_rect(&self, cell_size: f32) -> Rect {
        let min = ((self.center - Vec2f::both(self.radius)) / cell_size).floor();
        let max = ((self.center + Vec2f::both(self.radius)) / cell_size).floor();
        Rect::new(min, Vec2i::new(max.x().saturating_add(1), max.y().saturating_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_rect_covers_disc() {
        let range = Range::new(Vec2f::new(10.5, 10.5), 2.0);
        assert_eq!(range.bounding_rect(1.0), Rect::new(Vec2i::new(8, 8), Vec2i::new(13, 13)));
        assert_eq!(range.bounding_rect(4.0), Rect::new(Vec2i::new(2, 2), Vec2i::new(4, 4)));
    }

    #[test]
    fn bounding_rect_saturates_for_huge_radius() {
        let range = Range::new(Vec2f::new(0.0, 0.0), 1e12);
        let rect = range.bounding_rect(1.0);
        assert_eq!(rect.max(), Vec2i::both(std::i32::MAX));
        assert_eq!(rect.min(), Vec2i::both(std::i32::MIN));
    }

    #[test]
    fn bounding_rect_of_zero_radius_is_single_cell() {
        let range = Range::new(Vec2f::new(3.2, 7.9), 0.0);
        assert_eq!(range.bounding_rect(1.0), Rect::new(Vec2i::new(3, 7), Vec2i::new(4, 8)));
    }
}
