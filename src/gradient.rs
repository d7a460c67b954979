use crate::{InfluenceGrid, Signature, Vec2f};

/// Adds the signature's gradient around `center` to the grid.
///
/// Only cells whose center lies within the max radius are touched. Returns their count.
pub fn stamp_gradient(grid: &mut InfluenceGrid, center: Vec2f, signature: &Signature) -> usize {
    if signature.is_null() {
        return 0;
    }
    let window = match grid.bounds().intersection(&signature.range(center).bounding_rect(grid.cell_size())) {
        Some(v) => v,
        None => return 0,
    };
    let mut stamped = 0;
    for position in window.positions() {
        let distance = center.distance(grid.grid_to_world(position));
        if distance <= signature.max_radius() {
            *grid.at_mut(position) += signature.influence_at(distance);
            stamped += 1;
        }
    }
    stamped
}
