use crate::{GridError, Rect, Vec2f, Vec2i};

pub type Influence = f32;

/// Dense row-major grid of influence values covering the map.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluenceGrid {
    width: i32,
    height: i32,
    cell_size: f32,
    cells: Vec<Influence>,
}

impl InfluenceGrid {
    pub fn new(width: i32, height: i32, cell_size: f32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        let len = (width as usize).checked_mul(height as usize)
            .filter(|v| *v <= std::isize::MAX as usize / std::mem::size_of::<Influence>())
            .ok_or(GridError::TooLarge { width: width as i64, height: height as i64 })?;
        Ok(Self {
            width,
            height,
            cell_size,
            cells: vec![0.0; len],
        })
    }

    /// Grid covering a `map_width x map_height` world, last row and column possibly partial.
    pub fn from_map_size(map_width: f32, map_height: f32, cell_size: f32) -> Result<Self, GridError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        let width = (map_width / cell_size).ceil();
        let height = (map_height / cell_size).ceil();
        if width >= std::i32::MAX as f32 || height >= std::i32::MAX as f32 {
            return Err(GridError::TooLarge { width: width as i64, height: height as i64 });
        }
        Self::new(width as i32, height as i32, cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(Vec2i::zero(), Vec2i::new(self.width, self.height))
    }

    pub fn clear(&mut self) {
        for v in self.cells.iter_mut() {
            *v = 0.0;
        }
    }

    pub fn get(&self, position: Vec2i) -> Influence {
        self.cells[self.get_cell_index(position)]
    }

    pub fn at_mut(&mut self, position: Vec2i) -> &mut Influence {
        let index = self.get_cell_index(position);
        &mut self.cells[index]
    }

    pub fn get_from_world(&self, position: Vec2f) -> Influence {
        self.get(self.world_to_grid(position))
    }

    /// Cell containing `position`, or the nearest cell for positions off the map.
    pub fn world_to_grid(&self, position: Vec2f) -> Vec2i {
        self.bounds().clamp((position / self.cell_size).floor())
    }

    /// World position of the cell center.
    pub fn grid_to_world(&self, position: Vec2i) -> Vec2f {
        self.bounds().clamp(position).center() * self.cell_size
    }

    pub fn cells(&self) -> &[Influence] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item=(Vec2i, Influence)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, v)| (index_to_position(i, width), *v))
    }

    fn get_cell_index(&self, position: Vec2i) -> usize {
        position_to_index(self.bounds().clamp(position), self.width as usize)
    }
}

pub fn position_to_index(position: Vec2i, width: usize) -> usize {
    position.x() as usize + position.y() as usize * width
}

pub fn index_to_position(index: usize, width: usize) -> Vec2i {
    Vec2i::new((index % width) as i32, (index / width) as i32)
}
