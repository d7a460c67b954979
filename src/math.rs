use std::ops::Mul;

pub trait Square: Mul + Copy {
    fn square(self) -> Self::Output {
        self * self
    }
}

impl Square for f32 {}

/// Linear falloff from `factor` at `begin` down to zero at `end`.
pub fn linear_decay(distance: f32, factor: f32, begin: f32, end: f32) -> f32 {
    factor * (end - distance) / (end - begin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_decay_endpoints() {
        assert_eq!(linear_decay(5.0, 40.0, 5.0, 10.0), 40.0);
        assert_eq!(linear_decay(7.5, 40.0, 5.0, 10.0), 20.0);
        assert_eq!(linear_decay(10.0, 40.0, 5.0, 10.0), 0.0);
    }
}
