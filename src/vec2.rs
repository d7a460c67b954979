use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::Square;

/// Position in world space.
#[derive(Default, Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Vec2f {
    x: f32,
    y: f32,
}

impl Vec2f {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline(always)]
    pub const fn both(value: f32) -> Self {
        Self { x: value, y: value }
    }

    #[inline(always)]
    pub const fn x(&self) -> f32 {
        self.x
    }

    #[inline(always)]
    pub const fn y(&self) -> f32 {
        self.y
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline(always)]
    pub fn norm(&self) -> f32 {
        (self.x.square() + self.y.square()).sqrt()
    }

    #[inline(always)]
    pub fn distance(&self, other: Self) -> f32 {
        (other - *self).norm()
    }

    #[inline(always)]
    pub fn floor(&self) -> Vec2i {
        Vec2i::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl Add for Vec2f {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2f {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2f {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2f {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2f {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Cell index in grid space.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vec2i {
    x: i32,
    y: i32,
}

impl Vec2i {
    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    #[inline(always)]
    pub const fn both(value: i32) -> Self {
        Self { x: value, y: value }
    }

    #[inline(always)]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline(always)]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[inline(always)]
    pub fn lowest(&self, other: Self) -> Self {
        Self { x: self.x.min(other.x), y: self.y.min(other.y) }
    }

    #[inline(always)]
    pub fn highest(&self, other: Self) -> Self {
        Self { x: self.x.max(other.x), y: self.y.max(other.y) }
    }

    #[inline(always)]
    pub fn center(&self) -> Vec2f {
        Vec2f::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

impl Add for Vec2i {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2i {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2i::new(self.x - rhs.x, self.y - rhs.y)
    }
}
