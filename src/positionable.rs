use crate::Vec2f;

pub trait Positionable {
    fn position(&self) -> Vec2f;

    fn center(&self) -> Vec2f {
        self.position()
    }
}
