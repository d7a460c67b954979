use crate::{EntityTypeId, Positionable, Vec2f};

/// Read-only view of a game object that may project influence.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEntity {
    pub id: i32,
    pub player_id: Option<i32>,
    pub entity_type: EntityTypeId,
    pub position: Vec2f,
    pub center: Option<Vec2f>,
}

impl TrackedEntity {
    pub fn new(id: i32, player_id: Option<i32>, entity_type: EntityTypeId, position: Vec2f) -> Self {
        Self { id, player_id, entity_type, position, center: None }
    }

    pub fn with_center(mut self, center: Vec2f) -> Self {
        self.center = Some(center);
        self
    }
}

impl Positionable for TrackedEntity {
    fn position(&self) -> Vec2f {
        self.position
    }

    fn center(&self) -> Vec2f {
        self.center.unwrap_or(self.position)
    }
}

/// Source of the entities tracked during the current tick.
///
/// `entities` may be called any number of times; each call starts a fresh pass.
pub trait EntityRegistry {
    type Entities<'a>: Iterator<Item=&'a TrackedEntity> where Self: 'a;

    fn entities(&self) -> Self::Entities<'_>;
}

impl EntityRegistry for [TrackedEntity] {
    type Entities<'a> = std::slice::Iter<'a, TrackedEntity>;

    fn entities(&self) -> Self::Entities<'_> {
        self.iter()
    }
}

impl EntityRegistry for Vec<TrackedEntity> {
    type Entities<'a> = std::slice::Iter<'a, TrackedEntity>;

    fn entities(&self) -> Self::Entities<'_> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_falls_back_to_position() {
        let entity = TrackedEntity::new(1, Some(1), EntityTypeId(0), Vec2f::new(3.0, 4.0));
        assert_eq!(entity.center(), Vec2f::new(3.0, 4.0));
        let entity = entity.with_center(Vec2f::new(5.0, 6.0));
        assert_eq!(entity.center(), Vec2f::new(5.0, 6.0));
        assert_eq!(entity.position(), Vec2f::new(3.0, 4.0));
    }

    #[test]
    fn registry_is_restartable() {
        let entities = vec![
            TrackedEntity::new(1, Some(1), EntityTypeId(0), Vec2f::zero()),
            TrackedEntity::new(2, None, EntityTypeId(0), Vec2f::zero()),
        ];
        assert_eq!(entities.entities().count(), 2);
        assert_eq!(entities.entities().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(entities.as_slice().entities().count(), 2);
    }
}
