use std::collections::HashMap;

use crate::{EntityProperties, EntityTypeId, TrackedEntity, Vec2f};

pub const MY_ID: i32 = 1;
pub const ENEMY_ID: i32 = 2;

pub const WORKER: EntityTypeId = EntityTypeId(0);
pub const MARINE: EntityTypeId = EntityTypeId(1);
pub const SIEGE_TANK: EntityTypeId = EntityTypeId(2);
pub const GOLIATH: EntityTypeId = EntityTypeId(3);
pub const DRAGOON: EntityTypeId = EntityTypeId(4);
pub const SUPPLY_DEPOT: EntityTypeId = EntityTypeId(5);

pub fn entity_properties() -> HashMap<EntityTypeId, EntityProperties> {
    vec![
        (WORKER, unit(5, 1, 0, 7)),
        (MARINE, unit(6, 4, 4, 7)),
        (SIEGE_TANK, unit(30, 12, 0, 10)),
        (GOLIATH, unit(12, 5, 8, 8)),
        (DRAGOON, unit(30, 5, 3, 10)),
        (SUPPLY_DEPOT, EntityProperties {
            attack: 0,
            ground_attack_range: 0,
            air_attack_range: 0,
            sight_range: 1,
            is_building: true,
            is_critical: false,
        }),
    ].into_iter().collect()
}

fn unit(attack: i32, ground_attack_range: i32, air_attack_range: i32, sight_range: i32) -> EntityProperties {
    EntityProperties {
        attack,
        ground_attack_range,
        air_attack_range,
        sight_range,
        is_building: false,
        is_critical: false,
    }
}

pub fn entity(id: i32, player_id: Option<i32>, entity_type: EntityTypeId, x: f32, y: f32) -> TrackedEntity {
    TrackedEntity::new(id, player_id, entity_type, Vec2f::new(x, y))
}
