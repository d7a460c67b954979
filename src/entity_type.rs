use std::collections::HashMap;

/// Handle to a game type record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityTypeId(pub i32);

/// Attributes of a game type. Ranges are in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityProperties {
    pub attack: i32,
    pub ground_attack_range: i32,
    pub air_attack_range: i32,
    pub sight_range: i32,
    pub is_building: bool,
    pub is_critical: bool,
}

impl EntityProperties {
    pub fn attack_range(&self) -> i32 {
        self.ground_attack_range.max(self.air_attack_range)
    }
}

/// Read-only lookup of type records, owned by the game layer.
pub trait EntityTypeProvider {
    fn get_entity_properties(&self, entity_type: EntityTypeId) -> Option<&EntityProperties>;
}

impl EntityTypeProvider for HashMap<EntityTypeId, EntityProperties> {
    fn get_entity_properties(&self, entity_type: EntityTypeId) -> Option<&EntityProperties> {
        self.get(&entity_type)
    }
}

impl<T: EntityTypeProvider + ?Sized> EntityTypeProvider for &T {
    fn get_entity_properties(&self, entity_type: EntityTypeId) -> Option<&EntityProperties> {
        (**self).get_entity_properties(entity_type)
    }
}

#[cfg(test)]
mod tests {
    use crate::samples;

    use super::*;

    #[test]
    fn attack_range_is_longest_weapon() {
        let properties = samples::entity_properties();
        assert_eq!(properties[&samples::GOLIATH].attack_range(), 8);
        assert_eq!(properties[&samples::WORKER].attack_range(), 1);
        assert_eq!(properties[&samples::SUPPLY_DEPOT].attack_range(), 0);
    }

    #[test]
    fn lookup_through_reference() {
        let properties = samples::entity_properties();
        let provider = &properties;
        assert!(provider.get_entity_properties(samples::MARINE).is_some());
        assert!(provider.get_entity_properties(EntityTypeId(-1)).is_none());
    }
}
