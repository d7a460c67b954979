use crate::{
    EntityTypeProvider,
    Influence,
    linear_decay,
    Positionable,
    Range,
    SourceError,
    TrackedEntity,
    Vec2f,
};

/// Standing of an entity owner relative to the controlling player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Own,
    Enemy,
    Neutral,
}

impl Relation {
    pub fn of(player_id: Option<i32>, my_id: i32) -> Self {
        match player_id {
            Some(player_id) if player_id == my_id => Relation::Own,
            Some(_) => Relation::Enemy,
            None => Relation::Neutral,
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            Relation::Own => 1.0,
            Relation::Enemy => -1.0,
            Relation::Neutral => 0.0,
        }
    }
}

/// How strongly and how far a single source projects influence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signature {
    sign: f32,
    magnitude: f32,
    effective_radius: f32,
    max_radius: f32,
}

impl Signature {
    /// Radii are clamped so that `0 <= effective_radius <= max_radius`.
    pub fn new(sign: f32, magnitude: f32, effective_radius: f32, max_radius: f32) -> Self {
        let max_radius = max_radius.max(0.0);
        Self {
            sign,
            magnitude,
            effective_radius: effective_radius.max(0.0).min(max_radius),
            max_radius,
        }
    }

    pub fn sign(&self) -> f32 {
        self.sign
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    pub fn effective_radius(&self) -> f32 {
        self.effective_radius
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn value(&self) -> Influence {
        self.sign * self.magnitude
    }

    pub fn is_null(&self) -> bool {
        self.value() == 0.0
    }

    pub fn negated(&self) -> Self {
        Self { sign: -self.sign, ..*self }
    }

    pub fn range(&self, center: Vec2f) -> Range {
        Range::new(center, self.max_radius)
    }

    /// Full value inside the effective radius, linear decay to zero at the max radius.
    pub fn influence_at(&self, distance: f32) -> Influence {
        if distance <= self.effective_radius {
            self.value()
        } else if distance <= self.max_radius {
            linear_decay(distance, self.value(), self.effective_radius, self.max_radius)
        } else {
            0.0
        }
    }
}

pub fn resolve_signature<P: EntityTypeProvider + ?Sized>(
    entity: &TrackedEntity,
    entity_properties: &P,
    my_id: i32,
    influence_offset: f32,
) -> Result<Signature, SourceError> {
    if !entity.center().is_finite() {
        return Err(SourceError::InvalidPosition { entity_id: entity.id, position: entity.center() });
    }
    let properties = entity_properties.get_entity_properties(entity.entity_type)
        .ok_or_else(|| SourceError::UnknownEntityType { entity_id: entity.id, entity_type: entity.entity_type })?;
    // Unarmed units still register through the offset.
    Ok(Signature::new(
        Relation::of(entity.player_id, my_id).sign(),
        properties.attack as f32 + influence_offset,
        properties.attack_range() as f32,
        properties.sight_range as f32,
    ))
}
