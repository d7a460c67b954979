use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{EntityTypeId, Vec2f};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid size must be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
    #[error("grid of {width}x{height} cells does not fit in memory")]
    TooLarge { width: i64, height: i64 },
}

/// A tracked entity that cannot be turned into an influence signature.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("entity {entity_id} references unknown entity type {entity_type:?}")]
    UnknownEntityType { entity_id: i32, entity_type: EntityTypeId },
    #[error("entity {entity_id} has non-finite position {position:?}")]
    InvalidPosition { entity_id: i32, position: Vec2f },
}
