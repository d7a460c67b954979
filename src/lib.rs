#[allow(unused_imports)]
pub use config::*;
#[allow(unused_imports)]
pub use entity::*;
#[allow(unused_imports)]
pub use entity_type::*;
#[allow(unused_imports)]
pub use error::*;
#[allow(unused_imports)]
pub use gradient::*;
#[allow(unused_imports)]
pub use ground_control::*;
#[allow(unused_imports)]
pub use influence_grid::*;
#[allow(unused_imports)]
pub use influence_source::*;
#[allow(unused_imports)]
pub use math::*;
#[allow(unused_imports)]
pub use positionable::*;
#[allow(unused_imports)]
pub use range::*;
#[allow(unused_imports)]
pub use rect::*;
#[allow(unused_imports)]
pub use stats::*;
#[allow(unused_imports)]
pub use vec2::*;

pub mod config;

pub mod entity;

pub mod entity_type;

pub mod error;

pub mod gradient;

pub mod ground_control;

pub mod influence_grid;

pub mod influence_source;

pub mod math;

pub mod positionable;

pub mod range;

pub mod rect;

pub mod stats;

pub mod vec2;

#[cfg(test)]
pub mod samples;
