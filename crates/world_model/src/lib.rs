//! # World Model
//!
//! Layered spatial scene model: a world owns levels, a level owns an ordered
//! stack of layers, a layer holds placed instances over one geometry.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use world_model::prelude::*;
//!
//! let mut world = World::new();
//! let ground = world.create_level();
//!
//! let level = world.level_mut(ground)?;
//! let terrain = level.add_layer(Size::new(100, 50), Arc::new(SquareGrid));
//! level.layer_mut(terrain)?.add_instance(Point::new(10, 10));
//! level.set_reference_layer(terrain)?;
//!
//! assert_eq!(level.center_of_mass(), Point::new(10, 10));
//! # Ok::<(), ModelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod attributes;
pub mod config;
pub mod error;
pub mod foundation;
pub mod model;

pub use error::{LayerRejected, ModelError, ModelResult};

/// Common imports for model users
pub mod prelude {
    pub use crate::{
        attributes::{AttributeStore, AttributeValue, Attributed},
        config::{Config, ConfigError, WorldConfig},
        error::{LayerRejected, ModelError, ModelResult},
        foundation::math::{Point, Size},
        model::{
            Geometry, Instance, Layer, LayerHandle, Level, LevelHandle, LevelState, RectGrid,
            SquareGrid, World, LAYER_NUMBER_FIELD,
        },
    };
}
