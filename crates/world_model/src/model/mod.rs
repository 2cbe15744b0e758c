//! Layered world model
//!
//! Ownership runs strictly downward:
//!
//! ```text
//! World ──owns──> Level ──owns──> Layer ──owns──> Instance
//!   ^               |  ^             |
//!   └── handle ─────┘  └── handle ───┘
//! ```
//!
//! Back-references are handles, never a second ownership path. A container is
//! the only way to create its children.

mod geometry;
mod handle;
mod instance;
mod layer;
mod level;
mod world;

#[cfg(test)]
mod tests;

pub use geometry::{Geometry, RectGrid, SquareGrid};
pub use handle::{LayerHandle, LevelHandle, WorldId};
pub use instance::Instance;
pub use layer::{Layer, LAYER_NUMBER_FIELD};
pub use level::{Level, LevelState};
pub use world::World;
