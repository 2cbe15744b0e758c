//! Non-owning handles into the world hierarchy
//!
//! A handle names its container all the way up, so a container can tell its
//! own handles from foreign ones. The generational slot keys make handles to
//! destroyed entities detectably stale.

use crate::foundation::collections::{LayerKey, LevelKey};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WORLD_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`World`](super::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(u64);

impl WorldId {
    pub(crate) fn next() -> Self {
        Self(NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Reference to a level owned by some world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelHandle {
    world: WorldId,
    key: LevelKey,
}

impl LevelHandle {
    pub(crate) const fn new(world: WorldId, key: LevelKey) -> Self {
        Self { world, key }
    }

    /// World that owns the level
    pub const fn world(self) -> WorldId {
        self.world
    }

    pub(crate) const fn key(self) -> LevelKey {
        self.key
    }
}

/// Reference to a layer owned by some level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerHandle {
    level: LevelHandle,
    key: LayerKey,
}

impl LayerHandle {
    pub(crate) const fn new(level: LevelHandle, key: LayerKey) -> Self {
        Self { level, key }
    }

    /// Level that owns the layer
    pub const fn level(self) -> LevelHandle {
        self.level
    }

    pub(crate) const fn key(self) -> LayerKey {
        self.key
    }
}
