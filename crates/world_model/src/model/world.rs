//! World: the root of the hierarchy, owner of all levels

use super::handle::{LayerHandle, LevelHandle, WorldId};
use super::level::Level;
use crate::attributes::{AttributeStore, AttributeType, Attributed};
use crate::config::WorldConfig;
use crate::error::{ModelError, ModelResult};
use crate::foundation::collections::{LevelKey, OrderedSlots};

/// Root container owning an ordered collection of [`Level`]s
///
/// Single-writer: mutation goes through `&mut World`. Wrap it in a lock if
/// several threads need it.
#[derive(Debug)]
pub struct World {
    id: WorldId,
    config: WorldConfig,
    levels: OrderedSlots<LevelKey, Level>,
    attributes: AttributeStore,
}

impl World {
    /// Create an empty world with default configuration
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create an empty world with the given configuration
    pub fn with_config(config: WorldConfig) -> Self {
        let id = WorldId::next();
        log::trace!("World {:?}: created", id);
        Self {
            id,
            config,
            levels: OrderedSlots::new(),
            attributes: AttributeStore::new(),
        }
    }

    /// Identity used by level handles to name their world
    pub const fn id(&self) -> WorldId {
        self.id
    }

    /// Configuration this world was built with
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Create an empty level with the configured default bounds
    pub fn create_level(&mut self) -> LevelHandle {
        let world = self.id;
        let (width, height) = (self.config.default_level_width, self.config.default_level_height);
        let key = self
            .levels
            .push_with_key(|key| Level::new(LevelHandle::new(world, key), width, height));
        log::debug!("World {:?}: created level #{}", world, self.levels.len() - 1);
        LevelHandle::new(world, key)
    }

    /// Destroy a level and every layer it owns
    pub fn remove_level(&mut self, handle: LevelHandle) -> ModelResult<()> {
        self.check(handle)?;
        let (position, level) = self
            .levels
            .remove(handle.key())
            .ok_or(ModelError::InvalidHandle("level"))?;
        log::debug!(
            "World {:?}: removed level #{} with {} layers",
            self.id,
            position,
            level.num_layers()
        );
        Ok(())
    }

    /// Level behind `handle`
    pub fn level(&self, handle: LevelHandle) -> ModelResult<&Level> {
        self.check(handle)?;
        self.levels
            .get(handle.key())
            .ok_or(ModelError::InvalidHandle("level"))
    }

    /// Mutable level behind `handle`
    pub fn level_mut(&mut self, handle: LevelHandle) -> ModelResult<&mut Level> {
        self.check(handle)?;
        self.levels
            .get_mut(handle.key())
            .ok_or(ModelError::InvalidHandle("level"))
    }

    /// Levels in creation order
    pub fn levels(&self) -> impl Iterator<Item = &Level> + '_ {
        self.levels.iter()
    }

    /// Number of levels
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Destroy every level
    pub fn clear_levels(&mut self) {
        let removed = self.levels.drain();
        log::debug!("World {:?}: cleared {} levels", self.id, removed.len());
    }

    /// First level, in creation order, whose attribute `field` equals `value`
    ///
    /// Same matching rules as [`Level::get_layer`].
    pub fn get_level<T>(&self, field: &str, value: &T) -> ModelResult<Option<&Level>>
    where
        T: AttributeType + PartialEq + ?Sized,
    {
        for level in self.levels.iter() {
            if let Some(stored) = level.attributes().value(field) {
                if crate::attributes::value_matches(field, stored, value)? {
                    return Ok(Some(level));
                }
            }
        }
        Ok(None)
    }

    /// Move a layer to position `index` of `target`
    ///
    /// `target` may be the layer's own level. Handles and the index are all
    /// checked before anything moves, so on error both levels are unchanged.
    /// Returns the layer's handle afterwards: a move within one level keeps
    /// the handle and the reference-layer designation, a move to another
    /// level issues a new handle.
    pub fn move_layer(
        &mut self,
        layer: LayerHandle,
        target: LevelHandle,
        index: usize,
    ) -> ModelResult<LayerHandle> {
        let source = layer.level();
        if !self.level(source)?.owns(layer) {
            return Err(ModelError::NotFound("layer"));
        }
        if source == target {
            self.level_mut(source)?.reorder_layer(layer, index)?;
            return Ok(layer);
        }
        let target_len = self.level(target)?.num_layers();
        if index > target_len {
            return Err(ModelError::IndexOutOfRange { index, len: target_len });
        }

        let detached = self.level_mut(source)?.detach_layer(layer)?;
        let moved = self.level_mut(target)?.insert_layer(index, detached)?;
        log::debug!("World {:?}: moved layer to level {:?} #{}", self.id, target, index);
        Ok(moved)
    }

    fn check(&self, handle: LevelHandle) -> ModelResult<()> {
        if handle.world() == self.id && self.levels.contains_key(handle.key()) {
            Ok(())
        } else {
            Err(ModelError::InvalidHandle("level"))
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributed for World {
    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}
