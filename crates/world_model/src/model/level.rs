//! Level: the ownership and indexing authority for layers
//!
//! A level owns its layers outright and keeps three things in step on every
//! structural change:
//!
//! - each layer's `layer_number` equals its position,
//! - each held layer's back-reference names this level,
//! - the reference layer, if any, is one of the held layers.
//!
//! Every mutating method validates before it touches anything, so a returned
//! error always means nothing changed.

use super::geometry::Geometry;
use super::handle::{LayerHandle, LevelHandle, WorldId};
use super::layer::Layer;
use crate::attributes::{AttributeStore, AttributeType, Attributed};
use crate::error::{LayerRejected, ModelError, ModelResult};
use crate::foundation::collections::{LayerKey, OrderedSlots};
use crate::foundation::math::{self, Point, Size};
use std::sync::Arc;

/// Population state of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    /// No layers; the reference layer is unset
    Empty,
    /// At least one layer
    Populated,
}

/// One vertical slice of a world (a floor, a cave, ...) made of stacked layers
///
/// Levels are created through [`World::create_level`](super::World::create_level)
/// only.
#[derive(Debug)]
pub struct Level {
    handle: LevelHandle,
    layers: OrderedSlots<LayerKey, Layer>,
    reference_layer: Option<LayerKey>,
    width: i32,
    height: i32,
    attributes: AttributeStore,
}

impl Level {
    pub(crate) fn new(handle: LevelHandle, width: i32, height: i32) -> Self {
        Self {
            handle,
            layers: OrderedSlots::new(),
            reference_layer: None,
            width,
            height,
            attributes: AttributeStore::new(),
        }
    }

    /// This level's handle
    pub const fn handle(&self) -> LevelHandle {
        self.handle
    }

    /// Owning world
    pub const fn world(&self) -> WorldId {
        self.handle.world()
    }

    /// Level-wide width
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Level-wide height
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Overwrite the level bounds
    pub fn set_bounds(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Current population state
    pub fn state(&self) -> LevelState {
        if self.layers.is_empty() {
            LevelState::Empty
        } else {
            LevelState::Populated
        }
    }

    /// Create a layer at the end of the stack
    ///
    /// The level keeps ownership; the returned handle stays valid until the
    /// layer is removed. Level bounds grow to cover `size`.
    pub fn add_layer(&mut self, size: Size, geometry: Arc<dyn Geometry>) -> LayerHandle {
        let level = self.handle;
        let number = self.layers.len();
        let key = self.layers.push_with_key(|key| {
            let mut layer = Layer::new(size, geometry);
            layer.attach(LayerHandle::new(level, key), number);
            layer
        });
        self.grow_bounds(size);
        log::debug!("Level {:?}: added layer #{} ({}x{})", level, number, size.x, size.y);
        LayerHandle::new(level, key)
    }

    /// Insert a detached layer at `index`, shifting later layers up
    ///
    /// `index == num_layers()` appends. A larger index hands the layer back
    /// inside the error.
    pub fn insert_layer(&mut self, index: usize, mut layer: Layer) -> Result<LayerHandle, LayerRejected> {
        let len = self.layers.len();
        if index > len {
            return Err(LayerRejected {
                error: ModelError::IndexOutOfRange { index, len },
                layer,
            });
        }
        debug_assert!(!layer.is_attached());

        let level = self.handle;
        let size = layer.size();
        let key = self.layers.insert_at_with_key(index, |key| {
            layer.attach(LayerHandle::new(level, key), index);
            layer
        });
        self.layers
            .for_each_mut_from(index + 1, |position, shifted| shifted.renumber(position));
        self.grow_bounds(size);
        log::debug!("Level {:?}: inserted layer at #{}", level, index);
        Ok(LayerHandle::new(level, key))
    }

    /// Move a held layer to position `index` within this level
    ///
    /// The layer keeps its handle and, if it is the reference layer, that
    /// designation. Layers between the old and new position are renumbered.
    pub fn reorder_layer(&mut self, layer: LayerHandle, index: usize) -> ModelResult<()> {
        if !self.owns(layer) {
            return Err(ModelError::NotFound("layer"));
        }
        let len = self.layers.len();
        if index >= len {
            return Err(ModelError::IndexOutOfRange { index, len });
        }
        let from = self
            .layers
            .move_to(layer.key(), index)
            .ok_or(ModelError::NotFound("layer"))?;
        let start = from.min(index);
        self.layers
            .for_each_mut_from(start, |position, shifted| shifted.renumber(position));
        log::debug!("Level {:?}: moved layer #{} to #{}", self.handle, from, index);
        Ok(())
    }

    /// Remove and destroy a layer
    ///
    /// Later layers are renumbered and the reference layer is cleared if it
    /// was this one. Fails with `NotFound` if this level does not hold `layer`.
    pub fn remove_layer(&mut self, layer: LayerHandle) -> ModelResult<()> {
        self.detach_layer(layer).map(drop)
    }

    /// Remove a layer and hand it back detached
    ///
    /// Same bookkeeping as [`Level::remove_layer`]; the returned layer has no
    /// owner and can be inserted into any level.
    pub fn detach_layer(&mut self, layer: LayerHandle) -> ModelResult<Layer> {
        if !self.owns(layer) {
            return Err(ModelError::NotFound("layer"));
        }
        let (position, mut detached) = self
            .layers
            .remove(layer.key())
            .ok_or(ModelError::NotFound("layer"))?;
        self.layers
            .for_each_mut_from(position, |index, shifted| shifted.renumber(index));
        if self.reference_layer == Some(layer.key()) {
            self.reference_layer = None;
        }
        detached.detach();
        log::debug!("Level {:?}: removed layer #{}", self.handle, position);
        Ok(detached)
    }

    /// First layer, in index order, whose `field` equals `value`
    ///
    /// Layers without `field` are skipped. A layer whose `field` holds a
    /// different type stops the scan with `TypeMismatch`. The builtin
    /// [`LAYER_NUMBER_FIELD`](super::LAYER_NUMBER_FIELD) is matched as an
    /// `i64`.
    pub fn get_layer<T>(&self, field: &str, value: &T) -> ModelResult<Option<&Layer>>
    where
        T: AttributeType + PartialEq + ?Sized,
    {
        for layer in self.layers.iter() {
            if layer.matches(field, value)? {
                return Ok(Some(layer));
            }
        }
        Ok(None)
    }

    /// Number of layers
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Remove and destroy every layer; also clears the reference layer
    pub fn clear_layers(&mut self) {
        let removed = self.layers.drain();
        self.reference_layer = None;
        log::debug!("Level {:?}: cleared {} layers", self.handle, removed.len());
        for mut layer in removed {
            layer.detach();
        }
    }

    /// Visit every layer in index order
    pub fn for_each_layer(&self, visitor: impl FnMut(&Layer)) {
        self.layers.iter().for_each(visitor);
    }

    /// Visit every layer mutably in index order
    ///
    /// The visitor can change layer content and attributes but cannot add,
    /// remove or reorder layers.
    pub fn for_each_layer_mut(&mut self, mut visitor: impl FnMut(&mut Layer)) {
        self.layers.for_each_mut(|_, layer| visitor(layer));
    }

    /// Layers in index order
    pub fn layers(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.layers.iter()
    }

    /// Layer at `index`
    pub fn layer_at(&self, index: usize) -> Option<&Layer> {
        self.layers.get_at(index)
    }

    /// Layer behind `handle`
    pub fn layer(&self, handle: LayerHandle) -> ModelResult<&Layer> {
        if handle.level() != self.handle {
            return Err(ModelError::InvalidHandle("layer"));
        }
        self.layers
            .get(handle.key())
            .ok_or(ModelError::InvalidHandle("layer"))
    }

    /// Mutable layer behind `handle`
    pub fn layer_mut(&mut self, handle: LayerHandle) -> ModelResult<&mut Layer> {
        if handle.level() != self.handle {
            return Err(ModelError::InvalidHandle("layer"));
        }
        self.layers
            .get_mut(handle.key())
            .ok_or(ModelError::InvalidHandle("layer"))
    }

    /// Whether this level currently holds `layer`
    pub fn owns(&self, layer: LayerHandle) -> bool {
        layer.level() == self.handle && self.layers.contains_key(layer.key())
    }

    /// Designate the canonical layer for spatial queries
    ///
    /// Fails with `NotOwned` if this level does not hold `layer`.
    pub fn set_reference_layer(&mut self, layer: LayerHandle) -> ModelResult<()> {
        if !self.owns(layer) {
            return Err(ModelError::NotOwned("layer"));
        }
        self.reference_layer = Some(layer.key());
        Ok(())
    }

    /// Unset the reference layer
    pub fn clear_reference_layer(&mut self) {
        self.reference_layer = None;
    }

    /// The reference layer, if set
    pub fn reference_layer(&self) -> Option<&Layer> {
        self.reference_layer.and_then(|key| self.layers.get(key))
    }

    /// Best-effort starting position for a camera or spawn point
    ///
    /// Averages the instance positions of the reference layer (or the first
    /// layer when none is set), then snaps the mean onto that layer's
    /// geometry. With no layers or no instances it falls back to the middle
    /// of the level bounds. This is a placement heuristic, not a physical
    /// center of mass.
    pub fn center_of_mass(&self) -> Point {
        let Some(layer) = self.reference_layer().or_else(|| self.layers.get_at(0)) else {
            return math::midpoint(self.width, self.height);
        };
        math::centroid(layer.instances().iter().map(|instance| instance.position)).map_or_else(
            || math::midpoint(self.width, self.height),
            |mean| layer.geometry().snap(mean),
        )
    }

    fn grow_bounds(&mut self, size: Size) {
        self.width = self.width.max(size.x);
        self.height = self.height.max(size.y);
    }
}

impl Attributed for Level {
    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}
