//! Layer: placed content over one geometry

use super::geometry::Geometry;
use super::handle::{LayerHandle, LevelHandle};
use super::instance::Instance;
use crate::attributes::{value_matches, AttributeStore, AttributeType, AttributeValue, Attributed};
use crate::error::{ModelError, ModelResult};
use crate::foundation::math::{Point, Size};
use std::borrow::Cow;
use std::sync::Arc;

/// Builtin read-only field exposing a layer's index in its level
pub const LAYER_NUMBER_FIELD: &str = "layer_number";

/// Ordered spatial container of [`Instance`]s over one [`Geometry`]
///
/// Layers are created by [`Level::add_layer`](super::Level::add_layer) and
/// live inside their level. A layer only exists outside a level after
/// [`Level::detach_layer`](super::Level::detach_layer), and then it has no
/// owner and no layer number.
#[derive(Debug)]
pub struct Layer {
    owner: Option<LayerHandle>,
    number: usize,
    size: Size,
    geometry: Arc<dyn Geometry>,
    instances: Vec<Instance>,
    attributes: AttributeStore,
}

impl Layer {
    pub(crate) fn new(size: Size, geometry: Arc<dyn Geometry>) -> Self {
        Self {
            owner: None,
            number: 0,
            size,
            geometry,
            instances: Vec::new(),
            attributes: AttributeStore::new(),
        }
    }

    pub(crate) fn attach(&mut self, handle: LayerHandle, number: usize) {
        self.owner = Some(handle);
        self.number = number;
    }

    pub(crate) fn detach(&mut self) {
        self.owner = None;
        self.number = 0;
    }

    pub(crate) fn renumber(&mut self, number: usize) {
        self.number = number;
    }

    /// Handle of this layer while attached
    pub const fn handle(&self) -> Option<LayerHandle> {
        self.owner
    }

    /// Owning level, `None` once detached
    pub fn level(&self) -> Option<LevelHandle> {
        self.owner.map(LayerHandle::level)
    }

    /// Whether a level currently owns this layer
    pub const fn is_attached(&self) -> bool {
        self.owner.is_some()
    }

    /// Index in the owning level
    pub const fn layer_number(&self) -> Option<usize> {
        match self.owner {
            Some(_) => Some(self.number),
            None => None,
        }
    }

    /// Layer extent
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Shared geometry definition
    pub fn geometry(&self) -> &Arc<dyn Geometry> {
        &self.geometry
    }

    /// Place a single-cell instance, returning its index
    pub fn add_instance(&mut self, position: Point) -> usize {
        self.add_instance_with(Instance::new(position))
    }

    /// Place a prepared instance, returning its index
    pub fn add_instance_with(&mut self, instance: Instance) -> usize {
        self.instances.push(instance);
        self.instances.len() - 1
    }

    /// Instance at `index`
    pub fn instance(&self, index: usize) -> Option<&Instance> {
        self.instances.get(index)
    }

    /// Mutable instance at `index`
    pub fn instance_mut(&mut self, index: usize) -> Option<&mut Instance> {
        self.instances.get_mut(index)
    }

    /// Placed instances in placement order
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Mutable view of the placed instances
    pub fn instances_mut(&mut self) -> &mut [Instance] {
        &mut self.instances
    }

    /// Remove the instance at `index`, shifting later ones down
    pub fn remove_instance(&mut self, index: usize) -> ModelResult<Instance> {
        if index >= self.instances.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.instances.len(),
            });
        }
        Ok(self.instances.remove(index))
    }

    /// Number of placed instances
    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    /// Remove every instance
    pub fn clear_instances(&mut self) {
        self.instances.clear();
    }

    /// Look up a field by name
    ///
    /// Builtin fields shadow stored attributes of the same name.
    pub fn field(&self, name: &str) -> Option<Cow<'_, AttributeValue>> {
        if name == LAYER_NUMBER_FIELD {
            let number = self.layer_number()?;
            return i64::try_from(number)
                .ok()
                .map(|n| Cow::Owned(AttributeValue::Int(n)));
        }
        self.attributes.value(name).map(Cow::Borrowed)
    }

    /// Whether `field` equals `value`
    ///
    /// A missing field is simply no match; a field of another type is a
    /// `TypeMismatch`.
    pub fn matches<T>(&self, field: &str, value: &T) -> ModelResult<bool>
    where
        T: AttributeType + PartialEq + ?Sized,
    {
        match self.field(field) {
            Some(stored) => value_matches(field, &stored, value),
            None => Ok(false),
        }
    }
}

impl Attributed for Layer {
    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}
