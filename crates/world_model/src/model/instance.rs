//! Content placed on a layer

use crate::attributes::{AttributeStore, Attributed};
use crate::foundation::math::{Point, Size};
use serde::{Deserialize, Serialize};

/// One placed piece of content: a position, a footprint and attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Grid position in the owning layer's geometry
    pub position: Point,
    /// Occupied extent in cells
    pub footprint: Size,
    attributes: AttributeStore,
}

impl Instance {
    /// Single-cell instance at `position`
    pub fn new(position: Point) -> Self {
        Self {
            position,
            footprint: Size::new(1, 1),
            attributes: AttributeStore::new(),
        }
    }

    /// Set the footprint
    pub fn with_footprint(mut self, footprint: Size) -> Self {
        self.footprint = footprint;
        self
    }
}

impl Attributed for Instance {
    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}
