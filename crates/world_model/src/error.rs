//! Error types for the world model

use crate::attributes::AttributeKind;
use crate::model::Layer;
use thiserror::Error;

/// Result alias used throughout the model
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by world, level and layer operations
///
/// Every failing operation leaves the model exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Handle is stale or belongs to a different container
    #[error("Invalid {0} handle")]
    InvalidHandle(&'static str),

    /// Insertion or access index past the end of the collection
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Collection length at the time of the call
        len: usize,
    },

    /// Target does not exist in the expected collection
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Entity does not belong to the acting container
    #[error("{0} is not owned by this container")]
    NotOwned(&'static str),

    /// Stored attribute has a different type than requested
    #[error("Attribute `{key}` is {found}, expected {expected}")]
    TypeMismatch {
        /// Attribute name
        key: String,
        /// Requested type
        expected: AttributeKind,
        /// Stored type
        found: AttributeKind,
    },
}

/// A detached layer that a level refused to take
///
/// Carries the layer back so the caller can retry with a different index.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct LayerRejected {
    /// Why the layer was refused
    pub error: ModelError,
    /// The layer, still detached
    pub layer: Layer,
}

impl LayerRejected {
    /// Discard the layer and keep only the error
    pub fn into_error(self) -> ModelError {
        self.error
    }
}

impl From<LayerRejected> for ModelError {
    fn from(rejected: LayerRejected) -> Self {
        rejected.error
    }
}
