//! Named, dynamically typed attributes
//!
//! Worlds, levels, layers and instances all carry an [`AttributeStore`]. Values
//! are stored as [`AttributeValue`] and read back through a typed view
//! ([`AttributeType`]); asking for the wrong type is a
//! [`ModelError::TypeMismatch`], never a silent conversion.

use crate::error::{ModelError, ModelResult};
use crate::foundation::math::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type tag of an [`AttributeValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    /// Boolean flag
    Bool,
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// UTF-8 string
    Text,
    /// Integer grid position
    Point,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Point => "point",
        };
        f.write_str(name)
    }
}

/// A dynamically typed attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// UTF-8 string
    Text(String),
    /// Integer grid position
    Point(Point),
}

impl AttributeValue {
    /// Type tag of this value
    pub const fn kind(&self) -> AttributeKind {
        match self {
            Self::Bool(_) => AttributeKind::Bool,
            Self::Int(_) => AttributeKind::Int,
            Self::Float(_) => AttributeKind::Float,
            Self::Text(_) => AttributeKind::Text,
            Self::Point(_) => AttributeKind::Point,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Point> for AttributeValue {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

/// Rust types that can be viewed out of an [`AttributeValue`]
///
/// The view is exact: an `Int` is never read as a `Float` and vice versa.
pub trait AttributeType {
    /// Tag of the variant this type reads
    const KIND: AttributeKind;

    /// Borrow the payload if `value` holds this type
    fn view(value: &AttributeValue) -> Option<&Self>;
}

impl AttributeType for bool {
    const KIND: AttributeKind = AttributeKind::Bool;

    fn view(value: &AttributeValue) -> Option<&Self> {
        match value {
            AttributeValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl AttributeType for i64 {
    const KIND: AttributeKind = AttributeKind::Int;

    fn view(value: &AttributeValue) -> Option<&Self> {
        match value {
            AttributeValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl AttributeType for f64 {
    const KIND: AttributeKind = AttributeKind::Float;

    fn view(value: &AttributeValue) -> Option<&Self> {
        match value {
            AttributeValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl AttributeType for String {
    const KIND: AttributeKind = AttributeKind::Text;

    fn view(value: &AttributeValue) -> Option<&Self> {
        match value {
            AttributeValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl AttributeType for str {
    const KIND: AttributeKind = AttributeKind::Text;

    fn view(value: &AttributeValue) -> Option<&Self> {
        match value {
            AttributeValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl AttributeType for Point {
    const KIND: AttributeKind = AttributeKind::Point;

    fn view(value: &AttributeValue) -> Option<&Self> {
        match value {
            AttributeValue::Point(v) => Some(v),
            _ => None,
        }
    }
}

/// Compare a stored value against a typed one
///
/// `key` only feeds the error message.
pub fn value_matches<T>(key: &str, stored: &AttributeValue, expected: &T) -> ModelResult<bool>
where
    T: AttributeType + PartialEq + ?Sized,
{
    T::view(stored)
        .map(|typed| typed == expected)
        .ok_or_else(|| ModelError::TypeMismatch {
            key: key.to_owned(),
            expected: T::KIND,
            found: stored.kind(),
        })
}

/// Per-entity attribute map; keys are unique and the last write wins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeStore {
    values: BTreeMap<String, AttributeValue>,
}

impl AttributeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, returning the value it replaced
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Read `key` as `T`
    ///
    /// Fails with `NotFound` when the key is missing and `TypeMismatch` when
    /// the stored value is of another type.
    pub fn get<T: AttributeType + ?Sized>(&self, key: &str) -> ModelResult<&T> {
        let stored = self
            .values
            .get(key)
            .ok_or(ModelError::NotFound("attribute"))?;
        T::view(stored).ok_or_else(|| ModelError::TypeMismatch {
            key: key.to_owned(),
            expected: T::KIND,
            found: stored.kind(),
        })
    }

    /// Raw stored value
    pub fn value(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    /// Whether `key` is set
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.values.remove(key)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attributes are set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate attributes sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Remove all attributes
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Entities that carry an [`AttributeStore`]
pub trait Attributed {
    /// Shared access to the store
    fn attributes(&self) -> &AttributeStore;

    /// Mutable access to the store
    fn attributes_mut(&mut self) -> &mut AttributeStore;

    /// Shorthand for [`AttributeStore::get`]
    fn get_attribute<T: AttributeType + ?Sized>(&self, key: &str) -> ModelResult<&T> {
        self.attributes().get(key)
    }

    /// Shorthand for [`AttributeStore::set`]
    fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.attributes_mut().set(key, value)
    }

    /// Shorthand for [`AttributeStore::has`]
    fn has_attribute(&self, key: &str) -> bool {
        self.attributes().has(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut store = AttributeStore::new();
        assert!(store.set("name", "ground").is_none());
        let previous = store.set("name", "roof");

        assert_eq!(previous, Some(AttributeValue::Text("ground".into())));
        assert_eq!(store.get::<str>("name").unwrap(), "roof");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = AttributeStore::new();
        assert_eq!(store.get::<i64>("depth"), Err(ModelError::NotFound("attribute")));
        assert!(!store.has("depth"));
    }

    #[test]
    fn test_get_wrong_type_is_mismatch() {
        let mut store = AttributeStore::new();
        store.set("depth", 3);

        let err = store.get::<f64>("depth").unwrap_err();
        assert_eq!(
            err,
            ModelError::TypeMismatch {
                key: "depth".into(),
                expected: AttributeKind::Float,
                found: AttributeKind::Int,
            }
        );
        assert_eq!(*store.get::<i64>("depth").unwrap(), 3);
    }

    #[test]
    fn test_point_attribute() {
        let mut store = AttributeStore::new();
        store.set("spawn", Point::new(4, -2));
        assert_eq!(*store.get::<Point>("spawn").unwrap(), Point::new(4, -2));
    }

    #[test]
    fn test_value_matches() {
        let stored = AttributeValue::Text("water".into());
        assert!(value_matches("kind", &stored, "water").unwrap());
        assert!(!value_matches("kind", &stored, "lava").unwrap());
        assert!(value_matches("kind", &stored, &5i64).is_err());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = AttributeStore::new();
        store.set("a", true);
        store.set("b", 1.5);
        assert_eq!(store.remove("a"), Some(AttributeValue::Bool(true)));
        store.clear();
        assert!(store.is_empty());
    }
}
