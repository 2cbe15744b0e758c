//! Attribute-based layer lookup

use super::{level_with_layers, square};
use crate::attributes::{AttributeKind, Attributed};
use crate::error::ModelError;
use crate::foundation::math::Size;
use crate::model::LAYER_NUMBER_FIELD;

#[test]
fn test_add_then_lookup_by_layer_number() {
    let (mut world, level_handle, _) = level_with_layers(2);
    let level = world.level_mut(level_handle).unwrap();

    let added = level.add_layer(Size::new(5, 5), square());
    let number = level.layer(added).unwrap().layer_number().unwrap();
    let number = i64::try_from(number).unwrap();

    let found = level.get_layer(LAYER_NUMBER_FIELD, &number).unwrap().unwrap();
    assert_eq!(found.handle(), Some(added));
}

#[test]
fn test_lookup_tracks_renumbering() {
    let (mut world, level_handle, layers) = level_with_layers(3);
    let level = world.level_mut(level_handle).unwrap();
    level.remove_layer(layers[0]).unwrap();

    let found = level.get_layer(LAYER_NUMBER_FIELD, &0i64).unwrap().unwrap();
    assert_eq!(found.handle(), Some(layers[1]));
    assert!(level.get_layer(LAYER_NUMBER_FIELD, &2i64).unwrap().is_none());
}

#[test]
fn test_lookup_returns_lowest_index_on_ties() {
    let (mut world, level_handle, layers) = level_with_layers(4);
    let level = world.level_mut(level_handle).unwrap();
    for handle in [layers[1], layers[3]] {
        level.layer_mut(handle).unwrap().set_attribute("kind", "water");
    }

    for _ in 0..3 {
        let found = level.get_layer("kind", "water").unwrap().unwrap();
        assert_eq!(found.handle(), Some(layers[1]));
    }
}

#[test]
fn test_lookup_by_name() {
    let (world, level_handle, layers) = level_with_layers(3);
    let level = world.level(level_handle).unwrap();

    let found = level.get_layer("name", "2").unwrap().unwrap();
    assert_eq!(found.handle(), Some(layers[2]));
    assert!(level.get_layer("name", "7").unwrap().is_none());
}

#[test]
fn test_lookup_skips_layers_without_field() {
    let (mut world, level_handle, layers) = level_with_layers(3);
    let level = world.level_mut(level_handle).unwrap();
    level.layer_mut(layers[2]).unwrap().set_attribute("walkable", true);

    let found = level.get_layer("walkable", &true).unwrap().unwrap();
    assert_eq!(found.handle(), Some(layers[2]));
}

#[test]
fn test_lookup_type_mismatch() {
    let (world, level_handle, _) = level_with_layers(2);
    let level = world.level(level_handle).unwrap();

    let err = level.get_layer("name", &1i64).unwrap_err();
    assert_eq!(
        err,
        ModelError::TypeMismatch {
            key: "name".into(),
            expected: AttributeKind::Int,
            found: AttributeKind::Text,
        }
    );
}

#[test]
fn test_layer_number_shadows_stored_attribute() {
    let (mut world, level_handle, layers) = level_with_layers(2);
    let level = world.level_mut(level_handle).unwrap();
    level
        .layer_mut(layers[0])
        .unwrap()
        .set_attribute(LAYER_NUMBER_FIELD, 1);

    let found = level.get_layer(LAYER_NUMBER_FIELD, &1i64).unwrap().unwrap();
    assert_eq!(found.handle(), Some(layers[1]));
}

#[test]
fn test_lookup_on_empty_level() {
    let (world, level_handle, _) = level_with_layers(0);
    let level = world.level(level_handle).unwrap();
    assert!(level.get_layer("name", "0").unwrap().is_none());
}
