//! Level lifecycle and cross-level operations on the world

use super::{assert_level_invariants, level_with_layers, square};
use crate::attributes::Attributed;
use crate::config::WorldConfig;
use crate::error::ModelError;
use crate::foundation::math::Size;
use crate::model::World;

#[test]
fn test_create_level_back_reference() {
    let mut world = World::new();
    let handle = world.create_level();
    let level = world.level(handle).unwrap();

    assert_eq!(level.handle(), handle);
    assert_eq!(level.world(), world.id());
    assert_eq!(world.num_levels(), 1);
}

#[test]
fn test_levels_keep_creation_order() {
    let mut world = World::new();
    let handles: Vec<_> = (0..3).map(|_| world.create_level()).collect();
    world.remove_level(handles[1]).unwrap();

    let order: Vec<_> = world.levels().map(|level| level.handle()).collect();
    assert_eq!(order, [handles[0], handles[2]]);
}

#[test]
fn test_new_levels_use_configured_bounds() {
    let mut world = World::with_config(WorldConfig::default().with_default_bounds(64, 48));
    let handle = world.create_level();
    let level = world.level(handle).unwrap();

    assert_eq!((level.width(), level.height()), (64, 48));
}

#[test]
fn test_remove_level_destroys_layers() {
    let (mut world, level_handle, layers) = level_with_layers(3);
    world.remove_level(level_handle).unwrap();

    assert_eq!(world.num_levels(), 0);
    assert_eq!(world.level(level_handle).err(), Some(ModelError::InvalidHandle("level")));
    assert!(world.levels().all(|level| !level.owns(layers[0])));
}

#[test]
fn test_stale_level_handle_rejected() {
    let mut world = World::new();
    let handle = world.create_level();
    world.remove_level(handle).unwrap();
    world.create_level();

    assert_eq!(world.remove_level(handle), Err(ModelError::InvalidHandle("level")));
    assert_eq!(world.num_levels(), 1);
}

#[test]
fn test_foreign_level_handle_rejected() {
    let mut first = World::new();
    let mut second = World::new();
    let foreign = first.create_level();
    second.create_level();

    assert_ne!(first.id(), second.id());
    assert_eq!(second.remove_level(foreign), Err(ModelError::InvalidHandle("level")));
    assert!(second.level_mut(foreign).is_err());
    assert_eq!(second.num_levels(), 1);
    assert_eq!(first.num_levels(), 1);
}

#[test]
fn test_clear_levels() {
    let mut world = World::new();
    let handle = world.create_level();
    world.create_level();

    world.clear_levels();

    assert_eq!(world.num_levels(), 0);
    assert!(world.level(handle).is_err());
}

#[test]
fn test_get_level_by_attribute() {
    let mut world = World::new();
    let cellar = world.create_level();
    let attic = world.create_level();
    world.level_mut(cellar).unwrap().set_attribute("name", "cellar");
    world.level_mut(attic).unwrap().set_attribute("name", "attic");

    let found = world.get_level("name", "attic").unwrap().unwrap();
    assert_eq!(found.handle(), attic);
    assert!(world.get_level("name", "roof").unwrap().is_none());
    assert!(world.get_level("name", &3i64).is_err());
}

#[test]
fn test_world_attributes() {
    let mut world = World::new();
    world.set_attribute("title", "Harbor");
    assert!(world.has_attribute("title"));
    assert_eq!(world.get_attribute::<str>("title").unwrap(), "Harbor");
}

#[test]
fn test_move_layer_between_levels() {
    let (mut world, source, layers) = level_with_layers(3);
    let target = world.create_level();
    world.level_mut(target).unwrap().add_layer(Size::new(3, 3), square());

    let moved = world.move_layer(layers[0], target, 1).unwrap();

    let target_level = world.level(target).unwrap();
    assert_eq!(target_level.num_layers(), 2);
    assert_eq!(target_level.layer(moved).unwrap().layer_number(), Some(1));
    assert_eq!(target_level.layer(moved).unwrap().get_attribute::<str>("name").unwrap(), "0");
    assert_level_invariants(target_level);

    let source_level = world.level(source).unwrap();
    assert_eq!(source_level.num_layers(), 2);
    assert_level_invariants(source_level);
}

#[test]
fn test_move_layer_within_level() {
    let (mut world, level_handle, layers) = level_with_layers(3);

    let moved = world.move_layer(layers[0], level_handle, 2).unwrap();

    let level = world.level(level_handle).unwrap();
    let names: Vec<_> = level
        .layers()
        .map(|layer| layer.get_attribute::<str>("name").unwrap().to_owned())
        .collect();
    assert_eq!(names, ["1", "2", "0"]);
    assert_eq!(level.layer(moved).unwrap().layer_number(), Some(2));
    assert_level_invariants(level);
}

#[test]
fn test_move_within_level_keeps_handle_and_reference() {
    let (mut world, level_handle, layers) = level_with_layers(3);
    world.level_mut(level_handle).unwrap().set_reference_layer(layers[0]).unwrap();

    let moved = world.move_layer(layers[0], level_handle, 2).unwrap();

    assert_eq!(moved, layers[0]);
    let level = world.level(level_handle).unwrap();
    assert_eq!(
        level.reference_layer().and_then(|layer| layer.handle()),
        Some(layers[0])
    );
    assert_eq!(level.layer(layers[0]).unwrap().layer_number(), Some(2));
    assert_level_invariants(level);
}

#[test]
fn test_move_within_level_past_end_rejected() {
    let (mut world, level_handle, layers) = level_with_layers(3);

    assert_eq!(
        world.move_layer(layers[0], level_handle, 3),
        Err(ModelError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(world.level(level_handle).unwrap().layer(layers[0]).unwrap().layer_number(), Some(0));
}

#[test]
fn test_failed_move_changes_nothing() {
    let (mut world, source, layers) = level_with_layers(2);
    let target = world.create_level();
    world.level_mut(source).unwrap().set_reference_layer(layers[0]).unwrap();

    let result = world.move_layer(layers[0], target, 3);

    assert_eq!(result, Err(ModelError::IndexOutOfRange { index: 3, len: 0 }));
    let source_level = world.level(source).unwrap();
    assert_eq!(source_level.num_layers(), 2);
    assert!(source_level.owns(layers[0]));
    assert_eq!(
        source_level.reference_layer().and_then(|layer| layer.handle()),
        Some(layers[0])
    );
    assert_eq!(world.level(target).unwrap().num_layers(), 0);
}

#[test]
fn test_move_to_foreign_level_rejected() {
    let (mut world, source, layers) = level_with_layers(1);
    let mut other = World::new();
    let foreign = other.create_level();

    assert_eq!(
        world.move_layer(layers[0], foreign, 0),
        Err(ModelError::InvalidHandle("level"))
    );
    assert!(world.level(source).unwrap().owns(layers[0]));
}
