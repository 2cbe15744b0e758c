//! Structural invariant tests for the world hierarchy

mod lookup;
mod world_levels;

use super::{Geometry, LayerHandle, Level, LevelHandle, SquareGrid, World};
use crate::attributes::Attributed;
use crate::foundation::math::Size;
use std::sync::Arc;

fn square() -> Arc<dyn Geometry> {
    Arc::new(SquareGrid)
}

/// Asserts the per-level invariants: contiguous numbering, back-references,
/// reference layer held by the level, reference unset while empty.
fn assert_level_invariants(level: &Level) {
    for (index, layer) in level.layers().enumerate() {
        assert_eq!(layer.layer_number(), Some(index), "layer number at {index}");
        assert_eq!(layer.level(), Some(level.handle()), "owner at {index}");
        let handle = layer.handle().expect("attached layer has a handle");
        assert!(level.owns(handle));
    }
    if let Some(reference) = level.reference_layer() {
        let handle = reference.handle().expect("reference layer is attached");
        assert!(level.owns(handle));
    }
    if level.num_layers() == 0 {
        assert!(level.reference_layer().is_none());
    }
}

/// World with one level holding `count` 10x10 layers named "0", "1", ...
fn level_with_layers(count: usize) -> (World, LevelHandle, Vec<LayerHandle>) {
    let mut world = World::new();
    let level_handle = world.create_level();
    let level = world.level_mut(level_handle).unwrap();
    let layers = (0..count)
        .map(|i| {
            let handle = level.add_layer(Size::new(10, 10), square());
            level.layer_mut(handle).unwrap().attributes_mut().set("name", i.to_string());
            handle
        })
        .collect();
    (world, level_handle, layers)
}
