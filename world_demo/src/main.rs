//! Builds a small two-level world and reports where a player would spawn
//!
//! Usage: `world_demo [config.toml|config.ron]`

use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use world_model::foundation::logging;
use world_model::prelude::*;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

fn main() {
    logging::init_with_default("info");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading world config from {}", path);
            WorldConfig::load_from_file(path)?
        }
        None => WorldConfig::default().with_default_bounds(64, 64),
    };
    config.validate()?;

    let mut world = World::with_config(config);
    world.set_attribute("title", "Demo Harbor");

    let ground = build_ground(&mut world)?;
    let cellar = build_cellar(&mut world)?;

    // Swap the harbor's water layer underneath everything else
    let water = world
        .level(ground)?
        .get_layer("name", "water")?
        .and_then(Layer::handle)
        .ok_or(ModelError::NotFound("water layer"))?;
    world.move_layer(water, ground, 0)?;

    for level in world.levels() {
        let name = level.get_attribute::<str>("name")?;
        log::info!(
            "Level '{}': {} layers, bounds {}x{}",
            name,
            level.num_layers(),
            level.width(),
            level.height()
        );
        level.for_each_layer(|layer| {
            log::info!(
                "  #{} {:<8} {:>3} instances on {} grid",
                layer.layer_number().unwrap_or_default(),
                layer.get_attribute::<str>("name").unwrap_or("?"),
                layer.num_instances(),
                layer.geometry().name()
            );
        });
        let spawn = level.center_of_mass();
        log::info!("  spawn at ({}, {})", spawn.x, spawn.y);
    }

    world.remove_level(cellar)?;
    log::info!("Cellar removed, {} level(s) left", world.num_levels());
    Ok(())
}

fn build_ground(world: &mut World) -> Result<LevelHandle, DemoError> {
    let handle = world.create_level();
    let level = world.level_mut(handle)?;
    level.set_attribute("name", "ground");

    let terrain = level.add_layer(Size::new(64, 64), Arc::new(SquareGrid));
    let water = level.add_layer(Size::new(64, 64), Arc::new(SquareGrid));
    let buildings = level.add_layer(Size::new(64, 64), Arc::new(RectGrid::new(4, 4)));

    let mut rng = rand::thread_rng();
    for (layer_handle, name, count) in [(terrain, "terrain", 40), (water, "water", 12), (buildings, "houses", 6)] {
        let layer = level.layer_mut(layer_handle)?;
        layer.set_attribute("name", name);
        for _ in 0..count {
            layer.add_instance(Point::new(rng.gen_range(0..64), rng.gen_range(0..64)));
        }
    }
    level.set_reference_layer(buildings)?;
    Ok(handle)
}

fn build_cellar(world: &mut World) -> Result<LevelHandle, DemoError> {
    let handle = world.create_level();
    let level = world.level_mut(handle)?;
    level.set_attribute("name", "cellar");
    level.set_bounds(20, 12);

    let floor = level.add_layer(Size::new(20, 12), Arc::new(SquareGrid));
    level.layer_mut(floor)?.set_attribute("name", "floor");
    Ok(handle)
}
