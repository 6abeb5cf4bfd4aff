//! Playground entry point: runs the demo scripts and a few frames of
//! gameplay sugar

use std::cell::Cell;
use std::rc::Rc;
use sugar::prelude::*;
use sugar::scripting::Scope;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "assets/sugar.json";
const FRAMES: u64 = 6;

fn main() {
    // Initialize logging
    sugar::init_logging();
    info!("Starting sugar playground");

    if let Err(e) = run() {
        error!(error = %e, "Playground failed");
        std::process::exit(1);
    }
}

fn load_config() -> SugarConfig {
    match SugarConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = CONFIG_PATH, error = %e, "Using default config");
            SugarConfig::default()
        }
    }
}

fn run() -> sugar::Result<()> {
    let config = load_config();
    config.validate()?;

    let scripts = ScriptEngine::with_config(config);

    // Script side: loot rolls and string sugar
    let mut scope = Scope::new();
    let summary = scripts.run_script_with_scope("loot", &mut scope)?;
    info!(summary = %summary, "Loot script finished");

    for roll in 0..3 {
        let drop: String = scripts.call_fn("loot", &mut scope, "roll_drop", ())?;
        info!(roll = roll, drop = %drop, "Rolled drop");
    }

    let position = Vec3::new(1.0, 0.0, 2.0);
    let snapped: Vec3 = scripts.call_fn("loot", &mut scope, "snap_to_grid", (position,))?;
    info!(from = ?position, to = ?snapped, "Snapped by script");

    // Rust side: prefabs, weighted spawns and routines on the same generator
    let rng = scripts.rng().clone();
    let mut world = World::new();
    let goblin = world.spawn((
        Prefab,
        Name::new("Goblin"),
        Transform::from_position(Vec3::new(0.0, 0.0, -5.0)),
    ));
    let ogre = world.spawn((
        Prefab,
        Name::new("Ogre"),
        Transform::from_position(Vec3::new(0.0, 0.0, -8.0)).with_scale(Vec3::splat(2.0)),
    ));
    let camp = world.spawn((Name::new("Camp"), Transform::default()));

    let spawn_table = [(goblin, 8.0), (ogre, 1.0)];
    let mut spawned = Vec::new();
    let mut scheduler = FrameScheduler::new();
    let waves_done = Rc::new(Cell::new(false));

    let done = waves_done.clone();
    scheduler.start(wait_frames(3).then(move || done.set(true)));
    let done = waves_done.clone();
    scheduler.invoke_when(
        move || done.get(),
        || info!("All waves spawned, camp is busy"),
    );

    while scheduler.frame() < FRAMES {
        if !waves_done.get() {
            let picked = rng.with(|rng| pick_weighted(&spawn_table, |(_, weight)| *weight, rng));
            if let Some(&(prefab, _)) = picked {
                let entity = world.instantiate_under(prefab, camp)?;
                let offset = rng.with(|rng| Vec3::ZERO.randomize_by_range(-2.0, 2.0, rng));
                if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
                    transform.position = (transform.position + offset).round_to_multiple_of(1);
                }
                spawned.push(entity);
            }
        }

        let finished = scheduler.tick();
        info!(
            frame = scheduler.frame(),
            finished = finished,
            pending = scheduler.pending(),
            alive = spawned.len(),
            "Frame"
        );
    }

    let positions: Vec<Vec3> = spawned
        .iter()
        .filter_map(|&entity| world.try_component::<Transform>(entity))
        .map(|transform| transform.position)
        .collect();
    if let Some(center) = positions.average() {
        info!(center = ?center, count = positions.len(), "Spawned group");
    }

    let names: Vec<String> = spawned
        .iter()
        .filter_map(|&entity| world.component_or_err::<Name>(entity).ok())
        .map(|name| name.0)
        .collect();
    info!(names = ?names, "Spawned names");

    let despawned = world.despawn_all(&mut spawned);
    info!(despawned = despawned, "Cleared spawned entities");

    Ok(())
}
