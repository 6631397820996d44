mod cli;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use cli::Args;
use mg_core::MgCorePlugin;
use mg_noise::{GenerationProgress, MgNoisePlugin, TerrainConfig, TerrainMap, TerrainNoise};
use mg_persistence::{list_recipes, load_config, load_recipe, save_config, save_recipe};
use std::process::ExitCode;
use std::time::Instant;

/// Size of the map to generate.
#[derive(Resource, Clone, Copy, Debug)]
struct MapSize {
    width: usize,
    height: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let seed = args.resolve_seed();

    if args.list_recipes {
        return match list_recipes(&args.recipes_dir) {
            Ok(names) if names.is_empty() => {
                println!("No recipes in {}", args.recipes_dir.display());
                ExitCode::SUCCESS
            }
            Ok(names) => {
                for name in names {
                    println!("{}", name);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to list {}: {}", args.recipes_dir.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    let loaded = match (&args.config, &args.recipe) {
        (Some(path), _) => Some((load_config(path), path.display().to_string())),
        (None, Some(name)) => Some((
            load_recipe(&args.recipes_dir, name),
            format!("recipe '{}'", name),
        )),
        (None, None) => None,
    };
    let mut config = match loaded {
        Some((Ok(config), source)) => {
            println!("Loaded terrain config from {}", source);
            config
        }
        Some((Err(e), source)) => {
            eprintln!("Failed to load config {}: {}", source, e);
            return ExitCode::FAILURE;
        }
        None => TerrainConfig::default(),
    };
    if let Some(shape) = args.shape {
        config.continent = Some(shape.into());
    }

    if let Some(path) = &args.save_config {
        match save_config(path, &config) {
            Ok(()) => println!("Saved terrain config to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to save config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(name) = &args.save_recipe {
        match save_recipe(&args.recipes_dir, name, &config) {
            Ok(path) => println!("Saved recipe '{}' to {}", name, path.display()),
            Err(e) => {
                eprintln!("Failed to save recipe '{}': {}", name, e);
                return ExitCode::FAILURE;
            }
        }
    }

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins((MgCorePlugin, MgNoisePlugin))
        .insert_resource(TerrainNoise::with_config(seed, config))
        .insert_resource(MapSize {
            width: args.width,
            height: args.height,
        })
        .add_systems(Startup, generate_map);

    // Headless: a single frame runs the startup systems.
    app.finish();
    app.cleanup();
    app.update();

    let Some(map) = app.world_mut().remove_resource::<TerrainMap>() else {
        eprintln!("Map generation did not produce a map");
        return ExitCode::FAILURE;
    };

    print_map(&map, args.step);
    ExitCode::SUCCESS
}

/// Startup system: generate the terrain map and store it as a resource.
fn generate_map(mut commands: Commands, noise: Res<TerrainNoise>, size: Res<MapSize>) {
    println!("Generating terrain map {}x{}...", size.width, size.height);
    let progress = GenerationProgress::new(size.height);
    let started = Instant::now();

    let map = TerrainMap::generate_with_progress(
        noise.seed(),
        size.width,
        size.height,
        &noise.config,
        &progress,
    );

    info!(
        "Generated {} of {} rows in {:.2?}",
        progress.rows_done(),
        progress.total_rows(),
        started.elapsed()
    );
    commands.insert_resource(map);
}

fn print_map(map: &TerrainMap, step: usize) {
    println!(
        "Seed {} | {} continent | {}x{}",
        map.seed,
        map.shape.name(),
        map.width,
        map.height
    );
    print!("{}", map.to_ascii(step));

    let total = map.bands.len().max(1);
    for (band, count) in map.band_counts() {
        println!(
            "  {} {:<14} {:>6} ({:>5.1}%)",
            band.glyph(),
            band.name(),
            count,
            count as f64 * 100.0 / total as f64
        );
    }
    println!("  Land: {:.1}%", map.land_fraction() * 100.0);
}
