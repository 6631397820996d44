//! Save and load terrain recipes as RON files.

pub mod config_io;

pub use config_io::{
    list_recipes, load_config, load_recipe, recipe_filename, recipe_path, save_config,
    save_recipe, ConfigIoError, RECIPES_DIR,
};
