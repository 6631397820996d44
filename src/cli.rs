use clap::{Parser, ValueEnum};
use mg_core::{seed_from_clock, seed_from_text};
use mg_noise::ContinentShape;
use mg_persistence::RECIPES_DIR;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "mapgame")]
#[command(about = "Gradient-noise terrain map generator", long_about = None)]
pub struct Args {
    /// Text hashed into the world seed; the wall clock is used when omitted
    #[arg(value_name = "SEED_TEXT")]
    pub seed_text: Option<String>,

    /// Numeric world seed, takes precedence over SEED_TEXT
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u32>,

    /// Map width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 256)]
    pub width: usize,

    /// Map height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 160)]
    pub height: usize,

    /// Load the terrain recipe from a RON file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the terrain recipe in use to a RON file
    #[arg(long, value_name = "PATH")]
    pub save_config: Option<PathBuf>,

    /// Load a named recipe from the recipe directory
    #[arg(long, value_name = "NAME", conflicts_with = "config")]
    pub recipe: Option<String>,

    /// Save the terrain recipe in use under a name in the recipe directory
    #[arg(long, value_name = "NAME")]
    pub save_recipe: Option<String>,

    /// List the named recipes and exit
    #[arg(long)]
    pub list_recipes: bool,

    /// Directory holding named recipes
    #[arg(long, value_name = "DIR", default_value = RECIPES_DIR)]
    pub recipes_dir: PathBuf,

    /// Continent shape; chosen from the seed when neither this nor the recipe sets one
    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    /// Pixels per character in the text preview
    #[arg(long, value_name = "PIXELS", default_value_t = 4)]
    pub step: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Coast,
    Archipelago,
}

impl From<ShapeArg> for ContinentShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Coast => ContinentShape::COAST,
            ShapeArg::Archipelago => ContinentShape::ARCHIPELAGO,
        }
    }
}

impl Args {
    /// Seed from `--seed`, else the hashed seed text, else the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        match (self.seed, &self.seed_text) {
            (Some(seed), _) => seed,
            (None, Some(text)) => seed_from_text(text),
            (None, None) => seed_from_clock(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seed_wins() {
        let args = Args::parse_from(["mapgame", "hello", "--seed", "9"]);
        assert_eq!(args.resolve_seed(), 9);
    }

    #[test]
    fn seed_text_is_hashed() {
        let args = Args::parse_from(["mapgame", "hello"]);
        assert_eq!(args.resolve_seed(), seed_from_text("hello"));
    }

    #[test]
    fn defaults_match_the_reference_map() {
        let args = Args::parse_from(["mapgame"]);
        assert_eq!((args.width, args.height), (256, 160));
        assert_eq!(args.shape, None);
    }

    #[test]
    fn recipe_flags_use_the_default_directory() {
        let args = Args::parse_from([
            "mapgame",
            "--recipe",
            "islands",
            "--save-recipe",
            "copy",
        ]);
        assert_eq!(args.recipe.as_deref(), Some("islands"));
        assert_eq!(args.save_recipe.as_deref(), Some("copy"));
        assert_eq!(args.recipes_dir, PathBuf::from(RECIPES_DIR));
        assert!(!args.list_recipes);
    }

    #[test]
    fn recipe_and_config_file_conflict() {
        let result = Args::try_parse_from(["mapgame", "--recipe", "a", "--config", "b.ron"]);
        assert!(result.is_err());
    }

    #[test]
    fn shape_parses() {
        let args = Args::parse_from(["mapgame", "--shape", "archipelago"]);
        assert_eq!(args.shape.map(ContinentShape::from), Some(ContinentShape::ARCHIPELAGO));
    }
}
