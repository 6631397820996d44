use mg_noise::TerrainConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for named terrain recipes.
pub const RECIPES_DIR: &str = "assets/terrain";

/// Error type for terrain config I/O operations.
#[derive(Debug)]
pub enum ConfigIoError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for ConfigIoError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for ConfigIoError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for ConfigIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Ron(e) => Some(e),
            Self::RonSpanned(e) => Some(e),
        }
    }
}

/// Save a terrain config to a RON file.
pub fn save_config(path: &Path, config: &TerrainConfig) -> Result<(), ConfigIoError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .separate_tuple_members(true);

    let ron_string = ron::ser::to_string_pretty(config, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load a terrain config from a RON file.
pub fn load_config(path: &Path) -> Result<TerrainConfig, ConfigIoError> {
    let contents = fs::read_to_string(path)?;
    let config: TerrainConfig = ron::from_str(&contents)?;
    Ok(config)
}

/// Path of the recipe called `name` inside `dir`.
pub fn recipe_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(recipe_filename(name))
}

/// Save `config` as the recipe `name` in `dir`, creating the directory if needed.
///
/// Returns the path written.
pub fn save_recipe(
    dir: &Path,
    name: &str,
    config: &TerrainConfig,
) -> Result<PathBuf, ConfigIoError> {
    fs::create_dir_all(dir)?;
    let path = recipe_path(dir, name);
    save_config(&path, config)?;
    Ok(path)
}

/// Load the recipe `name` from `dir`.
pub fn load_recipe(dir: &Path, name: &str) -> Result<TerrainConfig, ConfigIoError> {
    load_config(&recipe_path(dir, name))
}

/// Names of all recipes saved in `dir`, sorted. A missing directory has none.
pub fn list_recipes(dir: &Path) -> Result<Vec<String>, std::io::Error> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("ron") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// File name for a recipe name: lowercase, with anything but letters, digits,
/// `-` and `_` replaced by `_`.
pub fn recipe_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.ron", sanitized.to_lowercase())
}
