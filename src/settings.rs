use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use gridbot_grid::{BoundedGrid, GridBounds, GridError, Position};
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Everything the drills can be tuned with.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub accumulator: AccumulatorSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub width: u8,
    pub height: u8,
    pub start_x: u8,
    pub start_y: u8,
    /// Direction labels run in order by the grid drill
    pub moves: Vec<String>,
}

impl GridSettings {
    /// Builds the grid these settings describe.
    pub fn build(&self) -> Result<BoundedGrid, GridError> {
        BoundedGrid::new(
            Position::new(self.start_x, self.start_y),
            GridBounds::new(self.width, self.height),
        )
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        let bounds = GridBounds::default();
        GridSettings {
            width: bounds.max_x,
            height: bounds.max_y,
            start_x: 8,
            start_y: 8,
            moves: ["up", "left", "up", "up", "none"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccumulatorSettings {
    pub limit: i32,
}

impl Default for AccumulatorSettings {
    fn default() -> Self {
        AccumulatorSettings {
            limit: gridbot_arith::DEFAULT_LIMIT,
        }
    }
}

/// Loads settings from the TOML file at `path`, then `GRIDBOT__*` environment variables.
///
/// A missing file is not an error; every key falls back to its default.
pub fn load_config(path: &str) -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = build(File::new(path, FileFormat::Toml).required(false));

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

fn build<S>(file: S) -> Result<Settings, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("GRIDBOT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("grid.moves"),
        )
        .build()?
        .try_deserialize()
}
