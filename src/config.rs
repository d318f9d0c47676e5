use crate::cli::Args;
use crate::consts;
use crate::game::Grid;
use crate::render::RendererKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Gameplay settings
    pub(crate) game: GameConfig,

    /// Presentation settings
    pub(crate) interface: InterfaceConfig,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Cells along each edge of the board
    pub(crate) grid_size: Option<u16>,

    /// Milliseconds between snake movements
    pub(crate) update_interval_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct InterfaceConfig {
    /// Which renderer to draw the game with
    pub(crate) renderer: Option<RendererKind>,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("slither").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

/// The fully resolved run settings: built-in defaults, overridden by the
/// configuration file, overridden by command-line options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) grid: Grid,
    pub(crate) interval: Duration,
    pub(crate) renderer: RendererKind,
}

impl Settings {
    /// Resolve the run settings.  Problems with the configuration file are
    /// reported back for display but do not stop the program; values given
    /// on the command line must be valid.
    pub(crate) fn resolve(args: &Args) -> Result<(Settings, Option<anyhow::Error>), SettingsError> {
        let mut trouble = None;
        let config = match load_config(args) {
            Ok(config) => config,
            Err(e) => {
                trouble = Some(anyhow::Error::new(e).context("configuration file ignored"));
                Config::default()
            }
        };

        let grid = match args.grid_size {
            Some(size) => Grid::new(size).ok_or(SettingsError::GridSize(size))?,
            None => config
                .game
                .grid_size
                .and_then(|size| match Grid::new(size) {
                    Some(grid) => Some(grid),
                    None => {
                        trouble.get_or_insert_with(|| {
                            anyhow::Error::new(SettingsError::GridSize(size))
                                .context("configured grid size ignored")
                        });
                        None
                    }
                })
                .unwrap_or_else(default_grid),
        };

        let interval = match args.interval_ms {
            Some(ms) => valid_interval(ms).ok_or(SettingsError::Interval)?,
            None => config
                .game
                .update_interval_ms
                .and_then(|ms| match valid_interval(ms) {
                    Some(interval) => Some(interval),
                    None => {
                        trouble.get_or_insert_with(|| {
                            anyhow::Error::new(SettingsError::Interval)
                                .context("configured update interval ignored")
                        });
                        None
                    }
                })
                .unwrap_or(consts::DEFAULT_UPDATE_INTERVAL),
        };

        let renderer = args
            .renderer
            .or(config.interface.renderer)
            .unwrap_or_default();

        Ok((
            Settings {
                grid,
                interval,
                renderer,
            },
            trouble,
        ))
    }
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    if let Some(path) = &args.config {
        Config::load(path, false)
    } else {
        Config::load(&Config::default_path()?, true)
    }
}

fn default_grid() -> Grid {
    Grid::new(consts::DEFAULT_GRID_SIZE).expect("the default grid size should be valid")
}

fn valid_interval(ms: u64) -> Option<Duration> {
    (ms > 0).then_some(Duration::from_millis(ms))
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("grid size must be at least 4, got {0}")]
    GridSize(u16),
    #[error("update interval must be at least 1 ms")]
    Interval,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("creating a temp file should succeed");
        file.write_all(content.as_bytes())
            .expect("writing the temp file should succeed");
        file
    }

    #[test]
    fn parse_full_config() {
        let config = toml::from_str::<Config>(concat!(
            "[game]\n",
            "grid-size = 16\n",
            "update-interval-ms = 100\n",
            "\n",
            "[interface]\n",
            "renderer = \"widget\"\n",
        ))
        .expect("parsing should succeed");
        assert_eq!(
            config,
            Config {
                game: GameConfig {
                    grid_size: Some(16),
                    update_interval_ms: Some(100),
                },
                interface: InterfaceConfig {
                    renderer: Some(RendererKind::Widget),
                },
            }
        );
    }

    #[test]
    fn parse_empty_config() {
        let config = toml::from_str::<Config>("").expect("parsing should succeed");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_bad_renderer() {
        assert!(toml::from_str::<Config>("[interface]\nrenderer = \"canvas\"\n").is_err());
    }

    #[test]
    fn load_missing_file() {
        let path = Path::new("nonexistent/slither.toml");
        let config = Config::load(path, true).expect("a missing file should be allowed");
        assert_eq!(config, Config::default());
        assert!(Config::load(path, false).is_err());
    }

    #[test]
    fn resolve_defaults() {
        let file = config_file("");
        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        let (settings, trouble) = Settings::resolve(&args).expect("resolution should succeed");
        assert!(trouble.is_none());
        assert_eq!(settings.grid.size(), 20);
        assert_eq!(settings.interval, Duration::from_millis(150));
        assert_eq!(settings.renderer, RendererKind::Buffer);
    }

    #[test]
    fn cli_overrides_config() {
        let file = config_file(concat!(
            "[game]\n",
            "grid-size = 16\n",
            "update-interval-ms = 100\n",
            "\n",
            "[interface]\n",
            "renderer = \"widget\"\n",
        ));
        let args = Args {
            config: Some(file.path().to_path_buf()),
            grid_size: Some(8),
            ..Args::default()
        };
        let (settings, trouble) = Settings::resolve(&args).expect("resolution should succeed");
        assert!(trouble.is_none());
        assert_eq!(settings.grid.size(), 8);
        assert_eq!(settings.interval, Duration::from_millis(100));
        assert_eq!(settings.renderer, RendererKind::Widget);
    }

    #[test]
    fn invalid_cli_grid_size_is_fatal() {
        let file = config_file("");
        let args = Args {
            config: Some(file.path().to_path_buf()),
            grid_size: Some(3),
            ..Args::default()
        };
        assert_eq!(
            Settings::resolve(&args).expect_err("resolution should fail"),
            SettingsError::GridSize(3)
        );
    }

    #[test]
    fn invalid_configured_grid_size_falls_back() {
        let file = config_file("[game]\ngrid-size = 2\n");
        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        let (settings, trouble) = Settings::resolve(&args).expect("resolution should succeed");
        assert_eq!(settings.grid.size(), 20);
        assert!(trouble.is_some());
    }

    #[test]
    fn unreadable_config_falls_back() {
        let args = Args {
            config: Some(PathBuf::from("nonexistent/slither.toml")),
            ..Args::default()
        };
        let (settings, trouble) = Settings::resolve(&args).expect("resolution should succeed");
        assert_eq!(settings.grid.size(), 20);
        assert!(trouble.is_some());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let file = config_file("");
        let args = Args {
            config: Some(file.path().to_path_buf()),
            interval_ms: Some(0),
            ..Args::default()
        };
        assert_eq!(
            Settings::resolve(&args).expect_err("resolution should fail"),
            SettingsError::Interval
        );
    }
}
