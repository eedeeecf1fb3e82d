// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config_types::*;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub input: InputConfig,
    pub font: FontConfig,
    pub rotation: RotationConfig,
    pub vanish: VanishConfig,
    pub tilt: TiltConfig,
    pub style: StyleConfig,
    pub paths: PathConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return exe_config;
        }

        // Fallback to loading from the current working directory
        Self::load_from_path("config.toml")
    }

    fn load_from_exe_dir() -> Option<Result<Self>> {
        let config_path = exe_dir()?.join("config.toml");

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config next to executable");
            Some(Self::load_from_path(&config_path))
        } else {
            None
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.vanish.validate()
    }

    pub fn resolve_placeholders_path(&self) -> Option<PathBuf> {
        self.paths.placeholders_file.as_deref().map(resolve_path)
    }

    pub fn resolve_font_path(&self) -> Option<PathBuf> {
        self.font.file.as_deref().map(resolve_path)
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

// relative paths resolve against the executable's directory
fn resolve_path(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else if let Some(dir) = exe_dir() {
        dir.join(path)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.rotation.interval_ms, 3000);
        assert_eq!(config.vanish.canvas_size, 800);
        assert_eq!(config.vanish.frontier_step, 8.0);
        assert_eq!(config.input.rows, 1);
        assert_eq!(config.input.max_rows, 10);
        assert!(config.input.show_submit_button);
        assert!(config.paths.placeholders_file.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            [input]
            multiline = true
            auto_resize = true
            max_rows = 4

            [vanish]
            max_decay = 0.1
            "#,
        )
        .unwrap();
        assert!(config.input.multiline);
        assert!(config.input.auto_resize);
        assert_eq!(config.input.max_rows, 4);
        assert_eq!(config.input.rows, 1);
        assert_eq!(config.vanish.max_decay, 0.1);
        assert_eq!(config.vanish.frontier_step, 8.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = Config::from_toml("[input\nrows = ");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_vanish_values_that_never_finish_are_rejected() {
        for content in [
            "[vanish]\nfrontier_step = 0.0",
            "[vanish]\nfrontier_step = -8.0",
            "[vanish]\nmax_decay = 0.0",
            "[vanish]\nmax_decay = -0.05",
            "[vanish]\ncanvas_size = 0",
        ] {
            let result = Config::from_toml(content);
            assert!(
                matches!(result, Err(Error::InvalidConfig(_))),
                "accepted {content:?}"
            );
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::load_from_path("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = Config::from_toml(
            r#"
            [paths]
            placeholders_file = "/tmp/hints.json"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.resolve_placeholders_path(),
            Some(PathBuf::from("/tmp/hints.json"))
        );
    }
}
