//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SKELLY_*` environment variables, `__` between section and key
//!    (`SKELLY_DEFAULTS__BACKEND=java`)
//! 3. `--config FILE`, or `.skelly.toml` in the current directory, then the
//!    platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".skelly.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for `skelly new` flags.
    pub defaults: Defaults,
    pub install: InstallConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub backend: Option<String>,
    pub frontend: String,
    pub architecture: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// `false` behaves like `--skip-install` on every run.
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to this file.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template overrides, layered over the built-in set.
    pub dir: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            backend: None,
            frontend: "none".into(),
            architecture: "layered".into(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to seed default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(global) = Self::config_path() {
                    builder = builder.add_source(
                        File::from(global.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
                builder = builder.add_source(
                    File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        builder
            .add_source(
                Environment::with_prefix("SKELLY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Platform config file, e.g. `~/.config/skelly/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "skelly", "skelly")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Where `skelly config path` points: the explicit file, else the
    /// platform path, else the local file.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(Self::config_path)
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_have_no_backend() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.backend, None);
        assert_eq!(cfg.defaults.architecture, "layered");
        assert!(cfg.install.enabled);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("skelly.toml");
        fs::write(
            &path,
            "[defaults]\nbackend = \"java\"\n\n[install]\nenabled = false\n\n[templates]\ndir = \"my-templates\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.defaults.backend.as_deref(), Some("java"));
        assert_eq!(cfg.defaults.frontend, "none");
        assert!(!cfg.install.enabled);
        assert_eq!(cfg.templates.dir, Some(PathBuf::from("my-templates")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(temp.path().join("absent.toml").as_path())).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[install]\nenabled = \"sometimes\"\n").unwrap();

        assert!(AppConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/custom.toml");
        assert_eq!(AppConfig::active_path(Some(path)), path);
    }
}
