use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "jfx.toml";

pub const BIN_DIRECTORY: &str = "bin";
pub const JFLEX_BAT: &str = "jflex.bat";
pub const JFLEX_SH: &str = "jflex.sh";

const OPTION_SKEL: &str = " --skel ";

pub const ENV_HOME: &str = "JFLEX_HOME";
pub const ENV_SKELETON: &str = "JFLEX_SKELETON";

/// Where JFlex lives and how it should be invoked.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JFlexConfig {
    /// JFlex installation directory (the one holding `bin/`).
    pub home: Option<PathBuf>,
    /// Custom skeleton file passed with `--skel`.
    pub skeleton: Option<PathBuf>,
    /// Extra command-line options, as typed by the user.
    pub options: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result of checking a configuration before JFlex is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValidation {
    Ok,
    HomeInvalid,
    SkeletonMissing,
}

impl ConfigValidation {
    pub fn is_ok(self) -> bool {
        self == ConfigValidation::Ok
    }
}

impl fmt::Display for ConfigValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValidation::Ok => write!(f, "JFlex configuration is valid"),
            ConfigValidation::HomeInvalid => write!(f, "JFlex home path is invalid"),
            ConfigValidation::SkeletonMissing => write!(f, "JFlex skeleton file was not found"),
        }
    }
}

/// Launcher script shipped in `<home>/bin` for the current platform.
pub fn launcher_script_name() -> &'static str {
    if cfg!(windows) {
        JFLEX_BAT
    } else {
        JFLEX_SH
    }
}

impl JFlexConfig {
    pub fn from_str(toml_content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_content)
    }

    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, falling back to the default configuration when the file
    /// is missing or unreadable.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file at {} not found. Using default configuration.", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{}. Using default configuration.", e);
                Self::default()
            }
        }
    }

    /// Nearest `jfx.toml` in `start` or any of its ancestors.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Loads the configuration nearest to the current directory.
    pub fn load() -> Self {
        let found = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover(&cwd));
        match found {
            Some(path) => {
                debug!("Using config file {}", path.display());
                Self::load_from_path(&path)
            }
            None => Self::default(),
        }
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies `JFLEX_HOME` / `JFLEX_SKELETON` as returned by `lookup`.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(home) = lookup(ENV_HOME).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides configured home", ENV_HOME);
            self.home = Some(PathBuf::from(home));
        }
        if let Some(skeleton) = lookup(ENV_SKELETON).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides configured skeleton", ENV_SKELETON);
            self.skeleton = Some(PathBuf::from(skeleton));
        }
        self
    }

    pub fn options_text(&self) -> &str {
        self.options.as_deref().unwrap_or("")
    }

    /// Whether the options already carry their own `--skel`.
    pub fn options_name_skeleton(&self) -> bool {
        format!(" {} ", self.options_text()).contains(OPTION_SKEL)
    }

    /// Skeleton path that still has to be passed to JFlex, if any.
    pub fn effective_skeleton(&self) -> Option<&Path> {
        self.skeleton
            .as_deref()
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
            .filter(|_| !self.options_name_skeleton())
    }

    pub fn bin_dir(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(BIN_DIRECTORY))
    }

    pub fn launcher_path(&self) -> Option<PathBuf> {
        self.bin_dir().map(|bin| bin.join(launcher_script_name()))
    }

    /// Checks that JFlex can be launched with this configuration.
    pub fn validate(&self) -> ConfigValidation {
        let Some(home) = self.home.as_deref() else {
            warn!("No JFlex home configured");
            return ConfigValidation::HomeInvalid;
        };
        if !home.is_dir() {
            warn!("JFlex home {} is not a directory", home.display());
            return ConfigValidation::HomeInvalid;
        }

        let bin = home.join(BIN_DIRECTORY);
        if !bin.is_dir() {
            warn!("JFlex home {} has no {} directory", home.display(), BIN_DIRECTORY);
            return ConfigValidation::HomeInvalid;
        }

        let script = bin.join(launcher_script_name());
        if !script.is_file() {
            warn!("Launcher script {} not found", script.display());
            return ConfigValidation::HomeInvalid;
        }

        if let Some(skeleton) = self.effective_skeleton() {
            if !skeleton.is_file() {
                warn!("Skeleton file {} not found", skeleton.display());
                return ConfigValidation::SkeletonMissing;
            }
        }

        ConfigValidation::Ok
    }
}
