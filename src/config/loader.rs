use std::path::{Path, PathBuf};

use crate::error::{Result, SpecGuardError};

use super::model::{CONFIG_FILE_NAME, CONFIG_VERSION, ValidationConfig};

/// Trait for loading validation configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// A missing config file is not an error; defaults are returned.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self) -> Result<ValidationConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<ValidationConfig>;
}

/// Validate config version. Returns an error if version is unsupported.
fn validate_config_version(config: &ValidationConfig) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(SpecGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.spec-guard.toml` in the current directory (or the configured
///    project root)
/// 2. `ValidationConfig::default()` if no config file is found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    project_root: Option<PathBuf>,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fs: RealFileSystem,
            project_root: None,
        }
    }

    /// Create a loader that searches for the config under `root`.
    #[must_use]
    pub const fn with_root(root: Option<PathBuf>) -> Self {
        Self {
            fs: RealFileSystem,
            project_root: root,
        }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self {
            fs,
            project_root: None,
        }
    }

    fn default_config_path(&self) -> Option<PathBuf> {
        let root = match &self.project_root {
            Some(root) => root.clone(),
            None => self.fs.current_dir().ok()?,
        };
        Some(root.join(CONFIG_FILE_NAME))
    }

    fn parse_config(content: &str) -> Result<ValidationConfig> {
        let config: ValidationConfig = toml::from_str(content).map_err(SpecGuardError::from)?;
        validate_config_version(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<ValidationConfig> {
        match self.default_config_path() {
            Some(path) if self.fs.exists(&path) => self.load_from_path(&path),
            _ => Ok(ValidationConfig::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<ValidationConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| SpecGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
