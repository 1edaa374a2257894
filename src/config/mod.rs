//! Configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                   |
//! |----------------|-------------------------------------------|
//! | `[content]`    | Collection directories and file extension |
//! | `[pagination]` | Listing page size and page selector width |
//!
//! # Example
//!
//! ```toml
//! [content]
//! posts = "content/posts"
//! papers = "content/papers"
//! projects = "content/projects"
//!
//! [pagination]
//! per_page = 6
//! max_visible = 5
//! ```

mod content;
pub mod defaults;
mod error;
mod pagination;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use pagination::PaginationConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root that relative paths are resolved against
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Collection directories
    #[serde(default)]
    pub content: ContentConfig,

    /// Listing page sizes
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl FolioConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load `folio.toml` for the given CLI invocation.
    ///
    /// A missing config file is not an error: defaults apply.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            crate::log!("config"; "`{}` not found, using defaults", config_path.display());
            Self {
                config_path,
                ..Self::default()
            }
        };
        config.set_root(root);
        config.validate()?;

        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory and resolve relative content paths against it
    pub fn set_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.content.rebase(&root);
        self.root = Some(root);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.pagination.per_page == 0 {
            bail!(ConfigError::Validation(
                "[pagination.per_page] must be at least 1".into()
            ));
        }

        if self.pagination.max_visible == 0 {
            bail!(ConfigError::Validation(
                "[pagination.max_visible] must be at least 1".into()
            ));
        }

        let extension = self.content.extension.trim_start_matches('.');
        if extension.is_empty() {
            bail!(ConfigError::Validation(
                "[content.extension] must not be empty".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_empty_config_is_valid() {
        let config = FolioConfig::from_str("").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = FolioConfig::from_str("[server]\nport = 8080\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_per_page_rejected() {
        let config = FolioConfig::from_str("[pagination]\nper_page = 0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("per_page"));
    }

    #[test]
    fn test_zero_max_visible_rejected() {
        let config = FolioConfig::from_str("[pagination]\nmax_visible = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_extension_rejected() {
        let config = FolioConfig::from_str("[content]\nextension = \".\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = FolioConfig::from_path(Path::new("/definitely/not/here/folio.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn test_load_resolves_paths_against_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[content]\nposts = \"blog\"\n\n[pagination]\nper_page = 3\n",
        )
        .unwrap();

        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["folio", "--root", root, "facets", "posts", "category"]);
        let config = FolioConfig::load(&cli).unwrap();

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.content.posts, root.join("blog"));
        assert_eq!(config.content.papers, root.join("content/papers"));
        assert_eq!(config.pagination.per_page, 3);
    }

    #[test]
    fn test_load_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["folio", "--root", root, "facets", "papers", "year"]);
        let config = FolioConfig::load(&cli).unwrap();

        assert_eq!(config.pagination.per_page, 6);
        assert!(config.content.projects.ends_with("content/projects"));
    }
}
