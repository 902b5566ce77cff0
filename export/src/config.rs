//! Configuration file support for the export tool.
//!
//! Loads optional `aegis.toml` from the working directory.

use std::path::{Path, PathBuf};

use aegis_site::PageMeta;
use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "aegis.toml";

/// Default output path for `aegis render`.
pub const DEFAULT_OUTPUT: &str = "dist/index.html";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AegisConfig {
    pub page: PageConfig,
    pub export: ExportConfig,
}

/// `[page]` - document head metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub lang: String,
    pub description: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        let meta = PageMeta::default();
        Self {
            title: meta.title,
            lang: meta.lang,
            description: meta.description,
        }
    }
}

/// `[export]` - where the static page goes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl AegisConfig {
    /// Load config from `aegis.toml` in the given directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a path the user named explicitly.
    /// Same fallbacks as [`Self::load_from_path`], but a missing file is a warning.
    pub fn load_explicit(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        Self::load_from_path(path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Document metadata for rendering.
    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.page.title.clone(),
            description: self.page.description.clone(),
            lang: self.page.lang.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AegisConfig::default();
        assert_eq!(config.export.output, PathBuf::from("dist/index.html"));
        assert_eq!(config.page.lang, "en");
        assert_eq!(config.page_meta(), PageMeta::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = AegisConfig::load(temp.path());
        assert_eq!(config, AegisConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
[page]
title = "Aegis-1 | Staging"
lang = "en-US"

[export]
output = "public/index.html"
"#
        )
        .expect("write config");

        let config = AegisConfig::load(temp.path());
        assert_eq!(config.page.title, "Aegis-1 | Staging");
        assert_eq!(config.page.lang, "en-US");
        // unset keys keep their defaults
        assert_eq!(config.page.description, PageMeta::default().description);
        assert_eq!(config.export.output, PathBuf::from("public/index.html"));
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create empty config");

        let config = AegisConfig::load(temp.path());
        assert_eq!(config, AegisConfig::default());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = AegisConfig::load_explicit(&temp.path().join("missing.toml"));
        assert_eq!(config, AegisConfig::default());
    }

    #[test]
    fn test_load_explicit_existing_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "[export]\noutput = \"out/page.html\"\n").expect("write config");

        let config = AegisConfig::load_explicit(&path);
        assert_eq!(config.export.output, PathBuf::from("out/page.html"));
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[page\ntitle = ").expect("write config");

        let config = AegisConfig::load(temp.path());
        assert_eq!(config, AegisConfig::default());
    }
}
