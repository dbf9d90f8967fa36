//! Fixed tables loaded from catalog.toml: console methods, excluded directories, source extensions.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Structure to deserialize the catalog from TOML
#[derive(Debug, Deserialize)]
struct CatalogConfig {
    console: ConsoleConfig,
    walk: WalkConfig,
}

#[derive(Debug, Deserialize)]
struct ConsoleConfig {
    methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WalkConfig {
    excluded_dirs: Vec<String>,
    extensions: Vec<String>,
}

// Embed the TOML file directly in the binary at compile time
const CATALOG_TOML: &str = include_str!("../catalog.toml");

/// The recognized console methods and the traversal rules.
#[derive(Debug, Clone)]
pub struct Catalog {
    methods: Vec<String>,
    excluded_dirs: Vec<String>,
    extensions: Vec<String>,
}

impl Catalog {
    /// Parse the embedded catalog
    pub fn load() -> Result<Self> {
        Self::from_toml(CATALOG_TOML)
    }

    fn from_toml(content: &str) -> Result<Self> {
        let config: CatalogConfig =
            toml::from_str(content).context("Failed to parse catalog TOML file")?;

        Ok(Catalog {
            methods: config.console.methods,
            excluded_dirs: config.walk.excluded_dirs,
            extensions: config.walk.extensions,
        })
    }

    /// Catalog method names, in catalog order
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn is_catalog_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }

    /// Exact directory-name match against the exclusion list
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Check whether a path carries one of the recognized source extensions.
    /// Only the final extension counts, so `types.d.ts` qualifies and `App.JS` does not.
    /// A file named just `.js` counts as having the extension `js`.
    pub fn is_source_file(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).or_else(|| {
            path.file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_prefix('.'))
        });
        match ext {
            Some(ext) => self.extensions.iter().any(|known| known == ext),
            None => false,
        }
    }
}
