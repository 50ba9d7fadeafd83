//! Catalog file loading
//!
//! Catalogs can be authored as JSON, YAML or TOML. The format is picked from
//! the file extension and every format deserializes into the same
//! [`Catalog`] shape.

use super::Catalog;
use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

type ParseError = Box<dyn std::error::Error + Send + Sync>;

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogFormat {
    /// JSON files (.json)
    Json,
    /// YAML files (.yaml, .yml)
    Yaml,
    /// TOML files (.toml)
    Toml,
}

impl CatalogFormat {
    /// Detect the format from a file path based on extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Detect the format from a file extension string.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }
}

/// Parse catalog text in the given format.
///
/// No validation happens here; see [`Catalog::validate`].
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> std::result::Result<Catalog, ParseError> {
    let catalog = match format {
        CatalogFormat::Json => serde_json::from_str(contents)?,
        CatalogFormat::Yaml => serde_yaml::from_str(contents)?,
        CatalogFormat::Toml => toml::from_str(contents)?,
    };
    Ok(catalog)
}

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedCatalogFormat(path.to_path_buf()))?;

    debug!("Loading {} catalog from {}", format.display_name(), path.display());

    let contents = fs::read_to_string(path).map_err(|e| Error::CatalogLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let catalog = parse_catalog(&contents, format).map_err(|e| Error::CatalogParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    catalog.validate()?;

    info!(
        "Loaded catalog with {} Part 1 and {} Part 2 topics",
        catalog.part1.len(),
        catalog.part2.len()
    );
    Ok(catalog)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
