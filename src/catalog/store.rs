//! Catalog store and TOML loading
//!
//! The catalog is an ordered, immutable list of tank types built once from a
//! TOML file. Containers share it read-only; wrap it in an `Arc` to hand the
//! same catalog to many containers.

use crate::catalog::schema::{TankResourceDef, TankType};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// TOML parsing failed
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A definition carried a negative scalar
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),
}

/// Ordered catalog of tank types.
///
/// Name lookups scan in insertion order and take the first match; duplicate
/// names are tolerated and the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct TankTypeCatalog {
    options: Vec<TankType>,
}

impl TankTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type to the catalog, keeping insertion order.
    pub fn add(&mut self, option: TankType) {
        self.options.push(option);
    }

    /// Get a type by name (first match wins).
    pub fn get(&self, name: &str) -> Option<&TankType> {
        self.options.iter().find(|t| t.name == name)
    }

    /// Index of a type by name (first match wins).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|t| t.name == name)
    }

    /// The default type a container falls back to.
    pub fn first(&self) -> Option<&TankType> {
        self.options.first()
    }

    /// All types, in catalog order.
    pub fn all(&self) -> &[TankType] {
        &self.options
    }

    /// Ordered names for a host chooser control.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Load a catalog from a TOML file.
    pub fn load_from_toml(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self, CatalogError> {
        let toml_data: TomlCatalog = toml::from_str(content)?;

        let mut catalog = Self::new();
        for option in toml_data.tank_types {
            catalog.add(option.into_tank_type()?);
        }
        Ok(catalog)
    }
}

/// TOML representation of the catalog file
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    tank_types: Vec<TomlTankType>,
}

/// TOML representation of a single tank type
#[derive(Debug, Deserialize)]
struct TomlTankType {
    name: String,
    #[serde(default)]
    dry_density: f64,
    #[serde(default)]
    structural: bool,
    #[serde(default)]
    resources: Vec<TomlTankResource>,
}

/// TOML representation of one resource ratio
#[derive(Debug, Deserialize)]
struct TomlTankResource {
    resource: String,
    #[serde(default)]
    units_per_kl: f64,
    #[serde(default)]
    units_per_t: f64,
    #[serde(default = "default_tweakable")]
    tweakable: bool,
    #[serde(default)]
    unit_mass: f64,
}

fn default_tweakable() -> bool {
    true
}

impl TomlTankType {
    fn into_tank_type(self) -> Result<TankType, CatalogError> {
        if self.dry_density < 0.0 {
            return Err(CatalogError::InvalidDefinition(format!(
                "tank type '{}' has negative dry_density {}",
                self.name, self.dry_density
            )));
        }

        let resources = self
            .resources
            .into_iter()
            .map(|r| r.into_resource_def(&self.name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TankType {
            name: self.name,
            dry_density: self.dry_density,
            is_structural: self.structural,
            resources,
        })
    }
}

impl TomlTankResource {
    fn into_resource_def(self, type_name: &str) -> Result<TankResourceDef, CatalogError> {
        if self.units_per_kl < 0.0 || self.units_per_t < 0.0 || self.unit_mass < 0.0 {
            return Err(CatalogError::InvalidDefinition(format!(
                "resource '{}' in tank type '{}' has a negative ratio",
                self.resource, type_name
            )));
        }
        Ok(TankResourceDef {
            name: self.resource,
            units_per_kl: self.units_per_kl,
            units_per_t: self.units_per_t,
            tweakable: self.tweakable,
            unit_mass: self.unit_mass,
        })
    }
}
