// crates/catalog/src/lib.rs

//! Canned syslog templates keyed by source type.
//!
//! A [`Catalog`] is built once at startup, either from the shipped vendor
//! profiles or from a JSON file, and is read-only afterwards.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod builtin;

/// Port used when a template does not name one.
pub const DEFAULT_PORT: u16 = 514;

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// A single vendor log format profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTemplate {
    pub source_type: String,
    #[serde(alias = "message")]
    pub raw_message: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expected_parser: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl SourceTemplate {
    pub fn new(source_type: impl Into<String>, raw_message: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            raw_message: raw_message.into(),
            description: String::new(),
            expected_parser: String::new(),
            port: DEFAULT_PORT,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn expected_parser(mut self, parser: impl Into<String>) -> Self {
        self.expected_parser = parser.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown source type: {0}")]
    NotFound(String),
    #[error("duplicate source type: {0}")]
    Duplicate(String),
    #[error("catalog contains no templates")]
    Empty,
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Immutable lookup table from source type to template.
///
/// Iteration follows insertion order so "send all" runs are reproducible.
#[derive(Clone, Debug)]
pub struct Catalog {
    templates: IndexMap<String, SourceTemplate>,
}

impl Catalog {
    /// The vendor profiles shipped with the probe.
    pub fn builtin() -> Self {
        let templates = builtin::templates()
            .into_iter()
            .map(|t| (t.source_type.clone(), t))
            .collect();
        Self { templates }
    }

    pub fn from_templates<I>(templates: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = SourceTemplate>,
    {
        let mut map = IndexMap::new();
        for template in templates {
            if map.contains_key(&template.source_type) {
                return Err(CatalogError::Duplicate(template.source_type));
            }
            map.insert(template.source_type.clone(), template);
        }
        if map.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { templates: map })
    }

    /// Read a JSON array of templates.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let templates: Vec<SourceTemplate> = serde_json::from_reader(reader)?;
        Self::from_templates(templates)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CatalogError::Io(io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let catalog = Self::from_json_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            templates = catalog.len(),
            "loaded template catalog"
        );
        Ok(catalog)
    }

    pub fn lookup(&self, source_type: &str) -> Result<&SourceTemplate, CatalogError> {
        self.templates
            .get(source_type)
            .ok_or_else(|| CatalogError::NotFound(source_type.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceTemplate> {
        self.templates.values()
    }

    pub fn source_types(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
