//! CLI configuration file.
//!
//! ```toml
//! language = "es"
//! meet = "nationals.json"
//! records = "records.csv"
//! output_dir = "out"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use meet_records::Language;
use serde::Deserialize;
use tracing::debug;

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Language for CSV columns, values and the records page
    pub language: Language,
    /// Meet file (JSON)
    pub meet: PathBuf,
    /// Records CSV to use as the seed instead of the meet file's own records
    pub records: Option<PathBuf>,
    /// Where generated files go when no output path is given
    pub output_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            meet: PathBuf::from("meet.json"),
            records: None,
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    language: Option<Language>,
    meet: Option<PathBuf>,
    records: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new configuration builder
    pub fn builder() -> CliConfigBuilder {
        CliConfigBuilder::default()
    }

    /// `<config_dir>/meet-records/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meet-records").join("config.toml"))
    }

    /// Load a config file. Keys it leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());

        let mut builder = Self::builder();
        builder.language = file.language;
        builder.meet = file.meet;
        builder.records = file.records;
        builder.output_dir = file.output_dir;
        Ok(builder.build())
    }

    /// Use `explicit` if given, else the default location if a file exists
    /// there, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Start a builder from these settings, for applying overrides.
    pub fn into_builder(self) -> CliConfigBuilder {
        CliConfigBuilder {
            language: Some(self.language),
            meet: Some(self.meet),
            records: self.records,
            output_dir: Some(self.output_dir),
        }
    }
}

/// Builder for CliConfig
#[derive(Debug, Clone, Default)]
pub struct CliConfigBuilder {
    language: Option<Language>,
    meet: Option<PathBuf>,
    records: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl CliConfigBuilder {
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn meet<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.meet = Some(path.into());
        self
    }

    pub fn records<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.records = Some(path.into());
        self
    }

    pub fn output_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> CliConfig {
        let default = CliConfig::default();
        CliConfig {
            language: self.language.unwrap_or(default.language),
            meet: self.meet.unwrap_or(default.meet),
            records: self.records.or(default.records),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
        }
    }
}
