//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "foglio";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/";
const DEFAULT_DOCUMENT_NAME: &str = "conventions.md";
const DEFAULT_REGION: &str = "content";

/// Command-line arguments for the Foglio binary.
#[derive(Debug, Parser)]
#[command(name = "foglio", version, about = "Foglio document viewer")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "FOGLIO_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Override the base URL the document name is resolved against.
    #[arg(long = "document-base-url", value_name = "URL")]
    pub document_base_url: Option<String>,

    /// Override the name of the fetched document.
    #[arg(long = "document-name", value_name = "NAME")]
    pub document_name: Option<String>,

    /// Override the display region that receives the rendered markup.
    #[arg(long = "display-region", value_name = "ID")]
    pub display_region: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub document: DocumentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct DocumentSettings {
    /// Base the document name is joined onto. Always ends with a slash so the
    /// name resolves underneath it rather than replacing the last segment.
    pub base_url: Url,
    pub name: String,
    pub region: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("FOGLIO").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    document: RawDocumentSettings,
    logging: RawLoggingSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(url) = overrides.document_base_url.as_ref() {
            self.document.base_url = Some(url.clone());
        }
        if let Some(name) = overrides.document_name.as_ref() {
            self.document.name = Some(name.clone());
        }
        if let Some(region) = overrides.display_region.as_ref() {
            self.document.region = Some(region.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { document, logging } = raw;

        let document = build_document_settings(document)?;
        let logging = build_logging_settings(logging)?;

        Ok(Self { document, logging })
    }
}

fn build_document_settings(document: RawDocumentSettings) -> Result<DocumentSettings, LoadError> {
    let base = document
        .base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut base_url = Url::parse(base.trim())
        .map_err(|err| LoadError::invalid("document.base_url", format!("failed to parse: {err}")))?;
    if base_url.cannot_be_a_base() {
        return Err(LoadError::invalid(
            "document.base_url",
            "URL cannot serve as a base",
        ));
    }
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    let name = document
        .name
        .unwrap_or_else(|| DEFAULT_DOCUMENT_NAME.to_string());
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(LoadError::invalid("document.name", "must not be empty"));
    }

    let region = document
        .region
        .unwrap_or_else(|| DEFAULT_REGION.to_string());
    let region = region.trim().to_string();
    if region.is_empty() {
        return Err(LoadError::invalid("document.region", "must not be empty"));
    }

    Ok(DocumentSettings {
        base_url,
        name,
        region,
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawDocumentSettings {
    base_url: Option<String>,
    name: Option<String>,
    region: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

/// Resolve configuration using the process CLI arguments.
pub fn load_with_cli() -> Result<Settings, LoadError> {
    let args = CliArgs::parse();
    load(&args)
}
