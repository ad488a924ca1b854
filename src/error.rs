use std::path::PathBuf;
use thiserror::Error;

use crate::schema::FieldKind;

#[derive(Debug, Error)]
pub enum SchemafigError {
    #[error("unsupported field '{field}' of type {type_name}")]
    UnsupportedField {
        field: String,
        type_name: &'static str,
    },

    #[error("invalid value '{raw}' for field '{field}': expected {kind}")]
    Coerce {
        field: String,
        raw: String,
        kind: FieldKind,
    },

    /// Aggregate required-field failure. `fields` holds every violating
    /// dotted path in schema declaration order; `message` is the rendered
    /// form (one template instance per field, joined by the configured
    /// separator).
    #[error("{message}")]
    Validation {
        fields: Vec<String>,
        message: String,
    },

    #[error("flag '--{name}' registered twice — two fields share the same flag name")]
    DuplicateFlag { name: String },

    #[error("failed to parse command-line flags: {0}")]
    FlagParse(#[from] clap::Error),

    #[error("Unknown key '{key}' in {path} (line {line})")]
    UnknownKey {
        key: String,
        path: PathBuf,
        line: usize,
    },

    #[error("Unknown keys in config file")]
    UnknownKeys(Vec<SchemafigError>),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}
