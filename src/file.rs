//! The document source: seed a record from a TOML file.
//!
//! This is deliberately thin glue. The file becomes the record's starting
//! state via ordinary serde deserialization, and the resolution engine then
//! overlays env/flag/default values on top. Record types use
//! `#[serde(default)]` so sparse documents only set the keys they name.
//!
//! In strict mode (the default), keys that the record type does not consume
//! are reported with the file path and a best-effort line number — typos
//! fail loudly instead of silently configuring nothing.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::SchemafigError;

/// Read and deserialize `path` into a fresh record of type `S`.
pub fn read_document<S: DeserializeOwned>(
    path: &Path,
    strict: bool,
) -> Result<S, SchemafigError> {
    let content = fs::read_to_string(path).map_err(|source| SchemafigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, path, strict)
}

/// Deserialize TOML `content`, collecting keys the record type ignores.
/// `path` is only used for error reporting.
pub(crate) fn parse_document<S: DeserializeOwned>(
    content: &str,
    path: &Path,
    strict: bool,
) -> Result<S, SchemafigError> {
    let mut unknown: Vec<String> = Vec::new();

    let deserializer = toml::Deserializer::new(content);
    let record: S = serde_ignored::deserialize(deserializer, |ignored| {
        unknown.push(ignored.to_string());
    })
    .map_err(|source| SchemafigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;

    if strict && !unknown.is_empty() {
        let errors = unknown
            .into_iter()
            .map(|key| {
                let line = key_line(content, &key);
                SchemafigError::UnknownKey {
                    key,
                    path: path.to_path_buf(),
                    line,
                }
            })
            .collect();
        return Err(SchemafigError::UnknownKeys(errors));
    }

    Ok(record)
}

/// Best-effort 1-indexed line number for a dotted key. Tracks `[section]`
/// headers while scanning so a leaf name is only matched inside the right
/// section. Quoted keys and inline tables are not handled; returns 0 when
/// the key cannot be located.
fn key_line(content: &str, dotted_key: &str) -> usize {
    let mut expected: Vec<&str> = dotted_key.split('.').collect();
    let leaf = expected.pop().unwrap_or(dotted_key);

    let mut section: Vec<&str> = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if !trimmed.starts_with("[[")
            && let Some(header) = trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
        {
            section = header.split('.').map(str::trim).collect();
            continue;
        }

        if section == expected
            && let Some(rest) = trimmed.strip_prefix(leaf)
            && rest.trim_start().starts_with('=')
        {
            return idx + 1;
        }
    }
    0
}
