//! Purpose: Convert registry YAML sources into pretty-printed JSON siblings.
//! Exports: `ConvertOptions`, `RunReport`, `convert_registry`, `convert_file`, `yaml_to_json`.
//! Role: Core batch pass behind the CLI; per-file failures never abort the run.
//! Invariants: Files are processed in `REGISTRY_FILES` order.
//! Invariants: Destinations are whole-file overwrites with 2-space indentation.
//! Invariants: Check mode performs the full parse/convert pass without writing.

use std::error::Error as StdError;
use std::path::Path;

use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use tracing::{debug, warn};

use crate::core::error::{Error, ErrorKind};
use crate::core::registry::{REGISTRY_FILES, RegistryFile};

#[derive(Copy, Clone, Debug, Default)]
pub struct ConvertOptions {
    /// Parse and convert without writing any destination file.
    pub check: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub converted: Vec<String>,
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One full pass over the fixed registry file table.
///
/// Missing sources, parse failures, and I/O failures are recorded per file;
/// the remaining files are still attempted.
pub fn convert_registry(dir: &Path, options: ConvertOptions) -> RunReport {
    let mut report = RunReport::default();
    for file in REGISTRY_FILES {
        let source = file.source_path(dir);
        if !source.exists() {
            warn!(path = %source.display(), "registry source missing");
            report
                .errors
                .push(format!("YAML file not found: {}", source.display()));
            continue;
        }
        match convert_file(file, dir, options) {
            Ok(()) => {
                debug!(file = file.source, check = options.check, "converted");
                report.converted.push(file.source.to_string());
            }
            Err(err) => {
                warn!(file = file.source, error = %err, "conversion failed");
                report.errors.push(format!(
                    "Error converting {}: {}",
                    file.source,
                    failure_text(&err)
                ));
            }
        }
    }
    report
}

/// Convert one registry file: read, parse, resolve merge keys, map to JSON,
/// pretty-print, overwrite the destination.
pub fn convert_file(file: &RegistryFile, dir: &Path, options: ConvertOptions) -> Result<(), Error> {
    let source = file.source_path(dir);
    let text = std::fs::read_to_string(&source).map_err(|err| {
        Error::new(io_error_kind(&err))
            .with_message("failed to read registry source")
            .with_path(&source)
            .with_source(err)
    })?;

    let mut value: YamlValue = serde_yaml::from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("invalid YAML")
            .with_path(&source)
            .with_source(err)
    })?;
    value.apply_merge().map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("unresolvable merge key")
            .with_path(&source)
            .with_source(err)
    })?;

    let json = yaml_to_json(value)?;
    let body = serde_json::to_string_pretty(&json).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to serialize JSON")
            .with_path(&source)
            .with_source(err)
    })?;

    if options.check {
        debug!(file = file.source, "check mode, skipping write");
        return Ok(());
    }

    let dest = file.dest_path(dir);
    std::fs::write(&dest, body).map_err(|err| {
        Error::new(io_error_kind(&err))
            .with_message("failed to write JSON destination")
            .with_path(&dest)
            .with_source(err)
    })?;
    Ok(())
}

/// Map a parsed YAML value onto the JSON value model.
///
/// Scalar mapping keys are coerced to strings (numbers to their decimal
/// rendering, `true`/`false`, `null`); sequence or mapping keys, YAML tags,
/// and non-finite floats have no JSON representation and fail the file.
pub fn yaml_to_json(value: YamlValue) -> Result<JsonValue, Error> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(value) => Ok(JsonValue::Bool(value)),
        YamlValue::Number(number) => number_to_json(&number),
        YamlValue::String(value) => Ok(JsonValue::String(value)),
        YamlValue::Sequence(items) => items
            .into_iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        YamlValue::Mapping(mapping) => {
            let mut object = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_to_string(key)?, yaml_to_json(value)?);
            }
            Ok(JsonValue::Object(object))
        }
        YamlValue::Tagged(tagged) => Err(Error::new(ErrorKind::Parse)
            .with_message(format!("unsupported YAML tag {}", tagged.tag))),
    }
}

fn key_to_string(key: YamlValue) -> Result<String, Error> {
    match key {
        YamlValue::String(key) => Ok(key),
        YamlValue::Bool(key) => Ok(key.to_string()),
        YamlValue::Number(key) => Ok(key.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) | YamlValue::Tagged(_) => {
            Err(Error::new(ErrorKind::Parse)
                .with_message("mapping key must be a scalar to become a JSON object key"))
        }
    }
}

fn number_to_json(number: &serde_yaml::Number) -> Result<JsonValue, Error> {
    if let Some(value) = number.as_i64() {
        return Ok(JsonValue::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Ok(JsonValue::from(value));
    }
    let float = number.as_f64().unwrap_or(f64::NAN);
    serde_json::Number::from_f64(float)
        .map(JsonValue::Number)
        .ok_or_else(|| {
            Error::new(ErrorKind::Parse)
                .with_message(format!("number {number} has no JSON representation"))
        })
}

fn io_error_kind(err: &std::io::Error) -> ErrorKind {
    match err.kind() {
        std::io::ErrorKind::NotFound => ErrorKind::NotFound,
        std::io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    }
}

// Report strings carry the message plus the cause chain, not the kind prefix.
fn failure_text(err: &Error) -> String {
    let mut text = err.message().unwrap_or("conversion failed").to_string();
    let mut cause = err.source();
    while let Some(source) = cause {
        text.push_str(": ");
        text.push_str(&source.to_string());
        cause = source.source();
    }
    text
}
