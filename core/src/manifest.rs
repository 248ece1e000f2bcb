use chemanager_api::constants::{API_VERSION, CHE_MANAGER_CRD_KIND};
use chemanager_api::v1alpha1::CheManager;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::io::{Read, Write};
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Expected che.eclipse.org/v1alpha1 CheManager, found {api_version:?} {kind:?}")]
    UnexpectedType { api_version: String, kind: String },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to write manifest as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write manifest as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Reads a single `CheManager` document. JSON input is accepted since it is
/// valid YAML.
#[instrument(skip(reader))]
pub fn read_manifest(reader: impl Read) -> Result<CheManager, ReadError> {
    let document = serde_yaml::from_reader::<_, Value>(reader)
        .inspect_err(|e| warn!("Failed to parse manifest: {}", e))?;

    decode(document).inspect(|manager| debug!("Read CheManager {:?}", manager.metadata.name))
}

/// Reads every `CheManager` from a multi-document YAML stream. Empty
/// documents are skipped.
#[instrument(skip(reader))]
pub fn read_manifests(mut reader: impl Read) -> Result<Vec<CheManager>, ReadError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .inspect_err(|e| warn!("Failed to read manifests: {}", e))?;

    let mut managers = Vec::new();
    for document in serde_yaml::Deserializer::from_str(&content) {
        let value = Value::deserialize(document)
            .inspect_err(|e| warn!("Failed to parse manifest document: {}", e))?;
        if value.is_null() {
            continue;
        }
        managers.push(decode(value)?);
    }

    debug!("Read {} CheManager manifest(s)", managers.len());
    Ok(managers)
}

#[instrument(skip(manager, writer))]
pub fn write_manifest(
    manager: &CheManager,
    writer: impl Write,
    format: Format,
) -> Result<(), WriteError> {
    match format {
        Format::Json => serde_json::to_writer_pretty(writer, manager)
            .inspect_err(|e| warn!("Failed to write manifest: {}", e))?,
        Format::Yaml => serde_yaml::to_writer(writer, manager)
            .inspect_err(|e| warn!("Failed to write manifest: {}", e))?,
    }
    Ok(())
}

fn decode(mut document: Value) -> Result<CheManager, ReadError> {
    let field = |name: &str| {
        document
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let api_version = field("apiVersion");
    let kind = field("kind");

    if api_version != API_VERSION || kind != CHE_MANAGER_CRD_KIND {
        warn!("Expected a CheManager, found {:?} {:?}", api_version, kind);
        return Err(ReadError::UnexpectedType { api_version, kind });
    }

    // Every spec field is optional, so a missing or null spec is an empty one.
    if let Some(mapping) = document.as_mapping_mut() {
        if mapping.get("spec").is_none_or(Value::is_null) {
            mapping.insert(Value::from("spec"), Value::Mapping(Mapping::new()));
        }
    }

    Ok(serde_yaml::from_value(document)
        .inspect_err(|e| warn!("Invalid CheManager manifest: {}", e))?)
}
