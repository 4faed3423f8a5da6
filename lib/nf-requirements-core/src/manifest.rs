//! Manifest parsing for DataNetwork resources

use crate::{CoreError, Result};
use kube::{Resource, ResourceExt};
use nf_requirements_api::DataNetwork;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Read a manifest file and return the DataNetworks it declares
pub fn load_data_networks(path: impl AsRef<Path>) -> Result<Vec<DataNetwork>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let networks = parse_data_networks(&text)?;
    debug!("Loaded {} DataNetworks from {}", networks.len(), path.display());
    Ok(networks)
}

/// Parse a (possibly multi-document) YAML or JSON stream.
///
/// Documents of any other kind are skipped. A DataNetwork document without
/// a spec loads with an empty one; a document that does not match the
/// schema is an error.
pub fn parse_data_networks(text: &str) -> Result<Vec<DataNetwork>> {
    let api_version = DataNetwork::api_version(&());
    let kind = DataNetwork::kind(&());
    let mut networks = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let mut value = Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }

        let doc_api_version = value.get("apiVersion").and_then(Value::as_str);
        let doc_kind = value.get("kind").and_then(Value::as_str);
        if doc_api_version != Some(&*api_version) || doc_kind != Some(&*kind) {
            debug!(
                "Skipping document {}: {}/{}",
                index,
                doc_api_version.unwrap_or("<none>"),
                doc_kind.unwrap_or("<none>")
            );
            continue;
        }

        if let Value::Mapping(map) = &mut value {
            if map.get("spec").map_or(true, Value::is_null) {
                map.insert(Value::from("spec"), Value::Mapping(Mapping::new()));
            }
        }

        let network: DataNetwork = serde_yaml::from_value(value).map_err(|e| {
            CoreError::InvalidManifest(format!("document {}: {}", index, e))
        })?;
        debug!(
            "Parsed DataNetwork {}/{}",
            network.namespace().unwrap_or_default(),
            network.name_any()
        );
        networks.push(network);
    }

    Ok(networks)
}
