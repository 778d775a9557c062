//! Version-gated schema migrations for stored JSON.
//!
//! Each step is a pure transform on the JSON tree, applied only while the
//! stored version is below the step's target.
//!
//! Homebrew records:
//! - v0 -> v1: every `index` key becomes `id`, at any depth
//! - v1 -> v2: `resourceType` goes from the API path string to the ordinal
//!
//! Player character bank:
//! - v0 -> v1: the `index` -> `id` rename, applied to each entry's character

use serde_json::{Map, Value};

use charsmith_domain::ResourceType;
use charsmith_shared::records::{StoredResourceType, CURRENT_RECORD_VERSION};

use crate::infrastructure::ports::UpgradeError;

pub const CURRENT_BANK_VERSION: u32 = 1;

const VERSION: &str = "version";

/// Upgrade one homebrew record. `None` when it is already current.
pub fn upgrade_record(key: &str, mut value: Value) -> Result<Option<Value>, UpgradeError> {
    let version = read_version(key, &value)?;
    if version > CURRENT_RECORD_VERSION {
        return Err(UpgradeError::UnsupportedVersion {
            found: version,
            supported: CURRENT_RECORD_VERSION,
        });
    }
    if version == CURRENT_RECORD_VERSION {
        return Ok(None);
    }

    if version < 1 {
        rename_index_keys(&mut value);
    }
    if version < 2 {
        convert_resource_type(key, &mut value)?;
    }
    set_version(key, &mut value, CURRENT_RECORD_VERSION)?;

    tracing::debug!(key, from = version, to = CURRENT_RECORD_VERSION, "Record upgraded");
    Ok(Some(value))
}

/// Upgrade the player character bank. `None` when it is already current.
pub fn upgrade_player_character_bank(
    key: &str,
    mut value: Value,
) -> Result<Option<Value>, UpgradeError> {
    let version = read_version(key, &value)?;
    if version > CURRENT_BANK_VERSION {
        return Err(UpgradeError::UnsupportedVersion {
            found: version,
            supported: CURRENT_BANK_VERSION,
        });
    }
    if version == CURRENT_BANK_VERSION {
        return Ok(None);
    }

    if let Some(entries) = value.get_mut("entries").and_then(Value::as_array_mut) {
        for entry in entries {
            if let Some(character) = entry.get_mut("character") {
                rename_index_keys(character);
            }
        }
    }
    set_version(key, &mut value, CURRENT_BANK_VERSION)?;

    tracing::debug!(key, from = version, to = CURRENT_BANK_VERSION, "Bank upgraded");
    Ok(Some(value))
}

fn read_version(key: &str, value: &Value) -> Result<u32, UpgradeError> {
    let object = value
        .as_object()
        .ok_or_else(|| UpgradeError::malformed(key, "expected a JSON object"))?;
    match object.get(VERSION) {
        None | Some(Value::Null) => Ok(0),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| UpgradeError::malformed(key, format!("invalid version {v}"))),
    }
}

fn set_version(key: &str, value: &mut Value, version: u32) -> Result<(), UpgradeError> {
    let object = value
        .as_object_mut()
        .ok_or_else(|| UpgradeError::malformed(key, "expected a JSON object"))?;
    object.insert(VERSION.to_string(), Value::from(version));
    Ok(())
}

/// Rename every `index` key to `id`, recursively. An existing `id` wins.
pub fn rename_index_keys(value: &mut Value) {
    match value {
        Value::Object(object) => {
            if let Some(index) = object.remove("index") {
                object.entry("id").or_insert(index);
            }
            for child in object.values_mut() {
                rename_index_keys(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                rename_index_keys(item);
            }
        }
        _ => {}
    }
}

fn convert_resource_type(key: &str, value: &mut Value) -> Result<(), UpgradeError> {
    let object: &mut Map<String, Value> = value
        .as_object_mut()
        .ok_or_else(|| UpgradeError::malformed(key, "expected a JSON object"))?;

    let Some(raw) = object.get("resourceType") else {
        return Err(UpgradeError::malformed(key, "missing resourceType"));
    };
    let stored: StoredResourceType = serde_json::from_value(raw.clone())
        .map_err(|e| UpgradeError::malformed(key, e))?;
    let resource_type: ResourceType = stored
        .resolve()
        .ok_or_else(|| UpgradeError::unknown_resource_type(&stored))?;

    object.insert(
        "resourceType".to_string(),
        Value::from(resource_type.ordinal()),
    );
    Ok(())
}
