// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Decoding and re-encoding of environment specifications

use crate::error::{NsVendError, Result};
use serde_yaml::{Mapping, Value};
use tracing::warn;

const SPEC_KEY: &str = "spec";
const NAMESPACES_KEY: &str = "namespaces";

/// A decoded environment specification.
///
/// The whole document is kept as a YAML value so that every field other
/// than `spec.namespaces` survives a decode/encode cycle untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct SpecDocument {
    root: Value,
    namespaces: Vec<String>,
}

impl SpecDocument {
    /// Parse a YAML specification and extract its namespace list
    pub fn decode(blob: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(blob)?;

        let Some(root_map) = root.as_mapping() else {
            return Err(NsVendError::SpecDecode(
                "document root is not a mapping".to_string(),
            ));
        };

        let Some(spec) = root_map.get(SPEC_KEY) else {
            return Err(NsVendError::SpecDecode(format!(
                "document has no '{}' field",
                SPEC_KEY
            )));
        };

        let Some(spec) = spec.as_mapping() else {
            return Err(NsVendError::SpecDecode(format!(
                "'{}' field is not a mapping",
                SPEC_KEY
            )));
        };

        let namespaces = match spec.get(NAMESPACES_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => parse_namespaces(value)?,
        };

        Ok(Self { root, namespaces })
    }

    /// Namespace names in document order, without duplicates
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// Serialize the document with `spec.namespaces` replaced by `namespaces`
    pub fn encode(&self, namespaces: &[String]) -> Result<String> {
        let mut root = self.root.clone();

        let spec = root
            .as_mapping_mut()
            .and_then(|m| m.get_mut(SPEC_KEY))
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| {
                NsVendError::SpecDecode(format!("'{}' field is not a mapping", SPEC_KEY))
            })?;

        let sequence = namespaces
            .iter()
            .map(|ns| Value::String(ns.clone()))
            .collect();
        set_field(spec, NAMESPACES_KEY, Value::Sequence(sequence));

        serde_yaml::to_string(&root)
            .map_err(|e| NsVendError::SpecDecode(format!("Failed to encode spec: {}", e)))
    }
}

fn parse_namespaces(value: &Value) -> Result<Vec<String>> {
    let Some(items) = value.as_sequence() else {
        return Err(NsVendError::SpecDecode(format!(
            "'{}.{}' is not a sequence",
            SPEC_KEY, NAMESPACES_KEY
        )));
    };

    let mut namespaces: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let Some(name) = item.as_str() else {
            return Err(NsVendError::SpecDecode(format!(
                "'{}.{}' contains a non-string entry: {:?}",
                SPEC_KEY, NAMESPACES_KEY, item
            )));
        };

        if namespaces.iter().any(|ns| ns == name) {
            warn!("Duplicate namespace '{}' in environment spec, ignoring", name);
            continue;
        }
        namespaces.push(name.to_string());
    }

    Ok(namespaces)
}

// Replaces in place so the key keeps its position among its siblings.
fn set_field(map: &mut Mapping, key: &str, value: Value) {
    match map.get_mut(key) {
        Some(existing) => *existing = value,
        None => {
            map.insert(Value::String(key.to_string()), value);
        }
    }
}
