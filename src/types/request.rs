// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{NsVendError, Result};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceAction {
    Create,
    Delete,
}

/// Progress label shown while the environment is updated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ReconcileLabel {
    Creating,
    Deleting,
    Updating,
}

impl fmt::Display for ReconcileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReconcileLabel::Creating => "Creating",
            ReconcileLabel::Deleting => "Deleting",
            ReconcileLabel::Updating => "Updating",
        };
        f.write_str(label)
    }
}

/// A single add/remove namespace request against one environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconciliationRequest {
    pub namespace: String,
    pub environment: String,
    pub action: NamespaceAction,
}

impl ReconciliationRequest {
    pub fn new(
        namespace: impl Into<String>,
        environment: impl Into<String>,
        action: NamespaceAction,
    ) -> Result<Self> {
        let namespace = namespace.into();
        let environment = environment.into();

        if namespace.trim().is_empty() {
            return Err(NsVendError::InvalidRequest(
                "namespace name must not be empty".to_string(),
            ));
        }
        if environment.trim().is_empty() {
            return Err(NsVendError::InvalidRequest(
                "environment name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            namespace,
            environment,
            action,
        })
    }
}
