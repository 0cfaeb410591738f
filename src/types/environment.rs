// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment status as reported by the control plane.
///
/// Only the busy/not-busy partition matters to the update flow; labels the
/// control plane adds later end up in `Unknown` and count as not busy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeploymentStatus {
    Succeeded,
    Failed,
    InProgress,
    DeleteInProgress,
    DeleteComplete,
    Cancelling,
    Cancelled,
    Active,
    Unknown(String),
}

impl DeploymentStatus {
    pub const ALL: [DeploymentStatus; 8] = [
        DeploymentStatus::Succeeded,
        DeploymentStatus::Failed,
        DeploymentStatus::InProgress,
        DeploymentStatus::DeleteInProgress,
        DeploymentStatus::DeleteComplete,
        DeploymentStatus::Cancelling,
        DeploymentStatus::Cancelled,
        DeploymentStatus::Active,
    ];

    /// Statuses in which the environment must not be mutated
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            DeploymentStatus::InProgress
                | DeploymentStatus::DeleteInProgress
                | DeploymentStatus::DeleteComplete
                | DeploymentStatus::Cancelling
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeploymentStatus::Succeeded => "SUCCEEDED",
            DeploymentStatus::Failed => "FAILED",
            DeploymentStatus::InProgress => "IN_PROGRESS",
            DeploymentStatus::DeleteInProgress => "DELETE_IN_PROGRESS",
            DeploymentStatus::DeleteComplete => "DELETE_COMPLETE",
            DeploymentStatus::Cancelling => "CANCELLING",
            DeploymentStatus::Cancelled => "CANCELLED",
            DeploymentStatus::Active => "ACTIVE",
            DeploymentStatus::Unknown(label) => label,
        }
    }
}

impl From<&str> for DeploymentStatus {
    fn from(label: &str) -> Self {
        match label {
            "SUCCEEDED" => DeploymentStatus::Succeeded,
            "FAILED" => DeploymentStatus::Failed,
            "IN_PROGRESS" => DeploymentStatus::InProgress,
            "DELETE_IN_PROGRESS" => DeploymentStatus::DeleteInProgress,
            "DELETE_COMPLETE" => DeploymentStatus::DeleteComplete,
            "CANCELLING" => DeploymentStatus::Cancelling,
            "CANCELLED" => DeploymentStatus::Cancelled,
            "ACTIVE" => DeploymentStatus::Active,
            other => DeploymentStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for DeploymentStatus {
    fn from(label: String) -> Self {
        DeploymentStatus::from(label.as_str())
    }
}

impl From<DeploymentStatus> for String {
    fn from(status: DeploymentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a remote environment. Fetched fresh for every decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub name: String,
    pub deployment_status: DeploymentStatus,
    /// Raw YAML specification, if the environment has one
    pub spec: Option<String>,
}

/// Status reported back to the control plane after provisioning
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotifyStatus {
    InProgress,
    Failed,
    Succeeded,
}

/// Named output attached to a deployment notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeploymentOutput {
    pub key: String,
    pub value: String,
}

impl DeploymentOutput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
