// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::environment::DeploymentStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NsVendError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to decode environment spec: {0}")]
    SpecDecode(String),

    #[error(
        "Environment \"{environment}\" was stuck in a deployment state ({status}) longer than acceptable. Please investigate."
    )]
    StuckDeployment {
        environment: String,
        status: DeploymentStatus,
    },

    #[error("Deployment of environment \"{environment}\" ended with status {status}")]
    DeploymentFailed {
        environment: String,
        status: DeploymentStatus,
    },

    #[error(
        "Environment \"{environment}\" did not reach a stable state after {attempts} attempts (last status: {last_status})"
    )]
    DeploymentTimeout {
        environment: String,
        attempts: u32,
        last_status: DeploymentStatus,
    },

    #[error("Environment not found: {0}")]
    NotFound(String),

    #[error("Control plane error: {0}")]
    ServiceError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for NsVendError {
    fn from(e: serde_yaml::Error) -> Self {
        NsVendError::SpecDecode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NsVendError>;
