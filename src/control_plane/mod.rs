// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Access to the control plane that owns environments.

pub mod proton;

use crate::error::Result;
use crate::types::{DeploymentOutput, Environment, NotifyStatus};
use async_trait::async_trait;

pub use proton::ProtonControlPlane;

/// Operations the update flow needs from the environment control plane
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Fetch the current state of an environment
    async fn get_environment(&self, name: &str) -> Result<Environment>;

    /// Submit a new specification for an environment
    async fn update_environment(
        &self,
        name: &str,
        spec: &str,
        deployment_type: &str,
        description: &str,
    ) -> Result<()>;

    /// Report the outcome of a provisioning request
    async fn notify_outcome(
        &self,
        resource_id: &str,
        outputs: &[DeploymentOutput],
        status: NotifyStatus,
    ) -> Result<()>;
}
