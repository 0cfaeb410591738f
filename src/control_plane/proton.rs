// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! AWS Proton backed control plane

use crate::config::Config;
use crate::control_plane::ControlPlane;
use crate::error::{NsVendError, Result};
use crate::types::{DeploymentOutput, DeploymentStatus, Environment, NotifyStatus};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_proton::error::DisplayErrorContext;
use aws_sdk_proton::types::{DeploymentUpdateType, Output, ResourceDeploymentStatus};
use aws_sdk_proton::Client;
use tracing::{debug, info, instrument};

#[derive(Clone, Debug)]
pub struct ProtonControlPlane {
    client: Client,
}

impl ProtonControlPlane {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS credential and region chain
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_proton::config::Builder::from(&sdk_config);

        if let Some(endpoint) = &config.endpoint_url {
            info!("Using Proton endpoint override {}", endpoint);
            builder = builder.endpoint_url(endpoint.as_str());
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ControlPlane for ProtonControlPlane {
    #[instrument(skip(self))]
    async fn get_environment(&self, name: &str) -> Result<Environment> {
        let output = self
            .client
            .get_environment()
            .name(name)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_resource_not_found_exception());
                if not_found {
                    NsVendError::NotFound(name.to_string())
                } else {
                    NsVendError::ServiceError(format!(
                        "Failed to get environment {}: {}",
                        name,
                        DisplayErrorContext(&e)
                    ))
                }
            })?;

        let Some(environment) = output.environment() else {
            return Err(NsVendError::NotFound(name.to_string()));
        };

        let deployment_status = DeploymentStatus::from(environment.deployment_status().as_str());
        debug!("Environment {} has status {}", name, deployment_status);

        Ok(Environment {
            name: name.to_string(),
            deployment_status,
            spec: environment.spec().map(str::to_string),
        })
    }

    #[instrument(skip(self, spec))]
    async fn update_environment(
        &self,
        name: &str,
        spec: &str,
        deployment_type: &str,
        description: &str,
    ) -> Result<()> {
        self.client
            .update_environment()
            .name(name)
            .spec(spec)
            .deployment_type(DeploymentUpdateType::from(deployment_type))
            .description(description)
            .send()
            .await
            .map_err(|e| {
                NsVendError::ServiceError(format!(
                    "Failed to update environment {}: {}",
                    name,
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(())
    }

    #[instrument(skip(self, outputs))]
    async fn notify_outcome(
        &self,
        resource_id: &str,
        outputs: &[DeploymentOutput],
        status: NotifyStatus,
    ) -> Result<()> {
        let outputs = outputs
            .iter()
            .map(|o| Output::builder().key(&o.key).value_string(&o.value).build())
            .collect();

        let status = match status {
            NotifyStatus::InProgress => ResourceDeploymentStatus::InProgress,
            NotifyStatus::Failed => ResourceDeploymentStatus::Failed,
            NotifyStatus::Succeeded => ResourceDeploymentStatus::Succeeded,
        };

        self.client
            .notify_resource_deployment_status_change()
            .resource_arn(resource_id)
            .set_outputs(Some(outputs))
            .status(status)
            .send()
            .await
            .map_err(|e| {
                NsVendError::ServiceError(format!(
                    "Failed to notify deployment status for {}: {}",
                    resource_id,
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(())
    }
}
