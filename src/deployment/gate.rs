// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Guards environment mutation on the remote deployment status.

use crate::constants::poll::{DELAY_SECS, MAX_ATTEMPTS};
use crate::control_plane::ControlPlane;
use crate::error::{NsVendError, Result};
use crate::types::DeploymentStatus;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// How often and how long to poll for a converged deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub delay: Duration,
    pub max_attempts: u32,
}

impl PollSettings {
    /// A zero attempt budget still polls once.
    pub fn new(delay: Duration, max_attempts: u32) -> Self {
        Self {
            delay,
            max_attempts: max_attempts.max(1),
        }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::new(Duration::from_secs(DELAY_SECS), MAX_ATTEMPTS)
    }
}

/// What a wait does when the environment reports a failed deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailed {
    Abort,
    /// Treat the failed deployment as settled so a new update can replace it
    Proceed,
}

pub struct DeploymentGate<'a, C: ?Sized> {
    client: &'a C,
    poll: PollSettings,
}

impl<'a, C: ControlPlane + ?Sized> DeploymentGate<'a, C> {
    pub fn new(client: &'a C, poll: PollSettings) -> Self {
        Self { client, poll }
    }

    /// Poll the environment until its deployment has succeeded.
    ///
    /// `FAILED` ends the wait with `DeploymentFailed` unless `on_failed` is
    /// `OnFailed::Proceed`. Every other status is polled again until the
    /// attempt budget is spent, which fails with `DeploymentTimeout`.
    /// Errors from the control plane are returned as-is.
    #[instrument(skip(self))]
    pub async fn await_converged(
        &self,
        environment: &str,
        on_failed: OnFailed,
    ) -> Result<DeploymentStatus> {
        info!("Checking/waiting for available status for environment");

        let mut attempt = 0;
        loop {
            attempt += 1;
            let status = self.client.get_environment(environment).await?.deployment_status;

            match status {
                DeploymentStatus::Succeeded => {
                    debug!(
                        "Environment {} deployed after {} attempt(s)",
                        environment, attempt
                    );
                    info!("Waiting complete");
                    return Ok(status);
                }
                DeploymentStatus::Failed if on_failed == OnFailed::Proceed => {
                    warn!(
                        "Environment {} last deployment failed, proceeding with update",
                        environment
                    );
                    info!("Waiting complete");
                    return Ok(status);
                }
                DeploymentStatus::Failed => {
                    return Err(NsVendError::DeploymentFailed {
                        environment: environment.to_string(),
                        status,
                    });
                }
                _ => {}
            }

            if attempt >= self.poll.max_attempts {
                warn!(
                    "Environment {} still {} after {} attempts, giving up",
                    environment, status, attempt
                );
                return Err(NsVendError::DeploymentTimeout {
                    environment: environment.to_string(),
                    attempts: attempt,
                    last_status: status,
                });
            }

            debug!(
                "Environment {} is {}, polling again in {:?} ({}/{})",
                environment, status, self.poll.delay, attempt, self.poll.max_attempts
            );
            sleep(self.poll.delay).await;
        }
    }

    /// Fail with `StuckDeployment` if the environment is busy right now.
    ///
    /// Runs right after `await_converged`, so a busy status here is never
    /// treated as transient. This is the only place the busy partition is used.
    #[instrument(skip(self))]
    pub async fn check_not_busy(&self, environment: &str) -> Result<DeploymentStatus> {
        let status = self.client.get_environment(environment).await?.deployment_status;

        if status.is_busy() {
            return Err(NsVendError::StuckDeployment {
                environment: environment.to_string(),
                status,
            });
        }

        Ok(status)
    }
}
