// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Drives one namespace request through fetch, reconcile, gate, submit and notify.

use crate::config::Config;
use crate::constants::{outputs as output_keys, update};
use crate::control_plane::ControlPlane;
use crate::deployment::{DeploymentGate, OnFailed};
use crate::error::{NsVendError, Result};
use crate::kubernetes::kubectl_command;
use crate::reconcilers::reconcile;
use crate::spec::SpecDocument;
use crate::types::{
    DeploymentOutput, NamespaceAction, NotifyStatus, ReconcileLabel, ReconciliationRequest,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument};

/// Phases of a single update run, in order.
///
/// `Blocked` and `Done` are terminal; `Blocked` is entered instead of
/// `Submitting` when the environment is stuck in a busy state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdatePhase {
    Fetching,
    Reconciling,
    AwaitingPreUpdate,
    Blocked,
    Submitting,
    AwaitingPostUpdate,
    Notifying,
    Done,
}

impl UpdatePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UpdatePhase::Blocked | UpdatePhase::Done)
    }
}

impl fmt::Display for UpdatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Summary of a completed run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateOutcome {
    pub environment: String,
    pub namespace: String,
    pub action: NamespaceAction,
    pub label: ReconcileLabel,
    pub namespaces: Vec<String>,
    /// False only when an unchanged list was skipped
    pub submitted: bool,
    pub outputs: Vec<DeploymentOutput>,
}

pub struct EnvironmentUpdater<C> {
    control_plane: C,
    config: Config,
}

impl<C: ControlPlane> EnvironmentUpdater<C> {
    pub fn new(control_plane: C, config: Config) -> Self {
        Self {
            control_plane,
            config,
        }
    }

    #[instrument(skip(self, request), fields(environment = %request.environment, namespace = %request.namespace))]
    pub async fn run(&self, request: &ReconciliationRequest) -> Result<UpdateOutcome> {
        let env_name = request.environment.as_str();
        let namespace = request.namespace.as_str();

        // Checked up front so a missing identifier never leaves a deployed update unreported
        let resource_arn = match request.action {
            NamespaceAction::Create => Some(self.config.resource_arn.as_deref().ok_or_else(|| {
                NsVendError::Config(
                    "RESOURCE_ARN must be set to report a created namespace".to_string(),
                )
            })?),
            NamespaceAction::Delete => None,
        };

        enter(UpdatePhase::Fetching);
        let environment = self.control_plane.get_environment(env_name).await?;
        let Some(blob) = environment.spec.as_deref() else {
            return Err(NsVendError::SpecDecode(format!(
                "environment {} has no spec",
                env_name
            )));
        };
        let document = SpecDocument::decode(blob)?;

        enter(UpdatePhase::Reconciling);
        let reconciliation = reconcile(document.namespaces(), namespace, request.action)?;
        let new_spec = document.encode(&reconciliation.namespaces)?;

        info!("{}", progress_message(reconciliation.label, namespace, env_name));

        let submitted = if reconciliation.no_op && self.config.skip_unchanged {
            info!(
                "Namespace list for environment \"{}\" is unchanged, skipping update",
                env_name
            );
            false
        } else {
            self.submit(env_name, &new_spec).await?;
            true
        };

        let outputs = match resource_arn {
            Some(resource_arn) => {
                enter(UpdatePhase::Notifying);
                let outputs = vec![
                    DeploymentOutput::new(output_keys::NAMESPACE_NAME, namespace),
                    DeploymentOutput::new(
                        output_keys::KUBECTL_CONFIGURATION,
                        kubectl_command(&self.config.kube_access),
                    ),
                ];
                self.control_plane
                    .notify_outcome(resource_arn, &outputs, NotifyStatus::Succeeded)
                    .await?;
                outputs
            }
            None => {
                info!("Complete");
                Vec::new()
            }
        };

        enter(UpdatePhase::Done);
        Ok(UpdateOutcome {
            environment: env_name.to_string(),
            namespace: namespace.to_string(),
            action: request.action,
            label: reconciliation.label,
            namespaces: reconciliation.namespaces,
            submitted,
            outputs,
        })
    }

    /// Wait for quiescence, re-check, submit and wait for the deployment to settle
    async fn submit(&self, env_name: &str, spec: &str) -> Result<()> {
        let gate = DeploymentGate::new(&self.control_plane, self.config.poll);

        let pre_update = if self.config.update_failed {
            OnFailed::Proceed
        } else {
            OnFailed::Abort
        };

        enter(UpdatePhase::AwaitingPreUpdate);
        gate.await_converged(env_name, pre_update).await?;
        if let Err(e) = gate.check_not_busy(env_name).await {
            if matches!(e, NsVendError::StuckDeployment { .. }) {
                enter(UpdatePhase::Blocked);
            }
            return Err(e);
        }

        enter(UpdatePhase::Submitting);
        self.control_plane
            .update_environment(env_name, spec, update::DEPLOYMENT_TYPE, update::DESCRIPTION)
            .await?;

        // A failed rollout of our own update is never reported as success
        enter(UpdatePhase::AwaitingPostUpdate);
        gate.await_converged(env_name, OnFailed::Abort).await?;
        info!("Deployment complete!");

        Ok(())
    }
}

/// Human readable summary of what is about to happen to the environment
pub fn progress_message(label: ReconcileLabel, namespace: &str, environment: &str) -> String {
    format!(
        "{} \"{}\" namespace for environment \"{}\"",
        label, namespace, environment
    )
}

fn enter(phase: UpdatePhase) {
    debug!(%phase, "Entering phase");
}
