// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for scripting control plane responses.

use crate::control_plane::ControlPlane;
use crate::error::{NsVendError, Result};
use crate::types::{DeploymentOutput, DeploymentStatus, Environment, NotifyStatus};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A recorded `update_environment` call
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedUpdate {
    pub name: String,
    pub spec: String,
    pub deployment_type: String,
    pub description: String,
}

/// A recorded `notify_outcome` call
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedNotification {
    pub resource_id: String,
    pub outputs: Vec<DeploymentOutput>,
    pub status: NotifyStatus,
}

#[derive(Default)]
struct State {
    spec: Option<String>,
    /// Statuses handed out by successive `get_environment` calls
    statuses: VecDeque<DeploymentStatus>,
    fallback_status: Option<DeploymentStatus>,
    get_count: usize,
    fail_update: bool,
    updates: Vec<RecordedUpdate>,
    notifications: Vec<RecordedNotification>,
    /// Call log in order, e.g. `get`, `update`, `notify`
    calls: Vec<&'static str>,
}

/// An in-memory control plane holding a single environment.
#[derive(Clone)]
pub struct FakeControlPlane {
    name: String,
    state: Arc<Mutex<State>>,
}

impl FakeControlPlane {
    /// Environment `name` with `spec` that always reports `status`
    pub fn new(name: &str, spec: &str, status: DeploymentStatus) -> Self {
        Self {
            name: name.to_string(),
            state: Arc::new(Mutex::new(State {
                spec: Some(spec.to_string()),
                fallback_status: Some(status),
                ..Default::default()
            })),
        }
    }

    /// Report these statuses first, then fall back to the default status
    pub fn with_statuses(self, statuses: impl IntoIterator<Item = DeploymentStatus>) -> Self {
        self.state.lock().unwrap().statuses.extend(statuses);
        self
    }

    pub fn without_spec(self) -> Self {
        self.state.lock().unwrap().spec = None;
        self
    }

    pub fn failing_updates(self) -> Self {
        self.state.lock().unwrap().fail_update = true;
        self
    }

    pub fn get_count(&self) -> usize {
        self.state.lock().unwrap().get_count
    }

    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.state.lock().unwrap().updates.clone()
    }

    pub fn notifications(&self) -> Vec<RecordedNotification> {
        self.state.lock().unwrap().notifications.clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn current_spec(&self) -> Option<String> {
        self.state.lock().unwrap().spec.clone()
    }
}

#[async_trait]
impl ControlPlane for FakeControlPlane {
    async fn get_environment(&self, name: &str) -> Result<Environment> {
        let mut state = self.state.lock().unwrap();
        state.get_count += 1;
        state.calls.push("get");

        if name != self.name {
            return Err(NsVendError::NotFound(name.to_string()));
        }

        let deployment_status = match state.statuses.pop_front() {
            Some(status) => status,
            None => state
                .fallback_status
                .clone()
                .unwrap_or(DeploymentStatus::Succeeded),
        };

        Ok(Environment {
            name: self.name.clone(),
            deployment_status,
            spec: state.spec.clone(),
        })
    }

    async fn update_environment(
        &self,
        name: &str,
        spec: &str,
        deployment_type: &str,
        description: &str,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("update");

        if state.fail_update {
            return Err(NsVendError::ServiceError(
                "ThrottlingException: Rate exceeded".to_string(),
            ));
        }

        state.updates.push(RecordedUpdate {
            name: name.to_string(),
            spec: spec.to_string(),
            deployment_type: deployment_type.to_string(),
            description: description.to_string(),
        });
        state.spec = Some(spec.to_string());
        Ok(())
    }

    async fn notify_outcome(
        &self,
        resource_id: &str,
        outputs: &[DeploymentOutput],
        status: NotifyStatus,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("notify");
        state.notifications.push(RecordedNotification {
            resource_id: resource_id.to_string(),
            outputs: outputs.to_vec(),
            status,
        });
        Ok(())
    }
}
