// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Environment, status and request types shared across the update flow.

pub mod environment;
pub mod request;

pub use environment::{DeploymentOutput, DeploymentStatus, Environment, NotifyStatus};
pub use request::{NamespaceAction, ReconcileLabel, ReconciliationRequest};
