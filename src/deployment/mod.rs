// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment status gating and convergence polling.

pub mod gate;

pub use gate::{DeploymentGate, OnFailed, PollSettings};
