// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes cluster access helpers.

pub mod kubeconfig;

pub use kubeconfig::{kubectl_command, KubeAccess};
