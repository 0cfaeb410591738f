// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reconcilers that compute desired state from a request.

pub mod namespace;

pub use namespace::{reconcile, Reconciliation};
