// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod control_plane;
pub mod deployment;
pub mod error;
pub mod kubernetes;
pub mod orchestrator;
pub mod reconcilers;
pub mod spec;
pub mod types;

#[cfg(test)]
pub mod test_utils;
