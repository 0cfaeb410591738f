// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, kubectl, poll};
use crate::deployment::PollSettings;
use crate::kubernetes::KubeAccess;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Resource identifier reported in the post-create notification
    pub resource_arn: Option<String>,
    pub poll: PollSettings,
    /// Skip gating and submission when the namespace list is unchanged
    pub skip_unchanged: bool,
    /// Let the pre-update wait accept a FAILED environment
    pub update_failed: bool,
    pub kube_access: KubeAccess,
    pub endpoint_url: Option<Url>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let delay_secs = match non_empty(vars::POLL_DELAY_SECS) {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of seconds, got '{}'", vars::POLL_DELAY_SECS, v))?,
            None => poll::DELAY_SECS,
        };

        let max_attempts = match non_empty(vars::MAX_ATTEMPTS) {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("{} must be a positive number, got '{}'", vars::MAX_ATTEMPTS, v))?,
            None => poll::MAX_ATTEMPTS,
        };

        let skip_unchanged: bool = non_empty(vars::SKIP_UNCHANGED)
            .unwrap_or("false".to_string())
            .parse()
            .with_context(|| format!("{} must be 'true' or 'false'", vars::SKIP_UNCHANGED))?;

        let update_failed: bool = non_empty(vars::UPDATE_FAILED)
            .unwrap_or("false".to_string())
            .parse()
            .with_context(|| format!("{} must be 'true' or 'false'", vars::UPDATE_FAILED))?;

        let endpoint_url = non_empty(vars::ENDPOINT_URL)
            .map(|v| Url::parse(&v).with_context(|| format!("{} is not a valid URL: '{}'", vars::ENDPOINT_URL, v)))
            .transpose()?;

        let kube_access = KubeAccess {
            cluster_name: non_empty(vars::CLUSTER_NAME)
                .unwrap_or_else(|| kubectl::CLUSTER_PLACEHOLDER.to_string()),
            region: non_empty(vars::REGION).unwrap_or_else(|| kubectl::REGION_PLACEHOLDER.to_string()),
            role_arn: non_empty(vars::ROLE_ARN)
                .unwrap_or_else(|| kubectl::ROLE_ARN_PLACEHOLDER.to_string()),
        };

        Ok(Config {
            resource_arn: non_empty(vars::RESOURCE_ARN),
            poll: PollSettings::new(Duration::from_secs(delay_secs), max_attempts),
            skip_unchanged,
            update_failed,
            kube_access,
            endpoint_url,
        })
    }
}
