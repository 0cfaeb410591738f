// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by `Config::from_env`
pub mod env {
    /// Resource identifier attached to the post-create notification
    pub const RESOURCE_ARN: &str = "RESOURCE_ARN";
    pub const POLL_DELAY_SECS: &str = "NSVEND_POLL_DELAY_SECS";
    pub const MAX_ATTEMPTS: &str = "NSVEND_MAX_ATTEMPTS";
    /// When "true", unchanged namespace lists are not re-submitted
    pub const SKIP_UNCHANGED: &str = "NSVEND_SKIP_UNCHANGED";
    /// When "true", an environment whose last deployment failed may still be updated
    pub const UPDATE_FAILED: &str = "NSVEND_UPDATE_FAILED";
    pub const CLUSTER_NAME: &str = "EKS_CLUSTER_NAME";
    pub const REGION: &str = "AWS_REGION";
    pub const ROLE_ARN: &str = "KUBECTL_ROLE_ARN";
    /// Overrides the Proton API endpoint (e.g. a local emulator)
    pub const ENDPOINT_URL: &str = "PROTON_ENDPOINT_URL";
}

/// Deployment polling configuration
pub mod poll {
    /// Delay between two status polls in seconds
    pub const DELAY_SECS: u64 = 10;
    /// Maximum number of status polls before giving up
    pub const MAX_ATTEMPTS: u32 = 60;
}

/// Environment update parameters sent to the control plane
pub mod update {
    pub const DEPLOYMENT_TYPE: &str = "CURRENT_VERSION";
    pub const DESCRIPTION: &str = "Automated update via EKS namespace vending";
}

/// Output keys of the post-create notification
pub mod outputs {
    pub const NAMESPACE_NAME: &str = "NamespaceName";
    pub const KUBECTL_CONFIGURATION: &str = "KubectlConfiguration";
}

/// Placeholders used in the kubectl command when nothing is configured
pub mod kubectl {
    pub const CLUSTER_PLACEHOLDER: &str = "cluster-name-here";
    pub const REGION_PLACEHOLDER: &str = "region-here";
    pub const ROLE_ARN_PLACEHOLDER: &str = "role-arn-here";
}
