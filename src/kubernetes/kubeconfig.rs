// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster access command handed out with a new namespace

/// Parameters of the `aws eks update-kubeconfig` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubeAccess {
    pub cluster_name: String,
    pub region: String,
    pub role_arn: String,
}

/// Render the command a namespace owner runs to configure kubectl
pub fn kubectl_command(access: &KubeAccess) -> String {
    format!(
        "aws eks update-kubeconfig --name {} --region {} --role-arn {}",
        access.cluster_name, access.region, access.role_arn
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kubectl_command() {
        let access = KubeAccess {
            cluster_name: "shared".to_string(),
            region: "eu-west-1".to_string(),
            role_arn: "arn:aws:iam::123:role/dev".to_string(),
        };

        assert_eq!(
            kubectl_command(&access),
            "aws eks update-kubeconfig --name shared --region eu-west-1 --role-arn arn:aws:iam::123:role/dev"
        );
    }
}
