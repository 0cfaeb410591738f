// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace reconciler - computes the desired namespace list for a request.

use crate::error::{NsVendError, Result};
use crate::types::{NamespaceAction, ReconcileLabel};

/// Outcome of reconciling a namespace list against one request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciliation {
    pub namespaces: Vec<String>,
    /// True when the list is unchanged; the update is still submitted
    /// unless the caller opts into skipping it.
    pub no_op: bool,
    pub label: ReconcileLabel,
}

/// Compute the namespace list that results from applying `action` for `requested`.
///
/// New entries are appended, removals keep the order of the remaining entries.
pub fn reconcile(
    current: &[String],
    requested: &str,
    action: NamespaceAction,
) -> Result<Reconciliation> {
    if requested.trim().is_empty() {
        return Err(NsVendError::InvalidRequest(
            "namespace name must not be empty".to_string(),
        ));
    }

    let exists = current.iter().any(|ns| ns == requested);

    let reconciliation = match (action, exists) {
        (NamespaceAction::Create, false) => {
            let mut namespaces = current.to_vec();
            namespaces.push(requested.to_string());
            Reconciliation {
                namespaces,
                no_op: false,
                label: ReconcileLabel::Creating,
            }
        }
        (NamespaceAction::Delete, true) => Reconciliation {
            namespaces: current
                .iter()
                .filter(|ns| *ns != requested)
                .cloned()
                .collect(),
            no_op: false,
            label: ReconcileLabel::Deleting,
        },
        (NamespaceAction::Create, true) | (NamespaceAction::Delete, false) => Reconciliation {
            namespaces: current.to_vec(),
            no_op: true,
            label: ReconcileLabel::Updating,
        },
    };

    Ok(reconciliation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_appends_missing_namespace() {
        let result = reconcile(&names(&["a", "b"]), "c", NamespaceAction::Create).unwrap();

        assert_eq!(result.namespaces, names(&["a", "b", "c"]));
        assert!(!result.no_op);
        assert_eq!(result.label, ReconcileLabel::Creating);
    }

    #[test]
    fn test_create_on_empty_list() {
        let result = reconcile(&[], "team-a", NamespaceAction::Create).unwrap();

        assert_eq!(result.namespaces, names(&["team-a"]));
        assert_eq!(result.label, ReconcileLabel::Creating);
    }

    #[test]
    fn test_create_existing_namespace_is_update() {
        let current = names(&["a", "b"]);
        let result = reconcile(&current, "a", NamespaceAction::Create).unwrap();

        assert_eq!(result.namespaces, current);
        assert!(result.no_op);
        assert_eq!(result.label, ReconcileLabel::Updating);
    }

    #[test]
    fn test_delete_removes_and_preserves_order() {
        let result = reconcile(&names(&["a", "b", "c", "d"]), "b", NamespaceAction::Delete).unwrap();

        assert_eq!(result.namespaces, names(&["a", "c", "d"]));
        assert!(!result.no_op);
        assert_eq!(result.label, ReconcileLabel::Deleting);
    }

    #[test]
    fn test_delete_last_namespace() {
        let result = reconcile(&names(&["a", "b"]), "b", NamespaceAction::Delete).unwrap();

        assert_eq!(result.namespaces, names(&["a"]));
        assert_eq!(result.label, ReconcileLabel::Deleting);
    }

    #[test]
    fn test_delete_missing_namespace_is_update() {
        let current = names(&["a", "b"]);
        let result = reconcile(&current, "z", NamespaceAction::Delete).unwrap();

        assert_eq!(result.namespaces, current);
        assert!(result.no_op);
        assert_eq!(result.label, ReconcileLabel::Updating);
    }

    #[test]
    fn test_matching_is_exact() {
        let result = reconcile(&names(&["team-a"]), "Team-A", NamespaceAction::Create).unwrap();

        assert_eq!(result.namespaces, names(&["team-a", "Team-A"]));
        assert_eq!(result.label, ReconcileLabel::Creating);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = reconcile(&names(&["a"]), "", NamespaceAction::Create).unwrap_err();
        assert!(matches!(err, NsVendError::InvalidRequest(_)));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = reconcile(&names(&["a"]), "  ", NamespaceAction::Delete).unwrap_err();
        assert!(matches!(err, NsVendError::InvalidRequest(_)));
    }

    #[test]
    fn test_every_membership_case() {
        let lists = [names(&[]), names(&["x"]), names(&["x", "y", "z"]), names(&["y", "x"])];

        for list in &lists {
            let contains = list.iter().any(|ns| ns == "x");

            let created = reconcile(list, "x", NamespaceAction::Create).unwrap();
            let deleted = reconcile(list, "x", NamespaceAction::Delete).unwrap();

            if contains {
                assert_eq!(&created.namespaces, list);
                assert_eq!(created.label, ReconcileLabel::Updating);

                let expected: Vec<String> = list.iter().filter(|ns| *ns != "x").cloned().collect();
                assert_eq!(deleted.namespaces, expected);
                assert_eq!(deleted.label, ReconcileLabel::Deleting);
            } else {
                let mut expected = list.clone();
                expected.push("x".to_string());
                assert_eq!(created.namespaces, expected);
                assert_eq!(created.label, ReconcileLabel::Creating);

                assert_eq!(&deleted.namespaces, list);
                assert_eq!(deleted.label, ReconcileLabel::Updating);
            }
        }
    }
}
