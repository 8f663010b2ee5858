// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::kubeconfig::types::{
    ClientConfig, ClusterEntry, ContextEntry, NamedCluster, NamedContext, NamedUser, Preferences,
    UserEntry,
};
use crate::types::{Credential, Identity};

/// Compose the developer's client config.
///
/// The context is named after the namespace and is the current context; the
/// user entry is named after the username. Token and certificate are copied
/// verbatim.
pub fn assemble(
    identity: &Identity,
    credential: &Credential,
    endpoint: &str,
    cluster_name: &str,
) -> ClientConfig {
    ClientConfig {
        api_version: "v1".to_string(),
        kind: "Config".to_string(),
        preferences: Preferences::default(),
        clusters: vec![NamedCluster {
            name: cluster_name.to_string(),
            cluster: ClusterEntry {
                certificate_authority_data: credential.ca_certificate.clone(),
                server: endpoint.to_string(),
            },
        }],
        users: vec![NamedUser {
            name: identity.username.clone(),
            user: UserEntry {
                token: credential.token.clone(),
            },
        }],
        contexts: vec![NamedContext {
            name: identity.namespace.clone(),
            context: ContextEntry {
                cluster: cluster_name.to_string(),
                namespace: identity.namespace.clone(),
                user: identity.username.clone(),
            },
        }],
        current_context: identity.namespace.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential {
            token: "eyJhbGciOi".to_string(),
            ca_certificate: "Q0E=".to_string(),
        }
    }

    #[test]
    fn test_assemble_alice() {
        let config = assemble(
            &Identity::new("alice", "team-x"),
            &credential(),
            "https://10.0.0.1:6443",
            "cluster",
        );

        assert_eq!(config.contexts[0].context.namespace, "team-x");
        assert_eq!(config.users[0].name, "alice");
        assert_eq!(config.current_context, "team-x");
        assert_eq!(config.clusters[0].cluster.server, "https://10.0.0.1:6443");
        assert_eq!(config.clusters[0].cluster.certificate_authority_data, "Q0E=");
        assert_eq!(config.users[0].user.token, "eyJhbGciOi");
        assert!(config.is_consistent());
    }

    #[test]
    fn test_assemble_custom_cluster_name() {
        let config = assemble(
            &Identity::new("bob", "dev"),
            &credential(),
            "https://k8s.example.com",
            "prod-eu",
        );

        assert_eq!(config.clusters[0].name, "prod-eu");
        assert_eq!(config.contexts[0].context.cluster, "prod-eu");
        assert!(config.is_consistent());
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let identity = Identity::new("alice", "team-x");
        let first = assemble(&identity, &credential(), "https://10.0.0.1:6443", "cluster");
        let second = assemble(&identity, &credential(), "https://10.0.0.1:6443", "cluster");

        assert_eq!(first, second);
        assert_eq!(first.to_yaml().unwrap(), second.to_yaml().unwrap());
    }

    #[test]
    fn test_assembled_yaml_parses_as_kubeconfig() {
        let config = assemble(
            &Identity::new("alice", "team-x"),
            &credential(),
            "https://10.0.0.1:6443",
            "cluster",
        );

        let parsed: kube::config::Kubeconfig =
            serde_yaml::from_str(&config.to_yaml().unwrap()).unwrap();

        assert_eq!(parsed.current_context.as_deref(), Some("team-x"));
        assert_eq!(parsed.clusters[0].name, "cluster");
        assert_eq!(parsed.auth_infos[0].name, "alice");
        assert_eq!(parsed.contexts[0].name, "team-x");
    }
}
