// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server address discovery from the caller's kubeconfig

use crate::error::{DaikError, Result};
use kube::config::{Kubeconfig, NamedCluster};
use tracing::debug;

/// Read the kubeconfig the caller is using (`KUBECONFIG` or `~/.kube/config`)
pub fn read_local_kubeconfig() -> Result<Kubeconfig> {
    Kubeconfig::read().map_err(|e| DaikError::KubeconfigError(e.to_string()))
}

/// Server address of the active cluster.
///
/// Follows `current-context` to its cluster entry. When that cannot be
/// followed the first cluster with a server address is used.
pub fn resolve_endpoint(kubeconfig: &Kubeconfig) -> Result<String> {
    let current_cluster = kubeconfig
        .current_context
        .as_deref()
        .and_then(|name| kubeconfig.contexts.iter().find(|c| c.name == name))
        .and_then(|c| c.context.as_ref())
        .and_then(|c| kubeconfig.clusters.iter().find(|nc| nc.name == c.cluster));

    if let Some(server) = current_cluster.and_then(server_of) {
        debug!("Using server of current context: {}", server);
        return Ok(server);
    }

    kubeconfig
        .clusters
        .iter()
        .find_map(server_of)
        .ok_or_else(|| {
            DaikError::KubeconfigError("no cluster server address found in kubeconfig".to_string())
        })
}

fn server_of(cluster: &NamedCluster) -> Option<String> {
    cluster
        .cluster
        .as_ref()
        .and_then(|c| c.server.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
