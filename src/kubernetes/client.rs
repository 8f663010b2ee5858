// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the cluster being provisioned

use crate::error::{DaikError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use tracing::debug;

/// Create a client from the caller's environment (kubeconfig or in-cluster)
pub async fn create_default_client() -> Result<Client> {
    debug!("Inferring Kubernetes client configuration");
    Ok(Client::try_default().await?)
}

/// Create a client from the current context of a parsed kubeconfig
pub async fn create_client_from_kubeconfig(kubeconfig: &Kubeconfig) -> Result<Client> {
    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig.clone(), &KubeConfigOptions::default())
            .await
            .map_err(|e| DaikError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| DaikError::KubeconfigError(format!("Failed to create client: {}", e)))
}
