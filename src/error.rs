// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::provision::Stage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaikError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to read kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Service account {0} has no token secret")]
    MissingTokenSecret(String),

    #[error("Secret {secret} is missing field '{field}'")]
    MissingSecretField { secret: String, field: String },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Failed to serialize client config: {0}")]
    SerializeError(#[from] serde_yaml::Error),

    #[error("Failed to write client config: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DaikError>;

/// Fatal failure of a single provisioning stage. Aborts the whole run.
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: DaikError,
}
