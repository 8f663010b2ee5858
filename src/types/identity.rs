// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{rbac, CONFIG_EXTENSION};
use std::fmt;

/// The developer being provisioned. Names are passed to the cluster as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub namespace: String,
}

impl Identity {
    pub fn new(username: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            namespace: namespace.into(),
        }
    }

    /// Name of the service account backing this identity
    pub fn service_account_name(&self) -> &str {
        &self.username
    }

    pub fn role_name(&self) -> String {
        format!("{}{}", self.username, rbac::ROLE_SUFFIX)
    }

    pub fn role_binding_name(&self) -> String {
        format!("{}{}", self.username, rbac::BINDING_SUFFIX)
    }

    /// File name of the generated client config, `{username}-{namespace}.yml`
    pub fn config_file_name(&self) -> String {
        format!("{}-{}.{}", self.username, self.namespace, CONFIG_EXTENSION)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.username)
    }
}
