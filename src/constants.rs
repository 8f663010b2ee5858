// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The field manager name used for server-side apply
pub const FIELD_MANAGER: &str = "daik";

/// Extension of the generated client config file
pub const CONFIG_EXTENSION: &str = "yml";

/// Cluster entry name written into the client config unless overridden
pub const DEFAULT_CLUSTER_NAME: &str = "cluster";

/// Suffixes for the RBAC objects derived from the username
pub mod rbac {
    pub const ROLE_SUFFIX: &str = "-access";
    pub const BINDING_SUFFIX: &str = "-view";
    pub const API_GROUP: &str = "rbac.authorization.k8s.io";
}

/// Keys of a service account token secret
pub mod secret_keys {
    pub const TOKEN: &str = "token";
    pub const CA_CERT: &str = "ca.crt";
}
