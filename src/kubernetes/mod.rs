// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes calls made while provisioning: apply, credential reads, endpoint discovery.

pub mod apply;
pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod nodes;

pub use apply::apply;
pub use client::{create_client_from_kubeconfig, create_default_client};
pub use credentials::{fetch_credential, resolve_secret_name};
pub use endpoint::{read_local_kubeconfig, resolve_endpoint};
pub use nodes::list_nodes;
