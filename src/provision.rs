// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Drives a provisioning run from connectivity check to the written client config.

use crate::config::Config;
use crate::error::{DaikError, Result, StageError};
use crate::kubeconfig::{assemble, write_client_config};
use crate::kubernetes::{
    apply, create_client_from_kubeconfig, create_default_client, fetch_credential, list_nodes,
    read_local_kubeconfig, resolve_endpoint, resolve_secret_name,
};
use crate::manifests;
use crate::report::Reporter;
use crate::types::Identity;
use k8s_openapi::api::core::v1::{Namespace, ServiceAccount};
use k8s_openapi::api::rbac::v1::{Role, RoleBinding};
use kube::config::Kubeconfig;
use kube::{Api, Client};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

/// Stages of a run, in the order they execute. A failed stage ends the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    CheckConnectivity,
    EnsureNamespace,
    CreateServiceAccount,
    CreateRole,
    CreateRoleBinding,
    ExtractCredentials,
    ResolveEndpoint,
    AssembleConfig,
    PersistConfig,
}

impl Stage {
    pub const ALL: [Stage; 9] = [
        Stage::CheckConnectivity,
        Stage::EnsureNamespace,
        Stage::CreateServiceAccount,
        Stage::CreateRole,
        Stage::CreateRoleBinding,
        Stage::ExtractCredentials,
        Stage::ResolveEndpoint,
        Stage::AssembleConfig,
        Stage::PersistConfig,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Stage::CheckConnectivity => "Get nodes (check connect)",
            Stage::EnsureNamespace => "Create namespace if not exist",
            Stage::CreateServiceAccount => "Create ServiceAccount",
            Stage::CreateRole => "Create Role",
            Stage::CreateRoleBinding => "Create RoleBinding",
            Stage::ExtractCredentials => "Get token and cert",
            Stage::ResolveEndpoint => "Get server address",
            Stage::AssembleConfig => "Create developer config",
            Stage::PersistConfig => "Write developer config",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

pub struct Provisioner {
    config: Config,
    reporter: Arc<dyn Reporter>,
    /// Client to use instead of one built while checking connectivity
    client: Option<Client>,
    /// Kubeconfig the client and endpoint come from, the caller's own when unset
    kubeconfig: Option<Kubeconfig>,
}

impl Provisioner {
    pub fn new(config: Config, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config,
            reporter,
            client: None,
            kubeconfig: None,
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_kubeconfig(mut self, kubeconfig: Kubeconfig) -> Self {
        self.kubeconfig = Some(kubeconfig);
        self
    }

    /// Provision `identity` and write its client config. Returns the file path.
    pub async fn run(&self, identity: &Identity) -> std::result::Result<PathBuf, StageError> {
        let (client, nodes) = self
            .stage(Stage::CheckConnectivity, async {
                let client = self.connect().await?;
                let nodes = list_nodes(&client).await?;
                Ok::<_, DaikError>((client, nodes))
            })
            .await?;
        self.reporter.success(&format!(
            "Cluster reachable, {} node(s): {}",
            nodes.len(),
            nodes.join(", ")
        ));

        let namespaces: Api<Namespace> = Api::all(client.clone());
        let ack = self
            .stage(
                Stage::EnsureNamespace,
                apply(&namespaces, &manifests::namespace(identity)),
            )
            .await?;
        self.reporter.success(&ack);

        let accounts: Api<ServiceAccount> =
            Api::namespaced(client.clone(), &identity.namespace);
        let ack = self
            .stage(
                Stage::CreateServiceAccount,
                apply(&accounts, &manifests::service_account(identity)),
            )
            .await?;
        self.reporter.success(&ack);

        let roles: Api<Role> = Api::namespaced(client.clone(), &identity.namespace);
        let ack = self
            .stage(Stage::CreateRole, apply(&roles, &manifests::role(identity)))
            .await?;
        self.reporter.success(&ack);

        let bindings: Api<RoleBinding> = Api::namespaced(client.clone(), &identity.namespace);
        let ack = self
            .stage(
                Stage::CreateRoleBinding,
                apply(&bindings, &manifests::role_binding(identity)),
            )
            .await?;
        self.reporter.success(&ack);

        let credential = self
            .stage(Stage::ExtractCredentials, async {
                let secret_name = resolve_secret_name(&client, identity).await?;
                fetch_credential(&client, &secret_name, &identity.namespace).await
            })
            .await?;
        self.reporter.success("Token and CA certificate read");

        let endpoint = self
            .stage(Stage::ResolveEndpoint, async {
                match &self.kubeconfig {
                    Some(kubeconfig) => resolve_endpoint(kubeconfig),
                    None => resolve_endpoint(&read_local_kubeconfig()?),
                }
            })
            .await?;
        self.reporter.success(&format!("Server address: {}", endpoint));

        let client_config = self
            .stage(Stage::AssembleConfig, async {
                Ok::<_, DaikError>(assemble(
                    identity,
                    &credential,
                    &endpoint,
                    &self.config.cluster_name,
                ))
            })
            .await?;

        let path = self
            .stage(
                Stage::PersistConfig,
                write_client_config(&client_config, &self.config.output_dir, identity),
            )
            .await?;
        self.reporter
            .success(&format!("File {} created", path.display()));
        self.reporter.success(&format!(
            "You can run (example) kubectl --kubeconfig={} get pods",
            path.display()
        ));

        Ok(path)
    }

    async fn connect(&self) -> Result<Client> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }
        match &self.kubeconfig {
            Some(kubeconfig) => create_client_from_kubeconfig(kubeconfig).await,
            None => create_default_client().await,
        }
    }

    async fn stage<T>(
        &self,
        stage: Stage,
        work: impl Future<Output = Result<T>>,
    ) -> std::result::Result<T, StageError> {
        self.reporter.stage(stage);

        work.await.map_err(|source| {
            let err = StageError { stage, source };
            self.reporter.failure(&err.to_string());
            err
        })
    }
}
