// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service account token secret lookup
//!
//! Control planes that no longer create token secrets for service accounts
//! leave `secrets` empty, which makes provisioning fail here.

use crate::constants::secret_keys;
use crate::error::{DaikError, Result};
use crate::types::{Credential, Identity};
use base64::prelude::{Engine, BASE64_STANDARD};
use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use kube::{Api, Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Find the name of the token secret backing the identity's service account
#[instrument(skip(client), fields(identity = %identity))]
pub async fn resolve_secret_name(client: &Client, identity: &Identity) -> Result<String> {
    let accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), &identity.namespace);
    let account = accounts.get(identity.service_account_name()).await?;

    let name = token_secret_name(&account)
        .ok_or_else(|| DaikError::MissingTokenSecret(identity.to_string()))?;
    debug!("Service account {} uses token secret {}", identity, name);

    Ok(name)
}

/// First non-empty secret reference of a service account
pub fn token_secret_name(account: &ServiceAccount) -> Option<String> {
    account
        .secrets
        .as_ref()?
        .iter()
        .filter_map(|r| r.name.as_deref())
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

/// Read the bearer token and CA certificate from a token secret
#[instrument(skip(client))]
pub async fn fetch_credential(
    client: &Client,
    secret_name: &str,
    namespace: &str,
) -> Result<Credential> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    info!("Reading token secret '{}/{}'", namespace, secret_name);
    let secret = secrets.get(secret_name).await?;

    credential_from_secret(&secret)
}

/// Extract the token (as plaintext) and CA certificate (as base64) from a secret
pub fn credential_from_secret(secret: &Secret) -> Result<Credential> {
    let secret_name = secret.name_any();
    let missing = |field: &str| DaikError::MissingSecretField {
        secret: secret_name.clone(),
        field: field.to_string(),
    };

    let Some(data) = secret.data.as_ref() else {
        return Err(missing(secret_keys::TOKEN));
    };

    let token = data
        .get(secret_keys::TOKEN)
        .and_then(|t| String::from_utf8(t.0.clone()).ok())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| missing(secret_keys::TOKEN))?;

    let ca_certificate = data
        .get(secret_keys::CA_CERT)
        .filter(|c| !c.0.is_empty())
        .map(|c| BASE64_STANDARD.encode(&c.0))
        .ok_or_else(|| missing(secret_keys::CA_CERT))?;

    Ok(Credential {
        token,
        ca_certificate,
    })
}
