// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side apply of typed manifests

use crate::constants::FIELD_MANAGER;
use crate::error::{DaikError, Result};
use kube::{
    api::{Patch, PatchParams},
    Api, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Apply a manifest and return the control plane's acknowledgment.
///
/// Whether the object is created or left as is, is decided by the API server.
/// Existing objects are not an error.
#[instrument(skip(api, manifest), fields(kind = %K::kind(&())))]
pub async fn apply<K>(api: &Api<K>, manifest: &K) -> Result<String>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug,
{
    let kind = K::kind(&()).to_lowercase();
    let Some(name) = manifest.meta().name.as_deref() else {
        return Err(DaikError::InvalidManifest(format!(
            "{} manifest has no metadata.name",
            kind
        )));
    };

    let pp = PatchParams::apply(FIELD_MANAGER).force();
    let applied = api.patch(name, &pp, &Patch::Apply(manifest)).await?;
    debug!("Applied {}/{}", kind, applied.name_any());

    Ok(format!("{}/{} applied", kind, applied.name_any()))
}
