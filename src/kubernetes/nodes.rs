// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use k8s_openapi::api::core::v1::Node;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::instrument;

/// List node names. Used to check the caller can reach the cluster at all.
#[instrument(skip(client))]
pub async fn list_nodes(client: &Client) -> Result<Vec<String>> {
    let nodes: Api<Node> = Api::all(client.clone());
    let node_list = nodes.list(&ListParams::default()).await?;

    Ok(node_list.items.iter().map(|n| n.name_any()).collect())
}
