// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifests applied for a developer identity.
//!
//! The role grants every verb on the core, `apps` and `extensions` groups plus
//! jobs and cronjobs in `batch`, limited to the identity's own namespace.

use crate::constants::rbac;
use crate::types::Identity;
use k8s_openapi::api::core::v1::{Namespace, ServiceAccount};
use k8s_openapi::api::rbac::v1::{PolicyRule, Role, RoleBinding, RoleRef, Subject};
use kube::api::ObjectMeta;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn namespaced_meta(name: &str, identity: &Identity) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some(identity.namespace.clone()),
        ..Default::default()
    }
}

pub fn namespace(identity: &Identity) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(identity.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn service_account(identity: &Identity) -> ServiceAccount {
    ServiceAccount {
        metadata: namespaced_meta(identity.service_account_name(), identity),
        ..Default::default()
    }
}

pub fn role(identity: &Identity) -> Role {
    Role {
        metadata: namespaced_meta(&identity.role_name(), identity),
        rules: Some(vec![
            PolicyRule {
                api_groups: Some(strings(&["", "extensions", "apps"])),
                resources: Some(strings(&["*"])),
                verbs: strings(&["*"]),
                ..Default::default()
            },
            PolicyRule {
                api_groups: Some(strings(&["batch"])),
                resources: Some(strings(&["jobs", "cronjobs"])),
                verbs: strings(&["*"]),
                ..Default::default()
            },
        ]),
    }
}

pub fn role_binding(identity: &Identity) -> RoleBinding {
    RoleBinding {
        metadata: namespaced_meta(&identity.role_binding_name(), identity),
        role_ref: RoleRef {
            api_group: rbac::API_GROUP.to_string(),
            kind: "Role".to_string(),
            name: identity.role_name(),
        },
        subjects: Some(vec![Subject {
            kind: "ServiceAccount".to_string(),
            name: identity.service_account_name().to_string(),
            namespace: Some(identity.namespace.clone()),
            ..Default::default()
        }]),
    }
}
