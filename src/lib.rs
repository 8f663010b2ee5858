// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubeconfig;
pub mod kubernetes;
pub mod manifests;
pub mod provision;
pub mod report;
pub mod types;

#[cfg(test)]
mod test_utils;
