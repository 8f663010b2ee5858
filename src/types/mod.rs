// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Values flowing through a provisioning run.

pub mod credential;
pub mod identity;

pub use credential::Credential;
pub use identity::Identity;
