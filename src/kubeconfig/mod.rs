// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The client config handed to the developer: its document model, assembly and persistence.

pub mod assemble;
pub mod persist;
pub mod types;

pub use assemble::assemble;
pub use persist::write_client_config;
pub use types::ClientConfig;
