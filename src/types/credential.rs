// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

/// Token material read from a service account secret
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Plaintext bearer token
    pub token: String,
    /// CA certificate, base64 encoded PEM as expected in a kubeconfig
    pub ca_certificate: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("ca_certificate", &self.ca_certificate)
            .finish()
    }
}
