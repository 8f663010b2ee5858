// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::Identity;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

const AFTER_HELP: &str = "Example: daik devstand user\n\
Example to use config: kubectl --kubeconfig=CONFIGNAME.yml get pods";

/// Developer Access In Kubernetes: create a config for users in Kubernetes
#[derive(Parser, Debug)]
#[command(name = "daik", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Namespace the developer gets access to
    pub namespace: Option<String>,
    /// Name of the developer's service account
    pub username: Option<String>,
}

/// What a command line asks for
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Provision(Identity),
    /// Print the text and exit successfully without touching the cluster
    Usage(String),
}

impl Cli {
    /// Anything but exactly a namespace and a username is a request for usage
    pub fn invocation<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => match cli.identity() {
                Some(identity) => Invocation::Provision(identity),
                None => Invocation::Usage(Self::usage()),
            },
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Invocation::Usage(e.render().to_string())
            }
            Err(_) => Invocation::Usage(Self::usage()),
        }
    }

    /// The identity to provision, if both arguments were given
    pub fn identity(self) -> Option<Identity> {
        match (self.namespace, self.username) {
            (Some(namespace), Some(username)) => Some(Identity::new(username, namespace)),
            _ => None,
        }
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
