// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use daik::cli::{Cli, Invocation};
use daik::config::Config;
use daik::provision::Provisioner;
use daik::report::TracingReporter;

#[tokio::main]
async fn main() -> ExitCode {
    let start = Instant::now();

    // Initialize tracing; stage progress and failures are reported on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();

    let identity = match Cli::invocation(std::env::args_os()) {
        Invocation::Provision(identity) => identity,
        Invocation::Usage(text) => {
            println!("{}", text);
            return ExitCode::SUCCESS;
        }
    };

    info!(
        "Parameters: namespace={}, username={}",
        identity.namespace, identity.username
    );

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let provisioner = Provisioner::new(config, Arc::new(TracingReporter));
    let result = provisioner.run(&identity).await;

    info!("Execution time {:?}", start.elapsed());

    // Failures were already reported by the provisioner
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
