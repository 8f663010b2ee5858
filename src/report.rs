// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Progress reporting for a provisioning run.

use crate::provision::Stage;
use tracing::{error, info};

/// Observer of stage transitions and their outcome
pub trait Reporter: Send + Sync {
    /// A stage is about to start
    fn stage(&self, stage: Stage);
    /// Something completed successfully
    fn success(&self, message: &str);
    /// The run failed and is about to stop
    fn failure(&self, message: &str);
}

/// Reports through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn stage(&self, stage: Stage) {
        info!("##### {} #####", stage);
    }

    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn failure(&self, message: &str) {
        error!("{}", message);
    }
}
