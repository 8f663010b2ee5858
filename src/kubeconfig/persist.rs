// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubeconfig::types::ClientConfig;
use crate::types::Identity;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

/// The file carries a bearer token, so only the owner may read it
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;

/// Write the client config to `{dir}/{username}-{namespace}.yml`, replacing any previous file
#[instrument(skip(config, dir), fields(identity = %identity))]
pub async fn write_client_config(
    config: &ClientConfig,
    dir: &Path,
    identity: &Identity,
) -> Result<PathBuf> {
    let path = dir.join(identity.config_file_name());
    let yaml = config.to_yaml()?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(CONFIG_FILE_MODE);

    let mut file = options.open(&path).await?;
    // A file left by an earlier run keeps its old mode on open
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(CONFIG_FILE_MODE))
            .await?;
    }
    file.write_all(yaml.as_bytes()).await?;
    file.flush().await?;
    info!("Client config written to {}", path.display());

    Ok(path)
}
