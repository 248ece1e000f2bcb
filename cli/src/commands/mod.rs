pub mod crd;
pub mod get;
pub mod resolve;
pub mod validate;

use anyhow::{Context, Result};
use chemanager_api::v1alpha1::CheManager;
use chemanager_core::manifest::read_manifests;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::kube::create_kube_client;

/// Main command dispatcher
pub async fn handle_command(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Crd => crd::handle_crd_command(cli)?,
        Commands::Validate { ref files } => {
            return validate::handle_validate_command(files, cli);
        }
        Commands::Resolve { ref file } => resolve::handle_resolve_command(file, cli)?,
        Commands::Get {
            ref name,
            all_namespaces,
            ref selector,
        } => {
            let client = create_kube_client(cli.kubeconfig.as_deref()).await?;
            get::handle_get_command(
                &client,
                name.as_deref(),
                *all_namespaces,
                selector.as_deref(),
                cli,
            )
            .await?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn read_manifest_file(path: &Path) -> Result<Vec<CheManager>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_manifests(file).with_context(|| format!("Failed to read {}", path.display()))
}

pub(crate) fn qualified_name(manager: &CheManager) -> String {
    match (&manager.metadata.namespace, &manager.metadata.name) {
        (Some(namespace), Some(name)) => format!("{namespace}/{name}"),
        (None, Some(name)) => name.clone(),
        _ => "<unnamed>".to_string(),
    }
}
