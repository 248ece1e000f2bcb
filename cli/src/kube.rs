use anyhow::{Context, Result};
use chemanager_api::v1alpha1::{CheManager, CheManagerList};
use chemanager_core::crypto::init_crypto;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tracing::debug;

/// Create a Kubernetes client, from an explicit kubeconfig when one is given
pub async fn create_kube_client(kubeconfig_path: Option<&str>) -> Result<Client> {
    init_crypto();

    let config = if let Some(path) = kubeconfig_path {
        let kubeconfig = Kubeconfig::read_from(path)
            .with_context(|| format!("Failed to read kubeconfig {path}"))?;
        Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?
    } else {
        // Respects KUBECONFIG, then ~/.kube/config, then the in-cluster config
        Config::infer().await?
    };

    Client::try_from(config).context("Failed to create Kubernetes client")
}

/// Get CheManager resources from the cluster
pub async fn list_che_managers(
    client: &Client,
    namespace: Option<&str>,
    name: Option<&str>,
    all_namespaces: bool,
    selector: Option<&str>,
) -> Result<CheManagerList> {
    let api: Api<CheManager> = match namespace {
        Some(namespace) if !all_namespaces => Api::namespaced(client.clone(), namespace),
        _ => Api::all(client.clone()),
    };

    let mut list_params = ListParams::default();
    if let Some(sel) = selector {
        list_params = list_params.labels(sel);
    }

    let mut managers = api
        .list(&list_params)
        .await
        .context("Failed to list CheManager resources")?;

    if let Some(target_name) = name {
        managers
            .items
            .retain(|m| m.metadata.name.as_deref() == Some(target_name));
    }

    debug!("Found {} CheManager resource(s)", managers.items.len());
    Ok(managers)
}
