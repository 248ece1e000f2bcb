use anyhow::Result;
use chemanager_api::v1alpha1::CheManager;
use chrono::{DateTime, Utc};
use kube::Client;
use tabled::{Table, Tabled};

use crate::cli::{Cli, OutputFormat};
use crate::kube::list_che_managers;
use crate::table_theme::TableTheme;

#[derive(Debug, Clone, Tabled)]
pub struct CheManagerRow {
    pub name: String,
    pub namespace: String,
    pub host: String,
    pub gateway: String,
    pub phase: String,
    pub message: String,
    pub age: String,
}

impl CheManagerRow {
    pub fn from_manager(manager: &CheManager, now: DateTime<Utc>) -> Self {
        let metadata = &manager.metadata;
        let status = manager.status.clone().unwrap_or_default();

        // Prefer the host the gateway was actually exposed on
        let host = status
            .gateway_host
            .or_else(|| manager.spec.gateway_host().map(ToString::to_string))
            .unwrap_or_else(|| "-".to_string());

        Self {
            name: metadata.name.clone().unwrap_or_default(),
            namespace: metadata.namespace.clone().unwrap_or_default(),
            host,
            gateway: status
                .gateway_phase
                .map_or_else(|| "<unknown>".to_string(), |p| p.to_string()),
            phase: status
                .phase
                .map_or_else(|| "<unknown>".to_string(), |p| p.to_string()),
            message: status.message.unwrap_or_default(),
            age: metadata
                .creation_timestamp
                .as_ref()
                .map_or_else(|| "<unknown>".to_string(), |ts| format_age(ts.0, now)),
        }
    }
}

fn format_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    if duration.num_days() > 0 {
        format!("{}d", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m", duration.num_minutes())
    } else {
        format!("{}s", duration.num_seconds())
    }
}

pub async fn handle_get_command(
    client: &Client,
    name: Option<&str>,
    all_namespaces: bool,
    selector: Option<&str>,
    cli: &Cli,
) -> Result<()> {
    let managers = list_che_managers(
        client,
        cli.namespace.as_deref(),
        name,
        all_namespaces,
        selector,
    )
    .await?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&managers)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&managers)?),
        OutputFormat::Table => {
            if managers.items.is_empty() {
                println!("No CheManager resources found");
                return Ok(());
            }
            let now = Utc::now();
            let rows: Vec<CheManagerRow> = managers
                .items
                .iter()
                .map(|m| CheManagerRow::from_manager(m, now))
                .collect();
            println!("{}", TableTheme::apply_default(Table::new(rows)));
        }
    }
    Ok(())
}
