use anyhow::Result;
use chemanager_api::defaults::ImageDefaults;
use chemanager_api::resolve::EffectiveConfiguration;
use chemanager_api::v1alpha1::CheManager;
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

use super::{qualified_name, read_manifest_file};
use crate::cli::{Cli, OutputFormat};
use crate::table_theme::TableTheme;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedManager {
    pub name: String,
    pub configuration: EffectiveConfiguration,
}

impl ResolvedManager {
    pub fn new(manager: &CheManager, defaults: &ImageDefaults) -> Self {
        Self {
            name: qualified_name(manager),
            configuration: manager.spec.resolve(defaults),
        }
    }
}

#[derive(Tabled)]
struct SettingRow {
    setting: String,
    value: String,
}

fn setting_rows(configuration: &EffectiveConfiguration) -> Vec<SettingRow> {
    let row = |setting: &str, value: String| SettingRow {
        setting: setting.to_string(),
        value,
    };

    let annotations = configuration
        .ingress_annotations
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n");

    vec![
        row("gateway enabled", configuration.gateway_enabled.to_string()),
        row(
            "gateway host",
            configuration.gateway_host.clone().unwrap_or_else(|| "-".to_string()),
        ),
        row("gateway image", configuration.gateway_image.clone()),
        row(
            "configurer image",
            configuration.gateway_configurer_image.clone(),
        ),
        row(
            "tls secret",
            configuration
                .tls_secret_name
                .clone()
                .unwrap_or_else(|| "<cluster default>".to_string()),
        ),
        row("ingress annotations", annotations),
        row(
            "initial gateway phase",
            configuration.expected_gateway_phase.to_string(),
        ),
    ]
}

pub fn handle_resolve_command(file: &Path, cli: &Cli) -> Result<()> {
    let defaults = ImageDefaults::from_env();
    let resolved: Vec<ResolvedManager> = read_manifest_file(file)?
        .iter()
        .map(|manager| ResolvedManager::new(manager, &defaults))
        .collect();

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&resolved)?),
        OutputFormat::Table => {
            for manager in &resolved {
                println!("{}", manager.name);
                println!(
                    "{}",
                    TableTheme::apply_default(Table::new(setting_rows(&manager.configuration)))
                );
            }
        }
    }
    Ok(())
}
