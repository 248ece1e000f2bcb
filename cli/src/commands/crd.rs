use anyhow::Result;
use chemanager_api::scheme::Scheme;
use chemanager_build::CRDS_YAML;

use crate::cli::{Cli, OutputFormat};

pub fn handle_crd_command(cli: &Cli) -> Result<()> {
    match cli.output {
        OutputFormat::Json => {
            let crds = Scheme::default_scheme().custom_resource_definitions();
            println!("{}", serde_json::to_string_pretty(&crds)?);
        }
        OutputFormat::Table | OutputFormat::Yaml => print!("{CRDS_YAML}"),
    }
    Ok(())
}
