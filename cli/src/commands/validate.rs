use anyhow::Result;
use chemanager_api::v1alpha1::CheManager;
use chemanager_api::validation::{validate, Platform};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing::warn;

use super::{qualified_name, read_manifest_file};
use crate::cli::{Cli, OutputFormat};
use crate::table_theme::TableTheme;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub name: String,
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Tabled)]
struct ValidationRow {
    file: String,
    name: String,
    valid: bool,
    errors: String,
}

impl From<&ValidationReport> for ValidationRow {
    fn from(report: &ValidationReport) -> Self {
        Self {
            file: report.file.clone(),
            name: report.name.clone(),
            valid: report.valid,
            errors: if report.errors.is_empty() {
                "-".to_string()
            } else {
                report.errors.join("\n")
            },
        }
    }
}

impl ValidationReport {
    pub fn new(file: &Path, manager: &CheManager, platform: Platform) -> Self {
        let errors = match validate(manager, platform) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.into_iter().map(|e| e.to_string()).collect(),
        };

        Self {
            file: file.display().to_string(),
            name: qualified_name(manager),
            valid: errors.is_empty(),
            errors,
        }
    }

    fn unreadable(file: &Path, error: &anyhow::Error) -> Self {
        Self {
            file: file.display().to_string(),
            name: "-".to_string(),
            valid: false,
            errors: vec![format!("{error:#}")],
        }
    }
}

pub fn collect_reports(files: &[PathBuf], platform: Platform) -> Vec<ValidationReport> {
    let mut reports = Vec::new();
    for file in files {
        match read_manifest_file(file) {
            Ok(managers) => reports.extend(
                managers
                    .iter()
                    .map(|manager| ValidationReport::new(file, manager, platform)),
            ),
            Err(error) => {
                warn!("Skipping {}: {:#}", file.display(), error);
                reports.push(ValidationReport::unreadable(file, &error));
            }
        }
    }
    reports
}

pub fn handle_validate_command(files: &[PathBuf], cli: &Cli) -> Result<ExitCode> {
    let reports = collect_reports(files, cli.platform);

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&reports)?),
        OutputFormat::Table => {
            let rows: Vec<ValidationRow> = reports.iter().map(ValidationRow::from).collect();
            println!("{}", TableTheme::apply_default(Table::new(rows)));
        }
    }

    if reports.iter().all(|r| r.valid) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
