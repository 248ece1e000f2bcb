use chemanager_api::validation::Platform;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chemanagerctl",
    about = "Inspect and validate CheManager resources",
    version,
    long_about = "A command-line tool for generating, validating and listing the CheManager resources that configure the devworkspace gateway."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Kubernetes namespace to operate in
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Kubeconfig file path
    #[arg(long, global = true)]
    pub kubeconfig: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    pub output: OutputFormat,

    /// Platform the resources are validated against (kubernetes or openshift)
    #[arg(long, global = true, env = "CHE_PLATFORM", default_value = "kubernetes")]
    pub platform: Platform,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the CustomResourceDefinitions of the che.eclipse.org group
    Crd,
    /// Validate CheManager manifests
    Validate {
        /// Manifest files, each may hold several YAML documents
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show the effective configuration of CheManager manifests after defaults
    Resolve {
        /// Manifest file
        file: PathBuf,
    },
    /// List CheManager resources in the cluster
    Get {
        /// CheManager name (optional)
        name: Option<String>,
        /// Show all namespaces
        #[arg(short = 'A', long)]
        all_namespaces: bool,
        /// Label selector
        #[arg(short = 'l', long)]
        selector: Option<String>,
    },
}
