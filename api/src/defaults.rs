use crate::constants::{
    DEFAULT_GATEWAY_CONFIGURER_IMAGE, DEFAULT_GATEWAY_IMAGE, DEFAULT_INGRESS_ANNOTATIONS,
    GATEWAY_CONFIGURER_IMAGE_ENV_VAR, GATEWAY_IMAGE_ENV_VAR,
};
use crate::v1alpha1::CheManagerSpecK8s;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Images used when a `CheManager` does not name its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDefaults {
    pub gateway: String,
    pub gateway_configurer: String,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            gateway: DEFAULT_GATEWAY_IMAGE.to_string(),
            gateway_configurer: DEFAULT_GATEWAY_CONFIGURER_IMAGE.to_string(),
        }
    }
}

impl ImageDefaults {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves each image from `lookup`, falling back to the built-in image
    /// when the variable is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |var: &str, fallback: &str| match lookup(var) {
            Some(value) if !value.trim().is_empty() => {
                debug!("Using image {} from {}", value, var);
                value.trim().to_string()
            }
            _ => fallback.to_string(),
        };

        Self {
            gateway: resolve(GATEWAY_IMAGE_ENV_VAR, DEFAULT_GATEWAY_IMAGE),
            gateway_configurer: resolve(
                GATEWAY_CONFIGURER_IMAGE_ENV_VAR,
                DEFAULT_GATEWAY_CONFIGURER_IMAGE,
            ),
        }
    }
}

pub fn default_ingress_annotations() -> BTreeMap<String, String> {
    DEFAULT_INGRESS_ANNOTATIONS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl CheManagerSpecK8s {
    /// The configured annotations, or the nginx defaults when none are set.
    pub fn effective_ingress_annotations(&self) -> BTreeMap<String, String> {
        match &self.ingress_annotations {
            Some(annotations) if !annotations.is_empty() => annotations.clone(),
            _ => default_ingress_annotations(),
        }
    }
}
