use crate::defaults::ImageDefaults;
use crate::v1alpha1::{CheManagerSpec, GatewayPhase};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `CheManagerSpec` with every documented default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfiguration {
    pub gateway_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_host: Option<String>,
    pub gateway_image: String,
    pub gateway_configurer_image: String,
    /// `None` selects the default cluster certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_secret_name: Option<String>,
    pub ingress_annotations: BTreeMap<String, String>,
    pub expected_gateway_phase: GatewayPhase,
}

impl CheManagerSpec {
    pub fn resolve(&self, defaults: &ImageDefaults) -> EffectiveConfiguration {
        let image = |configured: Option<&String>, fallback: &str| {
            configured
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        let gateway_enabled = !self.gateway_disabled;

        EffectiveConfiguration {
            gateway_enabled,
            gateway_host: self.gateway_host().map(ToString::to_string),
            gateway_image: image(self.gateway_image.as_ref(), defaults.gateway.as_str()),
            gateway_configurer_image: image(
                self.gateway_configurer_image.as_ref(),
                defaults.gateway_configurer.as_str(),
            ),
            tls_secret_name: self.tls_secret_name().map(ToString::to_string),
            ingress_annotations: self.k8s.effective_ingress_annotations(),
            expected_gateway_phase: if gateway_enabled {
                GatewayPhase::Initializing
            } else {
                GatewayPhase::Inactive
            },
        }
    }
}
