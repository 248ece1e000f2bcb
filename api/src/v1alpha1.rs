use crate::validation::validate_ingress_annotation_keys;
use derive_builder::Builder;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Configuration of the routing layer that exposes devworkspace endpoints,
/// optionally through a shared gateway.
#[derive(
    Default,
    Builder,
    CustomResource,
    Validate,
    Deserialize,
    Serialize,
    Clone,
    Debug,
    JsonSchema,
    PartialEq,
)]
#[kube(
    kind = "CheManager",
    group = "che.eclipse.org",
    version = "v1alpha1",
    namespaced,
    singular = "chemanager",
    plural = "chemanagers",
    status = "CheManagerStatus",
    doc = "CheManager is the configuration of the CheManager layer of Devworkspace.",
    printcolumn = r#"{"name":"Host","type":"string","jsonPath":".status.gatewayHost"}"#,
    printcolumn = r#"{"name":"Gateway","type":"string","jsonPath":".status.gatewayPhase"}"#,
    printcolumn = r#"{"name":"Phase","type":"string","jsonPath":".status.phase"}"#,
    printcolumn = r#"{"name":"Message","type":"string","priority":1,"jsonPath":".status.message"}"#
)]
#[kube(derive = "Default")]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct CheManagerSpec {
    /// Full host name on which url-rewrite capable endpoints are exposed.
    /// Mandatory on Kubernetes, optional on OpenShift. Surrounding whitespace
    /// is ignored and a blank value counts as unset.
    #[validate(max_length = 253)]
    #[validate(
        pattern = "^\\s*([a-z0-9]([-a-z0-9]*[a-z0-9])?(\\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*)?\\s*$"
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_host: Option<String>,

    /// When true, every endpoint is exposed on a subdomain of the routing
    /// suffix and no gateway is deployed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub gateway_disabled: bool,

    /// Falls back to `RELATED_IMAGE_gateway`, then to a built-in image.
    #[validate(pattern = "\\S")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_image: Option<String>,

    /// Falls back to `RELATED_IMAGE_gateway_configurer`, then to a built-in image.
    #[validate(pattern = "\\S")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_configurer_image: Option<String>,

    /// Secret of type `kubernetes.io/tls` in the namespace of the resource.
    /// Empty means the default cluster certificate is used.
    #[validate(max_length = 253)]
    #[validate(
        pattern = "^\\s*([a-z0-9]([-a-z0-9]*[a-z0-9])?(\\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*)?\\s*$"
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_secret_name: Option<String>,

    #[validate]
    #[serde(default, skip_serializing_if = "CheManagerSpecK8s::is_empty")]
    pub k8s: CheManagerSpecK8s,
}

impl CheManagerSpec {
    pub fn builder() -> CheManagerSpecBuilder {
        CheManagerSpecBuilder::default()
    }

    pub fn gateway_host(&self) -> Option<&str> {
        non_blank(self.gateway_host.as_deref())
    }

    pub fn tls_secret_name(&self) -> Option<&str> {
        non_blank(self.tls_secret_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Options that only apply when running on plain Kubernetes.
#[derive(
    Default, Builder, Validate, Deserialize, Serialize, Clone, Debug, JsonSchema, PartialEq,
)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct CheManagerSpecK8s {
    /// Annotations put on the generated ingresses, both for the gateway and
    /// for the devworkspace endpoints.
    #[validate(custom = validate_ingress_annotation_keys)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_annotations: Option<BTreeMap<String, String>>,
}

impl CheManagerSpecK8s {
    pub fn builder() -> CheManagerSpecK8sBuilder {
        CheManagerSpecK8sBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ingress_annotations.is_none()
    }
}

#[derive(
    Deserialize,
    Serialize,
    Copy,
    Clone,
    Debug,
    JsonSchema,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum GatewayPhase {
    Initializing,
    Established,
    Inactive,
}

#[derive(
    Deserialize,
    Serialize,
    Copy,
    Clone,
    Debug,
    JsonSchema,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ManagerPhase {
    Active,
    Inactive,
    PendingDeletion,
}

#[derive(Default, Deserialize, Serialize, Clone, Debug, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheManagerStatus {
    /// Phase of the singlehost gateway deployment. `Inactive` when routing
    /// is not singlehost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_phase: Option<GatewayPhase>,

    /// Resolved host of the ingress or route serving the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<ManagerPhase>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheManagerStatus {
    pub fn active(gateway_phase: GatewayPhase, gateway_host: Option<String>) -> Self {
        Self {
            gateway_phase: Some(gateway_phase),
            gateway_host,
            phase: Some(ManagerPhase::Active),
            message: None,
        }
    }

    pub fn inactive<S: Into<String>>(message: S) -> Self {
        Self {
            gateway_phase: Some(GatewayPhase::Inactive),
            gateway_host: None,
            phase: Some(ManagerPhase::Inactive),
            message: Some(message.into()),
        }
    }

    pub fn pending_deletion<S: Into<String>>(message: S) -> Self {
        Self {
            gateway_phase: None,
            gateway_host: None,
            phase: Some(ManagerPhase::PendingDeletion),
            message: Some(message.into()),
        }
    }
}

pub type CheManagerList = kube::core::ObjectList<CheManager>;

impl CheManager {
    pub fn manager_phase(&self) -> Option<ManagerPhase> {
        self.status.as_ref().and_then(|s| s.phase)
    }

    pub fn gateway_phase(&self) -> Option<GatewayPhase> {
        self.status.as_ref().and_then(|s| s.gateway_phase)
    }

    pub fn is_pending_deletion(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
            || self.manager_phase() == Some(ManagerPhase::PendingDeletion)
    }
}
