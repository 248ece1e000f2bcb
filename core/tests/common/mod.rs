//! Common utilities for integration tests

use chemanager_api::v1alpha1::{
    CheManager, CheManagerSpec, CheManagerSpecK8s, CheManagerStatus, GatewayPhase,
};
use std::collections::BTreeMap;

/// A CheManager with every spec field and a populated status
pub fn create_test_che_manager() -> CheManager {
    let mut manager = CheManager::new(
        "che",
        CheManagerSpec {
            gateway_host: Some("che.example.com".to_string()),
            gateway_disabled: false,
            gateway_image: Some("registry.local/gateway:1".to_string()),
            gateway_configurer_image: Some("registry.local/configurer:1".to_string()),
            tls_secret_name: Some("che-tls".to_string()),
            k8s: CheManagerSpecK8s {
                ingress_annotations: Some(BTreeMap::from([(
                    "kubernetes.io/ingress.class".to_string(),
                    "traefik".to_string(),
                )])),
            },
        },
    );
    manager.metadata.namespace = Some("eclipse-che".to_string());
    manager.status = Some(CheManagerStatus::active(
        GatewayPhase::Established,
        Some("che.example.com".to_string()),
    ));
    manager
}
