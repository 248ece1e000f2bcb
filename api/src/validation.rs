use crate::v1alpha1::CheManager;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_valid::validation::{Error, Errors};
use serde_valid::Validate;
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;
use tracing::debug;

const DNS_SUBDOMAIN_MAX_LENGTH: usize = 253;
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;

#[allow(clippy::expect_used)]
static DNS_SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("valid DNS subdomain pattern")
});

#[allow(clippy::expect_used)]
static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").expect("valid qualified name pattern")
});

/// The cluster flavour a `CheManager` is deployed on. Some fields are only
/// mandatory on one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    Kubernetes,
    OpenShift,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("metadata.name must be set")]
    MissingName,

    #[error("spec.gatewayHost is required on {0}")]
    MissingGatewayHost(Platform),

    #[error("Invalid spec: {0}")]
    InvalidSpec(#[from] Errors<Error>),
}

/// Every violation found in a single `CheManager`.
#[derive(Debug, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub fn is_dns_subdomain(value: &str) -> bool {
    value.len() <= DNS_SUBDOMAIN_MAX_LENGTH && DNS_SUBDOMAIN.is_match(value)
}

/// Annotation and label keys: an optional DNS subdomain prefix followed by
/// `/` and a name of at most 63 characters.
pub fn is_qualified_name(key: &str) -> bool {
    let (prefix, name) = match key.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, key),
    };

    if prefix.is_some_and(|p| p.is_empty() || !is_dns_subdomain(p)) {
        return false;
    }

    name.len() <= QUALIFIED_NAME_MAX_LENGTH && QUALIFIED_NAME.is_match(name)
}

#[allow(clippy::ref_option)]
pub fn validate_ingress_annotation_keys(
    annotations: &Option<BTreeMap<String, String>>,
) -> Result<(), Error> {
    let invalid: Vec<&str> = annotations
        .iter()
        .flat_map(BTreeMap::keys)
        .map(String::as_str)
        .filter(|key| !is_qualified_name(key))
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(Error::Custom(format!(
            "Ingress annotation keys must be qualified names: {}",
            invalid.join(", ")
        )))
    }
}

/// Checks the field rules declared on `CheManagerSpec` together with the
/// rules that depend on metadata or on the platform.
pub fn validate(manager: &CheManager, platform: Platform) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if manager
        .metadata
        .name
        .as_deref()
        .is_none_or(str::is_empty)
    {
        errors.push(ValidationError::MissingName);
    }

    if platform == Platform::Kubernetes && manager.spec.gateway_host().is_none() {
        errors.push(ValidationError::MissingGatewayHost(platform));
    }

    if let Err(e) = manager.spec.validate() {
        errors.push(ValidationError::InvalidSpec(e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!(
            "CheManager {:?} has {} validation error(s) on {}",
            manager.metadata.name,
            errors.len(),
            platform
        );
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1alpha1::{CheManagerSpec, CheManagerSpecK8s};
    use assertables::{assert_err, assert_ok};
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid_manager() -> CheManager {
        CheManager::new(
            "che",
            CheManagerSpec {
                gateway_host: Some("che.example.com".to_string()),
                tls_secret_name: Some("che-tls".to_string()),
                ..CheManagerSpec::default()
            },
        )
    }

    #[rstest]
    #[case(Platform::Kubernetes)]
    #[case(Platform::OpenShift)]
    fn test_valid_manager(valid_manager: CheManager, #[case] platform: Platform) {
        assert_ok!(validate(&valid_manager, platform));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn test_gateway_host_required_on_kubernetes(
        mut valid_manager: CheManager,
        #[case] host: Option<&str>,
    ) {
        valid_manager.spec.gateway_host = host.map(ToString::to_string);

        let errors = assert_err!(validate(&valid_manager, Platform::Kubernetes));
        assert!(matches!(
            errors.errors(),
            [ValidationError::MissingGatewayHost(Platform::Kubernetes)]
        ));
        assert_ok!(validate(&valid_manager, Platform::OpenShift));
    }

    #[rstest]
    #[case("Che.Example.com")]
    #[case("-che.example.com")]
    #[case("che..example.com")]
    #[case("che_example.com")]
    #[case("che example.com")]
    fn test_invalid_gateway_host(mut valid_manager: CheManager, #[case] host: &str) {
        valid_manager.spec.gateway_host = Some(host.to_string());

        let errors = assert_err!(validate(&valid_manager, Platform::OpenShift));
        assert!(matches!(errors.errors(), [ValidationError::InvalidSpec(_)]));
    }

    #[rstest]
    fn test_gateway_host_longer_than_a_subdomain(mut valid_manager: CheManager) {
        let label = "a".repeat(60);
        valid_manager.spec.gateway_host = Some(vec![label.as_str(); 5].join("."));

        let errors = assert_err!(validate(&valid_manager, Platform::OpenShift));
        assert!(matches!(errors.errors(), [ValidationError::InvalidSpec(_)]));
    }

    #[rstest]
    #[case(Some(""))]
    #[case(Some(" "))]
    #[case(Some(" che.example.com "))]
    #[case(Some("che.example.com"))]
    fn test_accessors_and_validation_agree_on_blank_values(
        mut valid_manager: CheManager,
        #[case] value: Option<&str>,
    ) {
        valid_manager.spec.gateway_host = value.map(ToString::to_string);
        valid_manager.spec.tls_secret_name = value.map(ToString::to_string);

        let spec = &valid_manager.spec;
        assert_eq!(spec.gateway_host(), spec.tls_secret_name());
        assert_ok!(validate(&valid_manager, Platform::OpenShift));

        let on_kubernetes = validate(&valid_manager, Platform::Kubernetes);
        assert_eq!(on_kubernetes.is_ok(), spec.gateway_host().is_some());
    }

    #[rstest]
    fn test_blank_image_is_rejected(mut valid_manager: CheManager) {
        valid_manager.spec.gateway_configurer_image = Some(" ".to_string());

        let errors = assert_err!(validate(&valid_manager, Platform::Kubernetes));
        assert!(matches!(errors.errors(), [ValidationError::InvalidSpec(_)]));
    }

    #[rstest]
    fn test_collects_every_violation(mut valid_manager: CheManager) {
        valid_manager.metadata.name = None;
        valid_manager.spec.gateway_host = None;
        valid_manager.spec.tls_secret_name = Some("Not_A_Secret".to_string());
        valid_manager.spec.gateway_image = Some("  ".to_string());
        valid_manager.spec.k8s = CheManagerSpecK8s {
            ingress_annotations: Some(BTreeMap::from([
                ("kubernetes.io/ingress.class".to_string(), "nginx".to_string()),
                ("/bad".to_string(), "x".to_string()),
            ])),
        };

        let errors = assert_err!(validate(&valid_manager, Platform::Kubernetes));
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            errors.errors(),
            [
                ValidationError::MissingName,
                ValidationError::MissingGatewayHost(Platform::Kubernetes),
                ValidationError::InvalidSpec(_),
            ]
        ));

        let message = errors.to_string();
        assert!(message.contains("spec.gatewayHost is required on kubernetes"));
        assert!(message.contains("Ingress annotation keys must be qualified names: /bad"));
    }

    #[test]
    fn test_annotation_keys_are_checked() {
        let valid = Some(BTreeMap::from([(
            "nginx.ingress.kubernetes.io/ssl-redirect".to_string(),
            "true".to_string(),
        )]));
        assert_ok!(validate_ingress_annotation_keys(&valid));
        assert_ok!(validate_ingress_annotation_keys(&None));

        let invalid = Some(BTreeMap::from([("a/b/c".to_string(), String::new())]));
        let error = assert_err!(validate_ingress_annotation_keys(&invalid));
        assert!(error.to_string().contains("a/b/c"));
    }

    #[rstest]
    #[case("kubernetes.io/ingress.class", true)]
    #[case("nginx.ingress.kubernetes.io/proxy-read-timeout", true)]
    #[case("simple", true)]
    #[case("with_underscore.and-dash", true)]
    #[case("", false)]
    #[case("/name", false)]
    #[case("prefix/", false)]
    #[case("Upper.Case/name", false)]
    #[case("a/b/c", false)]
    #[case("-leading", false)]
    fn test_is_qualified_name(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_qualified_name(key), expected);
    }

    #[rstest]
    #[case("kubernetes", Platform::Kubernetes)]
    #[case("OpenShift", Platform::OpenShift)]
    #[case("openshift", Platform::OpenShift)]
    fn test_platform_parsing(#[case] input: &str, #[case] expected: Platform) {
        assert_eq!(assert_ok!(input.parse::<Platform>()), expected);
    }

    proptest! {
        #[test]
        fn test_generated_subdomains_are_valid(
            labels in prop::collection::vec("[a-z0-9]([-a-z0-9]{0,10}[a-z0-9])?", 1..5)
        ) {
            let host = labels.join(".");
            prop_assert!(is_dns_subdomain(&host));

            let spec = CheManagerSpec {
                gateway_host: Some(host),
                ..CheManagerSpec::default()
            };
            prop_assert!(spec.validate().is_ok());
        }

        #[test]
        fn test_long_names_are_rejected(name in "[a-z]{64,80}") {
            prop_assert!(!is_qualified_name(&name));
        }
    }
}
