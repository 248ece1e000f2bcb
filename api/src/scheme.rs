use crate::v1alpha1::CheManager;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::core::ApiResource;
use kube::{CustomResourceExt, Resource};
use std::collections::BTreeMap;
use tracing::debug;

/// Registry of the kinds served by this API group, together with the CRDs
/// that install them.
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    resources: BTreeMap<String, ApiResource>,
    crds: BTreeMap<String, CustomResourceDefinition>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheme with every kind of this crate registered.
    pub fn default_scheme() -> Self {
        let mut scheme = Self::new();
        register(&mut scheme);
        scheme
    }

    /// Registers `K` and its list kind. Adding a kind twice replaces the
    /// previous entry.
    pub fn add<K>(&mut self) -> &mut Self
    where
        K: Resource<DynamicType = ()> + CustomResourceExt,
    {
        let resource = ApiResource::erase::<K>(&());
        let list = ApiResource {
            kind: format!("{}List", resource.kind),
            ..resource.clone()
        };

        debug!(
            "Registering {} and {} in {}",
            resource.kind, list.kind, resource.api_version
        );

        self.crds
            .insert(resource.kind.clone(), with_optional_spec(K::crd()));
        self.resources.insert(list.kind.clone(), list);
        self.resources.insert(resource.kind.clone(), resource);
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.resources.contains_key(kind)
    }

    pub fn api_resource(&self, kind: &str) -> Option<&ApiResource> {
        self.resources.get(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn custom_resource_definitions(&self) -> Vec<CustomResourceDefinition> {
        self.crds.values().cloned().collect()
    }
}

/// Every spec field has a default, so an object without `spec` is accepted
/// by the API server too.
fn with_optional_spec(mut crd: CustomResourceDefinition) -> CustomResourceDefinition {
    let schemas = crd
        .spec
        .versions
        .iter_mut()
        .filter_map(|version| version.schema.as_mut())
        .filter_map(|schema| schema.open_api_v3_schema.as_mut());

    for schema in schemas {
        if let Some(required) = schema.required.as_mut() {
            required.retain(|field| field != "spec");
            if required.is_empty() {
                schema.required = None;
            }
        }
    }
    crd
}

pub fn register(scheme: &mut Scheme) {
    scheme.add::<CheManager>();
}
