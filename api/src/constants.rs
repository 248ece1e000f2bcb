pub const GROUP: &str = "che.eclipse.org";
pub const VERSION: &str = "v1alpha1";
pub const API_VERSION: &str = "che.eclipse.org/v1alpha1";

pub const CHE_MANAGER_CRD_KIND: &str = "CheManager";
pub const CHE_MANAGER_LIST_KIND: &str = "CheManagerList";
pub const CHE_MANAGER_PLURAL: &str = "chemanagers";

pub const GATEWAY_IMAGE_ENV_VAR: &str = "RELATED_IMAGE_gateway";
pub const GATEWAY_CONFIGURER_IMAGE_ENV_VAR: &str = "RELATED_IMAGE_gateway_configurer";

pub const DEFAULT_GATEWAY_IMAGE: &str = "quay.io/eclipse/che--traefik:v2.3.2";
pub const DEFAULT_GATEWAY_CONFIGURER_IMAGE: &str = "quay.io/che-incubator/configbump:0.1.4";

pub const INGRESS_CLASS_ANNOTATION: &str = "kubernetes.io/ingress.class";
pub const NGINX_PROXY_READ_TIMEOUT_ANNOTATION: &str = "nginx.ingress.kubernetes.io/proxy-read-timeout";
pub const NGINX_PROXY_CONNECT_TIMEOUT_ANNOTATION: &str =
    "nginx.ingress.kubernetes.io/proxy-connect-timeout";
pub const NGINX_SSL_REDIRECT_ANNOTATION: &str = "nginx.ingress.kubernetes.io/ssl-redirect";

pub const DEFAULT_INGRESS_ANNOTATIONS: [(&str, &str); 4] = [
    (INGRESS_CLASS_ANNOTATION, "nginx"),
    (NGINX_PROXY_READ_TIMEOUT_ANNOTATION, "3600"),
    (NGINX_PROXY_CONNECT_TIMEOUT_ANNOTATION, "3600"),
    (NGINX_SSL_REDIRECT_ANNOTATION, "true"),
];

/// Secrets referenced by `tlsSecretName` must carry this type.
pub const TLS_SECRET_TYPE: &str = "kubernetes.io/tls";
