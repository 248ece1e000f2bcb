/// Every CustomResourceDefinition of the `che.eclipse.org` group, as written
/// by the build script.
pub const CRDS_YAML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/crds.yaml"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_crds() {
        assert!(CRDS_YAML.starts_with("---\n"));
        assert!(CRDS_YAML.contains("name: chemanagers.che.eclipse.org"));
        assert!(CRDS_YAML.contains("kind: CheManager"));
        assert!(CRDS_YAML.contains("scope: Namespaced"));
        assert!(!CRDS_YAML.contains("- spec\n"));
    }
}
