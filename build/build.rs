use chemanager_api::scheme::Scheme;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = out_dir.as_str();

    println!("cargo:rerun-if-changed=../api/src");

    write_crds(out_dir);
}

fn write_crds(out_dir: &str) {
    let dest_path = Path::new(out_dir).join("crds.yaml");
    let file = File::create(dest_path).unwrap();

    Scheme::default_scheme()
        .custom_resource_definitions()
        .iter()
        .fold(file, |mut output, crd| {
            writeln!(output, "---").unwrap();
            writeln!(output, "{}", serde_yaml::to_string(crd).unwrap().as_str()).unwrap();
            output
        });
}
