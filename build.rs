use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");
    println!("cargo:rerun-if-changed=placeholders.json");

    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();

    // target/<profile>/ sits three levels above OUT_DIR
    let dest_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap();

    // Copy runtime files next to the executable
    for file in ["config.toml", "placeholders.json"] {
        let src = Path::new(file);
        if src.exists() {
            fs::copy(src, dest_dir.join(file)).unwrap();
        }
    }
}
