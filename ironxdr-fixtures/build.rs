use std::path::PathBuf;

fn main() {
    let out_dir = match std::env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => panic!("OUT_DIR not set: {e}"),
    };

    if let Err(e) = ironxdr_codegen::build::compile(&["xdr/fixtures.x"], out_dir.join("fixtures.rs")) {
        panic!("Failed to generate fixtures: {e}");
    }
}
