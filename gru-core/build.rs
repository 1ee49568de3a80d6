//! Build script for gru-core
//!
//! Enumerates the bundled attribute documents so that every JSON file under
//! `data/bios/amd/epyc/rome/` is embedded into the library.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the AMD EPYC Rome descriptors, relative to the manifest
const ROME_DIR: &str = "data/bios/amd/epyc/rome";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={ROME_DIR}");

    if let Err(err) = run() {
        panic!("{err}");
    }
}

/// Main build logic
fn run() -> Result<(), String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map_err(|err| format!("CARGO_MANIFEST_DIR not set by Cargo: {err}"))?;
    let out_dir =
        PathBuf::from(env::var("OUT_DIR").map_err(|err| format!("OUT_DIR not set by Cargo: {err}"))?);

    let names = json_documents(&Path::new(&manifest_dir).join(ROME_DIR))?;
    let generated = out_dir.join("rome_corpus.rs");
    fs::write(&generated, corpus_source(&names))
        .map_err(|err| format!("failed to write {}: {err}", generated.display()))
}

/// Collect the `*.json` file names of `dir` in lexicographic order
fn json_documents(dir: &Path) -> Result<Vec<String>, String> {
    let entries =
        fs::read_dir(dir).map_err(|err| format!("failed to read {}: {err}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read {}: {err}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| format!("non UTF-8 document name: {}", path.display()))?;
        names.push(name.to_string());
    }
    names.sort();
    Ok(names)
}

/// Render the array expression included by `src/bios/corpus.rs`
fn corpus_source(names: &[String]) -> String {
    let mut source = String::from("[\n");
    for name in names {
        // Writing to a String cannot fail.
        let _ = writeln!(source, "    rome_document!({name:?}),");
    }
    source.push(']');
    source
}
