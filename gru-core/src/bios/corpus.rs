//! Attribute descriptors bundled with the binary.
//!
//! Documents were captured from AMD EPYC Rome BMCs, one attribute per file.
//! Every `*.json` file under `data/bios/amd/epyc/rome/` is embedded; the build
//! script enumerates the directory in name order.

/// A descriptor document and the name it is known by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusDocument<'a> {
    /// File name of the document, used for ordering and diagnostics.
    pub name: &'a str,
    /// Raw JSON contents.
    pub contents: &'a str,
}

macro_rules! rome_document {
    ($file:literal) => {
        CorpusDocument {
            name: $file,
            contents: include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/data/bios/amd/epyc/rome/",
                $file
            )),
        }
    };
}

/// Built-in AMD EPYC Rome attribute documents, sorted by file name.
pub const ROME: &[CorpusDocument<'static>] =
    &include!(concat!(env!("OUT_DIR"), "/rome_corpus.rs"));
