use std::path::PathBuf;

use thiserror::Error;

/// Failures of the file-to-file pipeline. Lexing itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: mmap_rs::Error,
    },

    #[error("cannot open output file {}: {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
