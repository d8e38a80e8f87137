//! Filesystem access for definition and output files

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::error;

use crate::core::error::Result;

/// Open a definition file for buffered, line-by-line reading
pub fn open_definition_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to open message file");
        e
    })?;
    Ok(BufReader::new(file))
}

/// Create or truncate the output file behind a buffered writer
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to create output file");
        e
    })?;
    Ok(BufWriter::new(file))
}
