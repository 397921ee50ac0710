use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{OutputError, Result};

/// Open the destination: `-` is standard output, anything else a file that
/// is created or truncated.
pub fn open_sink(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path).map_err(|source| OutputError::NotWritable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufWriter::new(file)))
}
