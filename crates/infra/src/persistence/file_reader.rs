use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use csvstats_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|e| map_open_error(path, e))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read at most `limit` bytes from the start of the file.
    ///
    /// Unlike a single `read` call this keeps reading until `limit` bytes or EOF,
    /// so a short result always means the whole file was read.
    pub fn read_prefix(path: &Path, limit: usize) -> InfraResult<Vec<u8>> {
        let file = Self::open(path)?;
        let mut buf = Vec::with_capacity(limit);
        file.take(limit as u64)
            .read_to_end(&mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(buf)
    }
}

fn map_open_error(path: &Path, err: io::Error) -> InfrastructureError {
    if err.kind() == io::ErrorKind::NotFound {
        InfrastructureError::FileNotFound { path: path.to_path_buf() }
    } else {
        InfrastructureError::FileRead { path: path.to_path_buf(), source: err }
    }
}
