use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Component, Path, PathBuf};

use crate::errors::{FetcherError, FetcherResult};

/// Buffer size used when copying a download to disk
pub const CHUNK_SIZE: usize = 8192;

/// Directory the downloaded files are written into
#[derive(Debug, Clone)]
pub struct OutputDirectory {
    path: PathBuf,
}

impl OutputDirectory {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and its ancestors. Existing content is left alone.
    pub fn ensure(&self) -> FetcherResult<()> {
        fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Destination path for a file name; the name must stay inside the directory
    pub fn destination(&self, file_name: &str) -> FetcherResult<PathBuf> {
        let mut components = Path::new(file_name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !single_normal || file_name.contains(['/', '\\']) {
            return Err(FetcherError::InvalidFileName(file_name.to_string()));
        }

        Ok(self.path.join(file_name))
    }

    /// Write `reader` to a path from `destination`, replacing any previous file.
    /// Returns the number of bytes written.
    pub fn write_stream<R: Read + ?Sized>(
        &self,
        destination: &Path,
        reader: &mut R,
    ) -> FetcherResult<u64> {
        let file = File::create(destination)?;
        let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
        let written = io::copy(reader, &mut writer)?;
        writer.flush()?;

        Ok(written)
    }
}
