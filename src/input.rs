use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Bytes every algorithm hashes. Read once, never modified afterwards.
#[derive(Debug)]
pub struct InputBuffer {
    data: Vec<u8>,
}

impl InputBuffer {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .with_context(|| format!("Could not read input file {}", path.display()))?;
        Ok(Self { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for InputBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_reads_whole_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"hello\nworld")?;

        let input = InputBuffer::load(file.path())?;
        assert_eq!(input.as_bytes(), b"hello\nworld");
        assert_eq!(input.len(), 11);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputBuffer::load(dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }
}
