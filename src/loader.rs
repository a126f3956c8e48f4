use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures raised by the file-reading collaborator. The splitter itself
/// never touches the filesystem.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("file '{}' is not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read an entire text file, decoding its contents as UTF-8
pub fn read_text(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_text(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_reads_utf8_contents() {
        let path = env::temp_dir().join("contexx_loader_roundtrip.txt");
        fs::write(&path, "alpha\n\nbeta").unwrap();

        let text = read_text(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(text, "alpha\n\nbeta");
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let path = env::temp_dir().join("contexx_loader_binary.dat");
        fs::write(&path, [0xffu8, 0xfe, 0x00, 0x41]).unwrap();

        let err = read_text(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::InvalidEncoding { .. }));
    }
}
