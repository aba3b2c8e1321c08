use std::{io::Write as _, path::Path};

use crate::foundation::error::{TextGifError, TextGifResult};

pub fn ensure_parent_dir(path: &Path) -> TextGifResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            TextGifError::file_write(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Write `bytes` to `path` all-or-nothing.
///
/// The data goes to a temporary file next to `path` and is renamed over it
/// once fully flushed, replacing any existing file. On failure the temporary
/// file is removed and `path` is left untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> TextGifResult<()> {
    ensure_parent_dir(path)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let io_err = |what: &str, e: std::io::Error| {
        TextGifError::file_write(format!("{what} for '{}': {e}", path.display()))
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".textgif-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| io_err("create temporary file", e))?;
    tmp.write_all(bytes)
        .map_err(|e| io_err("write temporary file", e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| io_err("sync temporary file", e))?;
    tmp.persist(path)
        .map_err(|e| io_err("replace output file", e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn creates_missing_parents_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("nested").join("deeper").join("out.gif");

        write_atomic(&out, b"first").unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"first");

        write_atomic(&out, b"second, longer").unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"second, longer");
        assert_eq!(entries(out.parent().unwrap()), vec!["out.gif".to_string()]);
    }

    #[test]
    fn failed_write_leaves_no_partial_files() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("taken");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep.txt"), b"x").unwrap();

        let err = write_atomic(&blocker, b"gif bytes").unwrap_err();
        assert!(matches!(err, TextGifError::FileWrite(_)));
        assert!(blocker.is_dir());
        assert_eq!(entries(root.path()), vec!["taken".to_string()]);
    }

    #[test]
    fn parent_that_is_a_file_is_a_write_error() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("plain");
        std::fs::write(&file, b"x").unwrap();

        let err = write_atomic(&file.join("out.gif"), b"gif").unwrap_err();
        assert!(matches!(err, TextGifError::FileWrite(_)));
    }
}
