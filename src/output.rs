use crate::entry::{EntriesDocument, Entry};
use crate::error::{ConvertError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `value` as indented JSON, replacing `path` only once the whole
/// document is on disk.
///
/// Non-ASCII text is written literally. A failure leaves the previous file
/// untouched.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;

    let tmp = temp_path(path);
    let written = fs::write(&tmp, &json).and_then(|()| fs::rename(&tmp, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp);
        return Err(ConvertError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Save converted entries as `{"entries": [...]}`.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    write_json_atomic(path, &EntriesDocument { entries })?;
    tracing::info!("Wrote {} entries to {:?}", entries.len(), path);
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(
            temp_path(Path::new("dir/settings.json")),
            PathBuf::from("dir/settings.json.tmp")
        );
    }

    #[test]
    fn test_write_entries_is_pretty_and_unescaped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_entries(&path, &[Entry::new("猫", "ねこ")]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"entries\": [\n    {\n      \"word\": \"猫\",\n      \"reading\": \"ねこ\"\n    }\n  ]\n}"
        );
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_entries(&path, &[]).unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
    }
}
