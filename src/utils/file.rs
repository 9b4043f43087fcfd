use crate::models::error::RegistryError;
use camino::Utf8Path;
use tracing::debug;
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Creates every missing segment of `path`, root first.
    /// Per-segment failures (already exists, permissions) are ignored; a caller
    /// writing into `path` afterwards surfaces any real problem.
    pub fn ensure_directory(path: &Utf8Path) {
        let mut segments: Vec<&Utf8Path> = path
            .ancestors()
            .filter(|a| !a.as_str().is_empty())
            .collect();
        segments.reverse();

        for segment in segments {
            if let Err(e) = std::fs::create_dir(segment) {
                if e.kind() != std::io::ErrorKind::AlreadyExists {
                    debug!("Skipping directory segment {segment}: {e}");
                }
            }
        }
    }

    /// Recursively deletes `path` and everything below it. Missing paths are a no-op.
    /// Links are removed as entries, never followed.
    pub fn force_remove_directory(path: &Utf8Path) -> Result<(), RegistryError> {
        if std::fs::symlink_metadata(path).is_err() {
            return Ok(());
        }

        let walker = WalkDir::new(path)
            .follow_links(false)
            .follow_root_links(false)
            .contents_first(true);

        for entry in walker {
            let entry = entry.map_err(|e| RegistryError::IOError(e.to_string()))?;
            if entry.file_type().is_dir() {
                std::fs::remove_dir(entry.path())?;
            } else {
                std::fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }

    /// Immediate entries of `dir` whose names are valid UTF-8, in enumeration order.
    pub fn list_entry_names(dir: &Utf8Path) -> Result<Vec<String>, RegistryError> {
        Ok(std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect())
    }

    pub fn is_dir(path: &Utf8Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::tempdir;

    fn utf8_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_ensure_directory_creates_nested_segments() {
        let tmp = tempdir().unwrap();
        let root = utf8_root(&tmp);
        let target = root.join("a/b/c");

        FileUtils::ensure_directory(&target);

        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_directory_tolerates_existing_segments() {
        let tmp = tempdir().unwrap();
        let root = utf8_root(&tmp);
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/keep.txt"), "x").unwrap();

        FileUtils::ensure_directory(&root.join("a/b/c"));
        FileUtils::ensure_directory(&root.join("a/b/c"));

        assert!(root.join("a/b/c").is_dir());
        assert!(root.join("a/b/keep.txt").is_file());
    }

    #[test]
    fn test_force_remove_directory_deletes_tree() {
        let tmp = tempdir().unwrap();
        let root = utf8_root(&tmp);
        let target = root.join("mod");
        fs::create_dir_all(target.join("lib/deep")).unwrap();
        fs::write(target.join("index.js"), "").unwrap();
        fs::write(target.join("lib/deep/data.json"), "{}").unwrap();

        FileUtils::force_remove_directory(&target).unwrap();

        assert!(!target.exists());
        assert!(root.exists());
    }

    #[test]
    fn test_force_remove_directory_missing_is_noop() {
        let tmp = tempdir().unwrap();
        let root = utf8_root(&tmp);

        assert!(FileUtils::force_remove_directory(&root.join("nope")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_force_remove_directory_does_not_follow_links() {
        let tmp = tempdir().unwrap();
        let root = utf8_root(&tmp);
        let outside = root.join("outside");
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("precious.txt"), "keep").unwrap();

        let target = root.join("mod");
        fs::create_dir_all(&target).unwrap();
        std::os::unix::fs::symlink(&outside, target.join("link")).unwrap();

        FileUtils::force_remove_directory(&target).unwrap();

        assert!(!target.exists());
        assert!(outside.join("precious.txt").is_file());
    }
}
