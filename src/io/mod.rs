use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("reports").join("q3").join("roi.md");

        write_file(&nested, "# ROI").unwrap();

        assert!(file_exists(&nested));
        assert_eq!(fs::read_to_string(&nested).unwrap(), "# ROI");
    }

    #[test]
    fn ensure_dir_accepts_empty_parent() {
        // `Path::new("roi.md").parent()` is the empty path.
        assert!(ensure_dir(Path::new("")).is_ok());
    }
}
