use crate::config::templates::starter_files;
use crate::io;
use anyhow::Result;
use std::path::Path;

/// Write the starter catalogs and an overrides example into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let existing: Vec<&str> = starter_files()
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| io::file_exists(&dir.join(name)))
        .collect();

    if !existing.is_empty() && !force {
        anyhow::bail!(
            "Configuration already exists in {} ({}). Use --force to overwrite.",
            dir.display(),
            existing.join(", ")
        );
    }

    io::ensure_dir(dir)?;
    for (name, contents) in starter_files() {
        io::write_file(&dir.join(name), contents)?;
    }
    println!("Created starter configuration in {}", dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_catalogs;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("data");

        init_config(&dir, false).unwrap();

        let catalogs = load_catalogs(&dir).unwrap();
        assert_eq!(catalogs.tiers.len(), 3);
        assert!(dir.join("overrides.toml").exists());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("tiers.csv"), "edited").unwrap();

        let err = init_config(temp_dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("tiers.csv"));
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("tiers.csv")).unwrap(),
            "edited"
        );

        init_config(temp_dir.path(), true).unwrap();
        assert!(load_catalogs(temp_dir.path()).is_ok());
    }
}
