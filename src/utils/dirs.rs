use anyhow::Result;
use std::fs;
use std::path::Path;

// Base data directory
pub const DATA_DIR: &str = "data";

// Raw input datasets
pub const RAW_DATA_DIR: &str = "data/raw";

// Generated artifacts
pub const OUTPUT_DIR: &str = "output";

pub fn ensure_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

pub fn ensure_data_dirs() -> Result<()> {
    ensure_dir(DATA_DIR)?;
    Ok(())
}

pub fn ensure_raw_data_dirs() -> Result<()> {
    ensure_data_dirs()?;
    ensure_dir(RAW_DATA_DIR)?;
    Ok(())
}

pub fn ensure_output_dirs() -> Result<()> {
    ensure_dir(OUTPUT_DIR)?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_nested_path_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join(DATA_DIR).join("raw");
        let nested_str = nested.to_str().unwrap();
        ensure_dir(nested_str).unwrap();
        assert!(nested.is_dir());
        ensure_dir(nested_str).unwrap();
        assert!(nested.is_dir());
    }
}
