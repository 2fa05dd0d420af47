//! The `validate-config` command: parse a scoring config file and report
//! whether it would be accepted as-is.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::SpoilmapConfig;

pub fn validate_config_file(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(".spoilmap.toml"));
    validate_at(&path)
}

fn validate_at(path: &Path) -> Result<()> {
    let file = SpoilmapConfig::from_path(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    match file.scoring {
        None => {
            println!(
                "{}: no [scoring] section, defaults will be used",
                path.display()
            );
        }
        Some(scoring) => {
            scoring
                .validate()
                .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
            println!("{}: valid", path.display());
        }
    }

    Ok(())
}
