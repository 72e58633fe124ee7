//! Init command: write a config template.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tierlist_core::Config;

pub fn run(config_path: &str, force: bool) -> Result<()> {
    let path = Path::new(config_path);
    if force && path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", config_path))?;
    }
    Config::write_template(path)
        .with_context(|| format!("Failed to write config template to {}", config_path))?;
    println!("Wrote {}", config_path);
    Ok(())
}
