use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# taskpoints configuration

[parallel]
enabled = true
# max_concurrency = 4
min_parallel_len = 1024

[output]
format = "terminal"
plain = false
"#;

/// Write the default configuration into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Created {}", config_path.display());

    Ok(())
}
