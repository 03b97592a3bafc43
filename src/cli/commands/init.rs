//! Write a default config file

use anyhow::Context;
use jax::config::JaxConfig;
use jax::output::OutputMode;

use super::SessionOptions;

/// Create `~/.jax/config.toml` with default settings
pub fn init(force: bool, options: &SessionOptions) -> anyhow::Result<()> {
    let path = JaxConfig::config_path();

    if path.exists() && !force {
        if options.mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "success": false,
                    "path": path.display().to_string(),
                    "message": "config already exists",
                })
            );
        } else {
            println!("Already initialized ({} exists).", path.display());
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    let mut config = JaxConfig::default();
    // keep the stored path absolute
    config.storage.data_dir = options
        .data_dir
        .as_deref()
        .map(std::path::absolute)
        .transpose()
        .context("resolving --data-dir")?;
    config.save()?;

    if options.mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "success": true,
                "path": path.display().to_string(),
                "data_dir": config.data_dir(None).display().to_string(),
            })
        );
    } else {
        println!("Created {}", path.display());
        println!("  Data directory: {}", config.data_dir(None).display());
    }

    Ok(())
}
