use anyhow::Result;

use swivel_core::AppConfig;

pub fn run(config: AppConfig) -> Result<()> {
    let path = AppConfig::config_path();

    if path.exists() {
        println!("Configuration already exists at {}", path.display());
        return Ok(());
    }

    config.save()?;
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}
