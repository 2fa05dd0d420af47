use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".spoilmap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Spoilmap Configuration
# All values shown are the defaults; delete what you don't tune.

[scoring.weights]
# Must sum to 1.0
storage = 0.40
temperature = 0.25
humidity = 0.15
gas = 0.20

[scoring.baselines]
optimal_temperature_c = 10.0
temperature_sensitivity = 8.0
default_temperature_deviation = 5.0
optimal_humidity_pct = 65.0
humidity_sensitivity = 4.0
default_humidity_deviation = 10.0

[scoring.gas]
full_scale = 10.0
missing_default = 30.0
low_score = 10.0
normal_score = 40.0
high_score = 85.0

[scoring.tiers]
fresh_max = 30
moderate_max = 70
"#;

    fs::write(&config_path, default_config)?;
    println!("Created .spoilmap.toml configuration file");

    Ok(())
}
