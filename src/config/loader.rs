use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{FileConfig, PersistedConfig};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".opsdrill/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;

        let config = builder.build()?;
        validate(&config)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let raw: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(raw.apply(builder))
    }
}

impl FileConfig {
    pub fn apply(self, mut builder: ConfigBuilder) -> ConfigBuilder {
        if let Some(simulation) = self.simulation {
            builder = builder.with_simulation(|settings| {
                if let Some(tick_ms) = simulation.tick_ms {
                    settings.tick_ms = tick_ms;
                }
                if let Some(delay_ms) = simulation.finalize_delay_ms {
                    settings.finalize_delay_ms = delay_ms;
                }
                if let Some(probe_ms) = simulation.connection_probe_ms {
                    settings.connection_probe_ms = probe_ms;
                }
            });
        }

        if let Some(health) = self.health {
            builder = builder.with_health(|settings| {
                if let Some(delay_ms) = health.sweep_delay_ms {
                    settings.sweep_delay_ms = delay_ms;
                }
                if let Some(delay_ms) = health.single_check_delay_ms {
                    settings.single_check_delay_ms = delay_ms;
                }
                if let Some(delay_ms) = health.send_delay_ms {
                    settings.send_delay_ms = delay_ms;
                }
                if let Some(threshold) = health.down_threshold {
                    settings.down_threshold = threshold;
                }
                if let Some(threshold) = health.sweep_degraded_threshold {
                    settings.sweep_degraded_threshold = threshold;
                }
                if let Some(threshold) = health.single_degraded_threshold {
                    settings.single_degraded_threshold = threshold;
                }
                if let Some(seed) = health.seed {
                    settings.seed = Some(seed);
                }
            });
        }

        if let Some(output) = self.output {
            builder = builder.with_output(|settings| {
                if let Some(color) = output.color {
                    settings.color = color;
                }
            });
        }

        builder
    }
}
