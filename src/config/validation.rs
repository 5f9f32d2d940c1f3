use anyhow::{Result, bail};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.simulation.tick_ms == 0 {
        bail!("Stage tick must be greater than zero milliseconds");
    }

    let thresholds = [
        ("down_threshold", config.health.down_threshold),
        (
            "sweep_degraded_threshold",
            config.health.sweep_degraded_threshold,
        ),
        (
            "single_degraded_threshold",
            config.health.single_degraded_threshold,
        ),
    ];
    for (name, value) in thresholds {
        if !(0.0..=1.0).contains(&value) {
            bail!("Health {name} must be within [0, 1], got {value}");
        }
    }

    if config.health.down_threshold > config.health.sweep_degraded_threshold
        || config.health.down_threshold > config.health.single_degraded_threshold
    {
        bail!("Health down_threshold must not exceed the degraded thresholds");
    }

    Ok(())
}
