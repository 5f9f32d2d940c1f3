use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(tick_ms) = env_u64("OPSDRILL_TICK_MS")? {
        builder = builder.with_simulation(|simulation| simulation.tick_ms = tick_ms);
    }

    if let Some(delay_ms) = env_u64("OPSDRILL_FINALIZE_DELAY_MS")? {
        builder = builder.with_simulation(|simulation| simulation.finalize_delay_ms = delay_ms);
    }

    if let Some(seed) = env_u64("OPSDRILL_HEALTH_SEED")? {
        builder = builder.with_health(|health| health.seed = Some(seed));
    }

    if let Some(no_color) = env_flag("OPSDRILL_NO_COLOR")? {
        builder = builder.with_output(|output| output.color = !no_color);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_flag(key: &str) -> Result<Option<bool>> {
    let Some(value) = env_string(key)? else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(Some(true)),
        "0" | "false" | "no" => Ok(Some(false)),
        other => Err(anyhow!("Failed to parse {key}='{other}' as a flag")),
    }
}
