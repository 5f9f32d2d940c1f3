use super::types::{Config, HealthSettings, OutputSettings, SimulationSettings};
use anyhow::Result;

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) simulation: SimulationSettings,
    pub(super) health: HealthSettings,
    pub(super) output: OutputSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            simulation: SimulationSettings::default(),
            health: HealthSettings::default(),
            output: OutputSettings::default(),
        }
    }

    pub fn with_simulation<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut SimulationSettings),
    {
        update(&mut self.simulation);
        self
    }

    pub fn with_health<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut HealthSettings),
    {
        update(&mut self.health);
        self
    }

    pub fn with_output<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut OutputSettings),
    {
        update(&mut self.output);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            simulation: self.simulation,
            health: self.health,
            output: self.output,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
