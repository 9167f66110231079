//! Hungry-count collection: one sample per tick, taken before the engine
//! steps, plus a final sample after the last tick.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use courier_core::config::SimConfig;
use courier_sim::SimulationEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HungerSample {
    pub tick: u64,
    pub hungry: u32,
}

/// Everything needed to reproduce and plot a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub seed: u64,
    pub config: SimConfig,
    pub samples: Vec<HungerSample>,
    pub peak: Option<HungerSample>,
    pub mean_hungry: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct HungerCollector {
    samples: Vec<HungerSample>,
}

impl HungerCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(&mut self, engine: &SimulationEngine) {
        self.samples.push(HungerSample {
            tick: engine.time().tick,
            hungry: engine.hungry_count() as u32,
        });
    }

    pub fn samples(&self) -> &[HungerSample] {
        &self.samples
    }

    /// Sample with the most hungry entities; earliest wins ties.
    pub fn peak(&self) -> Option<HungerSample> {
        self.samples
            .iter()
            .copied()
            .reduce(|best, s| if s.hungry > best.hungry { s } else { best })
    }

    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total: u64 = self.samples.iter().map(|s| s.hungry as u64).sum();
        Some(total as f64 / self.samples.len() as f64)
    }

    pub fn report(&self, engine: &SimulationEngine) -> MetricsReport {
        MetricsReport {
            seed: engine.seed(),
            config: engine.config().clone(),
            samples: self.samples.clone(),
            peak: self.peak(),
            mean_hungry: self.mean(),
        }
    }

    pub fn write_json(&self, engine: &SimulationEngine, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&self.report(engine))?)?;
        Ok(())
    }
}
