//! Command-line parameters.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use courier_core::config::SimConfig;
use courier_core::constants::DEFAULT_TICK_DELAY_MS;

use crate::ascii::FrameStyle;
use crate::game_loop::RunOptions;

#[derive(Debug, Parser)]
#[command(author, version, about = "Courier delivery grid simulation", long_about = None)]
pub struct Cli {
    /// JSON file with a SimConfig; flags below override its fields.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short = 'n', long)]
    pub entities: Option<usize>,
    #[arg(short = 'k', long)]
    pub couriers: Option<usize>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long)]
    pub hunger_rate: Option<f64>,
    #[arg(long)]
    pub capacity: Option<u32>,
    /// Disable toroidal edges.
    #[arg(long)]
    pub no_wrap: bool,
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of ticks to run.
    #[arg(short, long, default_value_t = 1000)]
    pub ticks: u64,
    /// Real-time delay between ticks; 0 runs flat out.
    #[arg(long, default_value_t = DEFAULT_TICK_DELAY_MS)]
    pub delay_ms: u64,
    /// Print a text frame every N ticks.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub render_every: Option<u64>,
    /// Colour frames with ANSI escapes.
    #[arg(long)]
    pub colour: bool,
    /// Write the collected hungry-count series here as JSON.
    #[arg(short, long)]
    pub metrics_out: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the simulation config: file (or defaults) first, then flags.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str::<SimConfig>(&content)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(n) = self.entities {
            config.entity_count = n;
        }
        if let Some(n) = self.couriers {
            config.courier_count = n;
        }
        if let Some(w) = self.width {
            config.grid_width = w;
        }
        if let Some(h) = self.height {
            config.grid_height = h;
        }
        if let Some(rate) = self.hunger_rate {
            config.hunger_rate = rate;
        }
        if let Some(capacity) = self.capacity {
            config.courier_capacity = capacity;
        }
        if self.no_wrap {
            config.wrap_edges = false;
        }
        if self.seed.is_some() {
            config.random_seed = self.seed;
        }

        Ok(config)
    }

    pub fn frame_style(&self) -> FrameStyle {
        if self.colour {
            FrameStyle::Ansi
        } else {
            FrameStyle::Plain
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            ticks: self.ticks,
            tick_delay: Duration::from_millis(self.delay_ms),
            render_every: self.render_every,
        }
    }
}
