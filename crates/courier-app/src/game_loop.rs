//! Paced run loop: samples the hungry count, advances the engine one tick,
//! hands out periodic frames, then sleeps until the next tick is due.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use courier_core::errors::SimError;
use courier_core::state::WorldSnapshot;
use courier_sim::SimulationEngine;

use crate::collector::HungerCollector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub ticks: u64,
    /// Zero disables pacing.
    pub tick_delay: Duration,
    /// Emit a frame whenever the tick counter is a multiple of this.
    pub render_every: Option<u64>,
}

/// Run `options.ticks` ticks. The collector sees the world before each tick
/// and once more after the last one.
pub fn run<F>(
    engine: &mut SimulationEngine,
    options: &RunOptions,
    collector: &mut HungerCollector,
    mut on_frame: F,
) -> Result<(), SimError>
where
    F: FnMut(&WorldSnapshot),
{
    info!(
        ticks = options.ticks,
        delay_ms = options.tick_delay.as_millis() as u64,
        "run started"
    );
    let mut next_tick_time = Instant::now();

    for _ in 0..options.ticks {
        collector.collect(engine);
        engine.tick()?;

        let tick = engine.time().tick;
        if let Some(every) = options.render_every.filter(|n| *n > 0) {
            if tick % every == 0 {
                on_frame(&engine.snapshot());
            }
        }

        pace(&mut next_tick_time, options.tick_delay);
    }
    collector.collect(engine);

    debug!(samples = collector.samples().len(), "run finished");
    Ok(())
}

/// Sleep until the next tick is due. Falling more than two ticks behind
/// resets the schedule instead of bursting to catch up.
fn pace(next_tick_time: &mut Instant, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    *next_tick_time += delay;
    let now = Instant::now();
    if *next_tick_time > now {
        std::thread::sleep(*next_tick_time - now);
    } else if now - *next_tick_time > delay * 2 {
        *next_tick_time = now;
    }
}
