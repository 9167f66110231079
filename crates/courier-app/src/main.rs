use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use courier_app::ascii::render_frame_styled;
use courier_app::cli::Cli;
use courier_app::collector::HungerCollector;
use courier_app::game_loop;
use courier_sim::SimulationEngine;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.sim_config()?;
    let mut engine = SimulationEngine::new(config)?;
    let options = cli.run_options();
    let style = cli.frame_style();
    let mut collector = HungerCollector::new();

    game_loop::run(&mut engine, &options, &mut collector, |snapshot| {
        println!("{}", render_frame_styled(snapshot, style));
    })?;

    info!(
        seed = engine.seed(),
        ticks = engine.time().tick,
        hungry = engine.hungry_count(),
        peak = collector.peak().map(|s| s.hungry),
        mean = collector.mean(),
        "simulation complete"
    );

    if let Some(path) = &cli.metrics_out {
        collector.write_json(&engine, path)?;
        info!(path = %path.display(), "wrote hungry-count series");
    }

    Ok(())
}
