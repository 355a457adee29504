use std::time::Instant;
use tracing_subscriber::EnvFilter;

use walk_sim_rs::config::SimulationConfig;
use walk_sim_rs::process::{BridgeParameters, JumpParameters, WalkParameters, WalkVariant};
use walk_sim_rs::rng::RngMethod;
use walk_sim_rs::sim::simulate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scenarios = 5;
    let seed = 42;
    let rng_method: RngMethod = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("pseudo")
        .parse()?;

    let variants = [
        WalkVariant::Simple(WalkParameters::new(0.0, 0.5, 500)),
        WalkVariant::Jump(JumpParameters::new(
            WalkParameters::new(0.0, 2.0, 300),
            150,
            50,
            150.0,
        )),
        WalkVariant::Bridge(BridgeParameters::new(
            WalkParameters::new(0.0, 0.3, 598),
            5.0,
            300,
        )),
    ];

    for variant in variants {
        let config = SimulationConfig::builder()
            .variant(variant)
            .scenarios(scenarios)
            .seed(seed)
            .rng_method(rng_method)
            .build()?;

        let before = Instant::now();
        println!("Simulating {} walk with {:?} RNG...", variant.name(), rng_method);
        let filtration = simulate(&config)?;
        println!(
            "Simulation completed in {:.4} seconds.",
            before.elapsed().as_secs_f64()
        );
        if let Some(gap) = filtration.gap(1) {
            println!("Scenario 1 jumps from {:?} to {}", gap.before, gap.after);
        }
        println!("{}\n", filtration.to_dataframe()?);
    }
    Ok(())
}
