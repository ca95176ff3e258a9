//! Ball Pit headless driver
//!
//! Runs the simulation without a window: spawns a ball at the arena center
//! every half second (like holding the spawn key), steps at the nominal rate,
//! and prints the final state as JSON.
//!
//! Usage: `ball-pit [config.json] [ticks]`

use std::process::ExitCode;

use ball_pit::consts::{SIM_HZ, STEP_MS};
use ball_pit::renderer::{FrameUniforms, collect_instances, instance_bytes};
use ball_pit::sim::{Simulation, tick};
use ball_pit::{SimConfig, SimResult};

/// Ticks between automatic spawns
const SPAWN_EVERY: u64 = 30;
const DEFAULT_TICKS: u64 = 600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ball Pit (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("ball-pit: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> SimResult<()> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => SimConfig::load(path)?,
        None => {
            log::info!("No config given, using defaults");
            SimConfig::default()
        }
    };
    let ticks = match args.next() {
        Some(n) => n.parse::<u64>().unwrap_or_else(|_| {
            log::warn!("Bad tick count {:?}, using {}", n, DEFAULT_TICKS);
            DEFAULT_TICKS
        }),
        None => DEFAULT_TICKS,
    };

    let mut sim = Simulation::new(config)?;

    for step in 0..ticks {
        if step % SPAWN_EVERY == 0 {
            sim.spawn_at_center()?;
        }

        let summary = tick(&mut sim, step * STEP_MS);
        for id in &summary.died {
            log::debug!("tick {}: ball {} went inert", step, id);
        }
        if summary.max_wall_penetration > sim.config.new_ball_radius {
            log::warn!(
                "tick {}: ball edge {:.1} past the wall",
                step,
                summary.max_wall_penetration
            );
        }

        if (step + 1) % SIM_HZ as u64 == 0 {
            log::info!(
                "t={}s balls={} active={} inert={} energy={:.2}",
                (step + 1) / SIM_HZ as u64,
                sim.len(),
                sim.active_count(),
                sim.inert_count(),
                sim.kinetic_energy()
            );
        }
    }

    let instances = collect_instances(&sim);
    let frame = FrameUniforms::from_sim(&sim);
    log::info!(
        "Finished {} ticks: {} draw instances ({} bytes), frame uniforms {} bytes",
        ticks,
        instances.len(),
        instance_bytes(&instances).len(),
        bytemuck::bytes_of(&frame).len()
    );
    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}
