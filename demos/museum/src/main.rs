//! museum — reference scenario for the rust_roam visitor framework.
//!
//! Six visitors wander a 6-room museum for two simulated minutes at 100 Hz.
//! Midway through, one visitor is knocked out and another is picked up and
//! carried, exercising the override states.  Trajectories land in
//! `output/museum/` as CSV.

mod layout;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use glam::Vec3;

use roam_core::{AgentId, SimConfig};
use roam_output::{CsvWriter, SimOutputObserver};
use roam_rooms::DoorwayNav;
use roam_sim::{SimBuilder, SimObserver};

use layout::{build_exhibits, build_rooms, ROOM_NAMES};

// ── Constants ─────────────────────────────────────────────────────────────────

const VISITOR_COUNT:         usize = 6;
const SEED:                  u64   = 42;
const TICK_HZ:               u32   = 100;
const SIM_SECS:              u64   = 120;
const OUTPUT_INTERVAL_TICKS: u64   = 50; // snapshot twice per simulated second

// Scripted disturbances, in ticks from the start.
const KNOCKOUT_AT:   u64 = 3_000; // t = 30 s: visitor 0 goes down for 2 s
const KNOCKOUT_SECS: u64 = 2;
const GRAB_AT:       u64 = 6_000; // t = 60 s: visitor 1 is carried for 3 s
const GRAB_SECS:     u64 = 3;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== museum — rust_roam visitor framework ===");
    println!("Visitors: {VISITOR_COUNT}  |  Duration: {SIM_SECS} s  |  Seed: {SEED}");
    println!();

    // 1. Build the room graph and exhibits.
    let rooms = build_rooms();
    println!(
        "Museum: {} rooms, {} doors, connected = {}",
        rooms.room_count(),
        rooms.door_count(),
        rooms.is_connected()
    );
    let exhibits = build_exhibits();
    println!("Exhibits: {}", exhibits.len());

    // 2. Sim config.
    let config = SimConfig {
        tick_hz:               TICK_HZ,
        total_ticks:           SIM_SECS * TICK_HZ as u64,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };

    // 3. Build the sim: visitors fan out from the lobby.
    let mut builder = SimBuilder::new(config.clone(), DoorwayNav::new(rooms))
        .points(exhibits);
    for i in 0..VISITOR_COUNT {
        let x = -5.0 + 2.0 * i as f32;
        builder = builder.spawn(Vec3::new(x, 0.0, -2.0));
    }
    let mut sim = builder.build()?;

    // 4. Output.
    std::fs::create_dir_all("output/museum")?;
    let writer = CsvWriter::new(Path::new("output/museum"))?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 5. Run in phases so the disturbances land mid-flight.
    let t0 = Instant::now();

    sim.run_ticks(KNOCKOUT_AT, &mut obs);
    let victim = AgentId(0);
    println!("t = {:>5.1} s  visitor 0 knocked out", sim.clock.elapsed_secs());
    sim.threat.knock_out(victim);
    sim.bodies[0].velocity = Vec3::new(0.0, 0.0, 2.5); // the hit sends them sliding
    sim.bodies[0].set_fallen(true);
    sim.run_ticks(KNOCKOUT_SECS * TICK_HZ as u64, &mut obs);
    sim.threat.restore(victim);
    sim.bodies[0].set_fallen(false);
    println!("t = {:>5.1} s  visitor 0 comes to", sim.clock.elapsed_secs());

    sim.run_ticks(GRAB_AT - sim.clock.current_tick.0, &mut obs);
    let part = sim.visitors[1].parts()[0];
    println!("t = {:>5.1} s  visitor 1 picked up", sim.clock.elapsed_secs());
    sim.grasp.grab(part);
    sim.run_ticks(GRAB_SECS * TICK_HZ as u64, &mut obs);
    sim.grasp.release(part);
    sim.bodies[1].velocity = Vec3::new(1.5, 0.0, 0.0); // dropped with a shove
    println!("t = {:>5.1} s  visitor 1 released", sim.clock.elapsed_secs());

    let remaining = config.total_ticks - sim.clock.current_tick.0;
    sim.run_ticks(remaining, &mut obs);
    obs.on_sim_end(sim.clock.current_tick);

    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!(
        "Simulated {} s in {:.3} s wall time",
        SIM_SECS,
        elapsed.as_secs_f64()
    );
    println!();
    println!("{:<8} {:<12} {:<14} {:<10}", "Visitor", "State", "Room", "Position");
    println!("{}", "-".repeat(48));
    for (i, visitor) in sim.visitors.iter().enumerate() {
        let pos = sim.bodies[i].position;
        let room = sim
            .nav
            .graph()
            .room_of(pos)
            .map(|r| ROOM_NAMES[r.index()])
            .unwrap_or("outside");
        println!(
            "{:<8} {:<12} {:<14} ({:>6.1}, {:>6.1})",
            i,
            visitor.state().label(),
            room,
            pos.x,
            pos.z
        );
    }

    Ok(())
}
