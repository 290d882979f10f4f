//! skirmish: a small end-to-end run of the tether framework.
//!
//! Three companions follow a walking player past an enemy camp.  The run
//! issues a team move, an unreachable move that has to time out, a stop, and
//! then leaves one slow companion behind so follow supervision has to walk
//! it back and finally teleport it.
//!
//! ```text
//! cargo run -p skirmish -- [config.json]
//! RUST_LOG=tether_squad=debug,tether_movement=debug cargo run -p skirmish
//! ```
//!
//! The event log lands in `output/skirmish/events.csv`.

mod world;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tether_core::{AgentHandle, Point3, TetherConfig};
use tether_host::{NativeAgent, OverridePredicate};
use tether_output::{CsvEventWriter, EventLogObserver};
use tether_squad::SquadBuilder;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use world::{UNREACHABLE_Z, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const TICK_SECS:  f32 = 0.1;
const RUN_SECS:   f32 = 60.0;
const OUTPUT_DIR: &str = "output/skirmish";

const PLAYER: AgentHandle = AgentHandle(1);
const ENEMY:  AgentHandle = AgentHandle(2);

/// Companion handle, start position, walking speed.
const COMPANIONS: [(AgentHandle, Point3, f32); 3] = [
    (AgentHandle(10), Point3::new(1.0, 0.0, 1.0), 5.0),
    (AgentHandle(11), Point3::new(-1.0, 0.0, 1.0), 5.0),
    (AgentHandle(12), Point3::new(0.0, 0.0, -1.0), 1.5), // slow: falls behind
];

// ── Script ────────────────────────────────────────────────────────────────────

/// One scripted command, fired on the first tick at or after `at_secs`.
enum Cue {
    TeamMove(Point3),
    MoveFirst(Point3),
    StopAll,
    PlayerWalk(Point3),
}

const SCRIPT: [(f32, Cue); 5] = [
    (2.0, Cue::TeamMove(Point3::new(20.0, 0.0, 10.0))),
    (8.0, Cue::MoveFirst(Point3::new(5.0, 0.0, UNREACHABLE_Z - 10.0))), // times out
    (24.0, Cue::TeamMove(Point3::new(0.0, 0.0, 2.0))),
    (26.0, Cue::StopAll),
    (30.0, Cue::PlayerWalk(Point3::new(4.0, 0.0, 0.0))),
];

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<TetherConfig> {
    let Some(path) = path else {
        return Ok(TetherConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: TetherConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Configuration.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let jitter = config.command_jitter;
    info!(?config, "configuration loaded");

    // 2. World: player, enemy camp, companions.
    let mut world = World {
        player:     PLAYER,
        player_pos: Point3::ZERO,
        enemy:      ENEMY,
        enemy_pos:  Point3::new(24.0, 0.0, 14.0),
        agents:     BTreeMap::new(),
    };
    for (handle, pos, speed) in COMPANIONS {
        world.spawn(handle, pos, speed);
    }

    // 3. Squad with a CSV event log.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvEventWriter::new(Path::new(OUTPUT_DIR))?;
    let mut squad = SquadBuilder::new(config)
        .observer(EventLogObserver::new(writer))
        .build()?;

    let mut ids = Vec::with_capacity(COMPANIONS.len());
    for (handle, _, _) in COMPANIONS {
        ids.push(squad.attach(handle, PLAYER, &mut world)?);
    }

    // 4. Run.
    let mut cues = SCRIPT.iter().peekable();
    let mut player_velocity = Point3::ZERO;
    let ticks = (RUN_SECS / TICK_SECS).round() as u32;

    for n in 0..ticks {
        let now = n as f32 * TICK_SECS;

        while let Some((_, cue)) = cues.next_if(|(at, _)| *at <= now + f32::EPSILON) {
            match cue {
                Cue::TeamMove(target) => {
                    let accepted = squad.issue_move_command_to_all(*target, jitter, &mut world);
                    info!(%target, accepted, "team move");
                }
                Cue::MoveFirst(target) => {
                    if let Err(e) = squad.issue_move_command(ids[0], *target, &mut world) {
                        warn!(error = %e, "move command failed");
                    }
                }
                Cue::StopAll => {
                    let stopped = squad.stop_all(&mut world);
                    info!(stopped, "stop all");
                }
                Cue::PlayerWalk(velocity) => {
                    player_velocity = *velocity;
                    info!(%velocity, "player starts walking");
                }
            }
        }

        squad.tick(TICK_SECS, &mut world);
        world.native_update(&squad);
        for (handle, _, _) in COMPANIONS {
            squad.after_native_update(handle, &mut world);
        }
        world.integrate(TICK_SECS, player_velocity);
    }

    // 5. Summary.
    println!("{:<16} {:<10} {:<24} {:<8}", "Companion", "Override", "Position", "Leader");
    println!("{}", "-".repeat(60));
    for (handle, _, _) in COMPANIONS {
        let agent = &world.agents[&handle];
        println!(
            "{:<16} {:<10} {:<24} {:<8}",
            handle.to_string(),
            squad.is_manual_override_active(handle),
            agent.position().to_string(),
            agent.leader.map_or_else(|| "-".to_string(), |l| l.to_string()),
        );
    }
    println!("player at {}", world.player_pos);

    // 6. Level end.
    squad.despawn_all(&mut world);
    let mut log = squad.into_observer();
    log.finish().context("writing event log")?;
    println!("{}/events.csv : {} events", OUTPUT_DIR, log.events_written());

    Ok(())
}
