use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mapreveal_common::{BlockCoord, FeatureKind, WorldDimensions};
use mapreveal_kernel::{Block, PauseControl, World};
use mapreveal_reveal::{COMMANDS, Command, RevealMode, RevealSession};
use mapreveal_tools::MapInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mapreveal-cli", about = "Reveal and restore map visibility")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and the available console commands
    Info,
    /// Reveal a generated map, tick it, unreveal and check the result
    Demo {
        /// Map extent in blocks: X Y Z
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = vec![2, 2, 1])]
        size: Vec<u32>,
        /// Mark a block as underworld, as x,y,z (repeatable)
        #[arg(long, value_parser = parse_coord)]
        underworld: Vec<BlockCoord>,
        /// Reveal hell too
        #[arg(long)]
        hell: bool,
    },
    /// Run console commands against a JSON map fixture
    Run {
        /// Path to the fixture
        fixture: PathBuf,
        /// Steps to run in order: "reveal", "reveal hell", "unreveal", "revtoggle",
        /// "tick", "unpause", "status"
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

fn parse_coord(s: &str) -> Result<BlockCoord, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z, got '{s}'"));
    };
    let num = |v: &str| v.parse::<u32>().map_err(|e| format!("'{v}': {e}"));
    Ok(BlockCoord::new(num(x)?, num(y)?, num(z)?))
}

/// One host tick: the reveal hook runs first, then the simulation steps.
fn tick(session: &RevealSession, world: &mut World) {
    let forced = session.on_tick(world);
    let stepped = world.step();
    println!(
        "tick: paused_by_reveal={forced} advanced={stepped} now={}",
        world.tick()
    );
}

fn run_step(session: &mut RevealSession, world: &mut World, step: &str) -> anyhow::Result<()> {
    match step.trim() {
        "tick" => tick(session, world),
        "unpause" => {
            world.set_paused(false);
            println!("unpaused");
        }
        "status" => {
            println!("{}", MapInspector::summary(world));
            println!("{}", MapInspector::session(session));
        }
        line => {
            let command: Command = line.parse().with_context(|| format!("bad step '{line}'"))?;
            print!("{}", session.execute(world, command));
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("mapreveal-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", mapreveal_kernel::crate_info());
            println!("persist: {}", mapreveal_persist::crate_info());
            println!("reveal: {}", mapreveal_reveal::crate_info());
            println!("tools: {}", mapreveal_tools::crate_info());
            println!("commands:");
            for spec in COMMANDS {
                println!("  {:<10} {}", spec.name, spec.help);
            }
        }
        Commands::Demo {
            size,
            underworld,
            hell,
        } => {
            let &[x, y, z] = size.as_slice() else {
                anyhow::bail!("--size takes exactly three values");
            };
            let dims = WorldDimensions::new(x, y, z);
            let mut world = World::filled(dims);
            for coord in underworld {
                let placed = world.insert_block(
                    coord,
                    Block::hidden().with_global_feature(FeatureKind::Underworld),
                );
                anyhow::ensure!(
                    placed,
                    "underworld block {coord} is outside the {dims} map"
                );
            }
            let before = world.hidden_masks();
            println!("{}", MapInspector::summary(&world));

            let mut session = RevealSession::new();
            let mode = if hell {
                RevealMode::Full
            } else {
                RevealMode::Safe
            };
            print!("{}", session.execute(&mut world, Command::Reveal(mode)));
            println!("{}", MapInspector::summary(&world));
            println!("{}", MapInspector::session(&session));

            world.set_paused(false);
            tick(&session, &mut world);

            print!("{}", session.execute(&mut world, Command::Unreveal));
            println!("{}", MapInspector::summary(&world));
            let restored = world.hidden_masks() == before;
            println!("Restored: {}", if restored { "OK" } else { "MISMATCH" });
            anyhow::ensure!(restored, "hidden flags differ after unreveal");
        }
        Commands::Run { fixture, steps } => {
            let mut world = World::load_fixture(&fixture)
                .with_context(|| format!("loading {}", fixture.display()))?;
            let mut session = RevealSession::new();
            tracing::info!(
                fixture = %fixture.display(),
                steps = steps.len(),
                "running steps"
            );
            for step in &steps {
                println!("> {step}");
                run_step(&mut session, &mut world, step)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapreveal_kernel::{MapAccess, TileBlock};
    use mapreveal_reveal::RevealState;

    fn hell_fixture() -> World {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/hell.json");
        World::load_fixture(path).unwrap()
    }

    fn hidden_at(world: &World, x: u32, y: u32, z: u32) -> usize {
        world
            .block(BlockCoord::new(x, y, z))
            .unwrap()
            .hidden_mask()
            .hidden_count()
    }

    #[test]
    fn parse_coord_accepts_triples() {
        assert_eq!(parse_coord("1, 2,3"), Ok(BlockCoord::new(1, 2, 3)));
        assert!(parse_coord("1,2").is_err());
        assert!(parse_coord("1,x,3").is_err());
    }

    #[test]
    fn bundled_fixture_safe_reveal_keeps_hazards_hidden() {
        let mut world = hell_fixture();
        let before = world.hidden_masks();
        let mut session = RevealSession::new();

        run_step(&mut session, &mut world, "reveal").unwrap();
        assert_eq!(session.state(), RevealState::SafeRevealed);
        assert_eq!(session.store().len(), 5);
        assert_eq!(hidden_at(&world, 0, 0, 0), 256);
        assert_eq!(hidden_at(&world, 1, 0, 0), 256);
        assert_eq!(hidden_at(&world, 0, 1, 1), 256);
        assert_eq!(hidden_at(&world, 1, 1, 1), 0);

        run_step(&mut session, &mut world, "status").unwrap();
        run_step(&mut session, &mut world, "unreveal").unwrap();
        assert_eq!(world.hidden_masks(), before);
    }

    #[test]
    fn bundled_fixture_full_reveal_holds_pause_across_ticks() {
        let mut world = hell_fixture();
        let mut session = RevealSession::new();

        run_step(&mut session, &mut world, "reveal hell").unwrap();
        assert_eq!(session.state(), RevealState::Revealed);
        assert_eq!(hidden_at(&world, 0, 0, 0), 0);

        run_step(&mut session, &mut world, "unpause").unwrap();
        run_step(&mut session, &mut world, "tick").unwrap();
        assert!(world.is_paused());
        assert_eq!(world.tick(), 0);

        run_step(&mut session, &mut world, "revtoggle").unwrap();
        run_step(&mut session, &mut world, "unpause").unwrap();
        run_step(&mut session, &mut world, "tick").unwrap();
        assert_eq!(world.tick(), 1);
    }

    #[test]
    fn unknown_step_is_an_error() {
        let mut world = hell_fixture();
        let mut session = RevealSession::new();
        assert!(run_step(&mut session, &mut world, "explode").is_err());
    }
}
