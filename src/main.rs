use arena_rpg::game_loop::{play_turn, GameStatus};
use arena_rpg::systems::random_direction;
use arena_rpg::{Arena, ArenaConfig, ArenaEvent, Direction, Fighter, Movable};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Run a headless arena session
#[derive(Parser, Debug)]
#[command(name = "arena-rpg", version)]
struct Args {
    /// JSON arena description; the built-in arena is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the arena's RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of turns to play
    #[arg(short, long, default_value_t = 50)]
    turns: u32,

    /// Hero moves, one letter per turn (e.g. "NNEES"), repeated as needed.
    /// The hero wanders at random when omitted.
    #[arg(short, long)]
    moves: Option<String>,
}

fn parse_moves(moves: &str) -> Result<Vec<Direction>, arena_rpg::ArenaError> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string().parse())
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arena_rpg=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let script = match &args.moves {
        Some(moves) => parse_moves(moves)?,
        None => Vec::new(),
    };

    let mut arena = Arena::from_config(&config)?;
    let mut wander = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    tracing::info!(turns = args.turns, mode = ?arena.mode(), "Session starting");

    let mut status = GameStatus::Ongoing;
    for turn in 0..args.turns {
        let direction = if script.is_empty() {
            random_direction(&mut wander)
        } else {
            script[turn as usize % script.len()]
        };

        let report = play_turn(&mut arena, direction);
        if let Err(err) = &report.result {
            tracing::debug!(turn, action = ?report.action, %err, "Turn blocked");
        }
        for event in arena.events().drain() {
            if let ArenaEvent::MonsterSlain { id, experience } = event {
                println!("turn {turn}: monster {id} slain (+{experience} xp)");
            }
        }

        status = report.status;
        if status != GameStatus::Ongoing {
            break;
        }
    }

    let hero = arena.hero();
    println!();
    println!("=== {:?} after {} turns ===", status, arena.turn());
    println!(
        "{} at {}: life {}, level {}, {} xp",
        hero.name(),
        hero.position(),
        hero.life(),
        hero.level(),
        hero.experience()
    );
    if let Some(item) = &hero.second_hand {
        println!("carrying a {}", item.name());
    }
    println!("{} monsters remaining", arena.monsters().len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("NnE s").unwrap();
        assert_eq!(
            moves,
            vec![Direction::North, Direction::North, Direction::East, Direction::South]
        );
        assert!(parse_moves("NX").is_err());
    }
}
