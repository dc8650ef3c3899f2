#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, random_target, BoardError, GameStatus, Match, MatchConfig, PlacementPolicy,
    Turn, BOARD_SIZE, MAX_BOARD_SIZE,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Play the computer against a random-shooting stand-in for the human side
/// and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Args {
    /// Seed for the computer side.
    seed1: u64,
    /// Seed for the stand-in player.
    seed2: u64,
    /// Board width and height, 1 to 26.
    #[arg(
        long,
        default_value_t = BOARD_SIZE as u8,
        value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64)
    )]
    size: u8,
    #[arg(long)]
    overlap_only: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config = MatchConfig {
        board_size: usize::from(args.size),
        policy: if args.overlap_only {
            PlacementPolicy::OverlapOnly
        } else {
            PlacementPolicy::NoTouching
        },
        ..MatchConfig::default()
    };
    let target_attempts = config.target_attempts;
    let mut game = Match::with_config(config, SmallRng::seed_from_u64(args.seed1));
    let mut player_rng = SmallRng::seed_from_u64(args.seed2);

    game.auto_place_player_ships()?;
    game.setup_computer_ships()?;

    let mut player_shots = 0usize;
    let mut computer_shots = 0usize;
    while game.status() == GameStatus::InProgress {
        match game.turn() {
            Turn::Player => {
                let target = random_target(&mut player_rng, game.computer_board(), target_attempts)
                    .ok_or(BoardError::NoTargetsRemaining)?;
                game.play_player_turn(target.x, target.y)?;
                player_shots += 1;
            }
            Turn::Computer => {
                game.play_computer_turn()?;
                computer_shots += 1;
            }
        }
    }

    let winner = match game.status() {
        GameStatus::PlayerWon => Some("player"),
        GameStatus::ComputerWon => Some("computer"),
        GameStatus::Setup | GameStatus::InProgress => None,
    };

    let result = json!({
        "status": game.status(),
        "winner": winner,
        "player": {
            "shots": player_shots,
            "ships_remaining": game.player_board().remaining_ships(),
        },
        "computer": {
            "shots": computer_shots,
            "ships_remaining": game.computer_board().remaining_ships(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn size_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["sim", "1", "2", "--size", "27"]).is_err());
        let args = Args::try_parse_from(["sim", "1", "2", "--size", "7"]).unwrap();
        assert_eq!(args.size, 7);
    }

    #[test]
    fn status_serializes_as_its_name() {
        assert_eq!(json!(GameStatus::ComputerWon), json!("ComputerWon"));
        assert_eq!(json!({ "status": GameStatus::Setup })["status"], "Setup");
    }
}
