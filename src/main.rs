#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{format_coord, parse_coord, parse_placement, player_view},
    init_logging, AttackResult, GameStatus, Match, MatchConfig, PlacementPolicy, Turn,
    BOARD_SIZE, MAX_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::Write;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Play a game of Battleship against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE as u8,
        value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64),
        help = "Board width and height, 1 to 26"
    )]
    size: u8,
    #[arg(long, default_value_t = 1000, help = "Pause before the computer shoots")]
    delay_ms: u64,
    #[arg(long, help = "Place your ships at random")]
    auto_place: bool,
    #[arg(long, help = "Allow ships to touch; only overlap is forbidden")]
    overlap_only: bool,
}

#[cfg(feature = "std")]
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    std::io::stdout().flush()?;
    match lines.next_line().await? {
        Some(line) => Ok(line),
        None => anyhow::bail!("input closed"),
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let config = MatchConfig {
        board_size: usize::from(cli.size),
        policy: if cli.overlap_only {
            PlacementPolicy::OverlapOnly
        } else {
            PlacementPolicy::NoTouching
        },
        ..MatchConfig::default()
    };
    let mut game = Match::with_config(config, rng);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if cli.auto_place {
        game.auto_place_player_ships()?;
    }
    while let Some(def) = game.next_player_ship().copied() {
        println!("{}", game.player_board().render(true));
        let line = prompt(
            &mut lines,
            &format!(
                "Place your {} (length {}), e.g. A5 v. Press enter to place the rest at random: ",
                def.name().unwrap_or("ship"),
                def.length()
            ),
        )
        .await?;
        if line.trim().is_empty() {
            game.auto_place_player_ships()?;
            break;
        }
        match parse_placement(&line) {
            Some((c, o)) if game.place_player_ship(c.x, c.y, o) => {}
            Some(_) => println!("Cannot place ship here. Try another location."),
            None => println!("Invalid input"),
        }
    }

    game.setup_computer_ships()?;
    println!("Game started. Your turn to attack!");

    loop {
        match game.status() {
            GameStatus::PlayerWon => {
                println!("{}", player_view(&game));
                println!("Congratulations! You won the game!");
                break;
            }
            GameStatus::ComputerWon => {
                println!("{}", player_view(&game));
                println!("Game Over. Computer wins!");
                break;
            }
            GameStatus::Setup | GameStatus::InProgress => {}
        }

        match game.turn() {
            Turn::Player => {
                println!("{}", player_view(&game));
                println!(
                    "Ships remaining: yours {}, computer {}",
                    game.player_board().remaining_ships(),
                    game.computer_board().remaining_ships()
                );
                let line = prompt(&mut lines, "Your shot: ").await?;
                let Some(c) = parse_coord(&line) else {
                    println!("Invalid coordinate");
                    continue;
                };
                match game.play_player_turn(c.x, c.y) {
                    Ok(AttackResult::Miss) => println!("Miss!"),
                    Ok(AttackResult::Hit { ship, sunk: true }) => println!(
                        "You sunk the {}!",
                        game.ship_name(Turn::Computer, ship).unwrap_or("ship")
                    ),
                    Ok(AttackResult::Hit { .. }) => println!("You hit a ship!"),
                    Err(e) => println!("{}", e),
                }
            }
            Turn::Computer => {
                tokio::time::sleep(Duration::from_millis(cli.delay_ms)).await;
                let attack = game.play_computer_turn()?;
                let at = format_coord(attack.coordinate);
                match attack.result {
                    AttackResult::Miss => println!("Computer missed at {}!", at),
                    AttackResult::Hit { ship, sunk: true } => println!(
                        "Computer sunk your {} at {}!",
                        game.ship_name(Turn::Player, ship).unwrap_or("ship"),
                        at
                    ),
                    AttackResult::Hit { .. } => println!("Computer hit your ship at {}!", at),
                }
            }
        }
    }
    Ok(())
}
