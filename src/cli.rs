#![cfg(feature = "std")]

//! Text helpers for the terminal front end: coordinate parsing and the
//! two-board view.

use std::string::String;

use crate::{common::Coordinate, game::Match, ship::Orientation};
use rand::Rng;

/// Format a coordinate as column letter plus one-based row, e.g. `B7`.
pub fn format_coord(c: Coordinate) -> String {
    let col = (b'A' + (c.x % 26) as u8) as char;
    std::format!("{}{}", col, c.y + 1)
}

/// Parse `B7`-style input into a coordinate. The column letter is case
/// insensitive; rows start at 1.
pub fn parse_coord(input: &str) -> Option<Coordinate> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coordinate::new((col_ch as u8 - b'A') as usize, row - 1))
}

/// `h`/`horizontal` or `v`/`vertical`, any case.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Parse a placement line such as `A5 v`. Orientation defaults to horizontal.
pub fn parse_placement(input: &str) -> Option<(Coordinate, Orientation)> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next()?)?;
    let orientation = match parts.next() {
        Some(p) => parse_orientation(p)?,
        None => Orientation::Horizontal,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((coord, orientation))
}

/// Computer board (hidden) above the player's board (revealed).
pub fn player_view<R: Rng>(game: &Match<R>) -> String {
    std::format!(
        "Computer board:\n{}\nYour board:\n{}",
        game.computer_board().render(false),
        game.player_board().render(true)
    )
}
