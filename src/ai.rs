// Uniform-random placement and targeting for the computer side.
// Both strategies sample first and only scan the whole board once the
// attempt budget is spent, so they terminate on any board.

use crate::{
    board::Board,
    common::{BoardError, Coordinate},
    ship::{Orientation, ShipDef},
};
use rand::{seq::IndexedRandom, Rng};

/// Pick a legal origin and orientation for `def`.
///
/// Draws an origin uniformly from the whole grid and a fair orientation
/// until the board accepts it. After `max_attempts` rejections, chooses
/// uniformly among all legal placements instead.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    def: &ShipDef,
    max_attempts: usize,
) -> Result<(Coordinate, Orientation), BoardError> {
    let size = board.size();
    if size == 0 {
        return Err(BoardError::UnableToPlaceShip);
    }
    for _ in 0..max_attempts {
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        let orientation = Orientation::from_horizontal(rng.random());
        if board.can_place_ship(def, x, y, orientation) {
            return Ok((Coordinate::new(x, y), orientation));
        }
    }

    log::debug!(
        "no placement for {} after {} samples, scanning board",
        def.name().unwrap_or("ship"),
        max_attempts
    );
    board
        .legal_placements(def)
        .choose(rng)
        .copied()
        .ok_or(BoardError::UnableToPlaceShip)
}

/// Place every ship in `fleet` on a copy of `base` and return the copy.
///
/// Each round lays the fleet out greedily with [`random_placement`]; a round
/// that gets stuck is thrown away and the next one starts again from `base`.
/// After `rounds` failures a depth-first search over
/// [`Board::legal_placements`] takes over, bounded by `search_budget` tried
/// placements. `base` itself is never modified.
pub fn random_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    base: &Board,
    fleet: &[ShipDef],
    attempts: usize,
    rounds: usize,
    search_budget: usize,
) -> Result<Board, BoardError> {
    'round: for round in 0..rounds {
        let mut board = base.clone();
        for def in fleet {
            let Ok((origin, orientation)) = random_placement(rng, &board, def, attempts) else {
                log::debug!("fleet round {} got stuck, restarting", round);
                continue 'round;
            };
            if board.place_ship(def, origin.x, origin.y, orientation).is_none() {
                continue 'round;
            }
        }
        return Ok(board);
    }

    log::debug!("no fleet layout after {} rounds, searching", rounds);
    let mut board = base.clone();
    let mut budget = search_budget;
    if search_fleet(&mut board, fleet, &mut budget) {
        Ok(board)
    } else {
        Err(BoardError::UnableToPlaceShip)
    }
}

fn search_fleet(board: &mut Board, fleet: &[ShipDef], budget: &mut usize) -> bool {
    let Some((def, rest)) = fleet.split_first() else {
        return true;
    };
    for (origin, orientation) in board.legal_placements(def) {
        if *budget == 0 {
            return false;
        }
        *budget -= 1;
        let mut next = board.clone();
        if next.place_ship(def, origin.x, origin.y, orientation).is_some()
            && search_fleet(&mut next, rest, budget)
        {
            *board = next;
            return true;
        }
    }
    false
}

/// Pick a cell not yet marked hit or miss, or `None` when every cell has
/// been attacked.
pub fn random_target<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    max_attempts: usize,
) -> Option<Coordinate> {
    let size = board.size();
    if size == 0 {
        return None;
    }
    for _ in 0..max_attempts {
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        if !board.is_attacked(x, y) {
            return Some(Coordinate::new(x, y));
        }
    }
    board.unattacked_cells().choose(rng).copied()
}
