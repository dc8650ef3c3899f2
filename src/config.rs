use alloc::vec::Vec;

use crate::board::PlacementPolicy;
use crate::ship::ShipDef;

pub const BOARD_SIZE: usize = 10;
/// Widest board that column letters `A`..`Z` can address.
pub const MAX_BOARD_SIZE: usize = 26;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Random origins tried per ship before falling back to a full scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
/// Random cells tried per computer shot before falling back to a full scan.
pub const MAX_TARGET_ATTEMPTS: usize = 1_000;
/// Whole-fleet random layouts tried before searching exhaustively.
pub const MAX_FLEET_ROUNDS: usize = 100;
/// Placements the exhaustive fleet search may try before giving up.
pub const FLEET_SEARCH_BUDGET: usize = 100_000;

/// Runtime settings for a [`Match`](crate::Match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub board_size: usize,
    pub fleet: Vec<ShipDef>,
    pub policy: PlacementPolicy,
    pub placement_attempts: usize,
    pub target_attempts: usize,
    pub fleet_rounds: usize,
    pub search_budget: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            policy: PlacementPolicy::NoTouching,
            placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            target_attempts: MAX_TARGET_ATTEMPTS,
            fleet_rounds: MAX_FLEET_ROUNDS,
            search_budget: FLEET_SEARCH_BUDGET,
        }
    }
}

/// Look up a standard fleet entry by name.
pub fn ship_def_by_name(name: &str) -> Option<ShipDef> {
    FLEET.iter().copied().find(|def| def.name() == Some(name))
}
