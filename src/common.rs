//! Shared types: coordinates, ship handles, attack results and board errors.

use core::fmt;

/// A cell position. `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate { x, y }
    }
}

/// Index of a ship within the board that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipId(pub usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Outcome of an attack on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    /// No ship at the cell.
    Miss,
    /// A ship was struck; `sunk` reflects its state after the hit.
    Hit { ship: ShipId, sunk: bool },
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackResult::Hit { .. })
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, AttackResult::Hit { sunk: true, .. })
    }

    /// The ship struck, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            AttackResult::Hit { ship, .. } => Some(*ship),
            AttackResult::Miss => None,
        }
    }
}

/// Errors returned by board and match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Attack coordinates lie outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Some cell of the ship would fall outside the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonals included.
    ShipAdjacent,
    /// Ships must be at least one cell long.
    InvalidLength,
    /// No ship with the given id exists on the board.
    UnknownShip,
    /// The fleet for this side has already been placed.
    FleetAlreadyPlaced,
    /// The fleet for this side has not been fully placed yet.
    FleetNotPlaced,
    /// The cell was attacked before.
    AlreadyAttacked,
    /// Every cell of the target board has been attacked.
    NoTargetsRemaining,
    /// No legal position exists for the ship.
    UnableToPlaceShip,
    /// It is the other side's turn.
    NotYourTurn,
    /// One fleet is already sunk.
    GameOver,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinates ({}, {}) are outside the board", x, y)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with existing ships"),
            BoardError::ShipAdjacent => write!(f, "Ship placement touches another ship"),
            BoardError::InvalidLength => write!(f, "Ship length must be at least 1"),
            BoardError::UnknownShip => write!(f, "No such ship on this board"),
            BoardError::FleetAlreadyPlaced => write!(f, "Fleet is already placed"),
            BoardError::FleetNotPlaced => write!(f, "Fleet is not fully placed"),
            BoardError::AlreadyAttacked => write!(f, "Cell was already attacked"),
            BoardError::NoTargetsRemaining => write!(f, "No unattacked cells remain"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::NotYourTurn => write!(f, "It is not your turn"),
            BoardError::GameOver => write!(f, "The game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
