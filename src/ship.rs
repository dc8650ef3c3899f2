//! Ship definitions and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Bridge from the `horizontal: bool` flag used by click-driven callers.
    pub const fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Cell `i` of a ship whose first cell is `(x, y)`.
    pub(crate) const fn step(self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        }
    }
}

/// Roster entry: an optional name and a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipDef {
    name: Option<&'static str>,
    length: usize,
}

impl ShipDef {
    /// Create a named ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self {
            name: Some(name),
            length,
        }
    }

    /// Create a ship definition without a name.
    pub const fn anonymous(length: usize) -> Self {
        Self { name: None, length }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A vessel on a board: its damage counter and the cells it covers.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    def: ShipDef,
    hits: usize,
    cells: Vec<Coordinate>,
}

impl Ship {
    /// A fresh, undamaged ship with no cells yet.
    pub fn new(def: ShipDef) -> Self {
        Self {
            def,
            hits: 0,
            cells: Vec::new(),
        }
    }

    pub(crate) fn with_cells(def: ShipDef, cells: Vec<Coordinate>) -> Self {
        Self {
            def,
            hits: 0,
            cells,
        }
    }

    /// Register one point of damage. The counter never exceeds the length.
    pub fn hit(&mut self) {
        if self.hits < self.def.length() {
            self.hits += 1;
        }
    }

    /// True once the hit count has reached the length.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.def.length()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.def.name()
    }

    pub fn length(&self) -> usize {
        self.def.length()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Cells covered by the ship, starting at its origin. Empty until placed.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Whether the ship covers `(x, y)`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.iter().any(|c| c.x == x && c.y == y)
    }
}

impl From<ShipDef> for Ship {
    fn from(def: ShipDef) -> Self {
        Ship::new(def)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: {:?}, length: {}, hits: {}, cells: {:?} }}",
            self.def.name(),
            self.def.length(),
            self.hits,
            self.cells,
        )
    }
}
