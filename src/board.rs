//! One side's grid: ship placement, legality checks and attack resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{AttackResult, BoardError, Coordinate, ShipId};
use crate::config::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::ship::{Orientation, Ship, ShipDef};

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(ShipId),
    Hit(ShipId),
    Miss,
}

impl Cell {
    /// The ship covering this cell, struck or not.
    pub fn ship(self) -> Option<ShipId> {
        match self {
            Cell::Occupied(id) | Cell::Hit(id) => Some(id),
            Cell::Empty | Cell::Miss => None,
        }
    }

    /// Whether the cell has been marked hit or miss.
    pub fn is_attacked(self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }
}

/// Which rules a board applies when ships are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlacementPolicy {
    /// In bounds, no overlap, and no contact with another ship in any of the
    /// eight directions.
    #[default]
    NoTouching,
    /// In bounds and no overlap. Ships may touch.
    OverlapOnly,
}

/// An N×N grid together with the ships placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    policy: PlacementPolicy,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Standard 10×10 board with the no-touching rule.
    pub fn new() -> Self {
        Self::with_policy(BOARD_SIZE, PlacementPolicy::NoTouching)
    }

    /// Empty `size`×`size` board with the no-touching rule.
    pub fn with_size(size: usize) -> Self {
        Self::with_policy(size, PlacementPolicy::NoTouching)
    }

    /// Empty board with an explicit placement rule. `size` is capped at
    /// [`MAX_BOARD_SIZE`].
    pub fn with_policy(size: usize, policy: PlacementPolicy) -> Self {
        let size = size.min(MAX_BOARD_SIZE);
        Board {
            size,
            policy,
            grid: alloc::vec![Cell::Empty; size * size],
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Ships in placement order; a [`ShipId`] indexes this slice.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Number of placed ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).ok().map(|i| self.grid[i])
    }

    /// Whether `(x, y)` is already marked hit or miss. Out-of-bounds cells
    /// count as unattacked.
    pub fn is_attacked(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_attacked)
    }

    /// Number of cells marked hit or miss.
    pub fn attacked_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_attacked()).count()
    }

    /// Validate a placement and report the first rule it breaks.
    pub fn check_placement(
        &self,
        def: &ShipDef,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let len = def.length();
        if len == 0 {
            return Err(BoardError::InvalidLength);
        }
        if x >= self.size || y >= self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        let start = if orientation.is_horizontal() { x } else { y };
        if len > self.size - start {
            return Err(BoardError::ShipOutOfBounds);
        }

        for i in 0..len {
            let (cx, cy) = orientation.step(x, y, i);
            if self.grid[cy * self.size + cx] != Cell::Empty {
                return Err(BoardError::ShipOverlaps);
            }
            if self.policy == PlacementPolicy::NoTouching && self.touches_ship(cx, cy) {
                return Err(BoardError::ShipAdjacent);
            }
        }
        Ok(())
    }

    /// Pure legality predicate for [`Board::place_ship`].
    pub fn can_place_ship(
        &self,
        def: &ShipDef,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> bool {
        self.check_placement(def, x, y, orientation).is_ok()
    }

    /// Place a ship with its first cell at `(x, y)`.
    ///
    /// Returns `None` without touching the grid when the placement is illegal.
    pub fn place_ship(
        &mut self,
        def: &ShipDef,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Option<ShipId> {
        self.try_place(def, x, y, orientation).ok()
    }

    /// Build an anonymous ship of `length` and place it, reporting why the
    /// placement failed.
    pub fn deploy(
        &mut self,
        length: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        self.try_place(&ShipDef::anonymous(length), x, y, orientation)
    }

    fn try_place(
        &mut self,
        def: &ShipDef,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        self.check_placement(def, x, y, orientation)?;

        let id = ShipId(self.ships.len());
        let cells: Vec<Coordinate> = (0..def.length())
            .map(|i| Coordinate::from(orientation.step(x, y, i)))
            .collect();
        for c in &cells {
            self.grid[c.y * self.size + c.x] = Cell::Occupied(id);
        }
        self.ships.push(Ship::with_cells(*def, cells));
        log::debug!(
            "placed {} (length {}) at ({}, {}) {:?}",
            def.name().unwrap_or("ship"),
            def.length(),
            x,
            y,
            orientation
        );
        Ok(id)
    }

    /// Every legal `(origin, orientation)` for `def`, scanning rows then
    /// columns, horizontal before vertical.
    pub fn legal_placements(&self, def: &ShipDef) -> Vec<(Coordinate, Orientation)> {
        let mut out = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                for orientation in Orientation::ALL {
                    if self.can_place_ship(def, x, y, orientation) {
                        out.push((Coordinate::new(x, y), orientation));
                    }
                }
            }
        }
        out
    }

    /// Every cell not yet marked hit or miss, row by row.
    pub fn unattacked_cells(&self) -> Vec<Coordinate> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_attacked())
            .map(|(i, _)| Coordinate::new(i % self.size, i / self.size))
            .collect()
    }

    /// Resolve an attack at `(x, y)`.
    ///
    /// Repeating an attack never damages a ship twice: a hit cell reports
    /// the same hit again and a missed cell reports a miss.
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<AttackResult, BoardError> {
        let idx = self.index(x, y)?;
        match self.grid[idx] {
            Cell::Empty | Cell::Miss => {
                self.grid[idx] = Cell::Miss;
                log::debug!("attack at ({}, {}) missed", x, y);
                Ok(AttackResult::Miss)
            }
            Cell::Occupied(id) => {
                let ship = self
                    .ships
                    .get_mut(id.index())
                    .ok_or(BoardError::UnknownShip)?;
                ship.hit();
                let sunk = ship.is_sunk();
                self.grid[idx] = Cell::Hit(id);
                if sunk {
                    log::info!("{} sunk", ship.name().unwrap_or("ship"));
                } else {
                    log::debug!("attack at ({}, {}) hit", x, y);
                }
                Ok(AttackResult::Hit { ship: id, sunk })
            }
            Cell::Hit(id) => {
                let ship = self.ship(id).ok_or(BoardError::UnknownShip)?;
                Ok(AttackResult::Hit {
                    ship: id,
                    sunk: ship.is_sunk(),
                })
            }
        }
    }

    /// Returns `true` when every placed ship is sunk. Vacuously true on a
    /// board without ships.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Text view of the board. Hidden views show ships only once struck.
    pub fn render(&self, reveal: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal,
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.size || y >= self.size {
            Err(BoardError::OutOfBounds { x, y })
        } else {
            Ok(y * self.size + x)
        }
    }

    fn touches_ship(&self, x: usize, y: usize) -> bool {
        let (x0, y0) = (x.saturating_sub(1), y.saturating_sub(1));
        let (x1, y1) = ((x + 1).min(self.size - 1), (y + 1).min(self.size - 1));
        (y0..=y1).any(|ny| {
            (x0..=x1).any(|nx| {
                (nx, ny) != (x, y) && self.grid[ny * self.size + nx].ship().is_some()
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Display adapter returned by [`Board::render`].
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size;
        write!(f, "   ")?;
        for c in 0..size {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for y in 0..size {
            write!(f, "{:2} ", y + 1)?;
            for x in 0..size {
                let ch = match self.board.grid[y * size + x] {
                    Cell::Hit(_) => 'X',
                    Cell::Miss => 'o',
                    Cell::Occupied(_) if self.reveal => 'S',
                    Cell::Occupied(_) | Cell::Empty => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(true), f)
    }
}
