use alloc::vec::Vec;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    ai,
    board::Board,
    common::{AttackResult, BoardError, Coordinate, ShipId},
    config::MatchConfig,
    ship::{Orientation, ShipDef},
};

/// Whose shot is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Turn {
    Player,
    Computer,
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    /// At least one fleet is not fully placed.
    Setup,
    InProgress,
    PlayerWon,
    ComputerWon,
}

/// A computer shot: where it landed and what it struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ComputerAttack {
    pub coordinate: Coordinate,
    pub result: AttackResult,
}

/// Human board, computer board, both rosters and the computer's randomness.
#[derive(Debug)]
pub struct Match<R = SmallRng> {
    config: MatchConfig,
    player_board: Board,
    computer_board: Board,
    player_fleet: Vec<ShipDef>,
    computer_fleet: Vec<ShipDef>,
    turn: Turn,
    rng: R,
}

#[cfg(feature = "std")]
impl Match<SmallRng> {
    /// Standard match seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()))
    }
}

#[cfg(feature = "std")]
impl Default for Match<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Match<SmallRng> {
    /// Standard match with a reproducible computer player.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Match<R> {
    /// Standard 10×10 match driven by `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_config(MatchConfig::default(), rng)
    }

    pub fn with_config(config: MatchConfig, rng: R) -> Self {
        let player_board = Board::with_policy(config.board_size, config.policy);
        let computer_board = Board::with_policy(config.board_size, config.policy);
        Match {
            player_fleet: config.fleet.clone(),
            computer_fleet: config.fleet.clone(),
            config,
            player_board,
            computer_board,
            turn: Turn::Player,
            rng,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn player_fleet(&self) -> &[ShipDef] {
        &self.player_fleet
    }

    pub fn computer_fleet(&self) -> &[ShipDef] {
        &self.computer_fleet
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Next roster entry the human has to place.
    pub fn next_player_ship(&self) -> Option<&ShipDef> {
        self.player_fleet.get(self.player_board.ship_count())
    }

    pub fn player_fleet_placed(&self) -> bool {
        self.player_board.ship_count() >= self.player_fleet.len()
    }

    pub fn computer_fleet_placed(&self) -> bool {
        self.computer_board.ship_count() >= self.computer_fleet.len()
    }

    /// Place the next human ship at `(x, y)`. `false` leaves the board as it
    /// was, including when the whole roster is already placed.
    pub fn place_player_ship(&mut self, x: usize, y: usize, orientation: Orientation) -> bool {
        let Some(def) = self.next_player_ship().copied() else {
            return false;
        };
        self.player_board.place_ship(&def, x, y, orientation).is_some()
    }

    /// Randomly place whatever remains of the human roster. On failure the
    /// ships already placed stay as they were and nothing is added.
    pub fn auto_place_player_ships(&mut self) -> Result<(), BoardError> {
        let placed = self.player_board.ship_count().min(self.player_fleet.len());
        let board = Self::random_fleet(&mut self.rng, &self.config, &self.player_board, &self.player_fleet[placed..])?;
        self.player_board = board;
        Ok(())
    }

    /// Place the whole computer roster at random legal positions.
    ///
    /// The fleet is laid out on a scratch board and only swapped in once
    /// every ship fits, so a failed setup leaves the computer board empty and
    /// can be retried.
    pub fn setup_computer_ships(&mut self) -> Result<(), BoardError> {
        if self.computer_board.ship_count() > 0 {
            return Err(BoardError::FleetAlreadyPlaced);
        }
        let board = Self::random_fleet(&mut self.rng, &self.config, &self.computer_board, &self.computer_fleet)?;
        self.computer_board = board;
        log::info!("computer placed {} ships", self.computer_board.ship_count());
        Ok(())
    }

    /// Human shot at the computer board. Repeats and turn order are not
    /// checked here; see [`Match::play_player_turn`].
    pub fn attack_computer_board(
        &mut self,
        x: usize,
        y: usize,
    ) -> Result<AttackResult, BoardError> {
        self.computer_board.receive_attack(x, y)
    }

    /// Computer shot at a random player cell that has not been attacked.
    pub fn computer_attack(&mut self) -> Result<ComputerAttack, BoardError> {
        if !self.computer_fleet_placed() {
            return Err(BoardError::FleetNotPlaced);
        }
        let coordinate = ai::random_target(
            &mut self.rng,
            &self.player_board,
            self.config.target_attempts,
        )
        .ok_or(BoardError::NoTargetsRemaining)?;
        let result = self.player_board.receive_attack(coordinate.x, coordinate.y)?;
        Ok(ComputerAttack { coordinate, result })
    }

    pub fn status(&self) -> GameStatus {
        if !self.player_fleet_placed() || !self.computer_fleet_placed() {
            GameStatus::Setup
        } else if self.computer_board.all_ships_sunk() {
            GameStatus::PlayerWon
        } else if self.player_board.all_ships_sunk() {
            GameStatus::ComputerWon
        } else {
            GameStatus::InProgress
        }
    }

    /// Human turn: attack an unattacked computer cell, then pass the turn.
    pub fn play_player_turn(&mut self, x: usize, y: usize) -> Result<AttackResult, BoardError> {
        self.ensure_turn(Turn::Player)?;
        if self.computer_board.cell(x, y).is_none() {
            return Err(BoardError::OutOfBounds { x, y });
        }
        if self.computer_board.is_attacked(x, y) {
            return Err(BoardError::AlreadyAttacked);
        }
        let result = self.attack_computer_board(x, y)?;
        self.finish_turn(Turn::Computer);
        Ok(result)
    }

    /// Computer turn: one [`Match::computer_attack`], then pass the turn.
    pub fn play_computer_turn(&mut self) -> Result<ComputerAttack, BoardError> {
        self.ensure_turn(Turn::Computer)?;
        let attack = self.computer_attack()?;
        self.finish_turn(Turn::Player);
        Ok(attack)
    }

    /// Name of ship `id` on `owner`'s board.
    pub fn ship_name(&self, owner: Turn, id: ShipId) -> Option<&'static str> {
        let board = match owner {
            Turn::Player => &self.player_board,
            Turn::Computer => &self.computer_board,
        };
        board.ship(id).and_then(|s| s.name())
    }

    /// Fresh empty boards with the same settings. The RNG carries on.
    pub fn reset(&mut self) {
        self.player_board = Board::with_policy(self.config.board_size, self.config.policy);
        self.computer_board = Board::with_policy(self.config.board_size, self.config.policy);
        self.player_fleet = self.config.fleet.clone();
        self.computer_fleet = self.config.fleet.clone();
        self.turn = Turn::Player;
    }

    fn random_fleet(
        rng: &mut R,
        config: &MatchConfig,
        base: &Board,
        fleet: &[ShipDef],
    ) -> Result<Board, BoardError> {
        ai::random_fleet(
            rng,
            base,
            fleet,
            config.placement_attempts,
            config.fleet_rounds,
            config.search_budget,
        )
    }

    fn ensure_turn(&self, side: Turn) -> Result<(), BoardError> {
        match self.status() {
            GameStatus::Setup => Err(BoardError::FleetNotPlaced),
            GameStatus::PlayerWon | GameStatus::ComputerWon => Err(BoardError::GameOver),
            GameStatus::InProgress if self.turn != side => Err(BoardError::NotYourTurn),
            GameStatus::InProgress => Ok(()),
        }
    }

    fn finish_turn(&mut self, next: Turn) {
        match self.status() {
            GameStatus::PlayerWon => log::info!("player wins"),
            GameStatus::ComputerWon => log::info!("computer wins"),
            _ => self.turn = next,
        }
    }
}
