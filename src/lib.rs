#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use ai::{random_fleet, random_placement, random_target};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
