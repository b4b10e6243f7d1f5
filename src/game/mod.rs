//! Game Module: Connection Game Driven by Relative Homology
//!
//! Two players claim polygonal cells of a tessellated square. Blue tries
//! to join the top and bottom border strips, red the left and right ones.
//! Whether a player's claimed cells join their two strips is read off
//! from Betti numbers alone:
//!
//!   win  ⟺  β₁(X, Y) > β₁(X)
//!
//! where X is the player's territory and Y their base.

mod board;
mod territory;

pub use board::{Board, BoardConfig, Point, border_base};
pub use territory::{Game, HomologySummary, Player, Territory, TerritoryBetti};
