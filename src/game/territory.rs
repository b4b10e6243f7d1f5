//! Territory Tracking and the Topological Win Condition
//!
//! Each player starts with a base Y made of two disjoint strips on
//! opposite sides of the board. Claiming a cell adds the closure of its
//! fan triangulation to the player's territory X ⊇ Y.
//!
//! ## Win Rule
//!
//! From the long exact sequence of the pair (X, Y):
//!
//!   H₁(X) → H₁(X, Y) → H₀(Y) → H₀(X)
//!
//! β₁(X, Y) exceeds β₁(X) exactly when the map H₀(Y) → H₀(X) has a
//! kernel, i.e. when the two strips of Y lie in one component of X.

use std::fmt;
use tracing::{debug, info, warn};

use super::Board;
use crate::topology::{face_from_cycle, BettiNumbers, Complex, Vertex};
use crate::{HomologyConfig, Result};

/// Participants of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => write!(f, "blue"),
            Player::Red => write!(f, "red"),
        }
    }
}

/// Absolute and relative Betti numbers of one territory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerritoryBetti {
    /// β(X)
    pub absolute: BettiNumbers,
    /// β(X, Y)
    pub relative: BettiNumbers,
}

impl TerritoryBetti {
    /// The claimed cells join the two pieces of the base
    pub fn connects_base(&self) -> bool {
        self.relative.beta_1 > self.absolute.beta_1
    }
}

/// A player's growing territory over a fixed base
#[derive(Debug, Clone)]
pub struct Territory {
    base: Complex,
    complex: Complex,
}

impl Territory {
    /// Territory consisting of the base alone
    pub fn new(base: Complex) -> Self {
        Self {
            complex: base.clone(),
            base,
        }
    }

    pub fn base(&self) -> &Complex {
        &self.base
    }

    pub fn complex(&self) -> &Complex {
        &self.complex
    }

    /// Add the closed fan triangulation of a cell
    pub fn claim(&mut self, cycle: &[Vertex]) -> Result<()> {
        let cell = face_from_cycle(cycle)?.closure();
        self.complex = self.complex.union(&cell);
        Ok(())
    }

    pub fn betti(&self, config: &HomologyConfig) -> Result<TerritoryBetti> {
        Ok(TerritoryBetti {
            absolute: BettiNumbers::compute(&self.complex, None, config)?,
            relative: BettiNumbers::compute(&self.complex, Some(&self.base), config)?,
        })
    }
}

/// The eight Betti numbers shown after every move, plus the winner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomologySummary {
    pub blue: TerritoryBetti,
    pub red: TerritoryBetti,
}

impl HomologySummary {
    /// Blue is checked first
    pub fn winner(&self) -> Option<Player> {
        if self.blue.connects_base() {
            Some(Player::Blue)
        } else if self.red.connects_base() {
            Some(Player::Red)
        } else {
            None
        }
    }
}

impl fmt::Display for HomologySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (b, r) = (&self.blue, &self.red);
        writeln!(f, "betti    :\tdim=0\tdim=1")?;
        writeln!(f, "------------------------------")?;
        writeln!(f, "b(B)     :\t{}\t{}", b.absolute.beta_0, b.absolute.beta_1)?;
        writeln!(f, "b(B,B_0) :\t{}\t{}", b.relative.beta_0, b.relative.beta_1)?;
        writeln!(f, "b(R)     :\t{}\t{}", r.absolute.beta_0, r.absolute.beta_1)?;
        writeln!(f, "b(R,R_0) :\t{}\t{}", r.relative.beta_0, r.relative.beta_1)?;
        writeln!(f)?;
        writeln!(f)?;
        if let Some(player) = self.winner() {
            write!(f, "winner: {player}!")?;
        }
        Ok(())
    }
}

/// Game state: the board, both territories and the turn order
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    blue: Territory,
    red: Territory,
    to_move: Player,
    config: HomologyConfig,
    last_summary: Option<HomologySummary>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self::start(board, HomologyConfig::default())
    }

    /// Game with custom numerical settings; rejects an invalid tolerance
    pub fn with_config(board: Board, config: HomologyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::start(board, config))
    }

    fn start(board: Board, config: HomologyConfig) -> Self {
        Self {
            blue: Territory::new(board.blue_base().clone()),
            red: Territory::new(board.red_base().clone()),
            board,
            to_move: Player::Red,
            config,
            last_summary: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn territory(&self, player: Player) -> &Territory {
        match player {
            Player::Blue => &self.blue,
            Player::Red => &self.red,
        }
    }

    /// Return the player to move and advance the turn (red moves first)
    pub fn next_player(&mut self) -> Player {
        let player = self.to_move;
        self.to_move = player.opponent();
        player
    }

    /// Add a polygon cell to a player's territory
    pub fn claim(&mut self, player: Player, cycle: &[Vertex]) -> Result<()> {
        let territory = match player {
            Player::Blue => &mut self.blue,
            Player::Red => &mut self.red,
        };
        territory.claim(cycle)?;
        debug!(%player, ?cycle, simplices = territory.complex().len(), "claimed cell");
        Ok(())
    }

    /// Let the player to move claim board cell `cell`
    pub fn play(&mut self, cell: usize) -> Result<Player> {
        let cycle = self.board.cycle(cell)?.clone();
        let player = self.to_move;
        self.claim(player, &cycle)?;
        self.next_player();
        info!(%player, cell, "move");
        Ok(player)
    }

    /// Compute all eight Betti numbers from scratch
    pub fn summary(&self) -> Result<HomologySummary> {
        Ok(HomologySummary {
            blue: self.blue.betti(&self.config)?,
            red: self.red.betti(&self.config)?,
        })
    }

    /// Recompute the summary, keeping the last known one if the
    /// decomposition fails numerically.
    pub fn refresh_summary(&mut self) -> Result<Option<HomologySummary>> {
        match self.summary() {
            Ok(summary) => {
                if let Some(player) = summary.winner() {
                    info!(%player, "base connected");
                }
                self.last_summary = Some(summary);
            }
            Err(err) if err.is_numerical() => {
                warn!(error = %err, "keeping previous Betti numbers");
            }
            Err(err) => return Err(err),
        }
        Ok(self.last_summary)
    }

    pub fn last_summary(&self) -> Option<&HomologySummary> {
        self.last_summary.as_ref()
    }
}
