//! Territory Demo: Random Play on a Square Grid
//!
//! This binary plays a scripted game of the connection game with random
//! moves and reports the homology summary after every round.
//!
//! ## Protocol
//!
//! 1. Build an n × n grid board and stitch the border strips
//! 2. Verify both bases: two contractible components each
//! 3. Alternate red/blue moves on a shuffled cell order
//! 4. Stop as soon as β₁(X, Y) > β₁(X) for some player
//!
//! Set `RUST_LOG=debug` to trace chain sizes and ranks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tda_territory::{betti, Board, BoardConfig, Game, HomologyConfig};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  TDA-Territory: Relative Homology Connection Game");
    println!("═══════════════════════════════════════════════════════════════\n");

    // Game parameters
    let grid_size = 5;
    let seed = 2026;
    let config = HomologyConfig::default();

    println!("Parameters:");
    println!("  Grid      = {}×{} cells", grid_size, grid_size);
    println!("  Seed      = {}", seed);
    println!("  Tolerance = {:e}", config.tolerance);
    println!();

    let board = match Board::square_grid(grid_size, &BoardConfig::default()) {
        Ok(board) => board,
        Err(err) => {
            error!(error = %err, "could not build board");
            std::process::exit(1);
        }
    };

    println!("Board:");
    println!("  {} cells, {} points", board.cycles().len(), board.points().len());
    for (name, base) in [("blue", board.blue_base()), ("red", board.red_base())] {
        match (betti(0, base, None), betti(1, base, None)) {
            (Ok(b0), Ok(b1)) => println!("  {name:4} base: β₀ = {b0}, β₁ = {b1}"),
            (Err(err), _) | (_, Err(err)) => {
                error!(error = %err, "base homology failed");
                std::process::exit(1);
            }
        }
    }

    let mut order: Vec<usize> = (0..board.cycles().len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut game = match Game::with_config(board, config) {
        Ok(game) => game,
        Err(err) => {
            error!(error = %err, "invalid homology configuration");
            std::process::exit(1);
        }
    };

    println!("\n══════════════════════════════════════════════════════════════");
    println!("  Play");
    println!("══════════════════════════════════════════════════════════════\n");

    let mut winner = None;
    for (turn, &cell) in order.iter().enumerate() {
        let player = match game.play(cell) {
            Ok(player) => player,
            Err(err) => {
                error!(error = %err, cell, "move rejected");
                continue;
            }
        };

        let summary = match game.refresh_summary() {
            Ok(Some(summary)) => summary,
            Ok(None) => continue,
            Err(err) => {
                error!(error = %err, "homology failed");
                break;
            }
        };

        println!(
            "Turn {:3}: {:4} claims cell {:2}  β(B) = ({}, {})  β(B,B₀) = ({}, {})  β(R) = ({}, {})  β(R,R₀) = ({}, {})",
            turn + 1,
            player,
            cell,
            summary.blue.absolute.beta_0,
            summary.blue.absolute.beta_1,
            summary.blue.relative.beta_0,
            summary.blue.relative.beta_1,
            summary.red.absolute.beta_0,
            summary.red.absolute.beta_1,
            summary.red.relative.beta_0,
            summary.red.relative.beta_1,
        );

        if let Some(player) = summary.winner() {
            winner = Some((player, turn + 1));
            break;
        }
    }

    println!("\n══════════════════════════════════════════════════════════════");
    println!("  Results");
    println!("══════════════════════════════════════════════════════════════\n");

    if let Some(summary) = game.last_summary() {
        println!("{}", summary);
    }

    match winner {
        Some((player, turn)) => println!("\n{} connected its base on turn {}", player, turn),
        None => println!("\nNo connection after {} moves", order.len()),
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Game Complete");
    println!("═══════════════════════════════════════════════════════════════");
}
