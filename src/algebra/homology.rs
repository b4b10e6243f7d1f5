//! Homology of a Pair of Boundary Maps
//!
//! Given ∂ₖ: Cₖ → Cₖ₋₁ and ∂ₖ₊₁: Cₖ₊₁ → Cₖ with ∂ₖ ∘ ∂ₖ₊₁ = 0,
//!
//!   Hₖ = ker ∂ₖ / im ∂ₖ₊₁,   βₖ = dim Cₖ − rank ∂ₖ − rank ∂ₖ₊₁
//!
//! The rank-only path is what the win check relies on. The basis path
//! projects the image out of an orthonormal kernel basis by least squares
//! and is best-effort near rank degeneracy.

use ndarray::{Array2, Axis};
use tracing::debug;

use super::svd::{cokernel, kernel, least_squares, numerical_rank};
use crate::{HomologyConfig, Result};

/// βₖ by rank–nullity
pub fn homology_rank_only(
    dk: &Array2<f64>,
    dk1: &Array2<f64>,
    config: &HomologyConfig,
) -> Result<usize> {
    let rank_k = numerical_rank(dk, config)?;
    let rank_k1 = numerical_rank(dk1, config)?;
    let chains = dk.ncols();

    debug!(chains, rank_k, rank_k1, "rank-only homology");
    Ok(chains.saturating_sub(rank_k).saturating_sub(rank_k1))
}

/// Basis of Hₖ as columns over the k-chain (dim Cₖ × βₖ)
pub fn homology(dk: &Array2<f64>, dk1: &Array2<f64>, config: &HomologyConfig) -> Result<Array2<f64>> {
    let ker = if dk.is_empty() {
        Array2::eye(dk.ncols())
    } else {
        kernel(dk, config)?
    };

    let nonzero: Vec<usize> = dk1
        .axis_iter(Axis(1))
        .enumerate()
        .filter(|(_, col)| col.iter().any(|x| x.abs() > config.tolerance))
        .map(|(j, _)| j)
        .collect();

    if nonzero.is_empty() || ker.ncols() == 0 {
        debug!(beta = ker.ncols(), "homology equals kernel");
        return Ok(ker);
    }

    let image = dk1.select(Axis(1), &nonzero);
    let coords = least_squares(&ker, &image, config)?;
    let quotient = cokernel(&coords, config)?;
    let basis = ker.dot(&quotient);

    debug!(
        kernel = ker.ncols(),
        image = nonzero.len(),
        beta = basis.ncols(),
        "basis homology"
    );
    Ok(basis)
}
