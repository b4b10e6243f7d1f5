//! Numerical Kernel and Cokernel via Singular Value Decomposition
//!
//! For A = U Σ Vᵀ (m × n), singular values σᵢ ≤ tol are treated as zero:
//!
//! - rank(A)  = #{σᵢ > tol}
//! - ker(A)   = span of the columns of V with σᵢ ≤ tol   (n × r)
//! - coker(A) = span of the columns of U with σᵢ ≤ tol   (m × r)
//!
//! nalgebra computes the thin decomposition, which only yields
//! min(m, n) singular vectors. Zero rows (for the kernel) or zero
//! columns (for the cokernel) are appended to make A square; this
//! leaves the respective null space unchanged and exposes every
//! singular vector.

use nalgebra::{DMatrix, Dyn, SVD};
use ndarray::Array2;
use tracing::trace;

use crate::{HomologyConfig, Result, TopologyError};

fn to_dmatrix(a: &Array2<f64>, rows: usize, cols: usize) -> Result<DMatrix<f64>> {
    if a.iter().any(|x| !x.is_finite()) {
        return Err(TopologyError::numerical("matrix contains non-finite entries"));
    }
    let (m, n) = a.dim();
    Ok(DMatrix::from_fn(rows, cols, |i, j| {
        if i < m && j < n {
            a[[i, j]]
        } else {
            0.0
        }
    }))
}

fn decompose(
    matrix: DMatrix<f64>,
    compute_u: bool,
    compute_v: bool,
    config: &HomologyConfig,
) -> Result<SVD<f64, Dyn, Dyn>> {
    let (m, n) = matrix.shape();
    matrix
        .try_svd(compute_u, compute_v, f64::EPSILON, config.max_svd_iterations)
        .ok_or_else(|| {
            TopologyError::numerical(format!(
                "SVD of {m}x{n} matrix did not converge in {} iterations",
                config.max_svd_iterations
            ))
        })
}

/// Number of singular values above the tolerance
pub fn numerical_rank(a: &Array2<f64>, config: &HomologyConfig) -> Result<usize> {
    let (m, n) = a.dim();
    if m == 0 || n == 0 {
        return Ok(0);
    }
    let svd = decompose(to_dmatrix(a, m, n)?, false, false, config)?;
    let rank = svd
        .singular_values
        .iter()
        .filter(|&&s| s > config.tolerance)
        .count();
    trace!(m, n, rank, "numerical rank");
    Ok(rank)
}

/// Basis of the null space as columns (n × r)
pub fn kernel(a: &Array2<f64>, config: &HomologyConfig) -> Result<Array2<f64>> {
    let (m, n) = a.dim();
    if n == 0 {
        return Ok(Array2::zeros((0, 0)));
    }
    if m == 0 {
        return Ok(Array2::eye(n));
    }

    let svd = decompose(to_dmatrix(a, m.max(n), n)?, false, true, config)?;
    let v_t = svd
        .v_t
        .ok_or_else(|| TopologyError::numerical("SVD returned no right singular vectors"))?;

    let null: Vec<usize> = svd
        .singular_values
        .iter()
        .enumerate()
        .filter(|(_, s)| **s <= config.tolerance)
        .map(|(i, _)| i)
        .collect();

    Ok(Array2::from_shape_fn((n, null.len()), |(j, c)| v_t[(null[c], j)]))
}

/// Basis of the left null space as columns (m × r)
pub fn cokernel(a: &Array2<f64>, config: &HomologyConfig) -> Result<Array2<f64>> {
    let (m, n) = a.dim();
    if m == 0 {
        return Ok(Array2::zeros((0, 0)));
    }
    if n == 0 {
        return Ok(Array2::eye(m));
    }

    let svd = decompose(to_dmatrix(a, m, m.max(n))?, true, false, config)?;
    let u = svd
        .u
        .ok_or_else(|| TopologyError::numerical("SVD returned no left singular vectors"))?;

    let null: Vec<usize> = svd
        .singular_values
        .iter()
        .enumerate()
        .filter(|(_, s)| **s <= config.tolerance)
        .map(|(i, _)| i)
        .collect();

    Ok(Array2::from_shape_fn((m, null.len()), |(i, c)| u[(i, null[c])]))
}

/// Minimum-norm least-squares solution X of A X ≈ B
pub fn least_squares(
    a: &Array2<f64>,
    b: &Array2<f64>,
    config: &HomologyConfig,
) -> Result<Array2<f64>> {
    let (m, n) = a.dim();
    let (bm, bn) = b.dim();
    if m != bm {
        return Err(TopologyError::numerical(format!(
            "least squares shape mismatch: {m}x{n} against {bm}x{bn}"
        )));
    }
    if m == 0 || n == 0 {
        return Ok(Array2::zeros((n, bn)));
    }

    let svd = decompose(to_dmatrix(a, m, n)?, true, true, config)?;
    let rhs = to_dmatrix(b, bm, bn)?;
    let x = svd
        .solve(&rhs, config.tolerance)
        .map_err(|e| TopologyError::numerical(format!("least squares failed: {e}")))?;

    Ok(Array2::from_shape_fn((x.nrows(), x.ncols()), |(i, j)| {
        x[(i, j)]
    }))
}
