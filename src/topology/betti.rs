//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a complex:
//!
//! - β₀: Number of connected components
//! - β₁: Number of independent loops
//!
//! Relative Betti numbers βₖ(X, Y) are computed from the quotient chain
//! complex C(X)/C(Y), i.e. with every simplex of Y removed from the
//! chains. Each query is a pure function of its inputs.

use ndarray::Array2;
use std::collections::BTreeMap;
use tracing::debug;

use super::{boundary, Complex, Simplex, Vertex};
use crate::algebra::{homology, homology_rank_only};
use crate::{HomologyConfig, Result};

/// How much of Hₖ to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomologyMethod {
    /// βₖ only, by rank–nullity
    RankOnly,
    /// βₖ together with a basis of representative chains
    Basis,
}

/// Result of a homology query in one dimension
#[derive(Debug, Clone)]
pub struct HomologyGroup {
    pub degree: usize,
    /// Betti number βₖ
    pub rank: usize,
    /// Columns are generators over `chain` (only for [`HomologyMethod::Basis`])
    pub basis: Option<Array2<f64>>,
    /// k-simplices of the relative chain group, in the caller's vertex labels
    pub chain: Vec<Simplex>,
}

/// Rename the vertices of X ∪ Y to 0..n, preserving their order.
///
/// Returns the relabeled pair and the original label of each new index.
pub fn dense_relabel(x: &Complex, y: Option<&Complex>) -> (Complex, Complex, Vec<Vertex>) {
    let mut labels = x.vertices();
    if let Some(y) = y {
        labels.extend(y.vertices());
    }
    let index: BTreeMap<Vertex, Vertex> = labels
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();

    let rename = |v: Vertex| index[&v];
    let x = x.relabel(rename);
    let y = y.map(|y| y.relabel(rename)).unwrap_or_default();
    (x, y, labels.into_iter().collect())
}

/// Hₖ(X, Y), or Hₖ(X) when `y` is `None`
pub fn simplicial_homology(
    k: usize,
    x: &Complex,
    y: Option<&Complex>,
    method: HomologyMethod,
    config: &HomologyConfig,
) -> Result<HomologyGroup> {
    config.validate()?;
    let (x, y, labels) = dense_relabel(x, y);
    let relative = (!y.is_empty()).then_some(&y);

    let dk = boundary(&x, k, relative, None);
    let dk1 = boundary(&x, k + 1, relative, Some(&dk.chain));
    debug!(
        k,
        chain = dk.chain.len(),
        d_k = ?dk.matrix.dim(),
        d_k1 = ?dk1.matrix.dim(),
        "simplicial homology"
    );

    let (rank, basis) = match method {
        HomologyMethod::RankOnly => {
            let rank = homology_rank_only(&dk.to_f64(), &dk1.to_f64(), config)?;
            (rank, None)
        }
        HomologyMethod::Basis => {
            let basis = homology(&dk.to_f64(), &dk1.to_f64(), config)?;
            (basis.ncols(), Some(basis))
        }
    };

    let chain = dk
        .chain
        .iter()
        .map(|s| s.relabel(|v| labels[v]))
        .collect();

    Ok(HomologyGroup {
        degree: k,
        rank,
        basis,
        chain,
    })
}

/// βₖ(X) or βₖ(X, subspace) with the default tolerance
pub fn betti(index: usize, complex: &Complex, subspace: Option<&Complex>) -> Result<usize> {
    betti_with_config(index, complex, subspace, &HomologyConfig::default())
}

pub fn betti_with_config(
    index: usize,
    complex: &Complex,
    subspace: Option<&Complex>,
    config: &HomologyConfig,
) -> Result<usize> {
    simplicial_homology(index, complex, subspace, HomologyMethod::RankOnly, config)
        .map(|group| group.rank)
}

/// Low-dimensional Betti numbers of a complex, absolute or relative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BettiNumbers {
    pub beta_0: usize, // Connected components
    pub beta_1: usize, // Loops
}

impl BettiNumbers {
    pub fn new(beta_0: usize, beta_1: usize) -> Self {
        Self { beta_0, beta_1 }
    }

    /// Compute β₀ and β₁ of X, or of (X, Y) when `relative` is given
    pub fn compute(
        complex: &Complex,
        relative: Option<&Complex>,
        config: &HomologyConfig,
    ) -> Result<Self> {
        let beta_0 = betti_with_config(0, complex, relative, config)?;
        let beta_1 = betti_with_config(1, complex, relative, config)?;
        Ok(Self::new(beta_0, beta_1))
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.beta_0 + self.beta_1
    }

    /// Truncated Euler characteristic β₀ - β₁
    pub fn euler_characteristic(&self) -> i64 {
        self.beta_0 as i64 - self.beta_1 as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_triangle_contractible() {
        let x = Complex::from_cells([[0, 1, 2]]).closure();
        assert_eq!(betti(0, &x, None).unwrap(), 1);
        assert_eq!(betti(1, &x, None).unwrap(), 0);
    }

    #[test]
    fn test_hollow_triangle_has_loop() {
        let x = Complex::from_cells([[0, 1], [1, 2], [2, 0]]);
        assert_eq!(betti(0, &x, None).unwrap(), 1);
        assert_eq!(betti(1, &x, None).unwrap(), 1);
    }

    #[test]
    fn test_two_disjoint_triangles() {
        let x = Complex::from_cells([[0, 1, 2], [3, 4, 5]]).closure();
        assert_eq!(betti(0, &x, None).unwrap(), 2);
        assert_eq!(betti(1, &x, None).unwrap(), 0);
    }

    #[test]
    fn test_sparse_labels() {
        let x = Complex::from_cells([[100, 7, 4031]]).closure();
        let y = Complex::from_cells([[7, 100]]).closure();
        assert_eq!(betti(0, &x, None).unwrap(), 1);
        // Disk modulo an edge on its boundary is contractible
        assert_eq!(betti(0, &x, Some(&y)).unwrap(), 0);
        assert_eq!(betti(1, &x, Some(&y)).unwrap(), 0);
    }

    #[test]
    fn test_dense_relabel_preserves_order() {
        let x = Complex::from_cells([[10, 30]]);
        let y = Complex::from_cells([[20]]);
        let (x, y, labels) = dense_relabel(&x, Some(&y));
        assert_eq!(labels, vec![10, 20, 30]);
        assert_eq!(x, Complex::from_cells([[0, 2]]));
        assert_eq!(y, Complex::from_cells([[1]]));
    }

    #[test]
    fn test_relative_joins_two_pieces() {
        // Base: two disjoint edges; territory: a filled strip joining them
        let base = Complex::from_cells([[0, 1], [2, 3]]).closure();
        let strip = Complex::from_cells([[0, 1, 2], [1, 2, 3]]).closure();
        let x = strip.union(&base);
        assert_eq!(betti(1, &x, None).unwrap(), 0);
        assert_eq!(betti(1, &x, Some(&base)).unwrap(), 1);

        // Only one side attached: nothing gained
        let half = Complex::from_cells([[0, 1, 4]]).closure().union(&base);
        assert_eq!(betti(1, &half, Some(&base)).unwrap(), betti(1, &half, None).unwrap());
    }

    #[test]
    fn test_basis_method_agrees_with_rank() {
        let config = HomologyConfig::default();
        let annulus = Complex::from_cells([
            [0, 1, 4], [1, 4, 5], [1, 2, 5], [2, 5, 6],
            [2, 3, 6], [3, 6, 7], [3, 0, 7], [0, 7, 4],
        ])
        .closure();
        for k in 0..3 {
            let fast = simplicial_homology(k, &annulus, None, HomologyMethod::RankOnly, &config)
                .unwrap();
            let full = simplicial_homology(k, &annulus, None, HomologyMethod::Basis, &config)
                .unwrap();
            assert_eq!(fast.rank, full.rank, "dimension {k}");
            assert_eq!((fast.degree, full.degree), (k, k));
            assert!(fast.basis.is_none());
            assert_eq!(full.basis.unwrap().nrows(), full.chain.len());
        }
        let numbers = BettiNumbers::compute(&annulus, None, &config).unwrap();
        assert_eq!(numbers, BettiNumbers::new(1, 1));
        assert_eq!(numbers.euler_characteristic(), 0);
        assert_eq!(numbers.total(), 2);
    }

    #[test]
    fn test_tolerance_checked_before_computing() {
        let hollow = Complex::from_cells([[0, 1], [1, 2], [2, 0]]);
        for tolerance in [0.0, -1e-5, f64::INFINITY] {
            let config = HomologyConfig::with_tolerance(tolerance);
            let err = simplicial_homology(1, &hollow, None, HomologyMethod::Basis, &config)
                .unwrap_err();
            assert!(matches!(err, crate::TopologyError::InvalidConfig(_)));
        }
    }
}
