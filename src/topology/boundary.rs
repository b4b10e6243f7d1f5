//! Boundary Operators of (Relative) Chain Complexes
//!
//! For a k-simplex with sorted vertices [v₀, ..., vₖ]:
//!
//!   ∂ₖ[v₀, ..., vₖ] = Σᵢ (-1)ⁱ [v₀, ..., v̂ᵢ, ..., vₖ]
//!
//! Relative chains Cₖ(X, Y) drop every simplex of Y. A face that falls
//! into Y has no row in the matrix, so its term simply disappears.
//! Because vertices are sorted and chains are enumerated in canonical
//! order, ∂ₖ ∘ ∂ₖ₊₁ = 0 holds exactly.

use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

use super::{Complex, Simplex};

/// Signed boundary matrix together with the chain indexing its columns
#[derive(Debug, Clone)]
pub struct BoundaryOperator {
    /// Chain dimension k of the domain
    pub dimension: usize,
    /// (k-1)-chain × k-chain matrix with entries in {-1, 0, 1}
    pub matrix: Array2<i8>,
    /// k-simplices, one per column
    pub chain: Vec<Simplex>,
}

impl BoundaryOperator {
    /// Floating point copy for the SVD engine
    pub fn to_f64(&self) -> Array2<f64> {
        self.matrix.mapv(f64::from)
    }

    /// True for the zero map on an empty domain or codomain
    pub fn is_degenerate(&self) -> bool {
        self.matrix.nrows() == 0 || self.matrix.ncols() == 0
    }
}

/// Distinct k-simplices occurring as faces of some cell of `complex`,
/// minus those in `relative`
pub fn k_simplices(complex: &Complex, k: usize, relative: Option<&Complex>) -> Vec<Simplex> {
    let chain: BTreeSet<Simplex> = complex
        .iter()
        .filter(|cell| cell.len() > k)
        .flat_map(|cell| cell.faces(k))
        .filter(|s| relative.map_or(true, |rel| !rel.contains(s)))
        .collect();
    chain.into_iter().collect()
}

/// Assemble ∂ₖ: Cₖ(X, Y) → Cₖ₋₁(X, Y).
///
/// `km1_chain` reuses an already enumerated (k-1)-chain, typically the
/// column chain of the previous operator.
pub fn boundary(
    complex: &Complex,
    k: usize,
    relative: Option<&Complex>,
    km1_chain: Option<&[Simplex]>,
) -> BoundaryOperator {
    let chain = k_simplices(complex, k, relative);

    let owned_km1;
    let rows: &[Simplex] = match km1_chain {
        Some(rows) => rows,
        None if k > 0 => {
            owned_km1 = k_simplices(complex, k - 1, relative);
            &owned_km1
        }
        None => &[],
    };

    if k == 0 || chain.is_empty() || rows.is_empty() {
        return BoundaryOperator {
            dimension: k,
            matrix: Array2::zeros((0, chain.len())),
            chain,
        };
    }

    let row_index: HashMap<&Simplex, usize> =
        rows.iter().enumerate().map(|(i, s)| (s, i)).collect();

    let mut matrix = Array2::<i8>::zeros((rows.len(), chain.len()));
    for (col, simplex) in chain.iter().enumerate() {
        for (omitted, face) in simplex.facets() {
            if let Some(&row) = row_index.get(&face) {
                matrix[[row, col]] = if omitted % 2 == 0 { 1 } else { -1 };
            }
        }
    }

    trace!(k, rows = rows.len(), cols = chain.len(), "assembled boundary matrix");

    BoundaryOperator {
        dimension: k,
        matrix,
        chain,
    }
}
