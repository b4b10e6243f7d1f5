//! Algebra Module: Numerical Linear Algebra for Homology
//!
//! Exact integer homology (Smith normal form) is replaced by floating
//! point SVD with a tolerance. The complexes built from a board are
//! small, and a tolerance absorbs the rounding noise of unreduced
//! boundary matrices.
//!
//! - `svd.rs`: rank, kernel, cokernel and least squares
//! - `homology.rs`: Betti numbers and homology bases from ∂ₖ, ∂ₖ₊₁

mod svd;
mod homology;

pub use svd::{numerical_rank, kernel, cokernel, least_squares};
pub use homology::{homology, homology_rank_only};
