//! Topology Module: Simplicial Complexes and Relative Homology
//!
//! Implements the combinatorial side of the territory engine:
//! - Simplices and complexes with canonical ordering
//! - Cell derivation from polygon cycles (edges, fans, closure)
//! - Signed boundary matrices of absolute and relative chain complexes
//! - Betti numbers βₖ(X) and βₖ(X, Y)
//!
//! ## Mathematical Background
//!
//! A board cell is a polygon; fanning it from one vertex gives a
//! triangulated disk. A player's territory is the closure of the union
//! of such disks together with that player's base. Relative homology
//! Hₖ(X, Y) measures what X adds on top of the base Y; in particular
//! β₁(X, Y) > β₁(X) signals that X joins two components of Y.

mod simplex;
mod cells;
mod boundary;
mod betti;

pub use simplex::{Complex, Simplex, Vertex};
pub use cells::{
    Cycle,
    closure,
    edges_from_cycle,
    edges_from_cycles,
    face_from_cycle,
    faces_from_edges,
    outer_edges_from_cycle,
    verts_from_edges,
};
pub use boundary::{BoundaryOperator, boundary, k_simplices};
pub use betti::{
    BettiNumbers,
    HomologyGroup,
    HomologyMethod,
    betti,
    betti_with_config,
    dense_relabel,
    simplicial_homology,
};
