//! # TDA-Territory
//!
//! Relative Simplicial Homology for a Topological Connection Game
//!
//! ## Theoretical Framework
//!
//! Players claim polygonal cells of a tessellated board. Each claimed
//! cell is fan-triangulated and its closure is added to the player's
//! territory, a growing simplicial complex X that contains the player's
//! base Y (two strips on opposite board edges).
//!
//! ### Central Observation
//!
//! The territory joins both strips of the base exactly when
//!
//!   β₁(X, Y) > β₁(X)
//!
//! since identifying Y to a point turns every path between its two
//! pieces into a new independent loop.
//!
//! ### Methodology
//!
//! 1. **Cell derivation**: polygon cycles become edges, fan 2-cells and
//!    their downward closure
//!
//! 2. **Boundary operators**: signed matrices ∂ₖ of the relative chain
//!    complex C(X)/C(Y), in canonical simplex order
//!
//! 3. **Numerical rank**: singular value decomposition with a tolerance
//!    gives βₖ = dim Cₖ − rank ∂ₖ − rank ∂ₖ₊₁
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Hatcher, "Algebraic Topology" (2002), §2.1 relative homology

pub mod algebra;
pub mod config;
pub mod error;
pub mod game;
pub mod topology;

pub use config::HomologyConfig;
pub use error::{Result, TopologyError};

// Re-exports from topology
pub use topology::{
    // Simplices and complexes
    Complex,
    Simplex,
    Vertex,
    Cycle,
    // Cell derivation
    closure,
    edges_from_cycle,
    edges_from_cycles,
    face_from_cycle,
    faces_from_edges,
    outer_edges_from_cycle,
    verts_from_edges,
    // Boundary operators
    BoundaryOperator,
    boundary,
    k_simplices,
    // Homology
    BettiNumbers,
    HomologyGroup,
    HomologyMethod,
    betti,
    betti_with_config,
    simplicial_homology,
};

// Re-exports from game
pub use game::{
    Board,
    BoardConfig,
    Game,
    HomologySummary,
    Player,
    Territory,
    TerritoryBetti,
};
