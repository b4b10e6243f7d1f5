//! Cell Derivation: Polygon Cycles to Simplices
//!
//! A board cell is handed over as a cycle, the ordered sequence of
//! vertex labels around its polygonal boundary. From a cycle
//! [c₀, c₁, ..., cₙ₋₁] we derive:
//!
//! - edges:      {cᵢ, cᵢ₊₁ mod n}
//! - open path:  {cᵢ, cᵢ₊₁} for i < n-1 (no wrap-around)
//! - 2-cells:    fan from c₀, {c₀, cᵢ, cᵢ₊₁} for 1 ≤ i < n-1
//!
//! The fan is only a combinatorial triangulation; geometry is irrelevant
//! to homology, so convexity is never checked.

use std::collections::{BTreeMap, BTreeSet};

use super::{Complex, Simplex, Vertex};
use crate::{Result, TopologyError};

/// Ordered polygon boundary of one board cell
pub type Cycle = Vec<Vertex>;

fn check_cycle(cycle: &[Vertex], min_len: usize) -> Result<()> {
    if cycle.len() < min_len {
        return Err(TopologyError::invalid_complex(format!(
            "cycle {cycle:?} has {} vertices, need at least {min_len}",
            cycle.len()
        )));
    }
    let distinct: BTreeSet<Vertex> = cycle.iter().copied().collect();
    if distinct.len() != cycle.len() {
        return Err(TopologyError::invalid_complex(format!(
            "cycle {cycle:?} repeats a vertex"
        )));
    }
    Ok(())
}

/// The n edges of a closed polygon, including the wrap-around edge
pub fn edges_from_cycle(cycle: &[Vertex]) -> Result<Complex> {
    check_cycle(cycle, 3)?;
    let n = cycle.len();
    Ok((0..n)
        .map(|i| Simplex::from([cycle[i], cycle[(i + 1) % n]]))
        .collect())
}

/// Union of the edges of every cycle
pub fn edges_from_cycles<I, C>(cycles: I) -> Result<Complex>
where
    I: IntoIterator<Item = C>,
    C: AsRef<[Vertex]>,
{
    let mut edges = BTreeSet::new();
    for cycle in cycles {
        edges.extend(edges_from_cycle(cycle.as_ref())?.iter().cloned());
    }
    Ok(Complex::new(edges))
}

/// The 0-simplices touched by an edge set
pub fn verts_from_edges(edges: &Complex) -> Complex {
    edges
        .vertices()
        .into_iter()
        .map(|v| Simplex::from([v]))
        .collect()
}

/// Edges of the open path through the cycle (no closing edge)
pub fn outer_edges_from_cycle(cycle: &[Vertex]) -> Result<Complex> {
    check_cycle(cycle, 2)?;
    Ok(cycle
        .windows(2)
        .map(|w| Simplex::from([w[0], w[1]]))
        .collect())
}

/// Fan triangulation of a polygon from its first vertex
pub fn face_from_cycle(cycle: &[Vertex]) -> Result<Complex> {
    check_cycle(cycle, 3)?;
    let apex = cycle[0];
    Ok(outer_edges_from_cycle(&cycle[1..])?
        .iter()
        .map(|edge| edge.with_vertex(apex))
        .collect())
}

/// Fan an edge set that forms exactly one simple closed cycle.
///
/// The apex is the smallest vertex label, so equal edge sets always yield
/// the same triangulation.
pub fn faces_from_edges(edges: &Complex) -> Result<Complex> {
    check_simple_cycle(edges)?;
    let apex = edges
        .vertices()
        .into_iter()
        .next()
        .ok_or_else(|| TopologyError::invalid_complex("empty edge set"))?;

    Ok(edges
        .iter()
        .filter(|edge| !edge.contains(apex))
        .map(|edge| edge.with_vertex(apex))
        .collect())
}

/// Every vertex has degree two, there are at least three edges,
/// and a walk from any vertex visits all of them.
fn check_simple_cycle(edges: &Complex) -> Result<()> {
    if let Some(bad) = edges.iter().find(|s| s.len() != 2) {
        return Err(TopologyError::invalid_complex(format!(
            "expected only edges, found {:?}",
            bad.vertices()
        )));
    }
    if edges.len() < 3 {
        return Err(TopologyError::invalid_complex(format!(
            "{} edges cannot form a simple cycle",
            edges.len()
        )));
    }

    let mut adjacency: BTreeMap<Vertex, Vec<Vertex>> = BTreeMap::new();
    for edge in edges {
        let (a, b) = (edge.vertices()[0], edge.vertices()[1]);
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    if let Some((v, nbrs)) = adjacency.iter().find(|(_, nbrs)| nbrs.len() != 2) {
        return Err(TopologyError::invalid_complex(format!(
            "vertex {v} has degree {} in edge cycle",
            nbrs.len()
        )));
    }

    // Degree two everywhere: the set is a disjoint union of cycles.
    // Walk one of them and require it to cover every vertex.
    let Some((&start, _)) = adjacency.iter().next() else {
        return Err(TopologyError::invalid_complex("empty edge set"));
    };
    let mut prev = start;
    let mut current = adjacency[&start][0];
    let mut visited = 1;
    while current != start {
        let nbrs = &adjacency[&current];
        let next = if nbrs[0] == prev { nbrs[1] } else { nbrs[0] };
        prev = current;
        current = next;
        visited += 1;
    }

    if visited != adjacency.len() {
        return Err(TopologyError::invalid_complex(format!(
            "edge set splits into several cycles ({visited} of {} vertices reachable)",
            adjacency.len()
        )));
    }
    Ok(())
}

/// Downward closure of a cell set into a simplicial complex
pub fn closure(cells: &Complex) -> Complex {
    cells.closure()
}
