//! Board: Tessellated Unit Square with Player Bases
//!
//! The geometry collaborator tessellates the square [-0.5, 0.5]² into
//! polygonal cells and hands over the point table and the cell cycles.
//! This module stitches the four border strips onto that tessellation:
//!
//! ```text
//!   cul ─────────── up ─────────── cur
//!    │ ul ─────────────────────── ur │
//!  left│                           │right
//!    │ dl ─────────────────────── dr │
//!   cdl ────────── down ────────── cdr
//! ```
//!
//! Four extra vertices (cul, cdl, cdr, cur) sit outside the square. Each
//! strip is bounded by the board edges on its side plus the open path
//! through its corner cycle, and is fanned into 2-cells. Blue owns the
//! up and down strips, red the left and right ones.

use serde::Deserialize;
use tracing::debug;

use crate::topology::{
    edges_from_cycles, faces_from_edges, outer_edges_from_cycle, verts_from_edges, Complex,
    Cycle, Vertex,
};
use crate::{Result, TopologyError};

/// Planar point coordinates
pub type Point = [f64; 2];

/// Geometric tolerances for recognising the border of a tessellation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Distance under which two coordinates are considered equal
    pub epsilon: f64,
    /// Scale of the outer corner points relative to the unit square
    pub border_scale: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            border_scale: 1.2,
        }
    }
}

/// Fan a border strip: board edges along one side plus the open path
/// through the side's corner cycle must form a single closed cycle.
pub fn border_base(border_edges: &Complex, corner_cycle: &[Vertex]) -> Result<Complex> {
    let rim = border_edges.union(&outer_edges_from_cycle(corner_cycle)?);
    faces_from_edges(&rim)
}

/// A tessellated board with both players' bases
#[derive(Debug, Clone)]
pub struct Board {
    points: Vec<Point>,
    cycles: Vec<Cycle>,
    edges: Complex,
    blue_base: Complex,
    red_base: Complex,
    blue_base_cycles: [Cycle; 2],
    red_base_cycles: [Cycle; 2],
}

impl Board {
    /// Stitch border strips onto a tessellation of [-0.5, 0.5]².
    ///
    /// The four corners of the square must be vertices of the tessellation.
    pub fn from_tessellation(
        points: Vec<Point>,
        cycles: Vec<Cycle>,
        config: &BoardConfig,
    ) -> Result<Self> {
        let edges = edges_from_cycles(&cycles)?;
        if let Some(&v) = edges.vertices().iter().find(|&&v| v >= points.len()) {
            return Err(TopologyError::invalid_complex(format!(
                "cycle vertex {v} has no coordinates ({} points)",
                points.len()
            )));
        }

        let corner_index = |corner: Point| -> Result<Vertex> {
            points
                .iter()
                .position(|p| distance(p, &corner) < config.epsilon)
                .ok_or_else(|| {
                    TopologyError::invalid_complex(format!(
                        "tessellation has no vertex at corner {corner:?}"
                    ))
                })
        };

        let corners: [Point; 4] = [[-0.5, 0.5], [-0.5, -0.5], [0.5, -0.5], [0.5, 0.5]];
        let ul = corner_index(corners[0])?;
        let dl = corner_index(corners[1])?;
        let dr = corner_index(corners[2])?;
        let ur = corner_index(corners[3])?;

        let max_ind = points.len();
        let (cul, cdl, cdr, cur) = (max_ind, max_ind + 1, max_ind + 2, max_ind + 3);

        let left_c = vec![ul, cul, cdl, dl];
        let right_c = vec![dr, cdr, cur, ur];
        let down_c = vec![dl, cdl, cdr, dr];
        let up_c = vec![ur, cur, cul, ul];

        let side = |axis: usize, value: f64| -> Complex {
            edges
                .iter()
                .filter(|edge| {
                    edge.vertices()
                        .iter()
                        .all(|&v| (points[v][axis] - value).abs() < config.epsilon)
                })
                .cloned()
                .collect()
        };

        let left = border_base(&side(0, -0.5), &left_c)?;
        let right = border_base(&side(0, 0.5), &right_c)?;
        let down = border_base(&side(1, -0.5), &down_c)?;
        let up = border_base(&side(1, 0.5), &up_c)?;

        let red_base = left.union(&right).closure();
        let blue_base = down.union(&up).closure();

        let mut points = points;
        points.extend(corners.iter().map(|[x, y]| {
            [x * config.border_scale, y * config.border_scale]
        }));

        debug!(
            cells = cycles.len(),
            edges = edges.len(),
            blue_base = blue_base.len(),
            red_base = red_base.len(),
            "stitched board border"
        );

        Ok(Self {
            points,
            cycles,
            edges,
            blue_base,
            red_base,
            blue_base_cycles: [up_c, down_c],
            red_base_cycles: [left_c, right_c],
        })
    }

    /// Regular n × n grid of square cells covering [-0.5, 0.5]²
    pub fn square_grid(n: usize, config: &BoardConfig) -> Result<Self> {
        if n == 0 {
            return Err(TopologyError::invalid_complex("grid needs at least one cell"));
        }
        let index = |i: usize, j: usize| j * (n + 1) + i;
        let step = 1.0 / n as f64;

        let points: Vec<Point> = (0..=n)
            .flat_map(|j| (0..=n).map(move |i| [i as f64 * step - 0.5, j as f64 * step - 0.5]))
            .collect();
        let cycles: Vec<Cycle> = (0..n)
            .flat_map(|j| {
                (0..n).map(move |i| {
                    vec![index(i, j), index(i + 1, j), index(i + 1, j + 1), index(i, j + 1)]
                })
            })
            .collect();

        Self::from_tessellation(points, cycles, config)
    }

    /// Point coordinates, including the four outer corners
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Polygon cycles of the playable cells
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn cycle(&self, cell: usize) -> Result<&Cycle> {
        self.cycles.get(cell).ok_or(TopologyError::UnknownCell(cell))
    }

    pub fn blue_base(&self) -> &Complex {
        &self.blue_base
    }

    pub fn red_base(&self) -> &Complex {
        &self.red_base
    }

    /// Corner cycles of the up and down strips
    pub fn blue_base_cycles(&self) -> &[Cycle; 2] {
        &self.blue_base_cycles
    }

    /// Corner cycles of the left and right strips
    pub fn red_base_cycles(&self) -> &[Cycle; 2] {
        &self.red_base_cycles
    }

    /// Vertices and edges of every cell together with both bases
    pub fn complex(&self) -> Complex {
        verts_from_edges(&self.edges)
            .union(&self.edges)
            .union(&self.blue_base)
            .union(&self.red_base)
    }
}

fn distance(a: &Point, b: &Point) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{betti, edges_from_cycle, outer_edges_from_cycle};

    #[test]
    fn test_border_base_strip() {
        // Side 0-1-2 with corner cycle (2, 10, 11, 0)
        let side = Complex::from_cells([[0, 1], [1, 2]]);
        let faces = border_base(&side, &[2, 10, 11, 0]).unwrap();
        // Rim has 5 edges, apex 0 touches two of them
        assert_eq!(faces.len(), 3);
        let strip = faces.closure();
        assert_eq!(betti(0, &strip, None).unwrap(), 1);
        assert_eq!(betti(1, &strip, None).unwrap(), 0);
    }

    #[test]
    fn test_border_base_rejects_gap() {
        // Missing {1, 2}: rim is an open path
        let side = Complex::from_cells([[0, 1]]);
        assert!(border_base(&side, &[2, 10, 11, 0]).is_err());
    }

    #[test]
    fn test_grid_bases() {
        let board = Board::square_grid(3, &BoardConfig::default()).unwrap();
        assert_eq!(board.cycles().len(), 9);
        assert_eq!(board.points().len(), 16 + 4);

        // Each base is two disjoint contractible strips
        for base in [board.blue_base(), board.red_base()] {
            assert!(base.is_closed());
            assert_eq!(betti(0, base, None).unwrap(), 2);
            assert_eq!(betti(1, base, None).unwrap(), 0);
        }
    }

    #[test]
    fn test_base_cycles_run_along_outer_corners() {
        let board = Board::square_grid(2, &BoardConfig::default()).unwrap();
        let outer = board.points().len() - 4;
        for (base, cycles) in [
            (board.blue_base(), board.blue_base_cycles()),
            (board.red_base(), board.red_base_cycles()),
        ] {
            for cycle in cycles {
                assert_eq!(cycle.iter().filter(|&&v| v >= outer).count(), 2);
                for edge in &outer_edges_from_cycle(cycle).unwrap() {
                    assert!(base.contains(edge));
                }
            }
        }
        // Each outer corner point is shared by one blue and one red strip
        assert_eq!(board.blue_base_cycles()[0][1], board.red_base_cycles()[1][2]);
    }

    #[test]
    fn test_board_complex_is_annulus_skeleton() {
        let board = Board::square_grid(2, &BoardConfig::default()).unwrap();
        let complex = board.complex();
        assert!(complex.is_closed());
        for cycle in board.cycles() {
            for edge in &edges_from_cycle(cycle).unwrap() {
                assert!(complex.contains(edge));
            }
        }
        assert_eq!(betti(0, &complex, None).unwrap(), 1);
    }

    #[test]
    fn test_missing_corner() {
        let points = vec![[-0.5, -0.5], [0.4, -0.5], [0.4, 0.5]];
        let cycles = vec![vec![0, 1, 2]];
        let err = Board::from_tessellation(points, cycles, &BoardConfig::default()).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidComplex(_)));
    }

    #[test]
    fn test_unknown_cell() {
        let board = Board::square_grid(1, &BoardConfig::default()).unwrap();
        assert!(board.cycle(0).is_ok());
        assert_eq!(board.cycle(5).unwrap_err(), TopologyError::UnknownCell(5));
    }
}
