//! Simplices and Simplicial Complexes
//!
//! A k-simplex is a set of k+1 distinct vertices. A simplicial complex
//! is a set of simplices closed under taking nonempty subsets:
//!
//!   σ ∈ K, ∅ ≠ τ ⊆ σ  ⟹  τ ∈ K
//!
//! Intermediate cell sets (e.g. the 2-cells of a fan triangulation) are
//! stored in the same [`Complex`] type and only become true complexes
//! after [`Complex::closure`].
//!
//! Both types keep their contents in canonical sorted order so that
//! chain enumeration, and therefore every boundary matrix, is reproducible.

use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Vertex label; meaningful only by identity
pub type Vertex = usize;

/// A simplex represented by its sorted, distinct vertex labels
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Simplex {
    vertices: Vec<Vertex>,
}

impl Simplex {
    /// Build a simplex from any vertex collection (sorted and deduplicated)
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    /// Sorted vertex labels
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices (k+1 for a k-simplex)
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Dimension k = |vertices| - 1, `None` for the empty simplex
    pub fn dimension(&self) -> Option<usize> {
        self.vertices.len().checked_sub(1)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }

    /// True if every vertex of `self` is a vertex of `other`
    pub fn is_face_of(&self, other: &Simplex) -> bool {
        self.vertices.iter().all(|&v| other.contains(v))
    }

    /// Join with one extra vertex (cone over this simplex)
    pub fn with_vertex(&self, apex: Vertex) -> Simplex {
        Simplex::new(self.vertices.iter().copied().chain(std::iter::once(apex)))
    }

    /// All k-dimensional faces, in lexicographic order
    pub fn faces(&self, k: usize) -> impl Iterator<Item = Simplex> + '_ {
        self.vertices
            .iter()
            .copied()
            .combinations(k + 1)
            .map(|vertices| Simplex { vertices })
    }

    /// Codimension-one faces paired with the position of the omitted vertex.
    ///
    /// The face omitting `vertices[i]` enters the boundary with sign (-1)^i.
    pub fn facets(&self) -> impl Iterator<Item = (usize, Simplex)> + '_ {
        (0..self.vertices.len()).map(move |i| {
            let mut vertices = self.vertices.clone();
            vertices.remove(i);
            (i, Simplex { vertices })
        })
    }

    /// Every nonempty subset of the vertex set
    pub fn subsets(&self) -> impl Iterator<Item = Simplex> + '_ {
        self.vertices
            .iter()
            .copied()
            .powerset()
            .filter(|vertices| !vertices.is_empty())
            .map(|vertices| Simplex { vertices })
    }

    /// Rename every vertex through `map`
    pub fn relabel(&self, map: impl Fn(Vertex) -> Vertex) -> Simplex {
        Simplex::new(self.vertices.iter().map(|&v| map(v)))
    }
}

impl Ord for Simplex {
    /// Lower dimensions first, then lexicographic on sorted vertices
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertices
            .len()
            .cmp(&other.vertices.len())
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

impl PartialOrd for Simplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> From<[Vertex; N]> for Simplex {
    fn from(vertices: [Vertex; N]) -> Self {
        Simplex::new(vertices)
    }
}

impl From<Vec<Vertex>> for Simplex {
    fn from(vertices: Vec<Vertex>) -> Self {
        Simplex::new(vertices)
    }
}

/// An immutable, canonically ordered set of simplices.
///
/// Operations never modify a published value; they return a new `Complex`.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
pub struct Complex {
    simplices: BTreeSet<Simplex>,
}

impl Complex {
    /// Build from simplices; empty simplices are dropped
    pub fn new(simplices: impl IntoIterator<Item = Simplex>) -> Self {
        Self {
            simplices: simplices.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Build from raw vertex lists, e.g. `Complex::from_cells([[0, 1], [1, 2]])`
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = Vertex>,
    {
        Self::new(cells.into_iter().map(Simplex::new))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.simplices.contains(simplex)
    }

    /// Simplices in canonical order (by dimension, then vertices)
    pub fn iter(&self) -> impl Iterator<Item = &Simplex> {
        self.simplices.iter()
    }

    /// All vertex labels used by any simplex
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        self.simplices
            .iter()
            .flat_map(|s| s.vertices().iter().copied())
            .collect()
    }

    /// Largest simplex dimension, `None` for the empty complex
    pub fn dimension(&self) -> Option<usize> {
        self.simplices.iter().filter_map(Simplex::dimension).max()
    }

    /// Simplices of exactly dimension k
    pub fn of_dimension(&self, k: usize) -> impl Iterator<Item = &Simplex> {
        self.simplices.iter().filter(move |s| s.dimension() == Some(k))
    }

    pub fn union(&self, other: &Complex) -> Complex {
        Complex {
            simplices: self.simplices.union(&other.simplices).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &Complex) -> Complex {
        Complex {
            simplices: self.simplices.difference(&other.simplices).cloned().collect(),
        }
    }

    /// Downward closure: every nonempty subset of every cell
    pub fn closure(&self) -> Complex {
        Complex {
            simplices: self.simplices.iter().flat_map(Simplex::subsets).collect(),
        }
    }

    /// True if every nonempty face of every simplex is present
    pub fn is_closed(&self) -> bool {
        self.simplices
            .iter()
            .all(|s| s.subsets().all(|face| self.simplices.contains(&face)))
    }

    /// Maximal cells (toplexes): simplices not properly contained in another
    pub fn toplexes(&self) -> Complex {
        let by_size: BTreeMap<usize, Vec<&Simplex>> =
            self.simplices.iter().fold(BTreeMap::new(), |mut acc, s| {
                acc.entry(s.len()).or_insert_with(Vec::new).push(s);
                acc
            });

        let mut maximal: Vec<&Simplex> = Vec::new();
        for (_, group) in by_size.iter().rev() {
            for &s in group {
                if !maximal.iter().any(|m| s.is_face_of(m)) {
                    maximal.push(s);
                }
            }
        }

        Complex::new(maximal.into_iter().cloned())
    }

    /// Rename every vertex through `map`
    pub fn relabel(&self, map: impl Fn(Vertex) -> Vertex) -> Complex {
        Complex::new(self.simplices.iter().map(|s| s.relabel(&map)))
    }
}

impl FromIterator<Simplex> for Complex {
    fn from_iter<T: IntoIterator<Item = Simplex>>(iter: T) -> Self {
        Complex::new(iter)
    }
}

impl<'a> IntoIterator for &'a Complex {
    type Item = &'a Simplex;
    type IntoIter = std::collections::btree_set::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}
