//! Directed weighted graph and single-source shortest paths.
//!
//! The graph knows nothing about stops or buses: vertices and edges are
//! plain indices, and callers keep their own per-edge metadata keyed by
//! [`EdgeId`].

mod router;

use std::ops::Add;

pub use router::{RouteInfo, Router};

/// Index of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Index of an edge, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Edge weights: non-negative, summable, with `Default` as zero.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Default {}

impl<T> Weight for T where T: Copy + PartialOrd + Add<Output = T> + Default {}

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

/// A directed graph with a fixed vertex count and growable edge list.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<W> {
    edges: Vec<Edge<W>>,
    /// Outgoing edges per vertex.
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: Weight> DirectedWeightedGraph<W> {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge, returning its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge<W>) -> EdgeId {
        assert!(
            edge.from.0 < self.incidence.len() && edge.to.0 < self.incidence.len(),
            "edge {:?} -> {:?} outside graph of {} vertices",
            edge.from,
            edge.to,
            self.incidence.len()
        );
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        self.incidence[edge.from.0].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// # Panics
    ///
    /// Panics if `id` was not returned by [`Self::add_edge`].
    pub fn edge(&self, id: EdgeId) -> &Edge<W> {
        &self.edges[id.0]
    }

    /// Ids of the edges leaving `vertex`.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex.0)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
