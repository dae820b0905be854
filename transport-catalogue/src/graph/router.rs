//! Dijkstra shortest paths over a [`DirectedWeightedGraph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{DirectedWeightedGraph, EdgeId, VertexId, Weight};

/// A shortest path: its total weight and the edges to follow in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo<W> {
    pub weight: W,
    pub edges: Vec<EdgeId>,
}

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest first.
#[derive(Debug, Clone, Copy)]
struct Frontier<W> {
    cost: W,
    vertex: VertexId,
}

impl<W: Weight> PartialEq for Frontier<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Frontier<W> {}

impl<W: Weight> PartialOrd for Frontier<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Frontier<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Shortest-path router owning the graph it searches.
///
/// Weights must be non-negative.
#[derive(Debug, Clone)]
pub struct Router<W> {
    graph: DirectedWeightedGraph<W>,
}

impl<W: Weight> Router<W> {
    pub fn new(graph: DirectedWeightedGraph<W>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<W> {
        &self.graph
    }

    /// Find a minimum-weight path from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable or either vertex is outside
    /// the graph. A path from a vertex to itself is empty with zero weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_catalogue::graph::{DirectedWeightedGraph, Edge, EdgeId, Router, VertexId};
    ///
    /// let mut graph = DirectedWeightedGraph::new(3);
    /// graph.add_edge(Edge { from: VertexId(0), to: VertexId(1), weight: 1.0 });
    /// graph.add_edge(Edge { from: VertexId(1), to: VertexId(2), weight: 1.0 });
    /// graph.add_edge(Edge { from: VertexId(0), to: VertexId(2), weight: 3.0 });
    ///
    /// let route = Router::new(graph).build_route(VertexId(0), VertexId(2)).unwrap();
    /// assert_eq!(route.weight, 2.0);
    /// assert_eq!(route.edges, vec![EdgeId(0), EdgeId(1)]);
    /// ```
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo<W>> {
        let vertex_count = self.graph.vertex_count();
        if from.0 >= vertex_count || to.0 >= vertex_count {
            return None;
        }

        let mut best: Vec<Option<W>> = vec![None; vertex_count];
        let mut arrived_by: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut frontier = BinaryHeap::new();

        best[from.0] = Some(W::default());
        frontier.push(Frontier {
            cost: W::default(),
            vertex: from,
        });

        while let Some(Frontier { cost, vertex }) = frontier.pop() {
            if vertex == to {
                break;
            }
            // Stale entry superseded by a cheaper one
            if best[vertex.0].is_some_and(|known| cost > known) {
                continue;
            }
            for &edge_id in self.graph.incident_edges(vertex) {
                let edge = self.graph.edge(edge_id);
                let candidate = cost + edge.weight;
                let improves = match best[edge.to.0] {
                    None => true,
                    Some(known) => candidate < known,
                };
                if improves {
                    best[edge.to.0] = Some(candidate);
                    arrived_by[edge.to.0] = Some(edge_id);
                    frontier.push(Frontier {
                        cost: candidate,
                        vertex: edge.to,
                    });
                }
            }
        }

        let weight = best[to.0]?;
        let mut edges = Vec::new();
        let mut vertex = to;
        while vertex != from {
            let edge_id = arrived_by[vertex.0]?;
            edges.push(edge_id);
            vertex = self.graph.edge(edge_id).from;
        }
        edges.reverse();

        Some(RouteInfo { weight, edges })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::Edge;
    use proptest::prelude::*;

    fn edges() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
        proptest::collection::vec((0usize..8, 0usize..8, 0u32..50), 0..30)
    }

    /// Bellman-Ford reference distances.
    fn reference(vertices: usize, edges: &[(usize, usize, u32)], from: usize) -> Vec<Option<u32>> {
        let mut dist = vec![None; vertices];
        dist[from] = Some(0);
        for _ in 0..vertices {
            for &(a, b, w) in edges {
                if let Some(da) = dist[a] {
                    let candidate = da + w;
                    if dist[b].is_none_or(|db| candidate < db) {
                        dist[b] = Some(candidate);
                    }
                }
            }
        }
        dist
    }

    proptest! {
        /// Route weight matches a brute-force reference, and the edges form
        /// a connected walk from source to target summing to that weight
        #[test]
        fn matches_reference(edges in edges(), from in 0usize..8, to in 0usize..8) {
            let mut graph = DirectedWeightedGraph::new(8);
            for &(a, b, w) in &edges {
                graph.add_edge(Edge { from: VertexId(a), to: VertexId(b), weight: w });
            }
            let router = Router::new(graph);
            let expected = reference(8, &edges, from)[to];
            let route = router.build_route(VertexId(from), VertexId(to));

            prop_assert_eq!(route.as_ref().map(|r| r.weight), expected);
            if let Some(route) = route {
                let mut at = VertexId(from);
                let mut total = 0;
                for &id in &route.edges {
                    let edge = router.graph().edge(id);
                    prop_assert_eq!(edge.from, at);
                    at = edge.to;
                    total += edge.weight;
                }
                prop_assert_eq!(at, VertexId(to));
                prop_assert_eq!(total, route.weight);
            }
        }

        /// Repeated queries give identical answers
        #[test]
        fn idempotent(edges in edges(), from in 0usize..8, to in 0usize..8) {
            let mut graph = DirectedWeightedGraph::new(8);
            for &(a, b, w) in &edges {
                graph.add_edge(Edge { from: VertexId(a), to: VertexId(b), weight: w });
            }
            let router = Router::new(graph);
            prop_assert_eq!(
                router.build_route(VertexId(from), VertexId(to)),
                router.build_route(VertexId(from), VertexId(to))
            );
        }
    }
}
