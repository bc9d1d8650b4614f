//! Vertex cover: graph description and two reference algorithms.
//!
//! - [`greedy_cover`]: max-degree heuristic for unweighted graphs.
//! - [`pricing_method`]: primal-dual algorithm for vertex-weighted graphs.
//!
//! # References
//!
//! - Bar-Yehuda & Even (1981), "A Linear-Time Approximation Algorithm for
//!   the Weighted Vertex Cover Problem"
//! - Kleinberg & Tardos (2006), *Algorithm Design*, §11.4 (pricing method)

mod greedy;
mod pricing;

pub use greedy::greedy_cover;
pub use pricing::pricing_method;

/// An undirected multigraph with optional per-vertex weights.
///
/// Edges are stored as adjacency lists in both directions; parallel edges
/// are permitted and counted separately. Weights default to 0 and only
/// matter to [`pricing_method`].
///
/// # Examples
///
/// ```
/// use cover_heur::vertex_cover::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.neighbors(1), &[0, 2]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    weights: Vec<i64>,
    num_edges: usize,
}

impl Graph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); num_vertices],
            weights: vec![0; num_vertices],
            num_edges: 0,
        }
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range or `u == v` (self-loops
    /// are meaningless for vertex cover).
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let n = self.num_vertices();
        assert!(u < n && v < n, "edge ({u}, {v}) out of range for {n} vertices");
        assert!(u != v, "self-loop on vertex {u}");
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.num_edges += 1;
    }

    /// Sets the weight of vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range or `weight` is negative.
    pub fn set_weight(&mut self, v: usize, weight: i64) {
        assert!(weight >= 0, "vertex weights must be non-negative");
        self.weights[v] = weight;
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges (parallel edges counted separately).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Neighbors of `v`, one entry per incident edge, in insertion order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Weight of vertex `v`.
    pub fn weight(&self, v: usize) -> i64 {
        self.weights[v]
    }

    /// Every undirected edge once, as `(u, v)` with `u < v`, grouped by
    /// the smaller endpoint.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.num_edges);
        for u in 0..self.num_vertices() {
            for &v in &self.adj[u] {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }
}
