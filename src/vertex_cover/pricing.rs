//! Primal-dual pricing method for weighted vertex cover.

use super::Graph;

/// Pricing method on a vertex-weighted graph.
///
/// Maintains a price per vertex, all starting at 0. A vertex is *tight*
/// when the sum of its neighbors' prices reaches its weight. Each sweep
/// scans every edge; for an edge with both endpoints slack, both endpoint
/// prices rise by the smaller residual `weight − price`, which makes at
/// least one endpoint's residual zero. After a sweep that changed
/// anything, every tight vertex joins the cover; the loop stops at the
/// first sweep that finds no slack edge. The cover is returned sorted by
/// vertex index.
///
/// A zero residual implies tightness (each price increase on a vertex also
/// raises a neighbor's price by the same amount, so neighbor sums dominate
/// own prices), so every productive sweep strictly raises some price
/// toward the weight bound and the loop terminates.
///
/// Vertices with weight 0 are tight from the start; a graph with all
/// weights 0 therefore returns an empty cover after one sweep.
///
/// # Examples
///
/// ```
/// use cover_heur::vertex_cover::{pricing_method, Graph};
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1);
/// graph.set_weight(0, 2);
/// graph.set_weight(1, 1);
/// // Both prices rise by 1; vertex 1 becomes tight.
/// assert_eq!(pricing_method(&graph), vec![1]);
/// ```
pub fn pricing_method(graph: &Graph) -> Vec<usize> {
    let n = graph.num_vertices();
    let mut prices = vec![0i64; n];
    let mut in_cover = vec![false; n];

    loop {
        let mut found = false;

        for u in 0..n {
            for &v in graph.neighbors(u) {
                if !is_tight(graph, &prices, u) && !is_tight(graph, &prices, v) {
                    let increase =
                        (graph.weight(u) - prices[u]).min(graph.weight(v) - prices[v]);
                    prices[u] += increase;
                    prices[v] += increase;
                    found = true;
                }
            }
        }

        if !found {
            break;
        }

        for v in 0..n {
            if is_tight(graph, &prices, v) {
                in_cover[v] = true;
            }
        }
    }

    (0..n).filter(|&v| in_cover[v]).collect()
}

/// Whether the neighbor price sum of `v` has reached its weight.
fn is_tight(graph: &Graph, prices: &[i64], v: usize) -> bool {
    let sum: i64 = graph.neighbors(v).iter().map(|&u| prices[u]).sum();
    sum >= graph.weight(v)
}
