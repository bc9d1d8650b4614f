//! Greedy max-degree vertex cover.

use super::Graph;

/// Greedy vertex cover by repeated max-degree selection.
///
/// While uncovered edges remain, picks the out-of-cover vertex with the
/// most out-of-cover neighbors (first index wins ties), adds it to the
/// cover, and marks its incident edges covered. Returns the cover in pick
/// order.
///
/// Every uncovered edge keeps both endpoints out of the cover, so some
/// candidate always has positive degree and the loop adds one vertex per
/// round; the cover size is bounded by the vertex count.
///
/// # Examples
///
/// ```
/// use cover_heur::vertex_cover::{greedy_cover, Graph};
///
/// // Star: the center covers everything in one pick.
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1);
/// graph.add_edge(0, 2);
/// graph.add_edge(0, 3);
/// assert_eq!(greedy_cover(&graph), vec![0]);
/// ```
pub fn greedy_cover(graph: &Graph) -> Vec<usize> {
    let edges = graph.edge_list();
    let mut edge_covered = vec![false; edges.len()];
    let mut in_cover = vec![false; graph.num_vertices()];
    let mut cover = Vec::new();
    let mut uncovered = edges.len();

    while uncovered > 0 {
        let mut best = None;
        let mut best_degree = 0;
        for v in 0..graph.num_vertices() {
            if in_cover[v] {
                continue;
            }
            let degree = graph.neighbors(v).iter().filter(|&&u| !in_cover[u]).count();
            if degree > best_degree {
                best_degree = degree;
                best = Some(v);
            }
        }

        let Some(v) = best else { break };
        in_cover[v] = true;
        cover.push(v);

        for (i, &(a, b)) in edges.iter().enumerate() {
            if !edge_covered[i] && (a == v || b == v) {
                edge_covered[i] = true;
                uncovered -= 1;
            }
        }
    }

    cover
}
