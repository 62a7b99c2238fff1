// Copyright (c) 2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! General algorithms working on directed graphs.

use crate::digraph::DirectedGraph;
use crate::error::{Error, Result};
use crate::vertex::Vertex;
use std::collections::{HashMap, HashSet};

/// Returns the vertices in reverse depth-first postorder.
///
/// On a DAG this is a topological order: every edge points from an
/// earlier to a later position. The traversal uses a visited set and
/// does not detect cycles; on cyclic input an order is still produced
/// but it is not topological.
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, DirectedGraph};
/// use walkgraph::algorithms::topological_order;
///
/// let mut g = DirectedGraph::new();
/// for i in 0..3 {
///     g.add_vertex(Vertex::new(i)).unwrap();
/// }
/// g.add_edge(Vertex::new(2), Vertex::new(1)).unwrap();
/// g.add_edge(Vertex::new(1), Vertex::new(0)).unwrap();
///
/// assert_eq!(
///     topological_order(&g),
///     vec![Vertex::new(2), Vertex::new(1), Vertex::new(0)]
/// );
/// ```
pub fn topological_order<G>(g: G) -> Vec<Vertex>
where
    G: AsRef<DirectedGraph>,
{
    let g = g.as_ref();
    let mut visited = HashSet::new();
    let mut order = Vec::with_capacity(g.number_of_vertices());

    for v in g.vertices() {
        if visited.contains(&v) {
            continue;
        }
        // two-phase stack: the second occurrence of a vertex emits it
        // in postorder
        let mut stack = vec![(v, false)];
        while let Some((u, emit)) = stack.pop() {
            if emit {
                order.push(u);
                continue;
            }
            if !visited.insert(u) {
                continue;
            }
            stack.push((u, true));
            if let Ok(succs) = g.outbound_vertices(u) {
                for w in succs {
                    if !visited.contains(&w) {
                        stack.push((w, false));
                    }
                }
            }
        }
    }

    order.reverse();
    order
}

/// Counts the distinct walks from `start` to `end` in a DAG.
///
/// Walk counts are propagated forward along a topological order:
/// `start` contributes one walk and every vertex adds its count to
/// each successor. Returns 0 if `end` is not reachable.
///
/// The graph must be acyclic. This precondition is *not* checked; on
/// cyclic input the returned number is unspecified (no error is
/// raised).
///
/// Fails with [`Error::InvalidVertex`] if either endpoint is absent.
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, DirectedGraph};
/// use walkgraph::algorithms::count_walks;
///
/// let mut g = DirectedGraph::new();
/// for i in 0..4 {
///     g.add_vertex(Vertex::new(i)).unwrap();
/// }
/// g.add_edge(Vertex::new(0), Vertex::new(1)).unwrap();
/// g.add_edge(Vertex::new(0), Vertex::new(2)).unwrap();
/// g.add_edge(Vertex::new(1), Vertex::new(3)).unwrap();
/// g.add_edge(Vertex::new(2), Vertex::new(3)).unwrap();
///
/// assert_eq!(count_walks(&g, Vertex::new(0), Vertex::new(3)).unwrap(), 2);
/// ```
pub fn count_walks<G>(g: G, start: Vertex, end: Vertex) -> Result<u64>
where
    G: AsRef<DirectedGraph>,
{
    let g = g.as_ref();
    for &v in [start, end].iter() {
        if !g.is_vertex(v) {
            return Err(Error::InvalidVertex(v));
        }
    }

    let mut counts: HashMap<Vertex, u64> = HashMap::new();
    counts.insert(start, 1);

    for v in topological_order(g) {
        let c = counts.get(&v).copied().unwrap_or(0);
        if c == 0 {
            continue;
        }
        for w in g.outbound_vertices(v)? {
            *counts.entry(w).or_insert(0) += c;
        }
    }
    Ok(counts.get(&end).copied().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> Vertex {
        Vertex::new(i)
    }

    #[test]
    fn test_topological_order_respects_edges() {
        let mut g = DirectedGraph::new();
        for i in 0..6 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(5), v(2)).unwrap();
        g.add_edge(v(5), v(0)).unwrap();
        g.add_edge(v(4), v(0)).unwrap();
        g.add_edge(v(4), v(1)).unwrap();
        g.add_edge(v(2), v(3)).unwrap();
        g.add_edge(v(3), v(1)).unwrap();

        let order = topological_order(&g);
        assert_eq!(order.len(), 6);
        let pos: std::collections::HashMap<_, _> =
            order.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        for (a, b) in g.edges() {
            assert!(pos[&a] < pos[&b]);
        }
    }

    #[test]
    fn test_single_walk() {
        let mut g = DirectedGraph::new();
        for i in 0..3 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1)).unwrap();
        g.add_edge(v(1), v(2)).unwrap();
        assert_eq!(count_walks(&g, v(0), v(2)).unwrap(), 1);
    }

    #[test]
    fn test_two_disjoint_walks() {
        let mut g = DirectedGraph::new();
        for i in 0..4 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1)).unwrap();
        g.add_edge(v(1), v(3)).unwrap();
        g.add_edge(v(0), v(2)).unwrap();
        g.add_edge(v(2), v(3)).unwrap();
        assert_eq!(count_walks(&g, v(0), v(3)).unwrap(), 2);
    }

    #[test]
    fn test_walks_multiply_along_stages() {
        // two choices into 2, two choices out of it
        let mut g = DirectedGraph::new();
        for i in 0..6 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1)).unwrap();
        g.add_edge(v(0), v(2)).unwrap();
        g.add_edge(v(1), v(2)).unwrap();
        g.add_edge(v(2), v(3)).unwrap();
        g.add_edge(v(2), v(4)).unwrap();
        g.add_edge(v(3), v(5)).unwrap();
        g.add_edge(v(4), v(5)).unwrap();
        assert_eq!(count_walks(&g, v(0), v(5)).unwrap(), 4);
    }

    #[test]
    fn test_unreachable_counts_zero() {
        let mut g = DirectedGraph::new();
        g.add_vertex(v(0)).unwrap();
        g.add_vertex(v(1)).unwrap();
        assert_eq!(count_walks(&g, v(1), v(0)).unwrap(), 0);
    }

    #[test]
    fn test_invalid_endpoints() {
        let g = DirectedGraph::new();
        assert_eq!(count_walks(&g, v(0), v(1)), Err(Error::InvalidVertex(v(0))));
    }
}
