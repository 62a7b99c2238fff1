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

//! Breadth-first shortest walks by hop count.

use crate::digraph::DirectedGraph;
use crate::error::{Error, Result};
use crate::vertex::Vertex;
use std::collections::{HashMap, VecDeque};

/// Returns a shortest walk (fewest edges) from `start` to `end`.
///
/// Breadth-first search computes hop-count distances over all
/// reachable vertices; the walk is then reconstructed backwards from
/// `end` by repeatedly stepping to a predecessor whose distance is
/// exactly one less. Ties are broken by the first such predecessor in
/// the graph's inbound insertion order.
///
/// Returns the empty vector if `end` is not reachable from `start`;
/// `start == end` yields the one-vertex walk.
///
/// Fails with [`Error::InvalidVertex`] if either endpoint is absent.
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, DirectedGraph};
/// use walkgraph::search::bfs;
///
/// let mut g = DirectedGraph::new();
/// for i in 0..4 {
///     g.add_vertex(Vertex::new(i)).unwrap();
/// }
/// g.add_edge(Vertex::new(0), Vertex::new(1)).unwrap();
/// g.add_edge(Vertex::new(1), Vertex::new(2)).unwrap();
/// g.add_edge(Vertex::new(0), Vertex::new(2)).unwrap();
///
/// let walk = bfs::shortest_path(&g, Vertex::new(0), Vertex::new(2)).unwrap();
/// assert_eq!(walk, vec![Vertex::new(0), Vertex::new(2)]);
///
/// assert!(bfs::shortest_path(&g, Vertex::new(2), Vertex::new(3)).unwrap().is_empty());
/// ```
pub fn shortest_path<G>(g: G, start: Vertex, end: Vertex) -> Result<Vec<Vertex>>
where
    G: AsRef<DirectedGraph>,
{
    let g = g.as_ref();
    for &v in [start, end].iter() {
        if !g.is_vertex(v) {
            return Err(Error::InvalidVertex(v));
        }
    }

    let mut dist = HashMap::new();
    dist.insert(start, 0usize);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        let d = dist[&v];
        for w in g.outbound_vertices(v)? {
            if !dist.contains_key(&w) {
                dist.insert(w, d + 1);
                queue.push_back(w);
            }
        }
    }

    let mut len = match dist.get(&end) {
        Some(&d) => d,
        None => return Ok(vec![]),
    };

    // walk backwards, one hop closer to the start in every step
    let mut walk = vec![end];
    let mut current = end;
    while len > 0 {
        len -= 1;
        for u in g.inbound_vertices(current)? {
            if dist.get(&u) == Some(&len) {
                current = u;
                walk.push(u);
                break;
            }
        }
    }
    walk.reverse();
    Ok(walk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> Vertex {
        Vertex::new(i)
    }

    fn chain(n: usize) -> DirectedGraph {
        let mut g = DirectedGraph::new();
        for i in 0..n {
            g.add_vertex(v(i)).unwrap();
        }
        for i in 1..n {
            g.add_edge(v(i - 1), v(i)).unwrap();
        }
        g
    }

    #[test]
    fn test_walk_length_matches_distance() {
        let mut g = chain(4);
        g.add_edge(v(0), v(2)).unwrap();

        let walk = shortest_path(&g, v(0), v(3)).unwrap();
        assert_eq!(walk.len(), 3);
        assert_eq!(walk, vec![v(0), v(2), v(3)]);

        // consecutive pairs must be edges of the graph
        for pair in walk.windows(2) {
            assert!(g.is_edge(pair[0], pair[1]).unwrap());
        }
    }

    #[test]
    fn test_trivial_walk() {
        let g = chain(2);
        assert_eq!(shortest_path(&g, v(1), v(1)).unwrap(), vec![v(1)]);
    }

    #[test]
    fn test_unreachable() {
        let g = chain(3);
        assert!(shortest_path(&g, v(2), v(0)).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_endpoints() {
        let g = chain(2);
        assert_eq!(shortest_path(&g, v(0), v(5)), Err(Error::InvalidVertex(v(5))));
        assert_eq!(shortest_path(&g, v(5), v(0)), Err(Error::InvalidVertex(v(5))));
    }
}
