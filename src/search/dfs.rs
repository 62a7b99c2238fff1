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

//! Depth-first reachability.

use crate::digraph::DirectedGraph;
use crate::error::{Error, Result};
use crate::vertex::Vertex;
use std::collections::HashSet;

/// Returns the set of vertices reachable from `start`.
///
/// Depth-first search over the successor relation with an explicit
/// stack. The start vertex is always contained in the result; the
/// traversal order does not affect the returned set.
///
/// Fails with [`Error::InvalidVertex`] if `start` is not in the graph.
///
/// Runs in O(V + E).
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, DirectedGraph};
/// use walkgraph::search::dfs;
///
/// let mut g = DirectedGraph::new();
/// for i in 0..4 {
///     g.add_vertex(Vertex::new(i)).unwrap();
/// }
/// g.add_edge(Vertex::new(0), Vertex::new(1)).unwrap();
/// g.add_edge(Vertex::new(1), Vertex::new(2)).unwrap();
///
/// let reached = dfs::accessible_vertices(&g, Vertex::new(0)).unwrap();
/// assert_eq!(reached.len(), 3);
/// assert!(!reached.contains(&Vertex::new(3)));
/// ```
pub fn accessible_vertices<G>(g: G, start: Vertex) -> Result<HashSet<Vertex>>
where
    G: AsRef<DirectedGraph>,
{
    let g = g.as_ref();
    if !g.is_vertex(start) {
        return Err(Error::InvalidVertex(start));
    }

    let mut visited = HashSet::new();
    let mut stack = vec![start];
    while let Some(v) = stack.pop() {
        if visited.insert(v) {
            for w in g.outbound_vertices(v)? {
                if !visited.contains(&w) {
                    stack.push(w);
                }
            }
        }
    }
    Ok(visited)
}
