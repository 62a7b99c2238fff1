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

//! Counting minimum-cost walks with Dijkstra's algorithm.

use crate::error::{Error, Result};
use crate::vertex::Vertex;
use crate::weighted::WeightedDigraph;
use num_traits::NumAssign;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Counts the distinct minimum-cost walks from `start` to `end`.
///
/// Single-source Dijkstra search with lazy deletion: queue entries
/// whose cost is worse than the best known cost of their vertex are
/// discarded when popped. A strictly better relaxation replaces a
/// vertex's cost and walk count with the predecessor's; an equal-cost
/// relaxation adds the predecessor's count instead.
///
/// Returns 0 if `end` is not reachable from `start`.
///
/// All edge costs must be non-negative. This precondition is *not*
/// checked (Dijkstra's relaxation order is invalid with negative
/// costs); with negative costs the returned number is unspecified.
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, WeightedDigraph};
/// use walkgraph::shortestpath::dijkstra;
///
/// let mut g = WeightedDigraph::<i64>::new();
/// for i in 0..4 {
///     g.add_vertex(Vertex::new(i)).unwrap();
/// }
/// g.add_edge(Vertex::new(0), Vertex::new(1), 1).unwrap();
/// g.add_edge(Vertex::new(0), Vertex::new(2), 1).unwrap();
/// g.add_edge(Vertex::new(1), Vertex::new(3), 1).unwrap();
/// g.add_edge(Vertex::new(2), Vertex::new(3), 1).unwrap();
///
/// let count = dijkstra::count_minimum_cost_walks(&g, Vertex::new(0), Vertex::new(3)).unwrap();
/// assert_eq!(count, 2);
/// ```
pub fn count_minimum_cost_walks<W>(g: &WeightedDigraph<W>, start: Vertex, end: Vertex) -> Result<u64>
where
    W: NumAssign + Ord + Copy,
{
    for &v in [start, end].iter() {
        if !g.is_vertex(v) {
            return Err(Error::InvalidVertex(v));
        }
    }

    let mut dist: HashMap<Vertex, W> = HashMap::new();
    let mut counts: HashMap<Vertex, u64> = HashMap::new();
    dist.insert(start, W::zero());
    counts.insert(start, 1);

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((W::zero(), start)));

    while let Some(Reverse((d, v))) = queue.pop() {
        // outdated entry, a cheaper walk to v was found meanwhile
        if dist.get(&v).map_or(false, |&best| d > best) {
            continue;
        }
        for w in g.outbound_vertices(v)? {
            let nd = d + g.edge_cost(v, w)?;
            match dist.get(&w) {
                Some(&best) if nd > best => {}
                Some(&best) if nd == best => {
                    let cv = counts[&v];
                    *counts.entry(w).or_insert(0) += cv;
                }
                _ => {
                    dist.insert(w, nd);
                    let cv = counts[&v];
                    counts.insert(w, cv);
                    queue.push(Reverse((nd, w)));
                }
            }
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
    fn test_single_cheapest_walk() {
        let mut g = WeightedDigraph::new();
        for i in 0..3 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1), 1).unwrap();
        g.add_edge(v(1), v(2), 1).unwrap();
        g.add_edge(v(0), v(2), 5).unwrap();
        assert_eq!(count_minimum_cost_walks(&g, v(0), v(2)).unwrap(), 1);
    }

    #[test]
    fn test_tied_walks_are_added() {
        // two ties into 3 and one continuation, four walks into 5
        let mut g = WeightedDigraph::new();
        for i in 0..6 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1), 1).unwrap();
        g.add_edge(v(0), v(2), 2).unwrap();
        g.add_edge(v(1), v(3), 2).unwrap();
        g.add_edge(v(2), v(3), 1).unwrap();
        g.add_edge(v(3), v(4), 1).unwrap();
        g.add_edge(v(3), v(5), 2).unwrap();
        g.add_edge(v(4), v(5), 1).unwrap();

        assert_eq!(count_minimum_cost_walks(&g, v(0), v(3)).unwrap(), 2);
        assert_eq!(count_minimum_cost_walks(&g, v(0), v(5)).unwrap(), 4);
    }

    #[test]
    fn test_unreachable_counts_zero() {
        let mut g = WeightedDigraph::<i64>::new();
        g.add_vertex(v(0)).unwrap();
        g.add_vertex(v(1)).unwrap();
        assert_eq!(count_minimum_cost_walks(&g, v(0), v(1)).unwrap(), 0);
    }

    #[test]
    fn test_start_is_one_walk() {
        let mut g = WeightedDigraph::<i64>::new();
        g.add_vertex(v(0)).unwrap();
        assert_eq!(count_minimum_cost_walks(&g, v(0), v(0)).unwrap(), 1);
    }

    #[test]
    fn test_invalid_endpoints() {
        let g = WeightedDigraph::<i64>::new();
        assert_eq!(
            count_minimum_cost_walks(&g, v(0), v(1)),
            Err(Error::InvalidVertex(v(0)))
        );
    }
}
