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

//! All-pairs minimum-cost walks by min-plus matrix powering.
//!
//! The `k`-th computed matrix holds at entry `(i, j)` the minimum cost
//! of a walk from `i` to `j` using at most `k + 1` edges. Powering the
//! adjacency matrix `V - 1` times in the min-plus semiring therefore
//! yields all-pairs minimum walk costs, and a negative entry appearing
//! on a diagonal proves a negative cycle.

use crate::error::{Error, Result};
use crate::vertex::Vertex;
use crate::weighted::WeightedDigraph;
use num_traits::NumAssign;
use std::collections::{HashMap, HashSet};

/// A square cost matrix; `None` stands for an unreachable pair.
///
/// Rows and columns are indexed by the graph's vertices in ascending
/// identifier order.
pub type CostMatrix<W> = Vec<Vec<Option<W>>>;

/// Computes a minimum-cost walk from `start` to `end` by matrix powering.
///
/// Returns the walk (empty if `end` is unreachable) together with the
/// list of all intermediate matrices; the last matrix holds the
/// all-pairs minimum walk costs.
///
/// # Errors
///
/// - [`Error::InvalidVertex`] if either endpoint is absent.
/// - [`Error::NegativeCycle`] if a self-loop has negative cost, if a
///   diagonal entry becomes negative during powering, or if the walk
///   reconstruction revisits a vertex without having reached `end`.
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, WeightedDigraph};
/// use walkgraph::shortestpath::matrix;
///
/// let mut g = WeightedDigraph::<i64>::new();
/// for i in 0..3 {
///     g.add_vertex(Vertex::new(i)).unwrap();
/// }
/// g.add_edge(Vertex::new(0), Vertex::new(1), 1).unwrap();
/// g.add_edge(Vertex::new(1), Vertex::new(2), 1).unwrap();
/// g.add_edge(Vertex::new(0), Vertex::new(2), 5).unwrap();
///
/// let (walk, matrices) = matrix::lowest_cost_walk(&g, Vertex::new(0), Vertex::new(2)).unwrap();
/// // the two-edge walk beats the direct edge of cost 5
/// assert_eq!(walk, vec![Vertex::new(0), Vertex::new(1), Vertex::new(2)]);
/// assert_eq!(matrices.last().unwrap()[0][2], Some(2));
/// ```
pub fn lowest_cost_walk<W>(
    g: &WeightedDigraph<W>,
    start: Vertex,
    end: Vertex,
) -> Result<(Vec<Vertex>, Vec<CostMatrix<W>>)>
where
    W: NumAssign + Ord + Copy,
{
    for &v in [start, end].iter() {
        if !g.is_vertex(v) {
            return Err(Error::InvalidVertex(v));
        }
    }

    let index = vertex_index(g);
    let n = index.len();

    // adjacency matrix with a zero diagonal
    let mut adj: CostMatrix<W> = vec![vec![None; n]; n];
    for (u, v, cost) in g.edges() {
        if u == v && cost < W::zero() {
            return Err(Error::NegativeCycle);
        }
        adj[index[&u]][index[&v]] = Some(cost);
    }
    for i in 0..n {
        adj[i][i] = Some(W::zero());
    }

    let mut matrices = vec![adj.clone()];
    for _ in 1..n {
        let mut result: CostMatrix<W> = vec![vec![None; n]; n];
        {
            let prev = &matrices[matrices.len() - 1];
            for i in 0..n {
                for j in 0..n {
                    let mut best = None;
                    for k in 0..n {
                        if let (Some(a), Some(b)) = (prev[i][k], adj[k][j]) {
                            let c = a + b;
                            if best.map_or(true, |x| c < x) {
                                best = Some(c);
                            }
                        }
                    }
                    result[i][j] = best;
                }
            }
        }
        for i in 0..n {
            if let Some(d) = result[i][i] {
                if d < W::zero() {
                    return Err(Error::NegativeCycle);
                }
            }
        }
        matrices.push(result);
    }

    let walk = reconstruct(g, &matrices[matrices.len() - 1], &index, start, end)?;
    Ok((walk, matrices))
}

/// Reconstructs a minimum-cost walk from an already computed final matrix.
///
/// `matrix` must be the last matrix returned by [`lowest_cost_walk`]
/// for the same graph; the powering is not repeated. Returns the empty
/// vector if `end` is unreachable.
///
/// Fails with [`Error::InvalidVertex`] if either endpoint is absent and
/// with [`Error::NegativeCycle`] if the reconstruction revisits a
/// vertex without having reached `end`.
pub fn walk_from_matrix<W>(
    g: &WeightedDigraph<W>,
    matrix: &CostMatrix<W>,
    start: Vertex,
    end: Vertex,
) -> Result<Vec<Vertex>>
where
    W: NumAssign + Ord + Copy,
{
    for &v in [start, end].iter() {
        if !g.is_vertex(v) {
            return Err(Error::InvalidVertex(v));
        }
    }
    let index = vertex_index(g);
    reconstruct(g, matrix, &index, start, end)
}

/// Maps the vertices to dense indices in ascending identifier order.
fn vertex_index<W>(g: &WeightedDigraph<W>) -> HashMap<Vertex, usize> {
    let mut verts: Vec<Vertex> = g.vertices().collect();
    verts.sort_unstable();
    verts.iter().enumerate().map(|(i, &v)| (v, i)).collect()
}

/// Walks forward from `start`, always stepping to a successor on a
/// minimum-cost walk towards `end`.
fn reconstruct<W>(
    g: &WeightedDigraph<W>,
    matrix: &[Vec<Option<W>>],
    index: &HashMap<Vertex, usize>,
    start: Vertex,
    end: Vertex,
) -> Result<Vec<Vertex>>
where
    W: NumAssign + Ord + Copy,
{
    let ie = index[&end];
    if matrix[index[&start]][ie].is_none() {
        return Ok(vec![]);
    }

    let mut walk = vec![start];
    let mut current = start;
    let mut visited = HashSet::new();
    while current != end {
        visited.insert(current);
        let here = matrix[index[&current]][ie];
        let mut advanced = false;
        for nb in g.outbound_vertices(current)? {
            if nb == current {
                continue;
            }
            let cost = g.edge_cost(current, nb)?;
            if matrix[index[&nb]][ie].map(|d| d + cost) == here {
                if visited.contains(&nb) {
                    return Err(Error::NegativeCycle);
                }
                walk.push(nb);
                current = nb;
                advanced = true;
                break;
            }
        }
        // no successor lies on a minimum-cost walk, the matrix must
        // have been shaped by a negative cycle
        if !advanced {
            return Err(Error::NegativeCycle);
        }
    }
    Ok(walk)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> Vertex {
        Vertex::new(i)
    }

    fn triangle() -> WeightedDigraph<i64> {
        let mut g = WeightedDigraph::new();
        for i in 0..3 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1), 1).unwrap();
        g.add_edge(v(1), v(2), 1).unwrap();
        g.add_edge(v(0), v(2), 5).unwrap();
        g
    }

    #[test]
    fn test_indirect_walk_beats_direct_edge() {
        let g = triangle();
        let (walk, matrices) = lowest_cost_walk(&g, v(0), v(2)).unwrap();
        assert_eq!(walk, vec![v(0), v(1), v(2)]);
        assert_eq!(matrices.len(), 3);
        assert_eq!(matrices.last().unwrap()[0][2], Some(2));
        // the one-edge bound still sees only the direct edge
        assert_eq!(matrices[0][0][2], Some(5));
    }

    #[test]
    fn test_all_pairs_costs() {
        let g = triangle();
        let (_, matrices) = lowest_cost_walk(&g, v(0), v(0)).unwrap();
        let last = matrices.last().unwrap();
        assert_eq!(last[0][1], Some(1));
        assert_eq!(last[1][2], Some(1));
        assert_eq!(last[2][0], None);
        assert_eq!(last[1][1], Some(0));
    }

    #[test]
    fn test_unreachable_yields_empty_walk() {
        let g = triangle();
        let (walk, _) = lowest_cost_walk(&g, v(2), v(0)).unwrap();
        assert!(walk.is_empty());
    }

    #[test]
    fn test_walk_from_matrix() {
        let g = triangle();
        let (walk, matrices) = lowest_cost_walk(&g, v(0), v(2)).unwrap();
        let again = walk_from_matrix(&g, matrices.last().unwrap(), v(0), v(2)).unwrap();
        assert_eq!(walk, again);
    }

    #[test]
    fn test_negative_self_loop() {
        let mut g = triangle();
        g.add_edge(v(1), v(1), -1).unwrap();
        assert_eq!(lowest_cost_walk(&g, v(0), v(2)), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_negative_cycle_detected_by_powering() {
        let mut g = WeightedDigraph::new();
        for i in 0..3 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1), -5).unwrap();
        g.add_edge(v(1), v(0), 2).unwrap();
        g.add_edge(v(1), v(2), 1).unwrap();
        assert_eq!(lowest_cost_walk(&g, v(0), v(2)), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_negative_edges_without_cycle() {
        let mut g = WeightedDigraph::new();
        for i in 0..3 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1), 4).unwrap();
        g.add_edge(v(1), v(2), -3).unwrap();
        g.add_edge(v(0), v(2), 2).unwrap();
        let (walk, matrices) = lowest_cost_walk(&g, v(0), v(2)).unwrap();
        assert_eq!(walk, vec![v(0), v(1), v(2)]);
        assert_eq!(matrices.last().unwrap()[0][2], Some(1));
    }

    #[test]
    fn test_invalid_endpoints() {
        let g = triangle();
        assert_eq!(lowest_cost_walk(&g, v(0), v(7)), Err(Error::InvalidVertex(v(7))));
    }

    #[test]
    fn test_matrix_agrees_with_dijkstra_costs() {
        // hand-checked single-source distances from vertex 0
        let mut g = WeightedDigraph::new();
        for i in 0..4 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1), 2).unwrap();
        g.add_edge(v(0), v(2), 7).unwrap();
        g.add_edge(v(1), v(2), 3).unwrap();
        g.add_edge(v(2), v(3), 1).unwrap();
        g.add_edge(v(1), v(3), 9).unwrap();

        let (_, matrices) = lowest_cost_walk(&g, v(0), v(3)).unwrap();
        let last = matrices.last().unwrap();
        assert_eq!(last[0][1], Some(2));
        assert_eq!(last[0][2], Some(5));
        assert_eq!(last[0][3], Some(6));
    }
}
