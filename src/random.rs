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

//! Random graph generation.

use crate::error::{Error, Result};
use crate::vertex::Vertex;
use crate::weighted::WeightedDigraph;
use rand::Rng;
use std::collections::HashSet;

/// Populates `g` with `num_vertices` vertices and exactly `num_edges`
/// distinct directed edges chosen uniformly at random.
///
/// Vertices are numbered `0..num_vertices` and edge costs are drawn
/// uniformly from `[1, 100]`. Ordered pairs (self-loops included) are
/// drawn with rejection against a seen-set, so exactly `num_edges`
/// distinct edges are inserted. The graph is expected to be freshly
/// constructed and empty.
///
/// # Errors
///
/// - [`Error::TooManyEdges`] if `num_edges` exceeds `num_vertices²`,
///   the number of distinct ordered pairs.
/// - [`Error::DuplicateVertex`] if `g` already contains one of the
///   numbered vertices.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use walkgraph::WeightedDigraph;
/// use walkgraph::random;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut g = WeightedDigraph::<i64>::new();
/// random::generate(5, 10, &mut rng, &mut g).unwrap();
///
/// assert_eq!(g.number_of_vertices(), 5);
/// assert_eq!(g.number_of_edges(), 10);
/// ```
pub fn generate<W, R>(
    num_vertices: usize,
    num_edges: usize,
    rng: &mut R,
    g: &mut WeightedDigraph<W>,
) -> Result<()>
where
    W: From<i32>,
    R: Rng,
{
    let max = num_vertices * num_vertices;
    if num_edges > max {
        return Err(Error::TooManyEdges {
            requested: num_edges,
            max,
        });
    }

    for i in 0..num_vertices {
        g.add_vertex(Vertex::new(i))?;
    }

    let mut seen = HashSet::new();
    while seen.len() < num_edges {
        let u = Vertex::new(rng.gen_range(0..num_vertices));
        let v = Vertex::new(rng.gen_range(0..num_vertices));
        if seen.insert((u, v)) {
            g.add_edge(u, v, W::from(rng.gen_range(1..=100)))?;
        }
    }
    Ok(())
}
