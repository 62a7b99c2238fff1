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

//! Strongly connected components (Tarjan's algorithm).

use crate::vertex::Vertex;
use crate::weighted::WeightedDigraph;
use std::collections::HashMap;

/// Computes the strongly connected components of `g`.
///
/// Each component is returned as a new [`WeightedDigraph`] containing
/// exactly the component's vertices and the edges of `g` with both
/// endpoints inside the component, costs copied verbatim. Components
/// are emitted in the order they are closed, which is a reverse
/// topological order of the condensation. An empty graph yields an
/// empty list.
///
/// The search is Tarjan's algorithm with discovery-time and low-link
/// tables, an explicit vertex stack with a membership flag and an
/// explicit frame stack instead of recursion. Vertices are indexed in
/// ascending identifier order, so identifiers need not be contiguous.
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, WeightedDigraph};
/// use walkgraph::scc;
///
/// let mut g = WeightedDigraph::<i64>::new();
/// for i in 0..4 {
///     g.add_vertex(Vertex::new(i)).unwrap();
/// }
/// g.add_edge(Vertex::new(0), Vertex::new(1), 1).unwrap();
/// g.add_edge(Vertex::new(1), Vertex::new(2), 1).unwrap();
/// g.add_edge(Vertex::new(2), Vertex::new(0), 1).unwrap();
/// g.add_edge(Vertex::new(2), Vertex::new(3), 1).unwrap();
///
/// let components = scc::strongly_connected_components(&g);
/// assert_eq!(components.len(), 2);
/// // the sink component {3} closes first
/// assert!(components[0].is_vertex(Vertex::new(3)));
/// assert_eq!(components[1].number_of_vertices(), 3);
/// ```
pub fn strongly_connected_components<W>(g: &WeightedDigraph<W>) -> Vec<WeightedDigraph<W>>
where
    W: Copy,
{
    let mut verts: Vec<Vertex> = g.vertices().collect();
    verts.sort_unstable();
    let index: HashMap<Vertex, usize> = verts.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let n = verts.len();

    let succs: Vec<Vec<usize>> = verts
        .iter()
        .map(|&v| {
            g.outbound_vertices(v)
                .map(|it| it.map(|w| index[&w]).collect())
                .unwrap_or_default()
        })
        .collect();

    let mut disc: Vec<Option<usize>> = vec![None; n];
    let mut low = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = vec![];
    let mut time = 0usize;
    let mut components = vec![];

    for root in 0..n {
        if disc[root].is_some() {
            continue;
        }
        disc[root] = Some(time);
        low[root] = time;
        time += 1;
        on_stack[root] = true;
        stack.push(root);
        // frame: vertex and the position of its next unvisited successor
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];

        loop {
            let (v, child) = match frames.last_mut() {
                None => break,
                Some(&mut (v, ref mut next)) => {
                    if *next < succs[v].len() {
                        *next += 1;
                        (v, Some(succs[v][*next - 1]))
                    } else {
                        (v, None)
                    }
                }
            };
            match child {
                Some(w) => {
                    if disc[w].is_none() {
                        disc[w] = Some(time);
                        low[w] = time;
                        time += 1;
                        on_stack[w] = true;
                        stack.push(w);
                        frames.push((w, 0));
                    } else if on_stack[w] {
                        low[v] = low[v].min(disc[w].unwrap_or(0));
                    }
                }
                None => {
                    frames.pop();
                    if let Some(&(p, _)) = frames.last() {
                        low[p] = low[p].min(low[v]);
                    }
                    if Some(low[v]) == disc[v] {
                        components.push(pop_component(g, &verts, &mut stack, &mut on_stack, v));
                    }
                }
            }
        }
    }
    components
}

/// Pops one component off the stack and builds its subgraph.
fn pop_component<W>(
    g: &WeightedDigraph<W>,
    verts: &[Vertex],
    stack: &mut Vec<usize>,
    on_stack: &mut [bool],
    root: usize,
) -> WeightedDigraph<W>
where
    W: Copy,
{
    let mut comp = WeightedDigraph::new();
    while let Some(w) = stack.pop() {
        on_stack[w] = false;
        let vw = verts[w];
        let _ = comp.add_vertex(vw);

        // copy every edge whose other endpoint is already in the
        // component; a duplicate insertion is silently skipped
        if let Ok(succs) = g.outbound_vertices(vw) {
            for nb in succs {
                if comp.is_vertex(nb) {
                    if let Ok(cost) = g.edge_cost(vw, nb) {
                        let _ = comp.add_edge(vw, nb, cost);
                    }
                }
            }
        }
        if let Ok(preds) = g.inbound_vertices(vw) {
            for nb in preds {
                if comp.is_vertex(nb) {
                    if let Ok(cost) = g.edge_cost(nb, vw) {
                        let _ = comp.add_edge(nb, vw, cost);
                    }
                }
            }
        }

        if w == root {
            break;
        }
    }
    comp
}
