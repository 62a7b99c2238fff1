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

//! Weighted directed graphs.

use crate::digraph::DirectedGraph;
use crate::error::{Error, Result};
use crate::vertex::Vertex;
use std::collections::HashMap;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed graph with a cost attached to each edge.
///
/// This is a composition of a [`DirectedGraph`] with an edge cost
/// table rather than a subclass-style extension: the full unweighted
/// interface is re-exposed by delegation and the mutating operations
/// keep the invariant that an edge is in the adjacency structure iff
/// it has a cost entry.
///
/// Costs are unconstrained in sign; the algorithms that cannot handle
/// negative costs either detect them ([`crate::shortestpath::matrix`])
/// or document non-negativity as a precondition
/// ([`crate::shortestpath::dijkstra`]).
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, WeightedDigraph};
///
/// let mut g = WeightedDigraph::<i64>::new();
/// g.add_vertex(Vertex::new(0)).unwrap();
/// g.add_vertex(Vertex::new(1)).unwrap();
/// g.add_edge(Vertex::new(0), Vertex::new(1), -3).unwrap();
///
/// assert_eq!(g.edge_cost(Vertex::new(0), Vertex::new(1)).unwrap(), -3);
/// g.set_edge_cost(Vertex::new(0), Vertex::new(1), 5).unwrap();
/// assert_eq!(g.edge_cost(Vertex::new(0), Vertex::new(1)).unwrap(), 5);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WeightedDigraph<W = i64> {
    graph: DirectedGraph,
    costs: HashMap<(Vertex, Vertex), W>,
}

impl<W> Default for WeightedDigraph<W> {
    fn default() -> Self {
        WeightedDigraph {
            graph: DirectedGraph::new(),
            costs: HashMap::new(),
        }
    }
}

impl<W> WeightedDigraph<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the underlying unweighted graph.
    ///
    /// This is the read-only view consumed by the algorithms that do
    /// not need edge costs.
    pub fn digraph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Returns the number of vertices.
    pub fn number_of_vertices(&self) -> usize {
        self.graph.number_of_vertices()
    }

    /// Returns the number of edges.
    pub fn number_of_edges(&self) -> usize {
        self.graph.number_of_edges()
    }

    /// Returns an iterator over all vertices (in no particular order).
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.graph.vertices()
    }

    /// Returns true iff `v` is a vertex of the graph.
    pub fn is_vertex(&self, v: Vertex) -> bool {
        self.graph.is_vertex(v)
    }

    /// Returns true iff the edge `(u, v)` is in the graph.
    pub fn is_edge(&self, u: Vertex, v: Vertex) -> Result<bool> {
        self.graph.is_edge(u, v)
    }

    /// Returns the number of predecessors of `v`.
    pub fn in_degree(&self, v: Vertex) -> Result<usize> {
        self.graph.in_degree(v)
    }

    /// Returns the number of successors of `v`.
    pub fn out_degree(&self, v: Vertex) -> Result<usize> {
        self.graph.out_degree(v)
    }

    /// Returns an iterator over the predecessors of `v` in insertion order.
    pub fn inbound_vertices(&self, v: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        self.graph.inbound_vertices(v)
    }

    /// Returns an iterator over the successors of `v` in insertion order.
    pub fn outbound_vertices(&self, v: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        self.graph.outbound_vertices(v)
    }

    /// Adds a new vertex with empty adjacency.
    pub fn add_vertex(&mut self, v: Vertex) -> Result<()> {
        self.graph.add_vertex(v)
    }

    /// Removes a vertex, all edges incident to it and their costs.
    pub fn remove_vertex(&mut self, v: Vertex) -> Result<()> {
        let inbound: Vec<_> = self.graph.inbound_vertices(v)?.collect();
        let outbound: Vec<_> = self.graph.outbound_vertices(v)?.collect();
        self.graph.remove_vertex(v)?;
        for u in inbound {
            self.costs.remove(&(u, v));
        }
        for w in outbound {
            self.costs.remove(&(v, w));
        }
        Ok(())
    }

    /// Adds the edge `(u, v)` with the given cost.
    ///
    /// Fails with [`Error::InvalidVertex`] if either endpoint is absent
    /// and with [`Error::DuplicateEdge`] if the edge already exists.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, cost: W) -> Result<()> {
        self.graph.add_edge(u, v)?;
        self.costs.insert((u, v), cost);
        Ok(())
    }

    /// Removes the edge `(u, v)` and its cost entry.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        self.graph.remove_edge(u, v)?;
        self.costs.remove(&(u, v));
        Ok(())
    }

    /// Overwrites the cost of the edge `(u, v)`.
    ///
    /// Fails with [`Error::InvalidVertex`] or [`Error::EdgeNotFound`].
    pub fn set_edge_cost(&mut self, u: Vertex, v: Vertex, cost: W) -> Result<()> {
        if !self.graph.is_edge(u, v)? {
            return Err(Error::EdgeNotFound(u, v));
        }
        self.costs.insert((u, v), cost);
        Ok(())
    }
}

impl<W: Copy> WeightedDigraph<W> {
    /// Returns an iterator over all edges as `(source, target, cost)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, W)> + '_ {
        self.graph.edges().map(move |(u, v)| (u, v, self.costs[&(u, v)]))
    }

    /// Returns the cost of the edge `(u, v)`.
    ///
    /// Fails with [`Error::InvalidVertex`] or [`Error::EdgeNotFound`].
    pub fn edge_cost(&self, u: Vertex, v: Vertex) -> Result<W> {
        if !self.graph.is_edge(u, v)? {
            return Err(Error::EdgeNotFound(u, v));
        }
        Ok(self.costs[&(u, v)])
    }
}

impl<W> AsRef<DirectedGraph> for WeightedDigraph<W> {
    fn as_ref(&self) -> &DirectedGraph {
        &self.graph
    }
}
