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

//! Adjacency-list directed graphs.

use crate::error::{Error, Result};
use crate::vertex::Vertex;
use std::collections::HashMap;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed graph stored as predecessor and successor adjacency lists.
///
/// The two maps are kept mutually consistent: `v` is a successor of `u`
/// iff `u` is a predecessor of `v`. Every vertex referenced in an
/// adjacency list is itself a key of both maps and there are no
/// duplicate edges. Vertex membership tests are O(1); the adjacency
/// lists preserve insertion order.
///
/// Cloning produces a fully independent deep copy sharing no mutable
/// sub-structure with the original.
///
/// # Example
///
/// ```
/// use walkgraph::{Vertex, DirectedGraph};
///
/// let mut g = DirectedGraph::new();
/// g.add_vertex(Vertex::new(0)).unwrap();
/// g.add_vertex(Vertex::new(1)).unwrap();
/// g.add_edge(Vertex::new(0), Vertex::new(1)).unwrap();
///
/// assert!(g.is_edge(Vertex::new(0), Vertex::new(1)).unwrap());
/// assert_eq!(g.out_degree(Vertex::new(0)).unwrap(), 1);
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DirectedGraph {
    predecessors: HashMap<Vertex, Vec<Vertex>>,
    successors: HashMap<Vertex, Vec<Vertex>>,
}

impl DirectedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the number of vertices.
    pub fn number_of_vertices(&self) -> usize {
        self.predecessors.len()
    }

    /// Returns the number of edges.
    pub fn number_of_edges(&self) -> usize {
        self.predecessors.values().map(Vec::len).sum()
    }

    /// Returns an iterator over all vertices (in no particular order).
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.predecessors.keys().copied()
    }

    /// Returns an iterator over all edges as `(source, target)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.predecessors
            .iter()
            .flat_map(|(&v, preds)| preds.iter().map(move |&u| (u, v)))
    }

    /// Returns true iff `v` is a vertex of the graph.
    pub fn is_vertex(&self, v: Vertex) -> bool {
        self.predecessors.contains_key(&v)
    }

    /// Returns true iff the edge `(u, v)` is in the graph.
    ///
    /// Fails with [`Error::InvalidVertex`] if either endpoint is absent.
    pub fn is_edge(&self, u: Vertex, v: Vertex) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.successors[&u].contains(&v))
    }

    /// Returns the number of predecessors of `v`.
    pub fn in_degree(&self, v: Vertex) -> Result<usize> {
        self.predecessors.get(&v).map(Vec::len).ok_or(Error::InvalidVertex(v))
    }

    /// Returns the number of successors of `v`.
    pub fn out_degree(&self, v: Vertex) -> Result<usize> {
        self.successors.get(&v).map(Vec::len).ok_or(Error::InvalidVertex(v))
    }

    /// Returns an iterator over the predecessors of `v` in insertion order.
    ///
    /// Fails with [`Error::InvalidVertex`] up front if `v` is absent.
    pub fn inbound_vertices(&self, v: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        self.predecessors
            .get(&v)
            .map(|preds| preds.iter().copied())
            .ok_or(Error::InvalidVertex(v))
    }

    /// Returns an iterator over the successors of `v` in insertion order.
    ///
    /// Fails with [`Error::InvalidVertex`] up front if `v` is absent.
    pub fn outbound_vertices(&self, v: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        self.successors
            .get(&v)
            .map(|succs| succs.iter().copied())
            .ok_or(Error::InvalidVertex(v))
    }

    /// Adds a new vertex with empty adjacency.
    ///
    /// Fails with [`Error::DuplicateVertex`] if the vertex is already present.
    pub fn add_vertex(&mut self, v: Vertex) -> Result<()> {
        if self.predecessors.contains_key(&v) {
            return Err(Error::DuplicateVertex(v));
        }
        self.predecessors.insert(v, vec![]);
        self.successors.insert(v, vec![]);
        Ok(())
    }

    /// Removes a vertex and all edges incident to it.
    ///
    /// Fails with [`Error::InvalidVertex`] if the vertex is absent.
    pub fn remove_vertex(&mut self, v: Vertex) -> Result<()> {
        let preds = self.predecessors.remove(&v).ok_or(Error::InvalidVertex(v))?;
        let succs = self.successors.remove(&v).unwrap_or_default();
        for u in preds {
            if let Some(s) = self.successors.get_mut(&u) {
                s.retain(|&x| x != v);
            }
        }
        for w in succs {
            if let Some(p) = self.predecessors.get_mut(&w) {
                p.retain(|&x| x != v);
            }
        }
        Ok(())
    }

    /// Adds the edge `(u, v)`.
    ///
    /// Fails with [`Error::InvalidVertex`] if either endpoint is absent
    /// and with [`Error::DuplicateEdge`] if the edge already exists.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        if self.is_edge(u, v)? {
            return Err(Error::DuplicateEdge(u, v));
        }
        if let Some(p) = self.predecessors.get_mut(&v) {
            p.push(u);
        }
        if let Some(s) = self.successors.get_mut(&u) {
            s.push(v);
        }
        Ok(())
    }

    /// Removes the edge `(u, v)`.
    ///
    /// Fails with [`Error::InvalidVertex`] if either endpoint is absent
    /// and with [`Error::EdgeNotFound`] if the edge does not exist.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        if !self.is_edge(u, v)? {
            return Err(Error::EdgeNotFound(u, v));
        }
        if let Some(p) = self.predecessors.get_mut(&v) {
            p.retain(|&x| x != u);
        }
        if let Some(s) = self.successors.get_mut(&u) {
            s.retain(|&x| x != v);
        }
        Ok(())
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        if self.predecessors.contains_key(&v) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(v))
        }
    }
}

impl AsRef<DirectedGraph> for DirectedGraph {
    fn as_ref(&self) -> &DirectedGraph {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> Vertex {
        Vertex::new(i)
    }

    fn sample() -> DirectedGraph {
        let mut g = DirectedGraph::new();
        for i in 0..4 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1)).unwrap();
        g.add_edge(v(1), v(2)).unwrap();
        g.add_edge(v(2), v(0)).unwrap();
        g.add_edge(v(1), v(3)).unwrap();
        g
    }

    #[test]
    fn test_vertices_and_edges() {
        let g = sample();
        assert_eq!(g.number_of_vertices(), 4);
        assert_eq!(g.number_of_edges(), 4);

        let mut verts: Vec<_> = g.vertices().collect();
        verts.sort();
        assert_eq!(verts, vec![v(0), v(1), v(2), v(3)]);

        let mut edges: Vec<_> = g.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(v(0), v(1)), (v(1), v(2)), (v(1), v(3)), (v(2), v(0))]);
    }

    #[test]
    fn test_duplicate_vertex() {
        let mut g = sample();
        assert_eq!(g.add_vertex(v(0)), Err(Error::DuplicateVertex(v(0))));
    }

    #[test]
    fn test_edge_queries() {
        let g = sample();
        assert!(g.is_edge(v(0), v(1)).unwrap());
        assert!(!g.is_edge(v(1), v(0)).unwrap());
        assert_eq!(g.is_edge(v(0), v(9)), Err(Error::InvalidVertex(v(9))));
        assert_eq!(g.in_degree(v(0)).unwrap(), 1);
        assert_eq!(g.out_degree(v(1)).unwrap(), 2);
        assert_eq!(g.out_degree(v(9)), Err(Error::InvalidVertex(v(9))));
    }

    #[test]
    fn test_neighbor_order_is_insertion_order() {
        let mut g = DirectedGraph::new();
        for i in 0..3 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(2), v(0)).unwrap();
        g.add_edge(v(1), v(0)).unwrap();

        let preds: Vec<_> = g.inbound_vertices(v(0)).unwrap().collect();
        assert_eq!(preds, vec![v(2), v(1)]);
    }

    #[test]
    fn test_add_remove_edge() {
        let mut g = sample();
        assert_eq!(g.add_edge(v(0), v(1)), Err(Error::DuplicateEdge(v(0), v(1))));
        g.remove_edge(v(0), v(1)).unwrap();
        assert!(!g.is_edge(v(0), v(1)).unwrap());
        assert_eq!(g.remove_edge(v(0), v(1)), Err(Error::EdgeNotFound(v(0), v(1))));
        assert_eq!(g.remove_edge(v(0), v(9)), Err(Error::InvalidVertex(v(9))));
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut g = sample();
        g.remove_vertex(v(1)).unwrap();
        assert!(!g.is_vertex(v(1)));
        assert_eq!(g.number_of_vertices(), 3);
        // only 2 -> 0 is left
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.in_degree(v(2)).unwrap(), 0);
        assert_eq!(g.out_degree(v(0)).unwrap(), 0);
        assert_eq!(g.remove_vertex(v(1)), Err(Error::InvalidVertex(v(1))));
    }

    #[test]
    fn test_clone_is_independent() {
        let g = sample();
        let mut h = g.clone();
        h.remove_vertex(v(1)).unwrap();
        assert!(g.is_vertex(v(1)));
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(h.number_of_edges(), 1);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let g = sample();
        let serialized = serde_json::to_string(&g).unwrap();
        let h: DirectedGraph = serde_json::from_str(&serialized).unwrap();
        assert_eq!(h.number_of_vertices(), 4);
        assert_eq!(h.number_of_edges(), 4);
        assert!(h.is_edge(v(2), v(0)).unwrap());
    }
}
