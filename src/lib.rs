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

//! A library for weighted directed graphs and classic walk algorithms.
//!
//! The central data structures are [`DirectedGraph`], an adjacency-list
//! digraph with predecessor and successor maps, and [`WeightedDigraph`],
//! which attaches a cost to every edge. On top of them the crate
//! provides reachability ([`search::dfs`]), hop-count shortest walks
//! ([`search::bfs`]), strongly connected components ([`scc`]),
//! all-pairs minimum-cost walks with negative-cycle detection
//! ([`shortestpath::matrix`]), counting of minimum-cost walks
//! ([`shortestpath::dijkstra`]), DAG walk counting ([`algorithms`]),
//! random graph generation ([`random`]) and a textual edge-list format
//! ([`io`]).
//!
//! All algorithms take the graph by shared reference and raise typed
//! errors synchronously; none of them mutates its input (the random
//! generator populates an empty graph supplied by the caller).
//!
//! # Example
//!
//! ```
//! use walkgraph::{Vertex, WeightedDigraph};
//! use walkgraph::search::bfs;
//! use walkgraph::shortestpath::matrix;
//!
//! let mut g = WeightedDigraph::<i64>::new();
//! for i in 0..3 {
//!     g.add_vertex(Vertex::new(i)).unwrap();
//! }
//! g.add_edge(Vertex::new(0), Vertex::new(1), 1).unwrap();
//! g.add_edge(Vertex::new(1), Vertex::new(2), 1).unwrap();
//! g.add_edge(Vertex::new(0), Vertex::new(2), 5).unwrap();
//!
//! // fewest edges: the direct hop
//! let walk = bfs::shortest_path(&g, Vertex::new(0), Vertex::new(2)).unwrap();
//! assert_eq!(walk.len(), 2);
//!
//! // lowest cost: the detour
//! let (walk, _) = matrix::lowest_cost_walk(&g, Vertex::new(0), Vertex::new(2)).unwrap();
//! assert_eq!(walk.len(), 3);
//! ```

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod vertex;
pub use self::vertex::Vertex;

pub mod digraph;
pub use self::digraph::DirectedGraph;

pub mod weighted;
pub use self::weighted::WeightedDigraph;

// # Algorithms

pub mod algorithms;
pub mod random;
pub mod scc;
pub mod search;
pub mod shortestpath;

// # Input/output

pub mod io;
