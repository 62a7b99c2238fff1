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

//! # Graph search algorithms.
//!
//! Unweighted traversals over the successor relation. Both searches
//! are driven by explicit worklists, so the recursion depth never
//! depends on the size of the graph.
//!
//! They operate on anything exposing the unweighted interface, i.e.
//! both [`DirectedGraph`][crate::DirectedGraph] and
//! [`WeightedDigraph`][crate::WeightedDigraph].

pub mod bfs;
pub mod dfs;
