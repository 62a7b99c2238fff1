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

//! Errors raised by graph operations and algorithms.

use crate::vertex::Vertex;
use std::error;
use std::fmt;

/// Error raised by graph operations and algorithms.
///
/// All errors are raised synchronously to the immediate caller; none
/// are retried or recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation referenced a vertex that is not in the graph.
    InvalidVertex(Vertex),
    /// Attempted to add a vertex that is already in the graph.
    DuplicateVertex(Vertex),
    /// Attempted to add an edge that is already in the graph.
    DuplicateEdge(Vertex, Vertex),
    /// An operation referenced an edge that is not in the graph.
    EdgeNotFound(Vertex, Vertex),
    /// A generation request exceeded the maximal number of distinct edges.
    TooManyEdges { requested: usize, max: usize },
    /// A negative cycle was detected.
    NegativeCycle,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            InvalidVertex(v) => write!(fmt, "invalid vertex: {}", v),
            DuplicateVertex(v) => write!(fmt, "vertex already exists: {}", v),
            DuplicateEdge(u, v) => write!(fmt, "edge already exists: ({}, {})", u, v),
            EdgeNotFound(u, v) => write!(fmt, "edge not found: ({}, {})", u, v),
            TooManyEdges { requested, max } => {
                write!(fmt, "too many edges: requested {}, at most {} possible", requested, max)
            }
            NegativeCycle => write!(fmt, "negative cycle detected"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
