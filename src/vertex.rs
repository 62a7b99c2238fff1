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

//! Graph vertices.

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A vertex of a graph.
///
/// This is basically a newtype of the vertex identifier. Equality,
/// ordering and hashing are defined solely by the identifier, so two
/// vertices with the same identifier are interchangeable.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vertex(usize);

impl Vertex {
    /// Creates a vertex with the given identifier.
    pub fn new(value: usize) -> Self {
        Vertex(value)
    }

    /// Returns the identifier of this vertex.
    pub fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for Vertex {
    fn from(value: usize) -> Self {
        Vertex(value)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity() {
        assert_eq!(Vertex::new(3), Vertex::from(3));
        assert!(Vertex::new(1) < Vertex::new(2));

        let mut set = HashSet::new();
        set.insert(Vertex::new(7));
        assert!(set.contains(&Vertex::new(7)));
        assert_eq!(format!("{}", Vertex::new(7)), "7");
    }
}
