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

//! Reading and writing graphs in a simple textual edge-list format.
//!
//! Two formats are supported:
//!
//! - the *plain* format: each line is either `<v> -1` for an isolated
//!   vertex or `<source> <target>[ <cost>]` for a directed edge, with
//!   edge endpoints created on demand;
//! - the *big* format: the first line holds the vertex and edge
//!   counts, vertices are numbered `0..n` up front and the remaining
//!   lines hold one edge each.

use crate::vertex::Vertex;
use crate::weighted::WeightedDigraph;
use either::Either;
use num_traits::Zero;
use std::error;
use std::fmt;
use std::io::{BufRead, BufReader, Read, Write};
use std::str::FromStr;

/// Error when reading or writing a graph in the text format.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Format { line: usize, msg: String },
    Graph(crate::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<crate::Error> for Error {
    fn from(err: crate::Error) -> Self {
        Error::Graph(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { line, msg } => write!(fmt, "Format error on line {}: {}", line, msg),
            Graph(err) => err.fmt(fmt),
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match self {
            Error::Io(err) => Some(err),
            Error::Graph(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A parsed line: an isolated vertex or an edge with an optional cost.
type Line<W> = Either<Vertex, (Vertex, Vertex, Option<W>)>;

fn parse_vertex(tok: &str, line: usize) -> Result<Vertex> {
    tok.parse::<usize>().map(Vertex::new).map_err(|_| Error::Format {
        line,
        msg: format!("invalid vertex '{}'", tok),
    })
}

fn parse_line<W: FromStr>(text: &str, line: usize) -> Result<Option<Line<W>>> {
    let toks: Vec<&str> = text.split_whitespace().collect();
    if toks.is_empty() {
        return Ok(None);
    }
    let source = parse_vertex(toks[0], line)?;
    match toks.get(1) {
        Some(&"-1") => Ok(Some(Either::Left(source))),
        Some(t) => {
            let target = parse_vertex(t, line)?;
            let cost = match toks.get(2) {
                Some(c) => Some(c.parse().map_err(|_| Error::Format {
                    line,
                    msg: format!("invalid edge cost '{}'", c),
                })?),
                None => None,
            };
            Ok(Some(Either::Right((source, target, cost))))
        }
        None => Err(Error::Format {
            line,
            msg: "expected a target vertex or -1".into(),
        }),
    }
}

/// Reads a weighted digraph in the plain format.
///
/// Vertices mentioned by an edge are created on demand; isolated
/// vertices must be listed explicitly as `<v> -1`. A missing cost
/// token is read as zero; empty lines are skipped.
///
/// # Example
///
/// ```
/// use walkgraph::{io, Vertex, WeightedDigraph};
///
/// let data = "0 1 5\n1 2 -3\n7 -1\n";
/// let g: WeightedDigraph<i64> = io::read(data.as_bytes()).unwrap();
///
/// assert_eq!(g.number_of_vertices(), 4);
/// assert_eq!(g.edge_cost(Vertex::new(1), Vertex::new(2)).unwrap(), -3);
/// assert_eq!(g.out_degree(Vertex::new(7)).unwrap(), 0);
/// ```
pub fn read<W, R>(reader: R) -> Result<WeightedDigraph<W>>
where
    W: FromStr + Zero,
    R: Read,
{
    let mut g = WeightedDigraph::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        match parse_line::<W>(&line, i + 1)? {
            None => {}
            Some(Either::Left(v)) => g.add_vertex(v)?,
            Some(Either::Right((u, v, cost))) => {
                for &x in [u, v].iter() {
                    if !g.is_vertex(x) {
                        g.add_vertex(x)?;
                    }
                }
                g.add_edge(u, v, cost.unwrap_or_else(W::zero))?;
            }
        }
    }
    Ok(g)
}

/// Reads a weighted digraph in the big format.
///
/// The first non-empty line holds the vertex and edge counts; the
/// vertices `0..n` are created up front. The remaining lines hold one
/// edge each; duplicate edge lines are skipped.
pub fn read_big<W, R>(reader: R) -> Result<WeightedDigraph<W>>
where
    W: FromStr + Zero,
    R: Read,
{
    let mut g = WeightedDigraph::new();
    let mut lines = BufReader::new(reader).lines().enumerate();

    let num_vertices = loop {
        match lines.next() {
            None => break 0,
            Some((i, line)) => {
                let line = line?;
                let toks: Vec<&str> = line.split_whitespace().collect();
                if toks.is_empty() {
                    continue;
                }
                break toks[0].parse::<usize>().map_err(|_| Error::Format {
                    line: i + 1,
                    msg: format!("invalid vertex count '{}'", toks[0]),
                })?;
            }
        }
    };
    for i in 0..num_vertices {
        g.add_vertex(Vertex::new(i))?;
    }

    for (i, line) in lines {
        let line = line?;
        match parse_line::<W>(&line, i + 1)? {
            None => {}
            Some(Either::Left(v)) => {
                if !g.is_vertex(v) {
                    g.add_vertex(v)?;
                }
            }
            Some(Either::Right((u, v, cost))) => {
                if !g.is_edge(u, v)? {
                    g.add_edge(u, v, cost.unwrap_or_else(W::zero))?;
                }
            }
        }
    }
    Ok(g)
}

/// Writes a weighted digraph in the plain format.
///
/// Isolated vertices are written as `<v> -1` lines, edges as
/// `<source> <target> <cost>` lines. Reading the output back with
/// [`read`] reproduces an isomorphic graph.
pub fn write<W, Out>(g: &WeightedDigraph<W>, out: &mut Out) -> Result<()>
where
    W: Copy + fmt::Display,
    Out: Write,
{
    for v in g.vertices() {
        if g.in_degree(v)? == 0 && g.out_degree(v)? == 0 {
            writeln!(out, "{} -1", v)?;
        }
    }
    for (u, v, cost) in g.edges() {
        writeln!(out, "{} {} {}", u, v, cost)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> Vertex {
        Vertex::new(i)
    }

    #[test]
    fn test_read_plain() {
        let data = "0 1 5\n2 -1\n1 0\n";
        let g: WeightedDigraph<i64> = read(data.as_bytes()).unwrap();
        assert_eq!(g.number_of_vertices(), 3);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.edge_cost(v(0), v(1)).unwrap(), 5);
        // missing cost token defaults to zero
        assert_eq!(g.edge_cost(v(1), v(0)).unwrap(), 0);
    }

    #[test]
    fn test_read_big() {
        let data = "3 2\n0 1 4\n1 2 7\n0 1 9\n";
        let g: WeightedDigraph<i64> = read_big(data.as_bytes()).unwrap();
        assert_eq!(g.number_of_vertices(), 3);
        assert_eq!(g.number_of_edges(), 2);
        // the duplicate edge line is skipped, the first cost wins
        assert_eq!(g.edge_cost(v(0), v(1)).unwrap(), 4);
    }

    #[test]
    fn test_format_errors() {
        assert!(matches!(
            read::<i64, _>("0\n".as_bytes()),
            Err(Error::Format { line: 1, .. })
        ));
        assert!(matches!(
            read::<i64, _>("0 1 x\n".as_bytes()),
            Err(Error::Format { line: 1, .. })
        ));
        assert!(matches!(
            read::<i64, _>("a 1\n".as_bytes()),
            Err(Error::Format { line: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_edge_in_plain_format() {
        let res = read::<i64, _>("0 1 2\n0 1 3\n".as_bytes());
        assert!(matches!(
            res,
            Err(Error::Graph(crate::Error::DuplicateEdge(..)))
        ));
    }

    #[test]
    fn test_round_trip() {
        let mut g = WeightedDigraph::<i64>::new();
        for i in 0..4 {
            g.add_vertex(v(i)).unwrap();
        }
        g.add_edge(v(0), v(1), 4).unwrap();
        g.add_edge(v(1), v(2), -2).unwrap();
        g.add_edge(v(2), v(0), 11).unwrap();
        // vertex 3 stays isolated

        let mut buf = Vec::new();
        write(&g, &mut buf).unwrap();
        let h: WeightedDigraph<i64> = read(&buf[..]).unwrap();

        let mut gv: Vec<_> = g.vertices().collect();
        let mut hv: Vec<_> = h.vertices().collect();
        gv.sort();
        hv.sort();
        assert_eq!(gv, hv);

        let mut ge: Vec<_> = g.edges().collect();
        let mut he: Vec<_> = h.edges().collect();
        ge.sort();
        he.sort();
        assert_eq!(ge, he);
    }
}
