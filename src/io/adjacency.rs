/*!
# Adjacency Lists

A line-oriented text format listing the neighborhood of every vertex:

- the first non-comment line holds the number of vertices `n`,
- each of the following `n` non-comment lines lists the space-separated neighbors of the
  vertices `1..=n` in order. An empty line is a vertex without neighbors.

Every edge `{u, v}` is therefore listed twice, once in the line of `u` and once in the line
of `v`. Listing a neighbor several times creates parallel edges.

Lines starting with a configurable **comment identifier** (default: `"c"`) are ignored.
Trailing blank lines are ignored as well.

# Examples

```
use eulerian::prelude::*;
use eulerian::io::*;
use std::io::Cursor;

let data = b"3\n2 3\n1 3\n1 2\n";
let g: AdjList = AdjListReader::new().try_read_graph(Cursor::new(&data[..])).unwrap();

assert_eq!(g.number_of_nodes(), 3);
assert_eq!(g.number_of_edges(), 3);
assert_eq!(g.as_neighbors_slice(1), &[2, 3]);
```
*/

use std::io::{ErrorKind, Lines};

use itertools::Itertools;
use tracing::debug;

use super::*;
use crate::prelude::*;

/// A configurable reader for the **adjacency-list format**.
///
/// Rejects non-integer tokens, neighbors outside of `1..=n`, self-loops, a wrong number of
/// neighborhood lines and (unless disabled) asymmetric adjacencies.
#[derive(Debug, Clone)]
pub struct AdjListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Verify that every edge is listed at both endpoints equally often
    check_symmetry: bool,
}

impl Default for AdjListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
            check_symmetry: true,
        }
    }
}

impl AdjListReader {
    /// Creates a new [`AdjListReader`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the identifier used for detecting comment lines.
    pub fn set_comment_identifier<S>(&mut self, c: S)
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use eulerian::io::*;
    ///
    /// let reader = AdjListReader::new().comment_identifier("%");
    /// ```
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.set_comment_identifier(c);
        self
    }

    /// Enables or disables the symmetry check (enabled by default).
    pub fn set_check_symmetry(&mut self, check: bool) {
        self.check_symmetry = check;
    }

    /// Updates the symmetry check, consuming and returning `self` for chaining.
    pub fn check_symmetry(mut self, check: bool) -> Self {
        self.set_check_symmetry(check);
        self
    }
}

impl<Nbs> GraphReader<MultiGraph<Nbs>> for AdjListReader
where
    Nbs: Neighborhood + FromIterator<Node>,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<MultiGraph<Nbs>> {
        let mut lines = AdjListLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let mut header = header.split_whitespace();
        let n: NumNodes = parse_next_value!(header, "number of vertices");
        raise_error_unless!(
            header.next().is_none(),
            ErrorKind::InvalidData,
            "Header must only contain the number of vertices."
        );

        // the header alone must not dictate the allocation; short files are rejected below
        let mut neighborhoods: Vec<Vec<Node>> = Vec::with_capacity((n as usize).min(1 << 16));
        while let Some(line) = lines.next_non_comment_line()? {
            if neighborhoods.len() == n as usize {
                raise_error_unless!(
                    line.trim().is_empty(),
                    ErrorKind::InvalidData,
                    format!("Found more than the {n} announced neighborhood lines.")
                );
                continue;
            }

            let u = neighborhoods.len() as Node + 1;
            neighborhoods.push(parse_neighborhood(&line, u, n)?);
        }

        raise_error_unless!(
            neighborhoods.len() == n as usize,
            ErrorKind::InvalidData,
            format!(
                "Expected {n} neighborhood lines, found {}.",
                neighborhoods.len()
            )
        );

        if self.check_symmetry {
            check_symmetry(&neighborhoods)?;
        }

        let graph = MultiGraph::from_neighborhoods(neighborhoods);
        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            "read adjacency list"
        );
        Ok(graph)
    }
}

/// Parses the neighborhood of vertex `u` in a graph with `n` vertices
fn parse_neighborhood(line: &str, u: Node, n: NumNodes) -> Result<Vec<Node>> {
    line.split_whitespace()
        .map(|token| {
            let v = token.parse::<Node>().map_err(|_| {
                io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse {token} in neighborhood of {u}.")
                )
            })?;

            raise_error_unless!(
                (1..=n).contains(&v),
                ErrorKind::InvalidData,
                format!("Vertex {u} references unknown vertex {v}.")
            );
            raise_error_unless!(
                v != u,
                ErrorKind::InvalidData,
                format!("Vertex {u} has a self-loop.")
            );

            Ok(v)
        })
        .collect()
}

/// Ensures that `v` occurs in the neighborhood of `u` as often as `u` occurs in that of `v`
fn check_symmetry(neighborhoods: &[Vec<Node>]) -> Result<()> {
    for (i, nbs) in neighborhoods.iter().enumerate() {
        let u = i as Node + 1;
        for (v, count) in nbs.iter().copied().counts() {
            let back = neighborhoods[v as usize - 1]
                .iter()
                .filter(|&&w| w == u)
                .count();
            raise_error_unless!(
                back == count,
                ErrorKind::InvalidData,
                format!(
                    "Asymmetric adjacency: {v} is listed {count} times for {u}, but {u} is listed {back} times for {v}."
                )
            );
        }
    }

    Ok(())
}

/// Lines of the underlying reader with comment lines removed
struct AdjListLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> AdjListLines<'_, R> {
    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if !self.comment_identifier.is_empty()
                        && line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Trait for creating graphs from the **adjacency-list format** with default settings.
pub trait AdjListRead: Sized {
    /// Tries to read a graph from a given buffered reader.
    ///
    /// # Errors
    /// Returns an error if the input cannot be parsed as a valid adjacency list.
    fn try_read_adj_list<R>(reader: R) -> Result<Self>
    where
        R: BufRead;

    /// Tries to read a graph from a file on disk.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or is not a valid adjacency list.
    fn try_read_adj_list_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_adj_list(BufReader::new(File::open(path)?))
    }
}

impl<Nbs> AdjListRead for MultiGraph<Nbs>
where
    Nbs: Neighborhood + FromIterator<Node>,
{
    fn try_read_adj_list<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        AdjListReader::default().try_read_graph(reader)
    }
}

/// A writer for exporting graphs in the **adjacency-list format**.
#[derive(Debug, Clone, Default)]
pub struct AdjListWriter;

impl AdjListWriter {
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for AdjListWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        for u in graph.vertices() {
            writeln!(writer, "{}", graph.neighbors_of(u).join(" "))?;
        }
        Ok(())
    }
}

/// Trait for writing a graph in the **adjacency-list format** with default settings.
pub trait AdjListWrite {
    /// Tries to write the graph to a given writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_adj_list<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> AdjListWrite for G
where
    G: AdjacencyList,
{
    fn try_write_adj_list<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        AdjListWriter.try_write_graph(self, writer)
    }
}
