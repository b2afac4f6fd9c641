//! The plain-text graph format: blank-line-separated records, each record's
//! first line naming a vertex and each subsequent line (up to the next
//! blank line) naming one of its neighbours.
//!
//! A leading blank line is tolerated. Neighbour lines are fed straight to
//! [`crate::graph::Graph::add_edge`], so a well-formed file that lists both
//! directions of every edge round-trips losslessly; a file that lists only
//! one direction still produces a graph satisfying the symmetry invariant,
//! since `add_edge` always adds both.

use std::hash::Hash;
use std::path::Path;

use crate::error::GraphIoError;
use crate::graph::Graph;

/// Parse `text` into a graph, using `parse` to turn each non-blank line
/// into a vertex value.
pub fn read_graph<V, E>(
	text: &str,
	parse: impl Fn(&str) -> Result<V, E>,
) -> Result<Graph<V>, GraphIoError<E>>
where
	V: Eq + Hash + Clone,
	E: std::error::Error + 'static,
{
	let mut g = Graph::new();
	let mut current: Option<V> = None;
	for (i, raw_line) in text.lines().enumerate() {
		let line_no = i + 1;
		let line = raw_line.trim_end_matches('\r');
		if line.trim().is_empty() {
			current = None;
			continue;
		}
		match &current {
			None => {
				let v = parse(line).map_err(|source| GraphIoError::Parse { line: line_no, source })?;
				g.add_vertex(v.clone());
				current = Some(v);
			}
			Some(v) => {
				let n = parse(line).map_err(|source| GraphIoError::Parse { line: line_no, source })?;
				g.add_edge(v.clone(), n);
			}
		}
	}
	log::debug!("plaintext: parsed a graph with {} vertices", g.number_of_vertices());
	Ok(g)
}

/// Serialise `graph` into the plain-text format, using `serialise` to turn
/// each vertex value into a line of text. `serialise` must not produce text
/// containing a newline or only-whitespace content, or the output will not
/// round-trip through [`read_graph`].
pub fn write_graph<V>(graph: &Graph<V>, serialise: impl Fn(&V) -> String) -> String
where
	V: Eq + Hash + Clone,
{
	let mut out = String::new();
	for (i, v) in graph.vertices().enumerate() {
		if i > 0 {
			out.push('\n');
		}
		out.push_str(&serialise(v));
		out.push('\n');
		for n in graph.neighbours_of(v) {
			out.push_str(&serialise(n));
			out.push('\n');
		}
	}
	out
}

/// Read a graph from a file at `path`.
pub fn read_graph_file<V, E>(
	path: &Path,
	parse: impl Fn(&str) -> Result<V, E>,
) -> Result<Graph<V>, GraphIoError<E>>
where
	V: Eq + Hash + Clone,
	E: std::error::Error + 'static,
{
	let text = std::fs::read_to_string(path).map_err(|source| GraphIoError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	read_graph(&text, parse)
}

/// Write `graph` to a file at `path`, overwriting any existing content.
///
/// The write path never parses caller input, so it can never produce a
/// `GraphIoError::Parse` — the error type is fixed to
/// `GraphIoError<std::convert::Infallible>` rather than a free `E`, which
/// would otherwise be uninferable at the call site.
pub fn write_graph_file<V>(
	graph: &Graph<V>,
	path: &Path,
	serialise: impl Fn(&V) -> String,
) -> Result<(), GraphIoError<std::convert::Infallible>>
where
	V: Eq + Hash + Clone,
{
	let text = write_graph(graph, serialise);
	std::fs::write(path, text).map_err(|source| GraphIoError::Io {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::convert::Infallible;

	fn parse_str(s: &str) -> Result<String, Infallible> {
		Ok(s.to_string())
	}

	#[test]
	fn round_trips_string_vertices() {
		let mut g1 = Graph::new();
		let v: Vec<String> = ["one", "two", "three", "... and four"]
			.iter()
			.map(|s| s.to_string())
			.collect();
		for x in &v {
			g1.add_vertex(x.clone());
		}
		g1.add_edge(v[0].clone(), v[1].clone());
		g1.add_edge(v[0].clone(), v[2].clone());
		g1.add_edge(v[2].clone(), v[3].clone());

		let text = write_graph(&g1, |s| s.clone());
		let g2 = read_graph(&text, parse_str).unwrap();
		assert_eq!(g1, g2);
	}

	#[test]
	fn tolerates_leading_blank_line() {
		let text = "\nA\nB\n\nB\nA\n";
		let g = read_graph(text, parse_str).unwrap();
		assert!(g.connected(&"A".to_string(), &"B".to_string()));
		assert!(g.connected(&"B".to_string(), &"A".to_string()));
	}

	#[test]
	fn reports_the_offending_line_number() {
		fn parse_int(s: &str) -> Result<i32, std::num::ParseIntError> {
			s.parse()
		}
		let text = "1\n2\nnot-a-number\n";
		let err = read_graph(text, parse_int).unwrap_err();
		match err {
			GraphIoError::Parse { line, .. } => assert_eq!(line, 3),
			other => panic!("expected a Parse error, got {:?}", other),
		}
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let path = Path::new("/nonexistent/graph_dump.txt");
		let err = read_graph_file(path, parse_str).unwrap_err();
		assert!(matches!(err, GraphIoError::Io { .. }));
	}
}
