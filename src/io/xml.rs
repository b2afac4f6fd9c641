//! The XML graph format:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <graph>
//!   <vertex pos="V"><edge>V</edge><edge>V</edge></vertex>
//!   ...
//! </graph>
//! ```
//!
//! The reader rebuilds each vertex's edge list with
//! [`crate::graph::Graph::set_edges`], which does not itself enforce
//! symmetry — a document describing an undirected graph must list both
//! directions of every edge, exactly as [`super::plaintext`] expects of its
//! own input.

use std::hash::Hash;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::GraphIoError;
use crate::graph::Graph;

/// Parse an XML document into a graph.
pub fn read_graph<V, E>(
	text: &str,
	parse: impl Fn(&str) -> Result<V, E>,
) -> Result<Graph<V>, GraphIoError<E>>
where
	V: Eq + Hash + Clone,
	E: std::error::Error + 'static,
{
	let mut reader = Reader::from_str(text);
	reader.trim_text(true);
	let mut buf = Vec::new();
	let mut g = Graph::new();
	let mut current_vertex: Option<V> = None;
	let mut current_edges: Vec<V> = Vec::new();

	loop {
		let event = reader
			.read_event(&mut buf)
			.map_err(|e| GraphIoError::Xml(e.to_string()))?;
		match event {
			Event::Start(ref e) if e.name() == b"vertex" => {
				let pos = e
					.attributes()
					.filter_map(Result::ok)
					.find(|a| a.key == b"pos")
					.ok_or_else(|| GraphIoError::Xml("<vertex> missing pos attribute".to_string()))?;
				let pos = pos
					.unescape_and_decode_value(&reader)
					.map_err(|e| GraphIoError::Xml(e.to_string()))?;
				let v = parse(&pos).map_err(|source| GraphIoError::Parse { line: 0, source })?;
				g.add_vertex(v.clone());
				current_vertex = Some(v);
				current_edges = Vec::new();
			}
			Event::Start(ref e) if e.name() == b"edge" => {
				let name = e.name().to_vec();
				let text = reader
					.read_text(&name[..], &mut Vec::new())
					.map_err(|e| GraphIoError::Xml(e.to_string()))?;
				let n = parse(&text).map_err(|source| GraphIoError::Parse { line: 0, source })?;
				current_edges.push(n);
			}
			Event::End(ref e) if e.name() == b"vertex" => {
				if let Some(v) = current_vertex.take() {
					g.set_edges(v, std::mem::take(&mut current_edges));
				}
			}
			Event::Eof => break,
			_ => {}
		}
		buf.clear();
	}
	log::debug!("xml: parsed a graph with {} vertices", g.number_of_vertices());
	Ok(g)
}

/// Serialise `graph` to the XML format.
pub fn write_graph<V>(graph: &Graph<V>, serialise: impl Fn(&V) -> String) -> String
where
	V: Eq + Hash + Clone,
{
	let mut writer = Writer::new(Vec::new());
	const CANNOT_FAIL: &str = "writing to an in-memory buffer cannot fail";

	writer
		.write_event(Event::Decl(BytesDecl::new(b"1.0", Some(b"UTF-8"), None)))
		.expect(CANNOT_FAIL);
	writer
		.write_event(Event::Start(BytesStart::owned_name(b"graph".to_vec())))
		.expect(CANNOT_FAIL);

	for v in graph.vertices() {
		let mut vertex_elem = BytesStart::owned_name(b"vertex".to_vec());
		let pos = serialise(v);
		vertex_elem.push_attribute(("pos", pos.as_str()));
		writer.write_event(Event::Start(vertex_elem)).expect(CANNOT_FAIL);
		for n in graph.neighbours_of(v) {
			writer
				.write_event(Event::Start(BytesStart::owned_name(b"edge".to_vec())))
				.expect(CANNOT_FAIL);
			writer
				.write_event(Event::Text(BytesText::from_plain_str(&serialise(n))))
				.expect(CANNOT_FAIL);
			writer
				.write_event(Event::End(BytesEnd::owned(b"edge".to_vec())))
				.expect(CANNOT_FAIL);
		}
		writer
			.write_event(Event::End(BytesEnd::owned(b"vertex".to_vec())))
			.expect(CANNOT_FAIL);
	}
	writer
		.write_event(Event::End(BytesEnd::owned(b"graph".to_vec())))
		.expect(CANNOT_FAIL);

	String::from_utf8(writer.into_inner()).expect("quick_xml always emits valid UTF-8")
}
