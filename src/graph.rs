//! An undirected, simple graph parameterised over an opaque vertex value.
//!
//! Vertices carry no identity beyond their value: two vertices comparing
//! equal under `Eq` are the same vertex. Adjacency is kept in an
//! `indexmap::IndexMap` rather than a plain `HashMap` so that vertex and
//! neighbour order stays stable across a run, which keeps test fixtures and
//! `write_graph` output reproducible without imposing an `Ord` bound on `V`.

use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;

/// An undirected simple graph over vertex values of type `V`.
///
/// Invariants maintained by every public mutator:
/// - **Symmetry**: `v` is a neighbour of `u` iff `u` is a neighbour of `v`
///   (except immediately after [`Graph::set_edges`], which is a deliberate
///   escape hatch — see its documentation).
/// - **Simplicity**: no vertex is its own neighbour; no neighbour list
///   contains duplicates.
/// - **Closure**: every neighbour is itself a vertex of the graph.
#[derive(Clone, Debug, Default)]
pub struct Graph<V>
where
	V: Eq + Hash + Clone,
{
	adjacency: IndexMap<V, Vec<V>>,
}

impl<V> Graph<V>
where
	V: Eq + Hash + Clone,
{
	/// An empty graph.
	pub fn new() -> Self {
		Graph {
			adjacency: IndexMap::new(),
		}
	}

	/// A graph containing exactly the given vertices, with no edges.
	pub fn from_vertices(vertices: impl IntoIterator<Item = V>) -> Self {
		let mut g = Self::new();
		for v in vertices {
			g.add_vertex(v);
		}
		g
	}

	/// A graph built by adding each `(u, v)` pair as an edge in turn (both
	/// endpoints are created if absent).
	pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
		let mut g = Self::new();
		for (u, v) in edges {
			g.add_edge(u, v);
		}
		g
	}

	/// Insert `v` with no neighbours. No effect if `v` is already present.
	pub fn add_vertex(&mut self, v: V) {
		self.adjacency.entry(v).or_insert_with(Vec::new);
	}

	/// Whether `v` is a vertex of this graph.
	pub fn contains(&self, v: &V) -> bool {
		self.adjacency.contains_key(v)
	}

	/// Remove `v` and every edge incident to it. No effect if `v` is absent.
	pub fn remove_vertex(&mut self, v: &V) {
		if self.adjacency.shift_remove(v).is_none() {
			return;
		}
		for neighbours in self.adjacency.values_mut() {
			neighbours.retain(|n| n != v);
		}
		log::trace!("graph: removed vertex");
	}

	/// Rename `old` to `new`: every neighbour's back-reference to `old` is
	/// rewritten to `new`, and `old`'s neighbour list becomes `new`'s.
	///
	/// If `old == new` this is a no-op. If `new` already exists (and differs
	/// from `old`), `new`'s previous neighbour list is discarded in favour of
	/// `old`'s, and every one of `new`'s former neighbours has its
	/// back-reference to `new` stripped — the renamed vertex always wins,
	/// and the graph stays symmetric. If `old` and `new` were directly
	/// connected, that edge is dropped rather than turned into a self-loop.
	pub fn modify_vertex(&mut self, old: &V, new: V) {
		if *old == new {
			return;
		}
		let neighbours = match self.adjacency.shift_remove(old) {
			Some(n) => n,
			None => return,
		};
		// If `new` already exists, its former neighbours still hold
		// back-references to it; strip those first so overwriting `new`'s
		// entry below cannot leave the graph asymmetric.
		if let Some(stale) = self.adjacency.shift_remove(&new) {
			for n in &stale {
				if let Some(back) = self.adjacency.get_mut(n) {
					back.retain(|slot| slot != &new);
				}
			}
		}
		let mut renamed = Vec::with_capacity(neighbours.len());
		for n in neighbours {
			if n == new {
				// `old` and `new` were directly connected; renaming would
				// turn that edge into a self-loop, so drop it instead.
				continue;
			}
			if let Some(back) = self.adjacency.get_mut(&n) {
				for slot in back.iter_mut() {
					if slot == old {
						*slot = new.clone();
					}
				}
			}
			renamed.push(n);
		}
		self.adjacency.insert(new, renamed);
		log::trace!("graph: renamed vertex");
	}

	/// Add the undirected edge `{u, v}`. Ensures both vertices exist. No
	/// effect if `u == v` or the edge is already present.
	pub fn add_edge(&mut self, u: V, v: V) {
		if u == v {
			self.add_vertex(u);
			return;
		}
		self.add_vertex(u.clone());
		self.add_vertex(v.clone());
		if !self.adjacency[&u].contains(&v) {
			self.adjacency[&u].push(v.clone());
		}
		if !self.adjacency[&v].contains(&u) {
			self.adjacency[&v].push(u);
		}
	}

	/// Replace `u`'s neighbour list wholesale. Ensures `u` exists.
	///
	/// Unlike [`Graph::add_edge`], this does **not** maintain symmetry: the
	/// caller is responsible for also calling `set_edges`/`add_edge` on each
	/// named destination if an undirected edge is intended. This is a
	/// low-level primitive kept specifically for bulk graph construction
	/// (the XML reader in [`crate::io::xml`] rebuilds one vertex's full edge
	/// list per element as it streams through a document).
	pub fn set_edges(&mut self, u: V, dests: Vec<V>) {
		self.adjacency.insert(u, dests);
	}

	/// Remove the undirected edge `{u, v}`, if present. No effect if either
	/// vertex, or the edge between them, is absent.
	pub fn remove_edge(&mut self, u: &V, v: &V) {
		if let Some(neighbours) = self.adjacency.get_mut(u) {
			neighbours.retain(|n| n != v);
		}
		if let Some(neighbours) = self.adjacency.get_mut(v) {
			neighbours.retain(|n| n != u);
		}
	}

	/// The neighbours of `v`, or an empty slice if `v` is absent.
	pub fn neighbours_of(&self, v: &V) -> &[V] {
		self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
	}

	/// All vertices, in insertion order.
	pub fn vertices(&self) -> impl Iterator<Item = &V> {
		self.adjacency.keys()
	}

	/// Every undirected edge, enumerated once per direction: `(u, v)` and
	/// `(v, u)` both appear. `number_of_edges` thus counts `2 · |E|`.
	pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
		self.adjacency
			.iter()
			.flat_map(|(u, ns)| ns.iter().map(move |v| (u, v)))
	}

	/// Remove every vertex and edge.
	pub fn clear(&mut self) {
		self.adjacency.clear();
	}

	/// Number of vertices.
	pub fn number_of_vertices(&self) -> usize {
		self.adjacency.len()
	}

	/// Number of directed `(u, v)` pairs yielded by [`Graph::edges`], i.e.
	/// `2 · |E|` for a simple undirected graph.
	pub fn number_of_edges(&self) -> usize {
		self.adjacency.values().map(Vec::len).sum()
	}

	/// Whether this graph has no vertices.
	pub fn is_empty(&self) -> bool {
		self.adjacency.is_empty()
	}

	/// Whether `v` is a neighbour of `u`.
	pub fn connected(&self, u: &V, v: &V) -> bool {
		self.neighbours_of(u).contains(v)
	}

	/// A copy of `self` with every edge of `other` also added.
	pub fn disjoint_union(&self, other: &Graph<V>) -> Graph<V> {
		let mut merged = self.clone();
		for (u, v) in other.edges() {
			merged.add_edge(u.clone(), v.clone());
		}
		merged
	}
}

impl<V> PartialEq for Graph<V>
where
	V: Eq + Hash + Clone,
{
	/// Two graphs are equal when their vertex sets match and, for every
	/// vertex, the neighbour *multisets* match (order is irrelevant).
	fn eq(&self, other: &Self) -> bool {
		if self.adjacency.len() != other.adjacency.len() {
			return false;
		}
		for (v, neighbours) in &self.adjacency {
			let theirs = match other.adjacency.get(v) {
				Some(n) => n,
				None => return false,
			};
			if neighbours.iter().counts() != theirs.iter().counts() {
				return false;
			}
		}
		true
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn add_edge_is_symmetric_and_simple() {
		let mut g = Graph::new();
		g.add_edge(1, 2);
		g.add_edge(2, 1);
		g.add_edge(1, 1);
		assert_eq!(g.neighbours_of(&1), &[2]);
		assert_eq!(g.neighbours_of(&2), &[1]);
		assert_eq!(g.number_of_vertices(), 2);
	}

	#[test]
	fn from_edges_edge_doubling() {
		let g = Graph::from_edges([(1, 2), (1, 3), (3, 4)]);
		assert_eq!(g.number_of_vertices(), 4);
		assert_eq!(g.number_of_edges(), 6);
		for v in [1, 2, 3, 4] {
			assert!(g.contains(&v));
		}
	}

	#[test]
	fn remove_vertex_clears_back_references() {
		let mut g = Graph::from_edges([(1, 2), (2, 3)]);
		g.remove_vertex(&2);
		assert!(!g.contains(&2));
		assert!(g.neighbours_of(&1).is_empty());
		assert!(g.neighbours_of(&3).is_empty());
	}

	#[test]
	fn modify_vertex_renames_and_rewrites_back_references() {
		let mut g = Graph::from_edges([(1, 2), (1, 3)]);
		g.modify_vertex(&1, 10);
		assert!(!g.contains(&1));
		assert!(g.contains(&10));
		assert!(g.connected(&10, &2));
		assert!(g.connected(&2, &10));
		assert!(g.connected(&10, &3));
	}

	#[test]
	fn modify_vertex_onto_existing_overwrites() {
		let mut g = Graph::from_edges([(1, 2), (3, 4)]);
		g.modify_vertex(&1, 3);
		assert!(!g.contains(&1));
		assert!(g.connected(&3, &2));
		assert!(g.connected(&2, &3));
		assert!(!g.connected(&3, &4));
		// `4` must not keep a dangling back-reference to the overwritten `3`.
		assert!(!g.connected(&4, &3));
	}

	#[test]
	fn modify_vertex_onto_adjacent_vertex_drops_the_self_loop() {
		let mut g = Graph::from_edges([(1, 2), (1, 3)]);
		g.modify_vertex(&1, 2);
		assert!(!g.contains(&1));
		assert!(!g.connected(&2, &2));
		assert!(g.connected(&2, &3));
		assert!(g.connected(&3, &2));
	}

	#[test]
	fn set_edges_is_not_symmetric() {
		let mut g = Graph::new();
		g.set_edges(1, vec![2, 3]);
		assert_eq!(g.neighbours_of(&1), &[2, 3]);
		assert!(g.neighbours_of(&2).is_empty());
	}

	#[test]
	fn equality_ignores_neighbour_order() {
		let mut a = Graph::new();
		a.set_edges(1, vec![2, 3]);
		let mut b = Graph::new();
		b.set_edges(1, vec![3, 2]);
		assert_eq!(a, b);
	}

	#[test]
	fn disjoint_union_merges_edges() {
		let a = Graph::from_edges([(1, 2)]);
		let b = Graph::from_edges([(2, 3)]);
		let merged = a.disjoint_union(&b);
		assert!(merged.connected(&1, &2));
		assert!(merged.connected(&2, &3));
	}
}
