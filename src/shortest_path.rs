//! Single-source shortest path (Dijkstra) over a [`Graph`](crate::graph::Graph).

use std::hash::Hash;
use std::ops::Add;

use indexmap::IndexMap;

use crate::graph::Graph;
use crate::priority_queue::PriorityQueue;

/// Find the shortest path from `source` to `destination` in `graph`, with
/// edge weights computed on demand by `distance`.
///
/// `distance(u, v)` must be non-negative; `W` needs only `Copy + Ord +
/// Default + Add`, so callers can use plain integers, [`noisy_float::types::N64`]
/// for floats, or any custom additive weight.
///
/// Returns the vertex sequence from `source` to `destination` inclusive, or
/// an empty vector if `destination` is unreachable (this includes the case
/// where `source == destination` but `source` is absent from `graph`).
pub fn shortest_path<V, W, F>(graph: &Graph<V>, source: &V, destination: &V, distance: F) -> Vec<V>
where
	V: Eq + Hash + Clone,
	W: Copy + Ord + Default + Add<Output = W>,
	F: Fn(&V, &V) -> W,
{
	if !graph.contains(source) {
		return Vec::new();
	}
	if source == destination {
		return vec![source.clone()];
	}

	let mut dist_prev: IndexMap<V, (W, Option<V>)> = IndexMap::new();
	dist_prev.insert(source.clone(), (W::default(), None));

	let mut queue: PriorityQueue<W, V> = PriorityQueue::new();
	for n in graph.neighbours_of(source) {
		let d = distance(source, n);
		dist_prev.insert(n.clone(), (d, Some(source.clone())));
		queue.push(d, n.clone());
	}

	while let Some((d, u)) = queue.pop() {
		if u == *destination {
			break;
		}
		// Stale queue entries (superseded by a cheaper relaxation) carry a
		// key that no longer matches the best known distance; skip them.
		if dist_prev.get(&u).map_or(true, |(best, _)| *best != d) {
			continue;
		}
		log::trace!("shortest_path: expanding a vertex at distance");
		for v in graph.neighbours_of(&u) {
			let alt = d + distance(&u, v);
			let better = match dist_prev.get(v) {
				None => true,
				Some((best, _)) => alt < *best,
			};
			if better {
				let had_old_key = dist_prev.get(v).map(|(best, _)| *best);
				dist_prev.insert(v.clone(), (alt, Some(u.clone())));
				match had_old_key {
					Some(old_key) => {
						if !queue.modify_key(&old_key, v, alt) {
							queue.push(alt, v.clone());
						}
					}
					None => queue.push(alt, v.clone()),
				}
			}
		}
	}

	if !dist_prev.contains_key(destination) {
		return Vec::new();
	}
	let mut path = vec![destination.clone()];
	let mut cur = destination.clone();
	while let Some((_, Some(prev))) = dist_prev.get(&cur) {
		path.push(prev.clone());
		cur = prev.clone();
	}
	path.reverse();
	path
}

#[cfg(test)]
mod tests {
	use super::*;
	use noisy_float::types::{n64, N64};

	fn grid_graph(n: i64) -> Graph<(i64, i64)> {
		let mut g = Graph::new();
		for r in 0..n {
			for c in 0..n {
				g.add_vertex((r, c));
			}
		}
		for r in 0..n {
			for c in 0..n {
				for dr in -1..=1 {
					for dc in -1..=1 {
						if dr == 0 && dc == 0 {
							continue;
						}
						let (nr, nc) = (r + dr, c + dc);
						if nr >= 0 && nr < n && nc >= 0 && nc < n {
							g.add_edge((r, c), (nr, nc));
						}
					}
				}
			}
		}
		g
	}

	fn euclidean(a: &(i64, i64), b: &(i64, i64)) -> N64 {
		let dx = (a.0 - b.0) as f64;
		let dy = (a.1 - b.1) as f64;
		n64((dx * dx + dy * dy).sqrt())
	}

	#[test]
	fn simple_3x3_diagonal_path() {
		let g = grid_graph(3);
		let path = shortest_path(&g, &(0, 0), &(2, 2), euclidean);
		assert_eq!(path, vec![(0, 0), (1, 1), (2, 2)]);
	}

	#[test]
	fn large_grid_diagonal_path() {
		let n = 200;
		let g = grid_graph(n);
		let path = shortest_path(&g, &(0, 0), &(n - 1, n - 1), euclidean);
		let expected: Vec<_> = (0..n).map(|i| (i, i)).collect();
		assert_eq!(path.len(), n as usize);
		assert_eq!(path, expected);
	}

	#[test]
	fn unreachable_destination_returns_empty() {
		let mut g = Graph::new();
		g.add_vertex(1);
		g.add_vertex(2);
		let path = shortest_path(&g, &1, &2, |_, _| 1u32);
		assert!(path.is_empty());
	}

	#[test]
	fn same_source_and_destination() {
		let mut g = Graph::new();
		g.add_vertex(1);
		let path = shortest_path(&g, &1, &1, |_, _| 1u32);
		assert_eq!(path, vec![1]);
	}
}
