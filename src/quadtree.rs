//! A point quadtree with axis-aligned bounding box (AABB) range queries.

/// Anything that can be treated as a 2-D point for quadtree purposes.
pub trait Point2: Clone {
	fn x(&self) -> f64;
	fn y(&self) -> f64;
}

impl Point2 for (f64, f64) {
	fn x(&self) -> f64 {
		self.0
	}
	fn y(&self) -> f64 {
		self.1
	}
}

/// An axis-aligned bounding box, described by its centre and half-dimension
/// (so both `centre.x ± half` and `centre.y ± half` bound the box).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	pub centre: (f64, f64),
	pub half: f64,
}

impl Aabb {
	pub fn new(centre: (f64, f64), half: f64) -> Self {
		Aabb { centre, half }
	}

	/// Whether `p` lies within this box, boundary inclusive.
	pub fn contains_point<P: Point2>(&self, p: &P) -> bool {
		(p.x() - self.centre.0).abs() <= self.half && (p.y() - self.centre.1).abs() <= self.half
	}

	/// Whether this box shares any area (including touching edges) with `other`.
	pub fn intersects(&self, other: &Aabb) -> bool {
		(self.centre.0 - other.centre.0).abs() <= self.half + other.half
			&& (self.centre.1 - other.centre.1).abs() <= self.half + other.half
	}

	fn quadrant(&self, dx: f64, dy: f64) -> Aabb {
		let half = self.half / 2.0;
		Aabb::new((self.centre.0 + dx * half, self.centre.1 + dy * half), half)
	}
}

/// Maximum number of points a node holds inline before subdividing.
const CAPACITY: usize = 4;

struct Quadrants<P: Point2> {
	north_west: QuadTree<P>,
	north_east: QuadTree<P>,
	south_west: QuadTree<P>,
	south_east: QuadTree<P>,
}

/// A recursive spatial index of 2-D points, bounded by an [`Aabb`].
///
/// Nodes hold up to [`CAPACITY`] points inline; once full, a node subdivides
/// into four children covering its four quadrants. Children are owned,
/// nullable slots — dropping a node recursively drops its whole subtree, no
/// manual bookkeeping required.
pub struct QuadTree<P: Point2> {
	boundary: Aabb,
	points: Vec<P>,
	children: Option<Box<Quadrants<P>>>,
}

impl<P: Point2> QuadTree<P> {
	/// A new, empty quadtree bounded by `boundary`.
	pub fn new(boundary: Aabb) -> Self {
		QuadTree {
			boundary,
			points: Vec::new(),
			children: None,
		}
	}

	/// This node's boundary.
	pub fn boundary(&self) -> Aabb {
		self.boundary
	}

	/// Insert `p`. Returns `false` iff `p` lies outside this tree's root
	/// boundary (the insert is then rejected outright, not attempted on a
	/// best-effort basis). Duplicate points are permitted.
	pub fn insert(&mut self, p: P) -> bool {
		if !self.boundary.contains_point(&p) {
			return false;
		}
		if self.children.is_none() && self.points.len() < CAPACITY {
			self.points.push(p);
			return true;
		}
		if self.children.is_none() {
			self.subdivide();
		}
		let children = self.children.as_mut().expect("just subdivided");
		log::trace!("quadtree: routing insert to a child after subdivision");
		children.north_west.insert(p.clone())
			|| children.north_east.insert(p.clone())
			|| children.south_west.insert(p.clone())
			|| children.south_east.insert(p)
	}

	fn subdivide(&mut self) {
		log::debug!("quadtree: subdividing a node");
		self.children = Some(Box::new(Quadrants {
			north_west: QuadTree::new(self.boundary.quadrant(-1.0, -1.0)),
			north_east: QuadTree::new(self.boundary.quadrant(1.0, -1.0)),
			south_west: QuadTree::new(self.boundary.quadrant(-1.0, 1.0)),
			south_east: QuadTree::new(self.boundary.quadrant(1.0, 1.0)),
		}));
	}

	/// Every point stored within `range`, searched top-down with subtree
	/// pruning on non-intersecting boundaries.
	pub fn query_range(&self, range: &Aabb) -> Vec<P> {
		let mut out = Vec::new();
		self.query_range_into(range, &mut out);
		out
	}

	fn query_range_into(&self, range: &Aabb, out: &mut Vec<P>) {
		if !self.boundary.intersects(range) {
			return;
		}
		for p in &self.points {
			if range.contains_point(p) {
				out.push(p.clone());
			}
		}
		if let Some(children) = &self.children {
			children.north_west.query_range_into(range, out);
			children.north_east.query_range_into(range, out);
			children.south_west.query_range_into(range, out);
			children.south_east.query_range_into(range, out);
		}
	}

	/// Every point stored in this tree.
	pub fn points(&self) -> Vec<P> {
		self.query_range(&self.boundary)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn aabb_contains_point_is_boundary_inclusive() {
		let b = Aabb::new((0.0, 0.0), 5.0);
		assert!(b.contains_point(&(5.0, 5.0)));
		assert!(b.contains_point(&(-5.0, -5.0)));
		assert!(!b.contains_point(&(5.01, 0.0)));
	}

    #[test]
    fn aabs_fabs_regression() {
        // A point strictly outside on the y axis must not be reported as
        // contained, regardless of sign handling in the distance check.
        let b = Aabb::new((-3.75, -8.75), 1.25);
        assert!(!b.contains_point(&(-2.0, -8.0)));
    }

	#[test]
	fn insert_rejects_out_of_bounds() {
		let mut t = QuadTree::new(Aabb::new((0.0, 0.0), 1.0));
		assert!(!t.insert((5.0, 5.0)));
	}

	#[test]
	fn subdivision_and_query_range() {
		let mut t = QuadTree::new(Aabb::new((0.0, 0.0), 10.0));
		for i in 0..20 {
			t.insert((i as f64 * 0.1, i as f64 * 0.1));
		}
		assert_eq!(t.points().len(), 20);
		let range = Aabb::new((0.0, 0.0), 1.0);
		let found = t.query_range(&range);
		assert!(found.iter().all(|p| range.contains_point(p)));
		assert!(!found.is_empty());
	}

	#[test]
	fn query_range_completeness_and_soundness() {
		let mut t = QuadTree::new(Aabb::new((0.0, 0.0), 100.0));
		let pts: Vec<(f64, f64)> = (0..50)
			.map(|i| ((i as f64) - 25.0, ((i * 3) % 50) as f64 - 25.0))
			.collect();
		for p in &pts {
			assert!(t.insert(*p));
		}
		let all = t.query_range(&t.boundary());
		for p in &pts {
			assert!(all.contains(p));
		}
	}
}
