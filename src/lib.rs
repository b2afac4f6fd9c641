//! Reusable in-memory data structures and algorithms for geometric and
//! graph-theoretic computation.
//!
//! The core is five tightly related pieces: an undirected [`graph::Graph`],
//! a [`priority_queue::PriorityQueue`] with a `modify_key` primitive,
//! [`shortest_path`] (Dijkstra, built on the previous two), a point
//! [`quadtree::QuadTree`] with AABB range queries, and [`marching_squares`],
//! which turns a classified grid into line segments. The [`io`] module holds
//! pure adapters between these types and external representations
//! (plaintext, XML, classified image grids).

pub mod error;
pub mod graph;
pub mod io;
pub mod marching_squares;
pub mod priority_queue;
pub mod quadtree;
pub mod shortest_path;

pub use error::GraphIoError;
pub use graph::Graph;
pub use marching_squares::{marching_squares, Cell, Grid};
pub use priority_queue::PriorityQueue;
pub use quadtree::{Aabb, QuadTree};
pub use shortest_path::shortest_path;
