//! External-representation adapters for [`crate::graph::Graph`] and
//! [`crate::marching_squares::Grid`].
//!
//! Every function here is a pure transformation (`str`/bytes in, `Graph`/
//! `Grid` out, or vice versa); filesystem access, where present, is a thin
//! wrapper kept separate from the parsing logic so the parsing itself stays
//! independently testable.

pub mod image;
pub mod plaintext;
pub mod xml;
