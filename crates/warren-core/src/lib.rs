//! **warren-core** — foundational types for the warren map generator.
//!
//! Currently this is the geometry layer: the integer [`Point`] that doubles
//! as the identity of everything placed on the map grid.

pub mod geom;

pub use geom::Point;
