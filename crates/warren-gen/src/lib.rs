//! **warren-gen** — procedural node-and-corridor map generation.
//!
//! A generation run places a dice-rolled number of [`Node`]s at random
//! points of a rectangular area, connects them with the minimum spanning
//! tree of their complete distance graph plus a few random extra edges
//! (so the map has alternate routes, not just dead ends), and rasterizes
//! every edge into grid [`Tile`]s as a corridor of weighted-random width.
//!
//! The entry point is [`MapGen::generate`]; the result is an immutable
//! [`Map`] snapshot.

pub mod graph;
pub mod mapgen;
pub mod model;
pub mod raster;
pub mod rng;

pub use mapgen::{MapGen, MapGenError};
pub use model::{Edge, EdgeId, Map, Node, Tile};
pub use rng::WeightedTable;
