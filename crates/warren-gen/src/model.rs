//! Map entities: nodes, corridor edges, tiles, and the generated snapshot.

use std::collections::BTreeMap;
use std::fmt;

use warren_core::Point;

/// A point of interest in the map, analogous to a room or landmark.
///
/// Identity is the position: the node map is keyed by `pt`, and a later
/// node rolled onto an occupied point replaces the one already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pt: Point,
    /// Nominal landmark size in cells, always in `1..=3`.
    pub radius: i32,
}

/// A corridor between two nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    /// Distance between the endpoints; used only to order edges for the
    /// spanning tree.
    pub weight: f64,
    /// Corridor width in cells. Assigned after the edge set is final;
    /// until then it holds the minimum width of 1.
    pub width: i32,
}

impl Edge {
    /// Create an edge of minimum width.
    pub fn new(start: Point, end: Point, weight: f64) -> Self {
        Self {
            start,
            end,
            weight,
            width: 1,
        }
    }

    /// The order-independent identity of this edge.
    pub fn id(&self) -> EdgeId {
        EdgeId::new(self.start, self.end)
    }
}

/// Unordered-pair identity of an edge.
///
/// The endpoints are stored in canonical `Point` order, so the edges
/// A→B and B→A compare and hash as the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId {
    a: Point,
    b: Point,
}

impl EdgeId {
    /// Build the identity for the edge between `p` and `q`, in either order.
    pub fn new(p: Point, q: Point) -> Self {
        if q < p {
            Self { a: q, b: p }
        } else {
            Self { a: p, b: q }
        }
    }

    /// The endpoints in canonical order.
    pub fn endpoints(self) -> (Point, Point) {
        (self.a, self.b)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// One grid cell covered by a corridor.
///
/// Identity is `pt`; overlapping corridors produce duplicate tiles that
/// deduplication collapses to one per point. `source` records which edge
/// emitted the kept tile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub pt: Point,
    pub source: EdgeId,
    /// Side length of the cell, in grid units.
    pub length: i32,
}

/// The immutable result of one generation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    /// Nodes keyed by position.
    pub nodes: BTreeMap<Point, Node>,
    /// Final edge set: the spanning tree followed by the extra edges,
    /// widths resolved.
    pub edges: Vec<Edge>,
    /// Deduplicated corridor tiles, one per covered point.
    pub tiles: Vec<Tile>,
}
