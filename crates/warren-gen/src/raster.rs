//! Thick-line rasterization of corridor edges into grid tiles.
//!
//! This is a Bresenham-style scan with one twist: at every step along the
//! slower-changing axis it emits a short run of cells on the other axis
//! instead of picking a single one, so a corridor of any width and slope
//! comes out gap-free.

use std::collections::HashSet;

use warren_core::Point;

use crate::model::{Edge, Tile};

/// Round to the nearest integer with halves toward positive infinity.
///
/// `f64::round` sends -0.5 to -1, which would shift corridors that
/// straddle the axis; half-up keeps the fill symmetric around the ideal
/// line.
#[inline]
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Rasterize one edge into tiles of side `tile_size`.
///
/// The walk iterates the *domain* axis (the one the line is less steep
/// against) from start to end inclusive. At each step it computes the
/// ideal crossing on the *range* axis and emits enough consecutive cells
/// around it to cover the corridor:
///
/// - at least `edge.width` cells, and never fewer than 2 on exact
///   45-degree lines, whose staircase would otherwise touch only at
///   corners;
/// - 2 cells when a one-wide corridor crosses between two lattice rows,
///   so the true line always has a full cell on each side.
///
/// Duplicate tiles across steps are expected; callers merge them with
/// [`dedup_tiles`]. A zero-length edge yields the single tile at its
/// endpoint.
pub fn rasterize_edge(edge: &Edge, tile_size: i32) -> Vec<Tile> {
    let id = edge.id();
    let dx = edge.end.x - edge.start.x;
    let dy = edge.end.y - edge.start.y;

    if dx == 0 && dy == 0 {
        return vec![Tile {
            pt: edge.start,
            source: id,
            length: tile_size,
        }];
    }

    let steep = dy.abs() > dx.abs();
    let (d0, r0, d1) = if steep {
        (edge.start.y, edge.start.x, edge.end.y)
    } else {
        (edge.start.x, edge.start.y, edge.end.x)
    };
    let slope = if steep {
        dx as f64 / dy as f64
    } else {
        dy as f64 / dx as f64
    };
    let sign = if d1 >= d0 { 1 } else { -1 };

    let min_width = edge.width.max(if dx.abs() == dy.abs() { 2 } else { 1 });

    let steps = (d1 - d0).abs() / tile_size;
    let mut tiles = Vec::with_capacity((steps as usize + 1) * min_width as usize);
    for k in 0..=steps {
        let d = d0 + sign * k * tile_size;
        let r = slope * (d - d0) as f64 + r0 as f64;

        let mut elements = min_width;
        if elements < 2 && r != r.floor() {
            elements = 2;
        }
        let lower = round_half_up(r - min_width as f64 / 2.0);

        for e in 0..elements {
            let pt = if steep {
                Point::new(lower + e, d)
            } else {
                Point::new(d, lower + e)
            };
            tiles.push(Tile {
                pt,
                source: id,
                length: tile_size,
            });
        }
    }
    tiles
}

/// Merge per-edge tile lists, keeping exactly one tile per distinct point.
///
/// The first edge to cover a point wins; later duplicates are dropped.
/// Correct for any input order, not just pre-sorted lists.
pub fn dedup_tiles(tiles: Vec<Tile>) -> Vec<Tile> {
    let mut seen = HashSet::with_capacity(tiles.len());
    let mut out = Vec::with_capacity(tiles.len());
    for tile in tiles {
        if seen.insert(tile.pt) {
            out.push(tile);
        }
    }
    out
}
