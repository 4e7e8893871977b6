//! The generation pipeline: nodes, connectivity, corridor tiles.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use rand::{Rng, RngExt};
use warren_core::Point;

use crate::graph::{complete_graph, kruskal_mst};
use crate::model::{Edge, Map, Node};
use crate::raster::{dedup_tiles, rasterize_edge};
use crate::rng::{WeightedTable, roll_dice, roll_die, sample_indices};

/// Corridor width distribution; narrow corridors dominate.
const EDGE_WIDTHS: [(i32, u32); 3] = [(1, 4), (2, 2), (3, 1)];

/// Cell granularity of corridor tiles.
const TILE_SIZE: i32 = 1;

/// Errors from [`MapGen::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapGenError {
    /// The requested area has no interior to place nodes in.
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for MapGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid map dimensions {width}x{height}: both sides must be positive")
            }
        }
    }
}

impl std::error::Error for MapGenError {}

/// Procedural map generator.
///
/// Owns its randomness source; a run consumes it sequentially, so a fixed
/// seed and fixed dimensions yield an identical [`Map`]. A generation call
/// is a pure synchronous computation with no shared state across calls.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator over the given randomness source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a map within a `width` x `height` area.
    ///
    /// Rolls 3d6 nodes at uniform positions (rolls landing on an occupied
    /// point merge into the node already there), connects them with the
    /// minimum spanning tree of their complete distance graph, re-adds up
    /// to a third of the tree's edge count as random extra edges, draws a
    /// width per edge from a 4:2:1 table over {1, 2, 3}, and rasterizes
    /// every edge into deduplicated corridor tiles.
    ///
    /// Fails fast with [`MapGenError::InvalidDimensions`] if either side
    /// is not positive; no partial output is produced.
    pub fn generate(&mut self, width: i32, height: i32) -> Result<Map, MapGenError> {
        if width <= 0 || height <= 0 {
            return Err(MapGenError::InvalidDimensions { width, height });
        }

        let width_table = WeightedTable::new(&EDGE_WIDTHS);

        let node_count = roll_dice(&mut self.rng, 3, 6);
        let mut nodes: BTreeMap<Point, Node> = BTreeMap::new();
        for _ in 0..node_count {
            let pt = Point::new(
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            let radius = roll_die(&mut self.rng, 3);
            nodes.insert(pt, Node { pt, radius });
        }
        debug!("nodes: {} placed of {} rolled", nodes.len(), node_count);

        let node_list: Vec<Node> = nodes.values().copied().collect();

        // Edge arena. The spanning tree and the extra edges are index sets
        // into it, so the width written through one set is the width seen
        // through the other.
        let mut arena = complete_graph(&node_list);
        debug!("complete graph: {} edges", arena.len());

        let mst = kruskal_mst(&arena);
        debug!("spanning tree: {} edges", mst.len());

        let mut in_mst = vec![false; arena.len()];
        for &i in &mst {
            in_mst[i] = true;
        }
        let non_tree: Vec<usize> = (0..arena.len()).filter(|&i| !in_mst[i]).collect();

        let extra_limit = mst.len() / 3;
        let extra_count = if extra_limit > 0 {
            self.rng.random_range(0..=extra_limit)
        } else {
            0
        };
        let extras: Vec<usize> = sample_indices(&mut self.rng, non_tree.len(), extra_count)
            .into_iter()
            .map(|i| non_tree[i])
            .collect();
        debug!("extra edges: {} of up to {}", extras.len(), extra_limit);

        let final_edges: Vec<usize> = mst.iter().copied().chain(extras).collect();
        for &i in &final_edges {
            arena[i].width = width_table.roll(&mut self.rng);
        }

        let mut all_tiles = Vec::new();
        for &i in &final_edges {
            all_tiles.extend(rasterize_edge(&arena[i], TILE_SIZE));
        }
        let tiles = dedup_tiles(all_tiles);
        debug!("tiles: {} kept", tiles.len());

        let edges: Vec<Edge> = final_edges.into_iter().map(|i| arena[i].clone()).collect();
        Ok(Map { nodes, edges, tiles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn generate(seed: u64) -> Map {
        let mut generator = MapGen::new(StdRng::seed_from_u64(seed));
        generator.generate(40, 30).unwrap()
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut generator = MapGen::new(StdRng::seed_from_u64(0));
        assert_eq!(
            generator.generate(0, 10),
            Err(MapGenError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(generator.generate(10, -1).is_err());
        assert!(generator.generate(10, 10).is_ok());
    }

    #[test]
    fn node_count_is_three_dice() {
        for seed in 0..30 {
            let map = generate(seed);
            // Collisions can shrink the set, never grow it.
            assert!(map.nodes.len() <= 18);
            assert!(!map.nodes.is_empty());
        }
    }

    #[test]
    fn nodes_stay_in_bounds_with_valid_radii() {
        for seed in 0..30 {
            let map = generate(seed);
            for node in map.nodes.values() {
                assert!((0..40).contains(&node.pt.x));
                assert!((0..30).contains(&node.pt.y));
                assert!((1..=3).contains(&node.radius));
            }
        }
    }

    #[test]
    fn edges_reference_known_nodes() {
        for seed in 0..30 {
            let map = generate(seed);
            for edge in &map.edges {
                assert!(map.nodes.contains_key(&edge.start));
                assert!(map.nodes.contains_key(&edge.end));
            }
        }
    }

    #[test]
    fn edge_widths_stay_in_table() {
        for seed in 0..30 {
            let map = generate(seed);
            for edge in &map.edges {
                assert!((1..=3).contains(&edge.width));
            }
        }
    }

    #[test]
    fn extra_edges_bounded_by_a_third_of_the_tree() {
        for seed in 0..50 {
            let map = generate(seed);
            let n = map.nodes.len();
            if n < 2 {
                assert!(map.edges.is_empty());
                continue;
            }
            // The tree spans n nodes with n-1 edges; anything beyond that
            // is an extra.
            let tree_edges = n - 1;
            assert!(map.edges.len() >= tree_edges);
            assert!(map.edges.len() - tree_edges <= tree_edges / 3);
        }
    }

    #[test]
    fn every_node_is_reachable() {
        for seed in 0..50 {
            let map = generate(seed);
            let Some(&first) = map.nodes.keys().next() else {
                continue;
            };
            let mut adjacency: HashMap<Point, Vec<Point>> = HashMap::new();
            for edge in &map.edges {
                adjacency.entry(edge.start).or_default().push(edge.end);
                adjacency.entry(edge.end).or_default().push(edge.start);
            }
            let mut seen = HashSet::from([first]);
            let mut stack = vec![first];
            while let Some(p) = stack.pop() {
                for &q in adjacency.get(&p).into_iter().flatten() {
                    if seen.insert(q) {
                        stack.push(q);
                    }
                }
            }
            assert_eq!(seen.len(), map.nodes.len(), "seed {seed} left nodes unreached");
        }
    }

    #[test]
    fn tiles_are_unique_by_point() {
        for seed in 0..30 {
            let map = generate(seed);
            let distinct: HashSet<Point> = map.tiles.iter().map(|t| t.pt).collect();
            assert_eq!(distinct.len(), map.tiles.len());
        }
    }

    #[test]
    fn tiles_come_from_final_edges() {
        for seed in 0..30 {
            let map = generate(seed);
            let ids: HashSet<_> = map.edges.iter().map(|e| e.id()).collect();
            for tile in &map.tiles {
                assert!(ids.contains(&tile.source));
                assert_eq!(tile.length, 1);
            }
        }
    }

    #[test]
    fn same_seed_same_map() {
        for seed in 0..10 {
            assert_eq!(generate(seed), generate(seed));
        }
    }
}
