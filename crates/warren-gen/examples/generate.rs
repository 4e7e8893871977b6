//! Generate a map and print it as ASCII.
//!
//! Usage: `cargo run --example generate [seed]`
//! Set `RUST_LOG=debug` to see the intermediate generation stages.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use warren_core::Point;
use warren_gen::MapGen;

const WIDTH: i32 = 60;
const HEIGHT: i32 = 24;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);

    let mut generator = MapGen::new(StdRng::seed_from_u64(seed));
    let map = generator.generate(WIDTH, HEIGHT).expect("static dimensions are positive");

    let mut cells: HashMap<Point, char> = HashMap::new();
    for tile in &map.tiles {
        cells.insert(tile.pt, '#');
    }
    for node in map.nodes.values() {
        cells.insert(node.pt, 'o');
    }

    // Corridors around diagonals can spill one cell past the area.
    let min_x = cells.keys().map(|p| p.x).min().unwrap_or(0).min(0);
    let max_x = cells.keys().map(|p| p.x).max().unwrap_or(0).max(WIDTH - 1);
    let min_y = cells.keys().map(|p| p.y).min().unwrap_or(0).min(0);
    let max_y = cells.keys().map(|p| p.y).max().unwrap_or(0).max(HEIGHT - 1);

    println!(
        "seed {seed}: {} nodes, {} edges, {} tiles",
        map.nodes.len(),
        map.edges.len(),
        map.tiles.len()
    );
    for y in min_y..=max_y {
        let row: String = (min_x..=max_x)
            .map(|x| *cells.get(&Point::new(x, y)).unwrap_or(&'.'))
            .collect();
        println!("{row}");
    }
}
