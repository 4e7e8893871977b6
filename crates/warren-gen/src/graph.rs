//! Complete-graph construction and Kruskal's minimum spanning tree.

use std::collections::HashMap;

use warren_core::Point;

use crate::model::{Edge, Node};

/// Every unordered pair of nodes as an edge weighted by Euclidean distance.
///
/// Edge order follows node order; downstream stages (tie-breaking in the
/// spanning tree, extra-edge sampling) depend on it being deterministic.
/// Empty and singleton node sets yield no edges.
pub fn complete_graph(nodes: &[Node]) -> Vec<Edge> {
    let n = nodes.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            edges.push(Edge::new(a.pt, b.pt, a.pt.distance(b.pt)));
        }
    }
    edges
}

/// Disjoint-set forest with path compression and union by size.
struct DsForest {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DsForest {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing `a` and `b`. Returns false if they were
    /// already the same set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }
}

/// Kruskal's minimum spanning tree over `edges`, returned as indices into
/// the input slice in acceptance order.
///
/// Candidates are visited by ascending weight; the stable sort breaks ties
/// by input order, so the result is identical on every call for the same
/// input. An edge is accepted iff its endpoints are in different
/// components.
pub fn kruskal_mst(edges: &[Edge]) -> Vec<usize> {
    let mut ids: HashMap<Point, usize> = HashMap::new();
    for e in edges {
        let next = ids.len();
        ids.entry(e.start).or_insert(next);
        let next = ids.len();
        ids.entry(e.end).or_insert(next);
    }

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&i, &j| edges[i].weight.total_cmp(&edges[j].weight));

    let mut forest = DsForest::new(ids.len());
    let mut mst = Vec::new();
    for i in order {
        let e = &edges[i];
        if forest.union(ids[&e.start], ids[&e.end]) {
            mst.push(i);
        }
    }
    mst
}
