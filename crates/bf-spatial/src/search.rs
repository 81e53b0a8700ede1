//! Single-source shortest paths over a [`Graph`].
//!
//! Classic O(V²) Dijkstra: repeatedly settle the unsettled waypoint with the
//! smallest tentative distance and relax its out-edges.  Planning graphs
//! hold tens of waypoints, so a linear minimum scan beats a heap here.
//!
//! # Tie-breaking
//!
//! When several unsettled waypoints share the minimum distance, the one
//! added to the graph first (lowest [`WaypointIdx`]) is settled first.  The
//! same rule applies to [`ShortestPaths::nearest`].  Results are therefore
//! reproducible for a given insertion order.

use crate::{Graph, SpatialResult, Waypoint, WaypointIdx};

/// Tentative distances and predecessors from one search.
///
/// Built fresh by every [`shortest_path_from`] call and never stored on the
/// graph.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: WaypointIdx,
    /// dist[v] = shortest known distance (km); `INFINITY` if unreached.
    dist: Vec<f64>,
    /// prev[v] = predecessor on the shortest path; `None` for the source and
    /// for unreached waypoints.
    prev: Vec<Option<WaypointIdx>>,
}

impl ShortestPaths {
    #[inline]
    pub fn source(&self) -> WaypointIdx {
        self.source
    }

    /// Distance from the source to `idx` (km), `INFINITY` if unreachable.
    #[inline]
    pub fn distance(&self, idx: WaypointIdx) -> f64 {
        self.dist[idx.index()]
    }

    #[inline]
    pub fn is_reachable(&self, idx: WaypointIdx) -> bool {
        self.dist[idx.index()].is_finite()
    }

    /// Waypoint indices from the source to `target` inclusive, or `None` if
    /// `target` is unreachable.
    pub fn path_to(&self, target: WaypointIdx) -> Option<Vec<WaypointIdx>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while let Some(p) = self.prev[cur.index()] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    /// The reachable waypoint (other than the source) with the smallest
    /// finite distance, ties going to the lowest index.
    pub fn nearest(&self) -> Option<(WaypointIdx, f64)> {
        let mut best: Option<(WaypointIdx, f64)> = None;
        for (i, &d) in self.dist.iter().enumerate() {
            let idx = WaypointIdx(i as u32);
            if idx == self.source || !d.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((idx, d));
            }
        }
        best
    }

    /// Like [`nearest`](Self::nearest) but resolved to the waypoint itself.
    pub fn nearest_waypoint<'g>(&self, graph: &'g Graph) -> Option<(&'g Waypoint, f64)> {
        self.nearest().map(|(idx, d)| (graph.waypoint(idx), d))
    }
}

/// Compute shortest distances from the waypoint `source_id` to every
/// waypoint in `graph`.
///
/// Stops early once the smallest unsettled distance is infinite (the rest
/// of the graph is unreachable).
pub fn shortest_path_from(graph: &Graph, source_id: &str) -> SpatialResult<ShortestPaths> {
    let source = graph.idx(source_id)?;
    let n = graph.len();

    let mut dist    = vec![f64::INFINITY; n];
    let mut prev    = vec![None; n];
    let mut settled = vec![false; n];
    dist[source.index()] = 0.0;

    loop {
        // Linear scan for the unsettled minimum; strict `<` keeps the lowest
        // index on ties.
        let mut current: Option<usize> = None;
        for v in 0..n {
            if settled[v] || !dist[v].is_finite() {
                continue;
            }
            if current.is_none_or(|c| dist[v] < dist[c]) {
                current = Some(v);
            }
        }
        let Some(u) = current else { break };
        settled[u] = true;

        for &(target, weight) in graph.out_edges(WaypointIdx(u as u32)) {
            let t = target.index();
            if settled[t] {
                continue;
            }
            let candidate = dist[u] + weight;
            if candidate < dist[t] {
                dist[t] = candidate;
                prev[t] = Some(WaypointIdx(u as u32));
            }
        }
    }

    Ok(ShortestPaths { source, dist, prev })
}
