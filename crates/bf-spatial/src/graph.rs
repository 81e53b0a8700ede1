//! Weighted directed waypoint graph.
//!
//! # Data layout
//!
//! Waypoints are stored in insertion order and addressed by [`WaypointIdx`].
//! Each waypoint owns a small adjacency list of `(target, weight_km)`.
//! Planning graphs hold tens of waypoints, so a `Vec` per node is cheaper
//! than any compressed layout.
//!
//! Insertion order is significant: it is the tie-break order used by
//! [`shortest_path_from`](crate::shortest_path_from).

use rustc_hash::FxHashMap;

use bf_core::Location;

use crate::{SpatialError, SpatialResult};

/// Position of a waypoint in its [`Graph`] (insertion order).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct WaypointIdx(pub u32);

impl WaypointIdx {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named point in one planning run: identity and location only.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub id: String,
    pub location: Location,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, location: Location) -> Self {
        Self { id: id.into(), location }
    }
}

/// Mutable weighted directed graph over [`Waypoint`]s.
#[derive(Default, Debug)]
pub struct Graph {
    waypoints: Vec<Waypoint>,
    adjacency: Vec<Vec<(WaypointIdx, f64)>>,
    by_id:     FxHashMap<String, WaypointIdx>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for `n` waypoints.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            waypoints: Vec::with_capacity(n),
            adjacency: Vec::with_capacity(n),
            by_id:     FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Add a waypoint and return its index.  Ids must be unique per graph.
    pub fn add_waypoint(&mut self, waypoint: Waypoint) -> SpatialResult<WaypointIdx> {
        if self.by_id.contains_key(&waypoint.id) {
            return Err(SpatialError::DuplicateWaypoint(waypoint.id));
        }
        let idx = WaypointIdx(self.waypoints.len() as u32);
        self.by_id.insert(waypoint.id.clone(), idx);
        self.waypoints.push(waypoint);
        self.adjacency.push(Vec::new());
        Ok(idx)
    }

    /// Add (or re-weight) the directed edge `from → to`.
    ///
    /// `weight_km` must be finite and non-negative; an unreachable pair is
    /// expressed by leaving the edge out.
    pub fn add_edge(&mut self, from: &str, to: &str, weight_km: f64) -> SpatialResult<()> {
        let from_idx = self.idx(from)?;
        let to_idx   = self.idx(to)?;
        if !(weight_km.is_finite() && weight_km >= 0.0) {
            return Err(SpatialError::InvalidWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight: weight_km,
            });
        }

        let edges = &mut self.adjacency[from_idx.index()];
        match edges.iter_mut().find(|(target, _)| *target == to_idx) {
            Some(edge) => edge.1 = weight_km,
            None       => edges.push((to_idx, weight_km)),
        }
        Ok(())
    }

    /// Remove the directed edge `from → to`.  Returns `true` if it existed.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> SpatialResult<bool> {
        let from_idx = self.idx(from)?;
        let to_idx   = self.idx(to)?;
        let edges = &mut self.adjacency[from_idx.index()];
        let before = edges.len();
        edges.retain(|(target, _)| *target != to_idx);
        Ok(edges.len() != before)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn idx(&self, id: &str) -> SpatialResult<WaypointIdx> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| SpatialError::WaypointNotFound(id.to_owned()))
    }

    #[inline]
    pub fn waypoint(&self, idx: WaypointIdx) -> &Waypoint {
        &self.waypoints[idx.index()]
    }

    /// Outgoing `(target, weight_km)` pairs of `idx`, in insertion order.
    #[inline]
    pub fn out_edges(&self, idx: WaypointIdx) -> &[(WaypointIdx, f64)] {
        &self.adjacency[idx.index()]
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
