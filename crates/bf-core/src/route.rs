//! Planned vehicle routes.

use std::collections::VecDeque;

use crate::Location;

/// An ordered sequence of waypoints a vehicle drives through.
///
/// A non-empty route produced by planning always ends at the depot.  The
/// simulator consumes it from the front as waypoints are reached; the tail
/// (and therefore the depot terminus) is never reordered.
///
/// A route is owned by exactly one vehicle.  Reassignment moves the
/// remaining waypoints out of one vehicle with [`take`](Self::take) and into
/// another, so the same waypoints are never held twice.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route(VecDeque<Location>);

impl Route {
    /// An empty route.
    #[inline]
    pub fn empty() -> Self {
        Self(VecDeque::new())
    }

    /// The single-stop route `[depot]` used by returning vehicles.
    pub fn to_depot(depot: Location) -> Self {
        Self(VecDeque::from([depot]))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The next waypoint to drive to.
    #[inline]
    pub fn next(&self) -> Option<Location> {
        self.0.front().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Location> {
        self.0.back().copied()
    }

    /// Remove and return the next waypoint.
    #[inline]
    pub fn pop_next(&mut self) -> Option<Location> {
        self.0.pop_front()
    }

    #[inline]
    pub fn push(&mut self, waypoint: Location) {
        self.0.push_back(waypoint);
    }

    /// Move all waypoints out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Route {
        std::mem::take(self)
    }

    /// `true` if this is exactly `[depot]` (within `tolerance_deg`).
    pub fn is_depot_only(&self, depot: Location, tolerance_deg: f64) -> bool {
        self.len() == 1 && self.next().is_some_and(|w| w.approx_eq(depot, tolerance_deg))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<Location> {
        self.0.iter().copied().collect()
    }
}

impl From<Vec<Location>> for Route {
    fn from(waypoints: Vec<Location>) -> Self {
        Self(waypoints.into())
    }
}

impl FromIterator<Location> for Route {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
