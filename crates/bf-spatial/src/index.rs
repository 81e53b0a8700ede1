//! R-tree index answering "which collection point sits at this location?".
//!
//! The simulator snaps an arrived-at waypoint back to the collection point it
//! was planned from.  Coordinates are compared per axis within a tolerance,
//! so the query is an envelope lookup rather than a nearest-neighbour search.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use bf_core::Location;

/// Entry stored in the R-tree: a `[lat, lon]` point and the caller's slot.
#[derive(Clone, Debug)]
struct Entry {
    point: [f64; 2], // [lat, lon]
    slot:  usize,
}

impl RTreeObject for Entry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for Entry {
    /// Squared Euclidean distance in degree space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Spatial index over a slice of locations, returning positions in that
/// slice.  Invalid (unset / non-finite) locations are not indexed.
pub struct LocationIndex {
    tree: RTree<Entry>,
}

impl LocationIndex {
    /// Bulk-load an index where slot `i` is `locations[i]`.
    pub fn build<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        let entries: Vec<Entry> = locations
            .into_iter()
            .enumerate()
            .filter(|(_, loc)| loc.is_valid())
            .map(|(slot, loc)| Entry { point: [loc.lat, loc.lon], slot })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The lowest slot whose location equals `at` within `tolerance_deg` on
    /// both axes.
    pub fn find_at(&self, at: Location, tolerance_deg: f64) -> Option<usize> {
        if !at.is_valid() {
            return None;
        }
        let envelope = AABB::from_corners(
            [at.lat - tolerance_deg, at.lon - tolerance_deg],
            [at.lat + tolerance_deg, at.lon + tolerance_deg],
        );
        self.tree
            .locate_in_envelope(&envelope)
            .filter(|e| Location::new(e.point[0], e.point[1]).approx_eq(at, tolerance_deg))
            .map(|e| e.slot)
            .min()
    }
}
