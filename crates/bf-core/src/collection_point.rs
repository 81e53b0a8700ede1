//! Collection point (bin) snapshots.

use crate::config::DEFAULT_ELIGIBILITY_THRESHOLD;
use crate::{clamp_fill, CollectionPointId, Location};

/// Coarse fill status kept alongside the numeric fill level.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CollectionPointStatus {
    /// Just emptied by a vehicle.
    #[default]
    Empty,
    Normal,
    NearFull,
    Full,
}

impl CollectionPointStatus {
    /// Status implied by a fill level, using `near_full` as the lower bound
    /// of [`NearFull`](Self::NearFull).
    pub fn for_fill(fill: f64, near_full: f64) -> Self {
        let fill = clamp_fill(fill);
        if fill >= 100.0 {
            Self::Full
        } else if fill > near_full {
            Self::NearFull
        } else if fill > 0.0 {
            Self::Normal
        } else {
            Self::Empty
        }
    }
}

/// One collection point as held by the collection-point store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionPoint {
    pub id: CollectionPointId,
    pub location: Location,
    pub fill_level: f64,
    pub status: CollectionPointStatus,
}

impl CollectionPoint {
    /// A point whose status is derived from `fill_level` with the default
    /// near-full boundary.
    pub fn new(id: impl Into<CollectionPointId>, location: Location, fill_level: f64) -> Self {
        Self::with_near_full(id, location, fill_level, DEFAULT_ELIGIBILITY_THRESHOLD)
    }

    /// Like [`new`](Self::new) with an explicit near-full boundary, normally
    /// `FleetConfig::eligibility_threshold`.
    pub fn with_near_full(
        id: impl Into<CollectionPointId>,
        location: Location,
        fill_level: f64,
        near_full: f64,
    ) -> Self {
        let fill_level = clamp_fill(fill_level);
        Self {
            id: id.into(),
            location,
            fill_level,
            status: CollectionPointStatus::for_fill(fill_level, near_full),
        }
    }

    /// Worth a pickup: fill strictly above `threshold` and a valid location.
    #[inline]
    pub fn is_eligible(&self, threshold: f64) -> bool {
        self.fill_level > threshold && self.location.is_valid()
    }

    /// Reset after a vehicle collected it.
    pub fn mark_emptied(&mut self) {
        self.fill_level = 0.0;
        self.status = CollectionPointStatus::Empty;
    }
}
