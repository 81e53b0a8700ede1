//! Unit tests for bf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CollectionPointId, VehicleId};

    #[test]
    fn display_is_raw_key() {
        assert_eq!(VehicleId::new("truck-7").to_string(), "truck-7");
        assert_eq!(CollectionPointId::from("bin-1").as_str(), "bin-1");
    }

    #[test]
    fn ordering() {
        assert!(VehicleId::from("a") < VehicleId::from("b"));
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::{EARTH_RADIUS_KM, KM_PER_DEGREE};
    use crate::Location;

    #[test]
    fn only_exact_origin_is_unset() {
        assert!(!Location::UNSET.is_valid());
        assert!(Location::new(0.0, 79.86).is_valid());
        assert!(Location::new(6.91, 0.0).is_valid());
        assert!(!Location::new(f64::NAN, 79.86).is_valid());
    }

    #[test]
    fn zero_distance() {
        let p = Location::new(6.9135, 79.8601);
        assert!(p.distance_km(p) < 1e-12);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Location::new(6.0, 79.0);
        let b = Location::new(7.0, 79.0);
        let expected = EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((a.distance_km(b) - expected).abs() < 1e-9, "got {}", a.distance_km(b));
    }

    #[test]
    fn symmetric() {
        let a = Location::new(6.90, 79.85);
        let b = Location::new(6.92, 79.87);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }

    #[test]
    fn unset_is_unreachable() {
        let a = Location::new(6.90, 79.85);
        assert!(a.distance_km(Location::UNSET).is_infinite());
        assert!(Location::UNSET.distance_km(a).is_infinite());
        assert!(a.distance_km(Location::new(f64::NAN, 1.0)).is_infinite());
    }

    #[test]
    fn validity() {
        assert!(!Location::UNSET.is_valid());
        assert!(!Location::new(f64::INFINITY, 1.0).is_valid());
        assert!(Location::new(0.0, 79.0).is_valid());
        assert!(Location::new(6.9, 79.8).is_valid());
    }

    #[test]
    fn step_covers_step_distance_heading_north() {
        let from = Location::new(6.90, 79.85);
        let to = Location::new(7.00, 79.85);
        let next = from.step_towards(to, 0.05);
        assert!((next.lon - from.lon).abs() < 1e-12);
        assert!(((next.lat - from.lat) * KM_PER_DEGREE - 0.05).abs() < 1e-9);
    }

    #[test]
    fn step_covers_step_distance_heading_east() {
        let from = Location::new(6.90, 79.85);
        let to = Location::new(6.90, 80.00);
        let next = from.step_towards(to, 0.05);
        let km_per_deg_lon = KM_PER_DEGREE * from.lat.to_radians().cos();
        assert!((next.lat - from.lat).abs() < 1e-12);
        assert!(((next.lon - from.lon) * km_per_deg_lon - 0.05).abs() < 1e-9);
    }

    #[test]
    fn step_moves_closer() {
        let from = Location::new(6.90, 79.85);
        let to = Location::new(6.91, 79.86);
        let before = from.distance_km(to);
        let after = from.step_towards(to, 0.05).distance_km(to);
        assert!(after < before);
        assert!((before - after - 0.05).abs() < 0.001, "moved {}", before - after);
    }

    #[test]
    fn step_snaps_when_coincident() {
        let p = Location::new(6.90, 79.85);
        assert_eq!(p.step_towards(p, 0.05), p);
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = Location::new(6.9135, 79.8601);
        assert!(a.approx_eq(a.offset(5e-7, -5e-7), 1e-6));
        assert!(!a.approx_eq(a.offset(2e-6, 0.0), 1e-6));
    }
}

#[cfg(test)]
mod route {
    use crate::{Location, Route};

    #[test]
    fn consumes_from_front() {
        let a = Location::new(1.0, 1.0);
        let b = Location::new(2.0, 2.0);
        let mut r = Route::from(vec![a, b]);
        assert_eq!(r.next(), Some(a));
        assert_eq!(r.pop_next(), Some(a));
        assert_eq!(r.next(), Some(b));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn take_empties_source() {
        let mut r = Route::from(vec![Location::new(1.0, 1.0)]);
        let moved = r.take();
        assert!(r.is_empty());
        assert_eq!(moved.len(), 1);
    }

    #[test]
    fn depot_only() {
        let depot = Location::new(6.9135, 79.8601);
        assert!(Route::to_depot(depot).is_depot_only(depot, 1e-6));
        assert!(!Route::from(vec![Location::new(1.0, 1.0), depot]).is_depot_only(depot, 1e-6));
        assert!(!Route::empty().is_depot_only(depot, 1e-6));
    }
}

#[cfg(test)]
mod vehicle {
    use crate::{clamp_fill, Location, VehicleEvent as E, VehicleState, VehicleStatus as S};

    #[test]
    fn new_vehicle_is_idle_and_empty() {
        let v = VehicleState::new("t1", Location::new(6.9, 79.8), 10.0);
        assert_eq!(v.status, S::Idle);
        assert_eq!(v.fill_level, 0.0);
        assert!(v.route.is_empty());
        assert!(!v.is_routed());
    }

    #[test]
    fn fill_is_clamped() {
        let mut v = VehicleState::new("t1", Location::new(6.9, 79.8), 10.0);
        assert_eq!(v.set_fill(120.0), 100.0);
        assert_eq!(v.add_fill(-250.0), 0.0);
        assert_eq!(v.set_fill(f64::NAN), 0.0);
        assert_eq!(clamp_fill(42.5), 42.5);
    }

    #[test]
    fn lifecycle_transitions() {
        assert_eq!(S::Idle.on(E::RouteAssigned), Some(S::EnRoute));
        assert_eq!(S::EnRoute.on(E::WaypointReached), Some(S::EnRoute));
        assert_eq!(S::EnRoute.on(E::BecameFull), Some(S::Returning));
        assert_eq!(S::Returning.on(E::RouteCompleted), Some(S::Idle));
        assert_eq!(S::EnRoute.on(E::RouteCompleted), Some(S::Idle));
        assert_eq!(S::EnRoute.on(E::RouteAssigned), Some(S::EnRoute));
    }

    #[test]
    fn rejected_transitions() {
        assert_eq!(S::Idle.on(E::BecameFull), None);
        assert_eq!(S::Idle.on(E::RouteCompleted), None);
        assert_eq!(S::Returning.on(E::RouteAssigned), None);
        assert_eq!(S::Returning.on(E::BecameFull), None);
        assert_eq!(S::Collecting.on(E::RouteAssigned), None);
    }

    #[test]
    fn maintenance_is_absorbing() {
        for e in [E::RouteAssigned, E::WaypointReached, E::BecameFull, E::RouteCompleted] {
            assert_eq!(S::Maintenance.on(e), None);
        }
        let mut v = VehicleState::new("t1", Location::new(6.9, 79.8), 10.0);
        v.status = S::Maintenance;
        assert!(!v.apply(E::RouteAssigned));
        assert_eq!(v.status, S::Maintenance);
    }

    #[test]
    fn display() {
        assert_eq!(S::EnRoute.to_string(), "EN_ROUTE");
        assert_eq!(S::Maintenance.to_string(), "MAINTENANCE");
    }
}

#[cfg(test)]
mod collection_point {
    use crate::{CollectionPoint, CollectionPointStatus as St, Location};

    #[test]
    fn eligibility_is_strictly_above_threshold() {
        let loc = Location::new(6.91, 79.86);
        assert!(CollectionPoint::new("a", loc, 85.1).is_eligible(85.0));
        assert!(!CollectionPoint::new("b", loc, 85.0).is_eligible(85.0));
        assert!(!CollectionPoint::new("c", Location::UNSET, 99.0).is_eligible(85.0));
    }

    #[test]
    fn mark_emptied_resets() {
        let mut p = CollectionPoint::new("a", Location::new(6.91, 79.86), 90.0);
        assert_eq!(p.status, St::NearFull);
        p.mark_emptied();
        assert_eq!(p.fill_level, 0.0);
        assert_eq!(p.status, St::Empty);
    }

    #[test]
    fn near_full_boundary_follows_config() {
        use crate::{FleetConfig, DEFAULT_ELIGIBILITY_THRESHOLD};

        let loc = Location::new(6.91, 79.86);
        assert_eq!(FleetConfig::default().eligibility_threshold, DEFAULT_ELIGIBILITY_THRESHOLD);
        assert_eq!(CollectionPoint::new("a", loc, 85.0).status, St::Normal);
        assert_eq!(CollectionPoint::new("b", loc, 85.5).status, St::NearFull);
        assert_eq!(CollectionPoint::with_near_full("c", loc, 85.5, 90.0).status, St::Normal);
        assert_eq!(CollectionPoint::with_near_full("d", loc, 75.0, 70.0).status, St::NearFull);
    }

    #[test]
    fn status_for_fill() {
        assert_eq!(St::for_fill(0.0, 85.0), St::Empty);
        assert_eq!(St::for_fill(40.0, 85.0), St::Normal);
        assert_eq!(St::for_fill(90.0, 85.0), St::NearFull);
        assert_eq!(St::for_fill(140.0, 85.0), St::Full);
    }
}

#[cfg(test)]
mod config {
    use crate::{FleetConfig, Location};

    #[test]
    fn default_is_valid() {
        let cfg = FleetConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.depot, Location::new(6.9135, 79.8601));
        assert_eq!(cfg.step_km, 0.05);
    }

    #[test]
    fn rejects_unset_depot() {
        let cfg = FleetConfig::default().with_depot(Location::UNSET);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_step_and_thresholds() {
        let cfg = FleetConfig { step_km: 0.0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = FleetConfig { overload_threshold: 101.0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = FleetConfig { collect_min: 30.0, collect_max: 20.0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0.0..1.0f64), r2.gen_range(0.0..1.0f64));
        }
    }

    #[test]
    fn jitter_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let j = rng.jitter(0.0005);
            assert!((-0.0005..0.0005).contains(&j));
        }
        assert_eq!(rng.jitter(0.0), 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(7).to_string(), "T7");
    }
}
