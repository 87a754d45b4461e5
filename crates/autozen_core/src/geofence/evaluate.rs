//! Geofence decision function.
//!
//! # Responsibility
//! - Compute great-circle distance between a fix and each zone center.
//! - Resolve overlapping zones by first-match-wins over insertion order.
//!
//! # Invariants
//! - `evaluate` performs no I/O and holds no state.
//! - Match boundary is inclusive: `distance <= radius` matches.

use crate::model::position::Position;
use crate::model::zone::{PhoneMode, Zone, ZoneId};

/// Mean earth radius in meters, matching the haversine convention used by
/// common platform location APIs.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Outcome of one evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Mode the device should be in for this position.
    pub target: PhoneMode,
    /// Winning zone, `None` when no zone matched. Carried for diagnostics.
    pub matched: Option<ZoneId>,
}

impl Decision {
    /// The reset decision used when no zone matches.
    pub fn normal() -> Self {
        Self {
            target: PhoneMode::Normal,
            matched: None,
        }
    }
}

/// Decides the target mode for `position` against `zones`.
///
/// Zones are scanned in the order given; the repository contract delivers
/// insertion order, so the earliest-created overlapping zone wins. Positions
/// outside every zone resolve to `PhoneMode::Normal`.
pub fn evaluate(position: &Position, zones: &[Zone]) -> Decision {
    for zone in zones {
        let center = Position::new(zone.latitude, zone.longitude);
        let distance = haversine_distance_m(position, &center);
        if distance <= zone.radius {
            return Decision {
                target: zone.mode,
                matched: Some(zone.id),
            };
        }
    }

    Decision::normal()
}

/// Great-circle distance in meters between two fixes.
pub fn haversine_distance_m(a: &Position, b: &Position) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp against floating-point drift pushing the argument past 1.0 for
    // near-antipodal pairs.
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::{evaluate, haversine_distance_m, Decision};
    use crate::model::position::Position;
    use crate::model::zone::{PhoneMode, Zone};

    fn zone(id: i64, lat: f64, lon: f64, radius: f64, mode: PhoneMode) -> Zone {
        Zone {
            id,
            name: format!("zone-{id}"),
            latitude: lat,
            longitude: lon,
            radius,
            mode,
        }
    }

    #[test]
    fn zero_distance_at_same_point() {
        let fix = Position::new(37.0, -122.0);
        assert_eq!(haversine_distance_m(&fix, &fix), 0.0);
    }

    #[test]
    fn one_hundredth_degree_latitude_is_about_1100_meters() {
        let a = Position::new(37.0, -122.0);
        let b = Position::new(37.01, -122.0);
        let distance = haversine_distance_m(&a, &b);
        assert!((1000.0..1300.0).contains(&distance), "got {distance}");
    }

    #[test]
    fn match_boundary_is_inclusive() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.001, 0.0);
        let distance = haversine_distance_m(&a, &b);

        let zones = [zone(1, 0.001, 0.0, distance, PhoneMode::Vibrate)];
        let decision = evaluate(&a, &zones);
        assert_eq!(decision.target, PhoneMode::Vibrate);
    }

    #[test]
    fn empty_zone_list_resolves_to_normal() {
        let decision = evaluate(&Position::new(37.0, -122.0), &[]);
        assert_eq!(decision, Decision::normal());
    }
}
