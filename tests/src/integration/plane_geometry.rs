//! # Plane Geometry
//!
//! Identifiers combined with the vector types: a toy detector places wire
//! centers in space, and per-plane and per-TPC centers are computed with the
//! middle point accumulator.

use std::collections::BTreeMap;

use lc_01_element_ids::{PlaneID, SigType, View, WireID, TPCID};
use shared_types::{degrees_to_radians, MiddlePointAccumulator, Point, Rotation, Vector};

/// Wire pitch of the toy detector, in cm.
pub const WIRE_PITCH: f64 = 0.3;

/// Distance between consecutive planes along the drift axis, in cm.
pub const PLANE_GAP: f64 = 0.3;

/// Width of one TPC along the drift axis, in cm.
pub const TPC_WIDTH: f64 = 150.0;

/// Center of a wire in the toy detector.
///
/// Planes sit one behind the other along x, wires are spread along z.
pub fn wire_center(wire: &WireID) -> Point {
    let x = wire.tpc() as f64 * TPC_WIDTH + wire.plane() as f64 * PLANE_GAP;
    let z = wire.wire() as f64 * WIRE_PITCH;
    Point::new(x, 0.0, z)
}

/// View of a plane: the last plane of each TPC collects.
pub fn plane_view(plane: &PlaneID) -> (View, SigType) {
    match plane.plane() {
        0 => (View::U, SigType::Induction),
        1 => (View::V, SigType::Induction),
        2 => (View::Z, SigType::Collection),
        _ => (View::Unknown, SigType::MysteryType),
    }
}

/// Direction of the wires of a plane, rotated around the drift axis.
pub fn wire_direction(plane: &PlaneID) -> Vector {
    let angle_deg = match plane_view(plane).0 {
        View::U => 60.0,
        View::V => -60.0,
        _ => 0.0,
    };
    // Roll only: rotation around x.
    let rotation = Rotation::from_euler_angles(degrees_to_radians(angle_deg), 0.0, 0.0);
    Vector::new(0.0, 1.0, 0.0).rotated(&rotation)
}

/// Centers of every plane holding at least one of `wires`.
pub fn plane_centers<'a, I>(wires: I) -> BTreeMap<PlaneID, Point>
where
    I: IntoIterator<Item = &'a WireID>,
{
    let mut accumulators: BTreeMap<PlaneID, MiddlePointAccumulator> = BTreeMap::new();
    for wire in wires {
        let _span = lc_telemetry::element_span!("plane_center", wire).entered();
        accumulators
            .entry(*wire.plane_id())
            .or_default()
            .add(wire_center(wire));
    }

    accumulators
        .into_iter()
        .map(|(plane, acc)| (plane, acc.middle_point()))
        .collect()
}

/// Center of a TPC, weighting each plane by its number of wires.
pub fn tpc_center(tpc: &TPCID, wires: &[WireID]) -> Point {
    let mut acc = MiddlePointAccumulator::new();
    for (plane, center) in plane_centers(wires.iter().filter(|w| w.tpc_id() == tpc)) {
        let n_wires = wires.iter().filter(|w| w.plane_id() == &plane).count();
        acc.add_weighted(center, n_wires as f64);
    }
    acc.middle_point()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_point_near(actual: Point, expected: Point) {
        assert!(
            actual.distance(&expected) < TOLERANCE,
            "{} != {}",
            actual,
            expected
        );
    }

    fn detector_wires() -> Vec<WireID> {
        let mut wires = Vec::new();
        for t in 0..2 {
            for p in 0..3 {
                for w in 0..11 {
                    wires.push(WireID::new(0, t, p, w));
                }
            }
        }
        wires
    }

    #[test]
    fn test_plane_centers() {
        let wires = detector_wires();
        let centers = plane_centers(&wires);

        assert_eq!(centers.len(), 6);
        let center = centers[&PlaneID::new(0, 1, 2)];
        assert_point_near(center, Point::new(TPC_WIDTH + 2.0 * PLANE_GAP, 0.0, 5.0 * WIRE_PITCH));
    }

    #[test]
    fn test_tpc_center_is_plane_average() {
        let wires = detector_wires();
        let center = tpc_center(&TPCID::new(0, 0), &wires);
        assert_point_near(center, Point::new(PLANE_GAP, 0.0, 5.0 * WIRE_PITCH));
    }

    #[test]
    fn test_tpc_without_wires_has_nan_center() {
        let center = tpc_center(&TPCID::new(3, 0), &detector_wires());
        assert!(center.x().is_nan());
    }

    #[test]
    fn test_plane_views() {
        assert_eq!(plane_view(&PlaneID::new(0, 0, 0)), (View::U, SigType::Induction));
        assert_eq!(plane_view(&PlaneID::new(0, 0, 2)).0, View::W);
        assert_eq!(plane_view(&PlaneID::new(0, 0, 7)).1, SigType::MysteryType);
    }

    #[test]
    fn test_wire_directions() {
        let collection = wire_direction(&PlaneID::new(0, 0, 2));
        assert!((collection.y() - 1.0).abs() < TOLERANCE);

        let u = wire_direction(&PlaneID::new(0, 0, 0));
        let v = wire_direction(&PlaneID::new(0, 0, 1));
        assert!((u.mag() - 1.0).abs() < TOLERANCE);
        assert!(u.x().abs() < TOLERANCE);
        assert!((u.dot(&v) - degrees_to_radians(120.0_f64).cos()).abs() < TOLERANCE);
        assert!((u.z() + v.z()).abs() < TOLERANCE);
    }
}
