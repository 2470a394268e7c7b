//! Field trait compliance test helpers.
//!
//! These functions verify that a Field implementation satisfies the
//! invariants the generator relies on: a proper metric over all 50 cells,
//! an injective coordinate mapping, and candidate enumeration that agrees
//! with the window check.

use crate::field::Field;
use crate::window::DistanceWindow;
use indexmap::IndexSet;
use rally_core::{Position, Side, CELLS_PER_SIDE};

fn all_cells() -> Vec<Position> {
    Side::ALL.into_iter().flat_map(Position::cells).collect()
}

/// Assert that `distance(a, a) == 0.0` for all cells.
pub fn assert_distance_reflexive(field: &dyn Field) {
    for p in all_cells() {
        let d = field.distance(&p, &p);
        assert!(d.abs() < f64::EPSILON, "distance({p}, {p}) = {d}, expected 0.0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(field: &dyn Field) {
    let cells = all_cells();
    for a in &cells {
        for b in &cells {
            let dab = field.distance(a, b);
            let dba = field.distance(b, a);
            assert!(
                (dab - dba).abs() < f64::EPSILON,
                "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}"
            );
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(field: &dyn Field) {
    let cells = all_cells();
    for a in &cells {
        for b in &cells {
            for c in &cells {
                let dac = field.distance(a, c);
                let dab = field.distance(a, b);
                let dbc = field.distance(b, c);
                assert!(
                    dac <= dab + dbc + 1e-9,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that no pair of cells exceeds `max_distance()`.
pub fn assert_max_distance_bounds_all_pairs(field: &dyn Field) {
    let cells = all_cells();
    let max = field.max_distance();
    for a in &cells {
        for b in &cells {
            let d = field.distance(a, b);
            assert!(d <= max + 1e-9, "distance({a}, {b}) = {d} > max_distance {max}");
        }
    }
}

/// Assert that distinct cells map to distinct field points, within each
/// space and across the whole field.
pub fn assert_coordinates_injective(field: &dyn Field) {
    for side in Side::ALL {
        let points: IndexSet<_> = Position::cells(side)
            .map(|p| field.coordinates(&p))
            .collect();
        assert_eq!(
            points.len(),
            CELLS_PER_SIDE,
            "coordinates collide within space {side}"
        );
    }
    let points: IndexSet<_> = all_cells().iter().map(|p| field.coordinates(p)).collect();
    assert_eq!(points.len(), 2 * CELLS_PER_SIDE, "coordinates collide across spaces");
}

/// Assert that `valid_candidates` returns exactly the cells that pass
/// `is_within_window`, for a spread of windows.
pub fn assert_candidates_match_window(field: &dyn Field) {
    let windows = [
        DistanceWindow::UNBOUNDED,
        DistanceWindow { min: 0.0, max: 0.0 },
        DistanceWindow { min: 0.0, max: 1.0 },
        DistanceWindow { min: 1.0, max: 3.0 },
        DistanceWindow { min: 4.5, max: f64::INFINITY },
    ];
    for prev in all_cells() {
        for target in Side::ALL {
            for window in &windows {
                let got = field.valid_candidates(&prev, target, window);
                let expected: Vec<_> = Position::cells(target)
                    .filter(|c| field.is_within_window(&prev, c, window))
                    .collect();
                assert_eq!(
                    got.as_slice(),
                    expected.as_slice(),
                    "candidates from {prev} into space {target} with {window} disagree"
                );
            }
        }
    }
}

/// Run all compliance checks on a field.
pub fn run_full_compliance(field: &dyn Field) {
    assert_distance_reflexive(field);
    assert_distance_symmetric(field);
    assert_distance_triangle_inequality(field);
    assert_max_distance_bounds_all_pairs(field);
    assert_coordinates_injective(field);
    assert_candidates_match_window(field);
}
