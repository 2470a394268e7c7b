use rally_core::{Depth, Horizontal, Position, Side, CELLS_PER_SIDE};
use rally_field::{
    coordinates_of, distance, is_within_window, valid_candidates, DistanceWindow, Field,
    FieldPoint, MirroredCourt,
};
use std::collections::HashSet;

#[test]
fn coordinates_injective_within_each_space() {
    for side in Side::ALL {
        let points: HashSet<FieldPoint> = Position::cells(side).map(|p| coordinates_of(&p)).collect();
        assert_eq!(points.len(), CELLS_PER_SIDE);
    }
}

#[test]
fn center_front_unit_window_scenario() {
    let prev = Position::new(Horizontal::Center, Depth::Front, Side::One);
    assert_eq!(coordinates_of(&prev), FieldPoint::new(2, 4));

    let window = DistanceWindow::new(0.0, 1.0).unwrap();
    let got = valid_candidates(&MirroredCourt, &prev, Side::Two, &window);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0], Position::new(Horizontal::Center, Depth::Front, Side::Two));

    // The diagonal neighbours across the net sit at sqrt(2).
    let diag = Position::new(Horizontal::CenterLeft, Depth::Front, Side::Two);
    assert!((distance(&prev, &diag) - 2f64.sqrt()).abs() < 1e-12);
    assert!(!is_within_window(&prev, &diag, &window));
}

#[test]
fn unbounded_candidates_cover_target_space() {
    let court = MirroredCourt::new();
    for prev in Position::cells(Side::Two) {
        for target in Side::ALL {
            let got = court.valid_candidates(&prev, target, &DistanceWindow::UNBOUNDED);
            assert_eq!(got.len(), CELLS_PER_SIDE);
            assert!(got.iter().all(|p| p.side == target));
        }
    }
}

#[test]
fn inverted_raw_window_yields_nothing() {
    // Read-only queries take the window as given; an inverted one simply
    // matches no cell.
    let prev = Position::new(Horizontal::Left, Depth::Mid, Side::One);
    let window = DistanceWindow { min: 3.0, max: 1.0 };
    assert!(valid_candidates(&MirroredCourt, &prev, Side::Two, &window).is_empty());
}

#[test]
fn field_is_usable_as_trait_object() {
    let field: Box<dyn Field> = Box::new(MirroredCourt::new());
    let a = Position::new(Horizontal::Left, Depth::Back, Side::One);
    let b = Position::new(Horizontal::Left, Depth::Back, Side::Two);
    assert_eq!(field.distance(&a, &b), 9.0);
    assert_eq!(field.max_distance(), rally_field::MAX_FIELD_DISTANCE);
}
