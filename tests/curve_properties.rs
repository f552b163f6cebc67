use pq_curves::chart::{self, ChartData};
use pq_curves::domain::{AlloyType, SampleInput};
use pq_curves::{generate, generate_curve};

#[test]
fn curve_is_a_pure_function_of_its_inputs() {
    let inputs = [
        SampleInput::new(100.0, 50.0, 200.0, AlloyType::Other),
        SampleInput::new(37.5, 2.25, 90.0, AlloyType::Zinc),
        SampleInput::new(180.0, 9.5, 330.0, AlloyType::Aluminum),
    ];
    for input in inputs {
        let first = generate(&input);
        let second = generate(&input);
        assert_eq!(first, second, "input={input:?}");
        assert_eq!(first[0].x, 0.0);
        assert_eq!(first[0].y, 0.0);
    }
}

#[test]
fn concrete_midpoint_scenario() {
    let curve = generate_curve(100.0, 50.0, 200.0, AlloyType::from_name("other"));
    assert_eq!(curve.len(), 51);
    assert!((curve[25].x - 50.0).abs() < 1e-9);
    assert!((curve[25].y - 50.0 * 50.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn x_stays_within_pressure_range() {
    for pressure in [1.0, 3.3, 47.9, 100.0, 199.9] {
        let curve = generate_curve(pressure, 1.0, 200.0, AlloyType::Other);
        assert!(curve.len() >= 50 && curve.len() <= 51, "len={}", curve.len());
        let mut prev = -1.0;
        for p in &curve {
            assert!(p.x > prev);
            assert!(p.x <= pressure);
            prev = p.x;
        }
    }
}

#[test]
fn chart_bounds_for_empty_and_full_curves() {
    let full = ChartData::generate(SampleInput::new(100.0, 10.0, 300.0, AlloyType::Aluminum));
    let peak = full.points.last().map(|p| p.y).unwrap();
    assert!((full.bounds.y_max - 1.2 * peak).abs() < 1e-9);
    assert!((full.bounds.x_max - 120.0).abs() < 1e-9);

    let empty = ChartData::generate(SampleInput::new(0.0, 10.0, 300.0, AlloyType::Aluminum));
    assert!(empty.points.is_empty());
    assert_eq!(empty.bounds.y_max, 0.0);
}

#[test]
fn tooltip_matches_series_label() {
    let curve = generate_curve(100.0, 50.0, 200.0, AlloyType::Other);
    assert_eq!(chart::tooltip(&curve[25]), "PQ Curve: P: 50.00, Q: 353.55");
}
