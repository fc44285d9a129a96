use kdp_cover::*;

const EPS: f64 = 1e-9;

#[test]
fn test_interior_without_bleed() {
    let calc = SpineCalculator::default();
    let interior = calc
        .calculate_interior(200, TrimSize::In6x9, false)
        .unwrap();

    assert_eq!(interior.page_width, 6.0);
    assert_eq!(interior.page_height, 9.0);
    assert_eq!(interior.bleed, 0.0);
    assert_eq!(interior.gutter, 0.5);
    assert_eq!(interior.outside, 0.25);

    let recto = interior.recto_live;
    assert!((recto.x - 0.5).abs() < EPS);
    assert!((recto.y - 0.25).abs() < EPS);
    assert!((recto.width - 5.25).abs() < EPS);
    assert!((recto.height - 8.5).abs() < EPS);

    let verso = interior.verso_live;
    assert!((verso.x - 0.25).abs() < EPS);
    assert!((verso.right() - 5.5).abs() < EPS);
    assert_eq!(verso.width, recto.width);
}

#[test]
fn test_interior_with_bleed() {
    let calc = SpineCalculator::default();
    let interior = calc
        .calculate_interior(120, TrimSize::In8_5x11, true)
        .unwrap();

    assert!((interior.page_width - 8.625).abs() < EPS);
    assert!((interior.page_height - 11.25).abs() < EPS);
    assert_eq!(interior.bleed, 0.125);
    assert_eq!(interior.gutter, 0.375);
    assert_eq!(interior.outside, 0.375);
    assert_eq!(interior.top, 0.375);
    assert_eq!(interior.bottom, 0.375);
    assert!((interior.recto_live.width - 7.875).abs() < EPS);
}

#[test]
fn test_gutter_tiers() {
    let calc = SpineCalculator::default();
    let gutter = |pages| {
        calc.calculate_interior(pages, TrimSize::In6x9, false)
            .unwrap()
            .gutter
    };

    assert_eq!(gutter(24), 0.375);
    assert_eq!(gutter(150), 0.375);
    assert_eq!(gutter(151), 0.5);
    assert_eq!(gutter(300), 0.5);
    assert_eq!(gutter(301), 0.625);
    assert_eq!(gutter(501), 0.75);
    assert_eq!(gutter(828), 0.875);
}

#[test]
fn test_interior_page_count_limits() {
    let calc = SpineCalculator::default();

    match calc.calculate_interior(829, TrimSize::In6x9, false) {
        Err(CoverError::InvalidArgument(msg)) => assert!(msg.contains("828")),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
    assert!(matches!(
        calc.calculate_interior(0, TrimSize::In6x9, false),
        Err(CoverError::InvalidArgument(_))
    ));
}

#[test]
fn test_interior_degenerate_live_area() {
    let mut config = CoverConfig::default();
    config.interior.outside = 3.0;
    let result = calculate_interior(&config, 100, TrimSize::In5x8, false);
    assert!(matches!(
        result,
        Err(CoverError::DegenerateGeometry {
            panel: Panel::Interior,
            ..
        })
    ));
}
