use kdp_cover::*;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn spec(page_count: u32, trim_size: TrimSize) -> CoverSpec {
    CoverSpec {
        page_count,
        trim_size,
        paper_stock: PaperStock::new(PaperColor::White, BindingType::Paperback),
    }
}

// =============================================================================
// Cover Dimensions
// =============================================================================

#[test]
fn test_cover_dimensions_6x9() {
    let calc = SpineCalculator::default();
    let g = calc
        .calculate_cover_dimensions(TrimSize::In6x9, 0.4504)
        .unwrap();

    assert_close(g.total_width, 12.7004);
    assert_close(g.total_height, 9.25);
    assert_eq!(g.front_width, 6.0);
    assert_eq!(g.back_width, 6.0);
    assert_eq!(g.height, 9.0);
    assert_eq!(g.bleed, 0.125);
    assert_close(g.back_start_x, 0.125);
    assert_close(g.spine_start_x, 6.125);
    assert_close(g.front_start_x, 6.5754);
}

#[test]
fn test_cover_dimension_identities() {
    let calc = SpineCalculator::default();
    for trim in TrimSize::ALL {
        for spine in [0.0, 0.06, 0.2252, 0.4504, 1.3, 2.2771] {
            let g = calc.calculate_cover_dimensions(trim, spine).unwrap();
            assert_close(
                g.total_width,
                g.back_width + g.spine_width + g.front_width + 2.0 * g.bleed,
            );
            assert_close(g.total_height, g.height + 2.0 * g.bleed);
            assert_close(g.front_start_x + g.front_width + g.bleed, g.total_width);
            assert_close(g.back_start_x + g.back_width, g.spine_start_x);
            assert_close(g.spine_start_x + g.spine_width, g.front_start_x);
            if spine > 0.0 {
                assert!(g.back_start_x < g.spine_start_x);
                assert!(g.spine_start_x < g.front_start_x);
            }
        }
    }
}

#[test]
fn test_cover_dimensions_rejects_bad_spine() {
    let calc = SpineCalculator::default();
    for spine in [-0.01, f64::NAN, f64::INFINITY] {
        let result = calc.calculate_cover_dimensions(TrimSize::In6x9, spine);
        assert!(matches!(result, Err(CoverError::InvalidArgument(_))));
    }
}

#[test]
fn test_panels() {
    let calc = SpineCalculator::default();
    let g = calc
        .calculate_cover_dimensions(TrimSize::In5x8, 0.3)
        .unwrap();

    assert_eq!(g.panel(Panel::Back), Some(g.back_panel()));
    assert_eq!(g.panel(Panel::Spine), Some(g.spine_panel()));
    assert_eq!(g.panel(Panel::Front), Some(g.front_panel()));
    assert_eq!(g.panel(Panel::Interior), None);

    let trim = g.trim_rect();
    assert_close(trim.x, 0.125);
    assert_close(trim.width, 10.3);
    assert_close(trim.height, 8.0);
}

// =============================================================================
// Safe Zones
// =============================================================================

#[test]
fn test_safe_zones_6x9() {
    let calc = SpineCalculator::default();
    let g = calc
        .calculate_cover_dimensions(TrimSize::In6x9, 0.4504)
        .unwrap();
    let zones = calc.calculate_safe_zones(&g, 0.4504).unwrap();

    assert_close(zones.front.x, 6.8254);
    assert_close(zones.front.y, 0.375);
    assert_close(zones.front.width, 5.5);
    assert_close(zones.front.height, 8.5);

    // Back loses the barcode width on its spine side
    assert_close(zones.back.x, 0.375);
    assert_close(zones.back.width, 3.5);
    assert_close(zones.back.height, 8.5);

    assert_close(zones.spine.x, 6.1875);
    assert_close(zones.spine.width, 0.3254);
    assert_close(zones.spine.y, 0.1875);
    assert_close(zones.spine.height, 8.875);

    assert_close(zones.barcode.x, 3.875);
    assert_close(zones.barcode.y, 0.375);
    assert_close(zones.barcode.width, 2.0);
    assert_close(zones.barcode.height, 1.2);
}

#[test]
fn test_safe_zones_contained_in_panels() {
    let calc = SpineCalculator::default();
    for trim in TrimSize::ALL {
        for pages in [100, 300, 828] {
            let spine = calc
                .calculate_spine_width(pages, PaperColor::White, BindingType::Paperback)
                .unwrap();
            let g = calc.calculate_cover_dimensions(trim, spine).unwrap();
            let zones = calc.calculate_safe_zones(&g, spine).unwrap();

            assert!(g.front_panel().strictly_contains(&zones.front), "{}", trim);
            assert!(g.back_panel().strictly_contains(&zones.back), "{}", trim);
            assert!(g.spine_panel().strictly_contains(&zones.spine), "{}", trim);
            assert!(g.back_panel().strictly_contains(&zones.barcode), "{}", trim);

            // Text never reaches the barcode
            assert!(zones.back.right() <= zones.barcode.x + EPS);
        }
    }
}

#[test]
fn test_narrow_spine_is_flagged() {
    let calc = SpineCalculator::default();
    let g = calc
        .calculate_cover_dimensions(TrimSize::In6x9, 0.05)
        .unwrap();

    match calc.calculate_safe_zones(&g, 0.05) {
        Err(CoverError::DegenerateGeometry {
            panel,
            width,
            height,
        }) => {
            assert_eq!(panel, Panel::Spine);
            assert!(width <= 0.0);
            assert!(height > 0.0);
        }
        other => panic!("Expected DegenerateGeometry, got {:?}", other),
    }
}

#[test]
fn test_spine_at_margin_sum_is_flagged() {
    let calc = SpineCalculator::default();
    let g = calc
        .calculate_cover_dimensions(TrimSize::In6x9, 0.125)
        .unwrap();
    let result = calc.calculate_safe_zones(&g, 0.125);
    assert!(matches!(
        result,
        Err(CoverError::DegenerateGeometry {
            panel: Panel::Spine,
            ..
        })
    ));
}

#[test]
fn test_spine_width_must_match_geometry() {
    let calc = SpineCalculator::default();
    let g = calc
        .calculate_cover_dimensions(TrimSize::In6x9, 0.2)
        .unwrap();

    // A wider spine would push the spine zone over the front fold
    for spine_width in [1.0, 0.1, f64::NAN] {
        let result = calc.calculate_safe_zones(&g, spine_width);
        assert!(
            matches!(result, Err(CoverError::InvalidArgument(_))),
            "{}: {:?}",
            spine_width,
            result
        );
    }

    let zones = calc.calculate_safe_zones(&g, 0.2).unwrap();
    assert!(g.spine_panel().strictly_contains(&zones.spine));
    assert!(zones.spine.right() < g.front_start_x);
}

#[test]
fn test_back_too_narrow_for_barcode() {
    let mut config = CoverConfig::default();
    config.barcode.width = 6.0;
    let calc = SpineCalculator::new(config).unwrap();
    let g = calc
        .calculate_cover_dimensions(TrimSize::In5x8, 0.5)
        .unwrap();

    let result = calc.calculate_safe_zones(&g, 0.5);
    assert!(matches!(
        result,
        Err(CoverError::DegenerateGeometry {
            panel: Panel::Back,
            ..
        })
    ));
}

#[test]
fn test_safe_zones_idempotent() {
    let calc = SpineCalculator::default();
    let g1 = calc
        .calculate_cover_dimensions(TrimSize::In7x10, 0.9)
        .unwrap();
    let g2 = calc
        .calculate_cover_dimensions(TrimSize::In7x10, 0.9)
        .unwrap();
    assert_eq!(g1, g2);
    assert_eq!(
        calc.calculate_safe_zones(&g1, 0.9).unwrap(),
        calc.calculate_safe_zones(&g2, 0.9).unwrap()
    );
}

// =============================================================================
// Full Layout
// =============================================================================

#[test]
fn test_layout_with_spine_text() {
    let calc = SpineCalculator::default();
    let layout = calc.calculate_layout(&spec(200, TrimSize::In6x9)).unwrap();

    assert_close(layout.geometry.spine_width, 0.4504);
    assert_close(layout.geometry.total_width, 12.7004);
    let spine = layout.spine_safe.expect("spine text expected");
    assert_close(spine.width, 0.3254);

    let g = calc
        .calculate_cover_dimensions(TrimSize::In6x9, layout.geometry.spine_width)
        .unwrap();
    let zones = calc
        .calculate_safe_zones(&g, layout.geometry.spine_width)
        .unwrap();
    assert_eq!(layout.front_safe, zones.front);
    assert_eq!(layout.back_safe, zones.back);
    assert_eq!(layout.barcode, zones.barcode);
}

#[test]
fn test_layout_suppresses_spine_text_for_thin_books() {
    let calc = SpineCalculator::default();

    let layout = calc.calculate_layout(&spec(24, TrimSize::In6x9)).unwrap();
    assert_eq!(layout.geometry.spine_width, 0.06);
    assert!(layout.spine_safe.is_none());

    // Wide enough spine but not over the page threshold
    let layout = calc.calculate_layout(&spec(79, TrimSize::In6x9)).unwrap();
    assert!(layout.spine_safe.is_none());

    let layout = calc.calculate_layout(&spec(80, TrimSize::In6x9)).unwrap();
    assert!(layout.spine_safe.is_some());
}

#[test]
fn test_layout_suppresses_degenerate_spine() {
    let mut config = CoverConfig::default();
    config.min_spine_text_pages = 1;
    let calc = SpineCalculator::new(config).unwrap();

    // 50 × 0.002252 = 0.1126, below the 0.125 spine margin sum
    let layout = calc.calculate_layout(&spec(50, TrimSize::In6x9)).unwrap();
    assert!(layout.spine_safe.is_none());
}

#[test]
fn test_layout_rejects_zero_pages() {
    let calc = SpineCalculator::default();
    let result = calc.calculate_layout(&spec(0, TrimSize::In6x9));
    assert!(matches!(result, Err(CoverError::InvalidArgument(_))));
}

#[test]
fn test_calculator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpineCalculator>();
}
