use crate::common::{on_boundary, spec};
use signkit_core::Point;
use signkit_panels::{
    generate, hole_positions, validate_contour, FoldKind, PanelTopology, Side,
};

#[test]
fn test_final_size_law() {
    let cases = [
        (PanelTopology::Simple, 1140.0),
        (PanelTopology::LeftSegment, 1070.0),
        (PanelTopology::CenterSegment, 1000.0),
        (PanelTopology::RightSegment, 1070.0),
        (PanelTopology::DoubleFaced, 1140.0),
    ];
    for (topology, width) in cases {
        let assembly = generate(&spec(topology, 1000.0, 500.0, 70.0));
        for part in assembly.parts() {
            assert_eq!(part.final_width, width, "{topology}");
            assert_eq!(part.final_height, 640.0, "{topology}");
            let (min, max) = part.contour.bounds().unwrap();
            assert_eq!(max.x - min.x, width, "{topology}");
            assert_eq!(max.y - min.y, 640.0, "{topology}");
        }
    }
}

#[test]
fn test_generation_is_idempotent() {
    for topology in PanelTopology::ALL {
        let s = spec(topology, 1234.5, 678.9, 45.0);
        assert_eq!(generate(&s), generate(&s), "{topology}");
    }
}

#[test]
fn test_hole_count_formula() {
    let positions = hole_positions(-400.0, 400.0, 750.0);
    assert_eq!(positions, vec![-400.0, 0.0, 400.0]);
}

#[test]
fn test_corner_relief_law() {
    for depth in [0.5, 1.0, 1.5, 25.0, 70.0] {
        let assembly = generate(&spec(PanelTopology::Simple, 1000.0, 500.0, depth));
        let contour = &assembly.parts()[0].contour;
        let relief = (depth - 1.0_f64).max(0.0);
        let half_w = 500.0 + depth;
        let half_h = 250.0 + depth;
        if relief == 0.0 {
            assert_eq!(contour.len(), 4, "depth {depth}");
        } else {
            assert_eq!(contour.len(), 12, "depth {depth}");
            assert!(contour
                .points()
                .contains(&Point::new(-half_w + relief, half_h - relief)));
            assert!(contour
                .points()
                .contains(&Point::new(half_w - relief, -half_h + relief)));
        }
    }
}

#[test]
fn test_boundary_scenario() {
    let s = spec(PanelTopology::Simple, 1000.0, 500.0, 70.0).with_drilling(false);
    let assembly = generate(&s);
    let part = &assembly.parts()[0];

    assert_eq!((part.final_width, part.final_height), (1140.0, 640.0));
    assert!(part.holes.is_empty());

    // Four 69 mm reliefs
    let points = part.contour.points();
    for corner in [
        Point::new(-501.0, 251.0),
        Point::new(501.0, 251.0),
        Point::new(501.0, -251.0),
        Point::new(-501.0, -251.0),
    ] {
        assert!(points.contains(&corner), "missing {corner:?}");
    }

    let top = part.folds_on(Side::Top, FoldKind::Primary).next().unwrap();
    let bottom = part.folds_on(Side::Bottom, FoldKind::Primary).next().unwrap();
    assert_eq!(top.start.y, 250.0);
    assert_eq!(bottom.start.y, -250.0);
}

#[test]
fn test_every_contour_is_simple_and_clockwise() {
    for topology in PanelTopology::ALL {
        for depth in [1.0, 2.0, 45.0, 70.0] {
            let assembly = generate(&spec(topology, 900.0, 600.0, depth));
            for part in assembly.parts() {
                let area = validate_contour(&part.contour)
                    .unwrap_or_else(|e| panic!("{topology} depth {depth}: {e}"));
                assert!(area < 0.0, "{topology} depth {depth} is not clockwise");
                let first = part.contour.points()[0];
                let top = part
                    .contour
                    .points()
                    .iter()
                    .map(|p| p.y)
                    .fold(f64::MIN, f64::max);
                assert_eq!(first.y, top);
            }
        }
    }
}

#[test]
fn test_fold_endpoints_lie_on_contour() {
    for topology in [
        PanelTopology::Simple,
        PanelTopology::LeftSegment,
        PanelTopology::CenterSegment,
        PanelTopology::RightSegment,
    ] {
        let assembly = generate(&spec(topology, 1000.0, 500.0, 70.0));
        let part = &assembly.parts()[0];
        for line in &part.fold_lines {
            assert!(
                on_boundary(&part.contour, line.start) && on_boundary(&part.contour, line.end),
                "{topology}: {line:?}"
            );
        }
    }
}

#[test]
fn test_holes_are_ordered_by_flange() {
    let assembly = generate(&spec(PanelTopology::Simple, 2000.0, 1000.0, 70.0));
    let part = &assembly.parts()[0];
    let sides: Vec<Side> = part.holes.iter().map(|h| h.side).collect();
    let mut sorted = sides.clone();
    sorted.sort_by_key(|s| Side::ALL.iter().position(|x| x == s));
    assert_eq!(sides, sorted);

    for side in Side::ALL {
        let along: Vec<f64> = part
            .holes_on(side)
            .map(|h| if side.is_horizontal() { h.center.x } else { h.center.y })
            .collect();
        assert!(along.windows(2).all(|w| w[0] < w[1]), "{side}");
        assert!(along.windows(2).all(|w| w[1] - w[0] <= 750.0 + 1e-9));
    }
}
