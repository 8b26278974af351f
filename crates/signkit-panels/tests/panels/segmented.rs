use crate::common::spec;
use signkit_panels::{generate_set, Assembly, PanelTopology, PartRole, Side};

#[test]
fn test_left_and_right_segments() {
    let specs = [
        spec(PanelTopology::LeftSegment, 1000.0, 500.0, 70.0),
        spec(PanelTopology::RightSegment, 1000.0, 500.0, 70.0),
    ];
    let parts = generate_set(&specs).unwrap();
    assert_eq!(parts.len(), 2);
    let (left, right) = (&parts[0], &parts[1]);
    assert_eq!(left.role, PartRole::Left);
    assert_eq!(right.role, PartRole::Right);

    // One plain vertical edge each: the open side runs corner to corner
    let left_pts = left.contour.points();
    let right_pts = right.contour.points();
    assert!(left_pts.iter().filter(|p| p.x == 535.0).count() == 2);
    assert!(right_pts.iter().filter(|p| p.x == -535.0).count() == 2);
    // And one relieved edge
    assert!(left_pts.iter().filter(|p| p.x == -535.0).count() == 2);
    assert!(left_pts.iter().any(|p| p.x == -466.0));
    assert!(right_pts.iter().any(|p| p.x == 466.0));

    assert!(left.holes_on(Side::Right).next().is_none());
    assert!(right.holes_on(Side::Left).next().is_none());

    let spacing = |xs: Vec<f64>| -> Vec<f64> { xs.windows(2).map(|w| w[1] - w[0]).collect() };
    for side in [Side::Top, Side::Bottom] {
        let l: Vec<f64> = left.holes_on(side).map(|h| h.center.x).collect();
        let r: Vec<f64> = right.holes_on(side).map(|h| h.center.x).collect();
        assert_eq!(l.len(), r.len());
        assert_eq!(spacing(l), spacing(r));
    }
}

#[test]
fn test_segmented_widths_add_up() {
    let specs = [
        spec(PanelTopology::LeftSegment, 1000.0, 500.0, 70.0),
        spec(PanelTopology::CenterSegment, 800.0, 500.0, 70.0),
        spec(PanelTopology::RightSegment, 1000.0, 500.0, 70.0),
    ];
    let parts = generate_set(&specs).unwrap();
    let total: f64 = parts.iter().map(|p| p.final_width).sum();
    assert_eq!(total, 2800.0 + 140.0);
    assert_eq!(parts[1].role, PartRole::Center(1));
    assert!(parts[1].holes_on(Side::Left).next().is_none());
    assert!(parts[1].holes_on(Side::Right).next().is_none());
}

#[test]
fn test_layout_keeps_gap() {
    let specs = [
        spec(PanelTopology::LeftSegment, 1000.0, 500.0, 70.0),
        spec(PanelTopology::CenterSegment, 800.0, 500.0, 70.0),
        spec(PanelTopology::RightSegment, 1000.0, 500.0, 70.0),
    ];
    let assembly = Assembly::from(generate_set(&specs).unwrap());
    let placed = assembly.layout(10.0);
    for pair in placed.windows(2) {
        let (_, max) = pair[0].contour.bounds().unwrap();
        let (min, _) = pair[1].contour.bounds().unwrap();
        assert!((min.x - max.x - 10.0).abs() < 1e-9);
    }
}
