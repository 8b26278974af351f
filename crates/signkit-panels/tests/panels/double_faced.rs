use signkit_core::Point;
use signkit_panels::{
    generate, validate_contour, FoldKind, MemorySink, PanelSpec, PartRole, Side,
    ValidationError,
};

#[test]
fn test_pitch_validation() {
    let err = PanelSpec::double_faced_from_total_depth(1000.0, 800.0, 70.0, Some(50.0));
    assert_eq!(
        err,
        Err(ValidationError::PitchOutOfRange {
            value: 50.0,
            min: 84.0,
            max: 780.0
        })
    );

    let spec = PanelSpec::double_faced_from_total_depth(1000.0, 800.0, 70.0, Some(90.0)).unwrap();
    let assembly = generate(&spec);
    let recto = &assembly.parts()[0];
    assert_eq!(recto.notches.len(), 2);
    assert_eq!(recto.notches[0].center_y(), 45.0);
    assert_eq!(recto.notches[1].center_y(), -45.0);
    // Measured from the bottom of the visible face (at -400)
    assert_eq!(recto.notches[0].center_y() + 400.0, 400.0 + 45.0);
    assert!(recto.notches.iter().all(|n| n.height() == 34.0));
}

#[test]
fn test_verso_mirrors_recto() {
    let spec = PanelSpec::double_faced_from_total_depth(1200.0, 900.0, 80.0, None).unwrap();
    let assembly = generate(&spec);
    let (recto, verso) = (&assembly.parts()[0], &assembly.parts()[1]);

    assert_eq!(recto.role, PartRole::Recto);
    assert_eq!(verso.role, PartRole::Verso);
    assert_eq!(verso.contour, recto.contour.mirrored());
    assert_eq!(verso.contour.len(), recto.contour.len());
    assert!(validate_contour(&verso.contour).unwrap() < 0.0);

    let mut recto_points: Vec<(i64, i64)> = recto
        .contour
        .points()
        .iter()
        .map(|p| ((-p.x * 1000.0).round() as i64, (p.y * 1000.0).round() as i64))
        .collect();
    let mut verso_points: Vec<(i64, i64)> = verso
        .contour
        .points()
        .iter()
        .map(|p| ((p.x * 1000.0).round() as i64, (p.y * 1000.0).round() as i64))
        .collect();
    recto_points.sort_unstable();
    verso_points.sort_unstable();
    assert_eq!(recto_points, verso_points);

    assert!(recto.notches.iter().all(|n| n.side == Side::Right));
    assert!(verso.notches.iter().all(|n| n.side == Side::Left));
    for (a, b) in recto.notches.iter().zip(&verso.notches) {
        assert_eq!((a.top, a.bottom), (b.top, b.bottom));
    }

    assert_eq!(recto.holes.len(), verso.holes.len());
    assert_eq!(
        recto.holes_on(Side::Right).count(),
        verso.holes_on(Side::Left).count()
    );
}

#[test]
fn test_notches_cut_into_recto_edge() {
    let spec = PanelSpec::double_faced_from_total_depth(1000.0, 800.0, 70.0, None).unwrap();
    let assembly = generate(&spec);
    let recto = &assembly.parts()[0];
    let points = recto.contour.points();
    for notch in &recto.notches {
        assert!(points.contains(&Point::new(535.0, notch.top)));
        assert!(points.contains(&Point::new(519.0, notch.top)));
        assert!(points.contains(&Point::new(519.0, notch.bottom)));
        assert!(points.contains(&Point::new(535.0, notch.bottom)));
    }
}

#[test]
fn test_horizontal_primaries_clear_the_notches() {
    let spec = PanelSpec::double_faced_from_total_depth(1000.0, 800.0, 70.0, None).unwrap();
    let assembly = generate(&spec);
    let recto = &assembly.parts()[0];
    let verso = &assembly.parts()[1];

    for side in [Side::Top, Side::Bottom] {
        let line = recto.folds_on(side, FoldKind::Primary).next().unwrap();
        assert_eq!(line.end.x, 535.0 - 16.0);
        let line = verso.folds_on(side, FoldKind::Primary).next().unwrap();
        assert_eq!(line.start.x, -535.0 + 16.0);
        assert!(line.start.x < line.end.x);
    }
}

#[test]
fn test_double_faced_uses_narrow_margin() {
    let spec = PanelSpec::double_faced_from_total_depth(1000.0, 800.0, 70.0, None).unwrap();
    let assembly = generate(&spec);
    let recto = &assembly.parts()[0];
    assert!(recto.holes_on(Side::Top).all(|h| h.center.y == 435.0 - 10.0));
    assert!(recto.holes_on(Side::Left).all(|h| h.center.x == -535.0 + 10.0));
}

#[test]
fn test_emit_names_both_faces() {
    let spec = PanelSpec::double_faced_from_total_depth(1000.0, 800.0, 70.0, None).unwrap();
    let mut sink = MemorySink::new();
    generate(&spec).emit(&mut sink).unwrap();
    assert_eq!(
        sink.names(),
        vec!["Caisson_Double_Recto", "Caisson_Double_Verso"]
    );
}
