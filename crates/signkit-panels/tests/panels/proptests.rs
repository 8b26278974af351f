//! Property-based checks over random valid panels.

use proptest::prelude::*;
use signkit_panels::{
    generate, validate_contour, Lighting, PanelParams, PanelSpec, PanelTopology, Side,
    ThicknessInput, ValidationError,
};

fn arb_topology() -> impl Strategy<Value = PanelTopology> {
    prop_oneof![
        Just(PanelTopology::Simple),
        Just(PanelTopology::LeftSegment),
        Just(PanelTopology::CenterSegment),
        Just(PanelTopology::RightSegment),
        Just(PanelTopology::DoubleFaced),
    ]
}

fn arb_params() -> impl Strategy<Value = PanelParams> {
    (
        50.0f64..3000.0,
        120.0f64..1500.0,
        0.5f64..150.0,
        arb_topology(),
        any::<bool>(),
    )
        .prop_map(|(width, height, depth, topology, drilling)| PanelParams {
            width,
            height,
            thickness: Some(ThicknessInput::Uniform(depth)),
            lighting: Lighting::Illuminated,
            topology,
            drilling,
            cleat_pitch: None,
        })
}

/// Zero, one (no relief) or an arbitrary depth.
fn arb_side_depth() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), 0.5f64..150.0]
}

fn arb_per_edge_params() -> impl Strategy<Value = PanelParams> {
    (
        50.0f64..3000.0,
        120.0f64..1500.0,
        [arb_side_depth(), arb_side_depth(), arb_side_depth(), arb_side_depth()],
        arb_topology(),
        any::<bool>(),
        proptest::option::of(0.0f64..0.99),
    )
        .prop_map(
            |(width, height, [top, bottom, left, right], topology, drilling, fraction)| {
                let cleat_pitch = match topology {
                    PanelTopology::DoubleFaced => {
                        fraction.map(|f| 84.0 + f * (height - 20.0 - 84.0))
                    }
                    _ => None,
                };
                PanelParams {
                    width,
                    height,
                    thickness: Some(ThicknessInput::PerEdge {
                        top,
                        bottom,
                        left,
                        right,
                    }),
                    lighting: Lighting::Illuminated,
                    topology,
                    drilling,
                    cleat_pitch,
                }
            },
        )
}

fn side_depth(params: &PanelParams, side: Side) -> f64 {
    let (top, bottom, left, right) = match params.thickness_input() {
        ThicknessInput::PerEdge {
            top,
            bottom,
            left,
            right,
        } => (top, bottom, left, right),
        ThicknessInput::Uniform(t) => (t, t, t, t),
    };
    if !params.topology.has_flange(side) {
        return 0.0;
    }
    match side {
        Side::Top => top,
        Side::Bottom => bottom,
        Side::Left => left,
        Side::Right => right,
    }
}

proptest! {
    #[test]
    fn contours_are_simple_and_clockwise(params in arb_params()) {
        let spec = PanelSpec::new(params).unwrap();
        for part in generate(&spec).parts() {
            let area = validate_contour(&part.contour);
            prop_assert!(area.is_ok(), "{:?}: {:?}", part.role, area);
            prop_assert!(area.unwrap() < 0.0);
        }
    }

    #[test]
    fn generation_is_deterministic(params in arb_params()) {
        let spec = PanelSpec::new(params).unwrap();
        prop_assert_eq!(generate(&spec), generate(&spec));
    }

    #[test]
    fn geometry_stays_inside_outline(params in arb_params()) {
        let spec = PanelSpec::new(params).unwrap();
        let half_w = spec.final_width() / 2.0 + 1e-9;
        let half_h = spec.final_height() / 2.0 + 1e-9;
        for part in generate(&spec).parts() {
            for hole in &part.holes {
                prop_assert!(hole.center.x.abs() <= half_w && hole.center.y.abs() <= half_h);
            }
            for line in &part.fold_lines {
                for p in [line.start, line.end] {
                    prop_assert!(p.x.abs() <= half_w && p.y.abs() <= half_h);
                }
            }
        }
    }

    #[test]
    fn custom_pitch_notches_are_centred(
        width in 200.0f64..2000.0,
        height in 120.0f64..1500.0,
        depth in 2.0f64..150.0,
        fraction in 0.0f64..0.99,
    ) {
        let pitch = 84.0 + fraction * (height - 20.0 - 84.0);
        let spec = PanelSpec::double_faced_from_total_depth(width, height, depth, Some(pitch)).unwrap();
        let assembly = generate(&spec);
        let recto = &assembly.parts()[0];
        prop_assert_eq!(recto.notches.len(), 2);
        prop_assert!(recto.notches[0].bottom - recto.notches[1].top >= 50.0 - 1e-9);
        prop_assert!(validate_contour(&recto.contour).is_ok());
    }

    #[test]
    fn per_edge_panels_keep_final_size(params in arb_per_edge_params()) {
        let spec = match PanelSpec::new(params.clone()) {
            Ok(spec) => spec,
            Err(
                ValidationError::NoFlange
                | ValidationError::MissingFlange { .. }
                | ValidationError::PanelTooShort { .. },
            ) => return Ok(()),
            Err(e) => return Err(TestCaseError::fail(format!("{params:?}: {e}"))),
        };

        let t = spec.thickness();
        prop_assert_eq!(t.top, side_depth(&params, Side::Top));
        prop_assert_eq!(t.bottom, side_depth(&params, Side::Bottom));
        prop_assert_eq!(t.left, side_depth(&params, Side::Left));
        prop_assert_eq!(t.right, side_depth(&params, Side::Right));

        let final_width = params.width + t.left + t.right;
        let final_height = params.height + t.top + t.bottom;
        prop_assert!((spec.final_width() - final_width).abs() < 1e-9);
        prop_assert!((spec.final_height() - final_height).abs() < 1e-9);

        for part in generate(&spec).parts() {
            let area = validate_contour(&part.contour);
            prop_assert!(area.is_ok(), "{:?} {:?}: {:?}", params, part.role, area);
            prop_assert!(area.unwrap() < 0.0);
            prop_assert!((part.final_width - final_width).abs() < 1e-9);
            prop_assert!((part.final_height - final_height).abs() < 1e-9);
        }
    }
}
