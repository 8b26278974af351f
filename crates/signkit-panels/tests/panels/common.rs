use signkit_core::Point;
use signkit_panels::{
    Contour, Lighting, PanelParams, PanelSpec, PanelTopology, ThicknessInput,
};

pub const TOL: f64 = 1e-9;

pub fn spec(topology: PanelTopology, width: f64, height: f64, depth: f64) -> PanelSpec {
    PanelSpec::new(PanelParams {
        width,
        height,
        thickness: Some(ThicknessInput::Uniform(depth)),
        lighting: Lighting::Illuminated,
        topology,
        drilling: true,
        cleat_pitch: None,
    })
    .unwrap()
}

/// True when `p` lies on one of the contour's edges.
pub fn on_boundary(contour: &Contour, p: Point) -> bool {
    contour.edges().any(|(a, b)| {
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        cross.abs() < TOL
            && p.x >= a.x.min(b.x) - TOL
            && p.x <= a.x.max(b.x) + TOL
            && p.y >= a.y.min(b.y) - TOL
            && p.y <= a.y.max(b.y) + TOL
    })
}
