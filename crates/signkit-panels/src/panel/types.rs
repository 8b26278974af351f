//! Type definitions for flanged panel geometry

use serde::{Deserialize, Serialize};
use signkit_core::point::GEOMETRY_EPSILON;
use signkit_core::Point;
use std::fmt;

/// Distance between the primary fold and the relief boundary (mm).
pub const RELIEF_OFFSET: f64 = 1.0;

/// Default box depth for illuminated signs (mm).
pub const ILLUMINATED_DEPTH: f64 = 70.0;

/// Default box depth for non-illuminated signs (mm).
pub const NON_ILLUMINATED_DEPTH: f64 = 45.0;

/// Upper bound for any visible dimension or flange thickness (mm).
pub const MAX_DIMENSION: f64 = 10_000.0;

/// Largest sheet the cutting table accepts (mm).
pub const SHEET_MAX_WIDTH: f64 = 3050.0;
pub const SHEET_MAX_HEIGHT: f64 = 1500.0;

/// Part topology. Every builder matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelTopology {
    /// Stand-alone panel with flanges on all four sides.
    Simple,
    /// Leftmost part of a segmented set, open on the right.
    LeftSegment,
    /// Middle part of a segmented set, open on both vertical sides.
    CenterSegment,
    /// Rightmost part of a segmented set, open on the left.
    RightSegment,
    /// Two mirrored faces carrying hanging-cleat notches.
    DoubleFaced,
}

impl PanelTopology {
    pub const ALL: [PanelTopology; 5] = [
        PanelTopology::Simple,
        PanelTopology::LeftSegment,
        PanelTopology::CenterSegment,
        PanelTopology::RightSegment,
        PanelTopology::DoubleFaced,
    ];

    pub fn is_segment(self) -> bool {
        matches!(
            self,
            PanelTopology::LeftSegment | PanelTopology::CenterSegment | PanelTopology::RightSegment
        )
    }

    /// Whether `side` is an outer, flanged side for this topology.
    pub fn has_flange(self, side: Side) -> bool {
        use PanelTopology::*;
        match (self, side) {
            (_, Side::Top | Side::Bottom) => true,
            (Simple | DoubleFaced, Side::Left | Side::Right) => true,
            (LeftSegment, Side::Left) | (RightSegment, Side::Right) => true,
            (LeftSegment, Side::Right)
            | (RightSegment, Side::Left)
            | (CenterSegment, Side::Left | Side::Right) => false,
        }
    }

    /// Whether a relief notch may be cut at `corner`.
    pub fn corner_eligible(self, corner: Corner) -> bool {
        match self {
            PanelTopology::Simple | PanelTopology::CenterSegment | PanelTopology::DoubleFaced => {
                true
            }
            PanelTopology::LeftSegment => corner.vertical_side() == Side::Left,
            PanelTopology::RightSegment => corner.vertical_side() == Side::Right,
        }
    }
}

impl fmt::Display for PanelTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelTopology::Simple => "simple panel",
            PanelTopology::LeftSegment => "left segment",
            PanelTopology::CenterSegment => "center segment",
            PanelTopology::RightSegment => "right segment",
            PanelTopology::DoubleFaced => "double-faced panel",
        };
        f.write_str(name)
    }
}

/// Panel side, in flange order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// True for the sides whose edge runs along x.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn mirrored(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            other => other,
        }
    }

    pub(crate) fn rank(self) -> u8 {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

/// Outline corner, listed clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn horizontal_side(self) -> Side {
        match self {
            Corner::TopLeft | Corner::TopRight => Side::Top,
            Corner::BottomLeft | Corner::BottomRight => Side::Bottom,
        }
    }

    pub fn vertical_side(self) -> Side {
        match self {
            Corner::TopLeft | Corner::BottomLeft => Side::Left,
            Corner::TopRight | Corner::BottomRight => Side::Right,
        }
    }
}

/// Canonical per-side flange thickness (mm).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeThickness {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl EdgeThickness {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn uniform(depth: f64) -> Self {
        Self::new(depth, depth, depth, depth)
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set(&mut self, side: Side, value: f64) {
        match side {
            Side::Top => self.top = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
            Side::Right => self.right = value,
        }
    }

    /// Unclamped relief length: `max(thickness - 1, 0)`.
    pub fn relief(&self, side: Side) -> f64 {
        (self.get(side) - RELIEF_OFFSET).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|side| self.get(*side) == 0.0)
    }
}

/// Thickness as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThicknessInput {
    /// One box depth applied to every structurally relevant side.
    Uniform(f64),
    /// Explicit value per side.
    PerEdge {
        top: f64,
        bottom: f64,
        left: f64,
        right: f64,
    },
}

impl Default for ThicknessInput {
    fn default() -> Self {
        Lighting::default().default_thickness()
    }
}

/// Whether the box houses a light source. Decides the box depth when no
/// thickness is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lighting {
    #[default]
    Illuminated,
    NonIlluminated,
}

impl Lighting {
    pub fn default_depth(self) -> f64 {
        match self {
            Lighting::Illuminated => ILLUMINATED_DEPTH,
            Lighting::NonIlluminated => NON_ILLUMINATED_DEPTH,
        }
    }

    pub fn default_thickness(self) -> ThicknessInput {
        ThicknessInput::Uniform(self.default_depth())
    }
}

impl From<EdgeThickness> for ThicknessInput {
    fn from(t: EdgeThickness) -> Self {
        ThicknessInput::PerEdge {
            top: t.top,
            bottom: t.bottom,
            left: t.left,
            right: t.right,
        }
    }
}

fn default_drilling() -> bool {
    true
}

/// Raw panel request, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelParams {
    /// Visible face width (mm)
    pub width: f64,
    /// Visible face height (mm)
    pub height: f64,
    /// Flange thickness; `None` takes the box depth of `lighting`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<ThicknessInput>,
    #[serde(default)]
    pub lighting: Lighting,
    pub topology: PanelTopology,
    /// Emit drill holes on the flanges
    #[serde(default = "default_drilling")]
    pub drilling: bool,
    /// Custom distance between the cleat notch centres (double-faced only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleat_pitch: Option<f64>,
}

impl PanelParams {
    /// The thickness to normalize: the explicit one, else the lighting default.
    pub fn thickness_input(&self) -> ThicknessInput {
        self.thickness
            .unwrap_or_else(|| self.lighting.default_thickness())
    }
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            thickness: None,
            lighting: Lighting::default(),
            topology: PanelTopology::Simple,
            drilling: true,
            cleat_pitch: None,
        }
    }
}

/// Validated, immutable panel description.
///
/// Built by [`crate::normalize`]; the fields cannot be changed afterwards
/// except through methods that cannot break validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PanelParams", try_from = "PanelParams")]
pub struct PanelSpec {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) thickness: EdgeThickness,
    pub(crate) topology: PanelTopology,
    pub(crate) drilling: bool,
    pub(crate) cleat_pitch: Option<f64>,
}

impl PanelSpec {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn thickness(&self) -> &EdgeThickness {
        &self.thickness
    }

    pub fn topology(&self) -> PanelTopology {
        self.topology
    }

    pub fn drilling(&self) -> bool {
        self.drilling
    }

    pub fn cleat_pitch(&self) -> Option<f64> {
        self.cleat_pitch
    }

    /// Returns a copy with drilling switched on or off.
    pub fn with_drilling(mut self, drilling: bool) -> Self {
        self.drilling = drilling;
        self
    }

    /// Final outline width: visible width plus the outer vertical flanges.
    pub fn final_width(&self) -> f64 {
        self.width + self.thickness.left + self.thickness.right
    }

    /// Final outline height: visible height plus the outer horizontal flanges.
    pub fn final_height(&self) -> f64 {
        self.height + self.thickness.top + self.thickness.bottom
    }

    /// Whether the unfolded part fits on the largest sheet.
    pub fn fits_sheet(&self) -> bool {
        self.final_width() <= SHEET_MAX_WIDTH && self.final_height() <= SHEET_MAX_HEIGHT
    }
}

impl From<PanelSpec> for PanelParams {
    fn from(spec: PanelSpec) -> Self {
        Self {
            width: spec.width,
            height: spec.height,
            thickness: Some(spec.thickness.into()),
            lighting: Lighting::default(),
            topology: spec.topology,
            drilling: spec.drilling,
            cleat_pitch: spec.cleat_pitch,
        }
    }
}

/// Identifies a physical part inside its assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    Single,
    Left,
    /// Center segment, numbered from 1
    Center(usize),
    Right,
    Recto,
    Verso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldKind {
    /// On the visible-face boundary
    Primary,
    /// On the relief boundary, 1 mm outside the primary
    Inset,
}

/// Axis-aligned fold/score line. Endpoints are ordered by increasing
/// coordinate along the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldLine {
    pub start: Point,
    pub end: Point,
    pub kind: FoldKind,
    pub side: Side,
}

impl FoldLine {
    pub fn new(start: Point, end: Point, kind: FoldKind, side: Side) -> Self {
        Self {
            start,
            end,
            kind,
            side,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn is_horizontal(&self) -> bool {
        (self.start.y - self.end.y).abs() < GEOMETRY_EPSILON
    }

    fn mirrored(&self) -> Self {
        let (a, b) = (self.start.mirrored_x(), self.end.mirrored_x());
        let (start, end) = if self.is_horizontal() { (b, a) } else { (a, b) };
        Self::new(start, end, self.kind, self.side.mirrored())
    }

    fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.start.translated(dx, dy),
            self.end.translated(dx, dy),
            self.kind,
            self.side,
        )
    }
}

/// Drill hole on a flange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillHole {
    pub center: Point,
    pub radius: f64,
    pub side: Side,
}

impl DrillHole {
    /// Coordinate along the flange (x on top/bottom, y on left/right).
    pub fn along(&self) -> f64 {
        if self.side.is_horizontal() {
            self.center.x
        } else {
            self.center.y
        }
    }
}

/// Rectangular hanging-cleat notch cut into a vertical edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleatNotch {
    pub side: Side,
    pub top: f64,
    pub bottom: f64,
    /// Cut depth from the edge (mm)
    pub depth: f64,
}

impl CleatNotch {
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Closed cutting outline, clockwise, starting at its top-left vertex.
/// The first point is not repeated at the end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the closed edge list, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area; positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Axis-aligned bounds as (min, max), or `None` when empty.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.points.first()?;
        let init = (*first, *first);
        Some(self.points.iter().fold(init, |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Mirror about the vertical axis, keeping clockwise winding and the
    /// top-left start.
    pub fn mirrored(&self) -> Self {
        let mut points: Vec<Point> = self.points.iter().rev().map(Point::mirrored_x).collect();
        rotate_to_top_left(&mut points);
        Self { points }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translated(dx, dy)).collect(),
        }
    }
}

/// Rotates a closed point list so it starts at the leftmost of its topmost
/// vertices.
pub(crate) fn rotate_to_top_left(points: &mut [Point]) {
    let start = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)))
        .map(|(i, _)| i)
        .unwrap_or(0);
    points.rotate_left(start);
}

/// Complete manufacturing geometry for one physical part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelArtifact {
    pub role: PartRole,
    pub final_width: f64,
    pub final_height: f64,
    pub contour: Contour,
    pub fold_lines: Vec<FoldLine>,
    pub holes: Vec<DrillHole>,
    pub notches: Vec<CleatNotch>,
}

impl PanelArtifact {
    /// Mirror image about the vertical axis under a new role.
    pub fn mirrored(&self, role: PartRole) -> Self {
        let mut holes: Vec<DrillHole> = self
            .holes
            .iter()
            .map(|h| DrillHole {
                center: h.center.mirrored_x(),
                radius: h.radius,
                side: h.side.mirrored(),
            })
            .collect();
        sort_holes(&mut holes);

        Self {
            role,
            final_width: self.final_width,
            final_height: self.final_height,
            contour: self.contour.mirrored(),
            fold_lines: self.fold_lines.iter().map(FoldLine::mirrored).collect(),
            holes,
            notches: self
                .notches
                .iter()
                .map(|n| CleatNotch {
                    side: n.side.mirrored(),
                    ..*n
                })
                .collect(),
        }
    }

    /// Copy moved by `(dx, dy)`. Notch offsets are shifted vertically only.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            role: self.role,
            final_width: self.final_width,
            final_height: self.final_height,
            contour: self.contour.translated(dx, dy),
            fold_lines: self
                .fold_lines
                .iter()
                .map(|f| f.translated(dx, dy))
                .collect(),
            holes: self
                .holes
                .iter()
                .map(|h| DrillHole {
                    center: h.center.translated(dx, dy),
                    ..*h
                })
                .collect(),
            notches: self
                .notches
                .iter()
                .map(|n| CleatNotch {
                    top: n.top + dy,
                    bottom: n.bottom + dy,
                    ..*n
                })
                .collect(),
        }
    }

    pub fn holes_on(&self, side: Side) -> impl Iterator<Item = &DrillHole> {
        self.holes.iter().filter(move |h| h.side == side)
    }

    pub fn folds_on(&self, side: Side, kind: FoldKind) -> impl Iterator<Item = &FoldLine> {
        self.fold_lines
            .iter()
            .filter(move |f| f.side == side && f.kind == kind)
    }
}

/// Flange order top, bottom, left, right; ascending along each flange.
pub(crate) fn sort_holes(holes: &mut [DrillHole]) {
    holes.sort_by(|a, b| {
        a.side
            .rank()
            .cmp(&b.side.rank())
            .then(a.along().total_cmp(&b.along()))
    });
}
