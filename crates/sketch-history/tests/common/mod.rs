#![forbid(unsafe_code)]
#![allow(dead_code)]

//! Shared fixtures for sketch-history integration tests.

use std::ops::RangeInclusive;

use sketch_history::{Availability, UndoHost, Viewer};
use sketch_model::{
    Constraint, ConstraintId, ConstraintKind, Edge, EntityId, Group, GroupId, GroupKind, Param,
    ParamId, Request, RequestId, RequestKind, Sketch, SolveResult, Style, StyleId, Triangle,
};

/// Host that counts notifications and plays the regeneration pipeline.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub availability: Vec<Availability>,
    pub viewer_clears: Vec<Viewer>,
    pub reloads: usize,
    pub regenerations: usize,
    pub text_window_requests: usize,
    /// For each regeneration, whether every derived field was empty on entry.
    pub regenerated_from_scratch: Vec<bool>,
}

impl RecordingHost {
    pub fn last_availability(&self) -> Option<Availability> {
        self.availability.last().copied()
    }
}

impl UndoHost for RecordingHost {
    fn set_undo_redo_availability(&mut self, availability: Availability) {
        self.availability.push(availability);
    }

    fn clear_viewer_superstructure(&mut self, viewer: Viewer) {
        self.viewer_clears.push(viewer);
    }

    fn reload_all_imported(&mut self, _sketch: &mut Sketch) {
        self.reloads += 1;
    }

    fn regenerate_all(&mut self, sketch: &mut Sketch, _groups: RangeInclusive<usize>) {
        self.regenerations += 1;
        let scratch = sketch.groups.iter().all(|g| g.derived.is_empty())
            && sketch.constraints.iter().all(|c| c.dogd.is_empty());
        self.regenerated_from_scratch.push(scratch);
        regenerate(sketch);
    }

    fn show_text_window(&mut self) {
        self.text_window_requests += 1;
    }
}

/// Fill every derived field with something non-empty.
pub fn regenerate(sketch: &mut Sketch) {
    for g in sketch.groups.iter_mut() {
        g.derived = Default::default();
        g.derived.clean = true;
        g.derived.solved = SolveResult::Okay { dof: 0 };
        g.derived.this_mesh.triangles.push(Triangle::default());
        g.derived.display_edges.push(Edge::default());
    }
    for c in sketch.constraints.iter_mut() {
        c.dogd.lines = vec![Edge::default()];
    }
}

pub const REFERENCES: GroupId = GroupId::new(1);
pub const SKETCH_GROUP: GroupId = GroupId::new(2);
pub const WIDTH: ParamId = ParamId::new(1);

/// Two groups, a line, a distance constraint, a param and a style.
pub fn base_sketch() -> Sketch {
    let mut sk = Sketch::new();
    sk.groups
        .add(Group::new(REFERENCES, GroupKind::Drawing3d, "#references"));

    let mut g = Group::new(SKETCH_GROUP, GroupKind::DrawingWorkplane, "sketch-in-plane");
    g.order = 1;
    g.op_a = Some(REFERENCES);
    g.remap.entity_for(EntityId::new(0x10), 0);
    sk.groups.add(g);

    sk.requests
        .add(Request::new(RequestId::new(1), RequestKind::LineSegment, SKETCH_GROUP));

    let mut c = Constraint::new(ConstraintId::new(1), ConstraintKind::PtPtDistance, SKETCH_GROUP);
    c.val_a = 10.0;
    sk.constraints.add(c);

    sk.params.add(Param::new(WIDTH, 10.0));
    sk.styles.add(Style::new(StyleId::new(1), "construction"));
    sk.active_group = Some(SKETCH_GROUP);
    sk
}

/// Stand-in for an edit that adds an entity: a new request, and a new remap
/// assignment in the sketch group.
pub fn add_entity(sketch: &mut Sketch, n: u32) {
    let req = RequestId::new(100 + n);
    sketch
        .requests
        .add(Request::new(req, RequestKind::Circle, SKETCH_GROUP));
    if let Some(g) = sketch.groups.get_mut(SKETCH_GROUP) {
        g.remap.entity_for(EntityId::new(0x1000 + n), 0);
    }
}

pub fn width(sketch: &Sketch) -> f64 {
    sketch.params.get(WIDTH).map_or(f64::NAN, |p| p.val)
}

pub fn set_width(sketch: &mut Sketch, v: f64) {
    if let Some(p) = sketch.params.get_mut(WIDTH) {
        p.val = v;
    }
}
