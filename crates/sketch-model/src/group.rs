#![forbid(unsafe_code)]

//! Groups: the steps of a sketch's construction history.
//!
//! A [`Group`] has two halves:
//!
//! - **Definition**: kind, name, ordering, source group, display options and
//!   the [`Remap`] table. This is what the user edited and what undo history
//!   preserves.
//! - **Derived** ([`GroupDerived`]): solver output, loops, meshes, shells and
//!   display caches. All of it is recomputed by the regeneration pipeline
//!   from the definition, so it is never copied into history.
//!
//! `Group` is intentionally not `Clone`. Use [`Group::snapshot`] to obtain a
//! definition-only copy with its own remap table.

use std::path::PathBuf;

use crate::geometry::{BezierLoop, Edge, Mesh, Polygon, RgbaColor, Shell, Vector};
use crate::handle::{EntityId, GroupId};
use crate::id_list::Keyed;
use crate::remap::Remap;

/// What a group does with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupKind {
    /// 3d sketch with no workplane.
    Drawing3d,
    /// 2d sketch in a workplane.
    #[default]
    DrawingWorkplane,
    Extrude,
    Lathe,
    Revolve,
    Helix,
    Rotate,
    Translate,
    /// Another sketch file, linked in.
    Linked,
}

/// Outcome of the last solve.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SolveResult {
    #[default]
    NotSolved,
    Okay {
        dof: u32,
    },
    DidntConverge,
    RedundantOkay,
    RedundantDidntConverge,
    TooManyUnknowns,
}

/// Why the group's outline could not be assembled into closed loops.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    NotClosed { not_closed_at: Edge },
    NotCoplanar { not_coplanar_at: Vector },
    SelfIntersecting { intersection_at: Vector },
    ZeroLengthEdge { error_at: Edge },
}

/// Everything about a group that regeneration recomputes.
#[derive(Debug, Default, PartialEq)]
pub struct GroupDerived {
    /// Regeneration has run since the last definition change.
    pub clean: bool,
    pub solved: SolveResult,
    pub poly_loops: Vec<Polygon>,
    pub bezier_loops: Vec<BezierLoop>,
    pub bezier_opens: Vec<BezierLoop>,
    pub poly_error: Option<PolyError>,
    pub this_mesh: Mesh,
    pub running_mesh: Mesh,
    pub this_shell: Shell,
    pub running_shell: Shell,
    pub display_mesh: Mesh,
    pub display_edges: Vec<Edge>,
    pub imp_mesh: Mesh,
    pub imp_shell: Shell,
    pub imp_entity: Vec<EntityId>,
}

impl GroupDerived {
    /// Whether every cache is in its freshly-reset state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.clean
            && self.solved == SolveResult::NotSolved
            && self.poly_loops.is_empty()
            && self.bezier_loops.is_empty()
            && self.bezier_opens.is_empty()
            && self.poly_error.is_none()
            && self.this_mesh.is_empty()
            && self.running_mesh.is_empty()
            && self.this_shell.is_empty()
            && self.running_shell.is_empty()
            && self.display_mesh.is_empty()
            && self.display_edges.is_empty()
            && self.imp_mesh.is_empty()
            && self.imp_shell.is_empty()
            && self.imp_entity.is_empty()
    }
}

/// One step in the construction history.
#[derive(Debug)]
pub struct Group {
    pub id: GroupId,
    pub kind: GroupKind,
    pub name: String,
    /// Position in the construction history; lower regenerates first.
    pub order: i32,
    /// Group this one takes its input from.
    pub op_a: Option<GroupId>,
    pub visible: bool,
    pub suppress: bool,
    pub relax_constraints: bool,
    pub color: RgbaColor,
    pub scale: f64,
    /// Source file for [`GroupKind::Linked`] groups.
    pub link_file: Option<PathBuf>,
    pub remap: Remap,
    pub derived: GroupDerived,
}

impl Group {
    /// Create a visible group with an empty remap table.
    #[must_use]
    pub fn new(id: GroupId, kind: GroupKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            order: 0,
            op_a: None,
            visible: true,
            suppress: false,
            relax_constraints: false,
            color: RgbaColor::default(),
            scale: 1.0,
            link_file: None,
            remap: Remap::new(),
            derived: GroupDerived::default(),
        }
    }

    /// Definition-only copy.
    ///
    /// Persistent fields are copied by value, the remap table is deep-copied
    /// and every derived field is reset, including `clean`.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            name: self.name.clone(),
            order: self.order,
            op_a: self.op_a,
            visible: self.visible,
            suppress: self.suppress,
            relax_constraints: self.relax_constraints,
            color: self.color,
            scale: self.scale,
            link_file: self.link_file.clone(),
            remap: self.remap.deep_copy(),
            derived: GroupDerived::default(),
        }
    }

    /// Release the remap table and all derived data.
    pub fn clear(&mut self) {
        self.remap.clear();
        self.derived = GroupDerived::default();
    }

    /// Whether this group pulls content from another file.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.kind == GroupKind::Linked && self.link_file.is_some()
    }

    /// Approximate heap footprint of the definition, in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.name.len()
            + self
                .link_file
                .as_ref()
                .map_or(0, |p| p.as_os_str().len())
            + self.remap.size_bytes()
    }
}

/// Groups compare by definition; derived caches are ignored.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.kind == other.kind
            && self.name == other.name
            && self.order == other.order
            && self.op_a == other.op_a
            && self.visible == other.visible
            && self.suppress == other.suppress
            && self.relax_constraints == other.relax_constraints
            && self.color == other.color
            && self.scale == other.scale
            && self.link_file == other.link_file
            && self.remap == other.remap
    }
}

impl Keyed for Group {
    type Id = GroupId;
    fn id(&self) -> GroupId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Triangle;

    fn regenerated(id: u32) -> Group {
        let mut g = Group::new(GroupId::new(id), GroupKind::Extrude, "extrude");
        g.remap.entity_for(EntityId::new(1), 0);
        g.derived.clean = true;
        g.derived.solved = SolveResult::Okay { dof: 0 };
        g.derived.this_mesh.triangles.push(Triangle::default());
        g.derived.display_edges.push(Edge::default());
        g.derived.imp_entity.push(EntityId::new(9));
        g
    }

    #[test]
    fn new_group_has_empty_caches() {
        let g = Group::new(GroupId::new(1), GroupKind::Drawing3d, "sketch");
        assert!(g.derived.is_empty());
        assert!(g.remap.is_empty());
        assert!(g.visible);
    }

    #[test]
    fn snapshot_strips_derived_fields() {
        let g = regenerated(2);
        assert!(!g.derived.is_empty());

        let s = g.snapshot();
        assert!(s.derived.is_empty());
        assert!(!s.derived.clean);
    }

    #[test]
    fn snapshot_deep_copies_remap() {
        let mut g = regenerated(2);
        let s = g.snapshot();
        g.remap.entity_for(EntityId::new(50), 0);

        assert_eq!(s.remap.len(), 1);
        assert_eq!(g.remap.len(), 2);
    }

    #[test]
    fn equality_ignores_derived() {
        let g = regenerated(3);
        assert_eq!(g.snapshot(), g);
    }

    #[test]
    fn clear_releases_owned_data() {
        let mut g = regenerated(4);
        g.clear();
        assert!(g.remap.is_empty());
        assert!(g.derived.is_empty());
        assert_eq!(g.name, "extrude");
    }

    #[test]
    fn linked_needs_file() {
        let mut g = Group::new(GroupId::new(5), GroupKind::Linked, "link");
        assert!(!g.is_linked());
        g.link_file = Some(PathBuf::from("part.slvs"));
        assert!(g.is_linked());
    }
}
