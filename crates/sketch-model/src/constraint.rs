#![forbid(unsafe_code)]

//! Geometric and dimensional constraints.

use crate::geometry::{Edge, Vector};
use crate::handle::{ConstraintId, EntityId, GroupId};
use crate::id_list::Keyed;

/// Constraint type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstraintKind {
    #[default]
    PointsCoincident,
    PtPtDistance,
    PtLineDistance,
    PtOnLine,
    EqualLength,
    Horizontal,
    Vertical,
    Parallel,
    Perpendicular,
    Angle,
    Diameter,
    WhereDragged,
    Comment,
}

/// Scratch geometry produced when drawing a constraint.
///
/// Never persisted; rebuilt the next time the constraint is drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayGeometry {
    pub lines: Vec<Edge>,
    pub label_at: Option<Vector>,
}

impl DisplayGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.label_at.is_none()
    }
}

/// A constraint between entities of one group.
#[derive(Debug)]
pub struct Constraint {
    pub id: ConstraintId,
    pub kind: ConstraintKind,
    pub group: GroupId,
    pub workplane: Option<EntityId>,
    pub val_a: f64,
    pub pt_a: Option<EntityId>,
    pub pt_b: Option<EntityId>,
    pub entity_a: Option<EntityId>,
    pub entity_b: Option<EntityId>,
    pub other: bool,
    /// Reference dimensions are displayed but not solved for.
    pub reference: bool,
    pub comment: String,
    /// Label offset from its default position.
    pub disp_offset: Vector,
    pub dogd: DisplayGeometry,
}

impl Constraint {
    /// Create a constraint with no operands and an empty display cache.
    #[must_use]
    pub fn new(id: ConstraintId, kind: ConstraintKind, group: GroupId) -> Self {
        Self {
            id,
            kind,
            group,
            workplane: None,
            val_a: 0.0,
            pt_a: None,
            pt_b: None,
            entity_a: None,
            entity_b: None,
            other: false,
            reference: false,
            comment: String::new(),
            disp_offset: Vector::default(),
            dogd: DisplayGeometry::default(),
        }
    }

    /// Copy with the display cache reset.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            group: self.group,
            workplane: self.workplane,
            val_a: self.val_a,
            pt_a: self.pt_a,
            pt_b: self.pt_b,
            entity_a: self.entity_a,
            entity_b: self.entity_b,
            other: self.other,
            reference: self.reference,
            comment: self.comment.clone(),
            disp_offset: self.disp_offset,
            dogd: DisplayGeometry::default(),
        }
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.comment.len()
    }
}

/// Constraints compare by definition; `dogd` is ignored.
impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.kind == other.kind
            && self.group == other.group
            && self.workplane == other.workplane
            && self.val_a == other.val_a
            && self.pt_a == other.pt_a
            && self.pt_b == other.pt_b
            && self.entity_a == other.entity_a
            && self.entity_b == other.entity_b
            && self.other == other.other
            && self.reference == other.reference
            && self.comment == other.comment
            && self.disp_offset == other.disp_offset
    }
}

impl Keyed for Constraint {
    type Id = ConstraintId;
    fn id(&self) -> ConstraintId {
        self.id
    }
}
