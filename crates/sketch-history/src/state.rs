#![forbid(unsafe_code)]

//! Snapshots of a sketch's persistent state.
//!
//! An [`UndoState`] holds the five sketch collections and the active group,
//! with every regenerable field stripped:
//!
//! | Collection    | Capture                                    |
//! |---------------|--------------------------------------------|
//! | groups        | definition copied, `remap` deep-copied, derived reset |
//! | constraints   | copied, `dogd` reset                        |
//! | requests      | copied by value                             |
//! | params        | copied by value                             |
//! | styles        | copied by value                             |
//!
//! Capture copies; restore moves. A snapshot installed into a sketch gives up
//! its collections and is consumed.

use std::fmt;

use sketch_model::{Constraint, Group, GroupId, IdList, Param, Request, Sketch, Style};

/// One captured sketch state.
#[derive(Default, PartialEq)]
pub struct UndoState {
    groups: IdList<Group>,
    requests: IdList<Request>,
    constraints: IdList<Constraint>,
    params: IdList<Param>,
    styles: IdList<Style>,
    active_group: Option<GroupId>,
}

impl fmt::Debug for UndoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoState")
            .field("groups", &self.groups.len())
            .field("requests", &self.requests.len())
            .field("constraints", &self.constraints.len())
            .field("params", &self.params.len())
            .field("styles", &self.styles.len())
            .field("active_group", &self.active_group)
            .finish()
    }
}

impl UndoState {
    /// Capture the persistent state of `sketch`.
    ///
    /// The sketch is only read. The result shares no heap data with it.
    #[must_use]
    pub fn capture(sketch: &Sketch) -> Self {
        Self {
            groups: sketch.groups.iter().map(Group::snapshot).collect(),
            requests: sketch.requests.clone(),
            constraints: sketch.constraints.iter().map(Constraint::snapshot).collect(),
            params: sketch.params.clone(),
            styles: sketch.styles.clone(),
            active_group: sketch.active_group,
        }
    }

    /// Replace the contents of `sketch` with this snapshot.
    ///
    /// The sketch's current collections are torn down first. Collections are
    /// moved, not copied.
    pub fn install_into(mut self, sketch: &mut Sketch) {
        sketch.clear();
        sketch.groups = self.groups.take();
        sketch.requests = self.requests.take();
        sketch.constraints = self.constraints.take();
        sketch.params = self.params.take();
        sketch.styles = self.styles.take();
        sketch.active_group = self.active_group;
    }

    /// Release every owned substructure, leaving an empty state.
    pub fn clear(&mut self) {
        for g in self.groups.iter_mut() {
            g.remap.clear();
        }
        self.groups.clear();
        self.requests.clear();
        self.constraints.clear();
        self.params.clear();
        self.styles.clear();
        self.active_group = None;
    }

    /// Whether this state holds nothing (a vacated slot).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
            && self.requests.is_empty()
            && self.constraints.is_empty()
            && self.params.is_empty()
            && self.styles.is_empty()
            && self.active_group.is_none()
    }

    #[must_use]
    pub fn groups(&self) -> &IdList<Group> {
        &self.groups
    }

    #[must_use]
    pub fn requests(&self) -> &IdList<Request> {
        &self.requests
    }

    #[must_use]
    pub fn constraints(&self) -> &IdList<Constraint> {
        &self.constraints
    }

    #[must_use]
    pub fn params(&self) -> &IdList<Param> {
        &self.params
    }

    #[must_use]
    pub fn styles(&self) -> &IdList<Style> {
        &self.styles
    }

    #[must_use]
    pub fn active_group(&self) -> Option<GroupId> {
        self.active_group
    }

    /// Approximate footprint in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.groups.iter().map(Group::size_bytes).sum::<usize>()
            + self.requests.iter().map(Request::size_bytes).sum::<usize>()
            + self
                .constraints
                .iter()
                .map(Constraint::size_bytes)
                .sum::<usize>()
            + self.params.len() * std::mem::size_of::<Param>()
            + self.styles.iter().map(Style::size_bytes).sum::<usize>()
    }
}
