#![forbid(unsafe_code)]

//! The live sketch document.

use crate::constraint::Constraint;
use crate::group::Group;
use crate::handle::GroupId;
use crate::id_list::IdList;
use crate::param::Param;
use crate::request::Request;
use crate::style::Style;

/// A complete sketch: five handle-ordered collections and the active group.
///
/// Equality compares definitions only; regenerable caches on groups and
/// constraints are ignored.
#[derive(Debug, Default, PartialEq)]
pub struct Sketch {
    pub groups: IdList<Group>,
    pub requests: IdList<Request>,
    pub constraints: IdList<Constraint>,
    pub params: IdList<Param>,
    pub styles: IdList<Style>,
    /// Group new geometry is added to. A reference, not an ownership edge:
    /// it may name a group that no longer exists.
    pub active_group: Option<GroupId>,
}

impl Sketch {
    /// Create an empty sketch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tear down every collection, releasing each group's owned data first.
    pub fn clear(&mut self) {
        for g in self.groups.iter_mut() {
            g.clear();
        }
        self.groups.clear();
        self.requests.clear();
        self.constraints.clear();
        self.params.clear();
        self.styles.clear();
    }

    /// The active group, if it refers to a group that exists.
    #[must_use]
    pub fn active_group(&self) -> Option<&Group> {
        self.active_group.and_then(|id| self.groups.get(id))
    }

    /// `false` only when `active_group` names a group that is not present.
    #[must_use]
    pub fn active_group_is_live(&self) -> bool {
        self.active_group.is_none_or(|id| self.groups.contains(id))
    }

    /// Whether all five collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
            && self.requests.is_empty()
            && self.constraints.is_empty()
            && self.params.is_empty()
            && self.styles.is_empty()
    }

    /// Approximate footprint of the persistent definition, in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.groups.iter().map(Group::size_bytes).sum::<usize>()
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
