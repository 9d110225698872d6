#![forbid(unsafe_code)]

//! Solver parameters.

use crate::handle::ParamId;
use crate::id_list::Keyed;

/// A scalar unknown (or known) of the constraint system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Param {
    pub id: ParamId,
    pub val: f64,
    pub known: bool,
    pub free: bool,
}

impl Param {
    #[must_use]
    pub const fn new(id: ParamId, val: f64) -> Self {
        Self {
            id,
            val,
            known: false,
            free: false,
        }
    }
}

impl Keyed for Param {
    type Id = ParamId;
    fn id(&self) -> ParamId {
        self.id
    }
}
