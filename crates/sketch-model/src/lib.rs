#![forbid(unsafe_code)]

//! Sketch document model.
//!
//! # Role in the workspace
//! `sketch-model` is the data layer. It defines the [`Sketch`] document and
//! the five collections it owns (groups, requests, constraints, params,
//! styles). Editing operations and the solver live elsewhere; the undo engine
//! in `sketch-history` captures and restores whole `Sketch` values.
//!
//! # Persistent versus derived data
//! Groups and constraints carry caches that the regeneration pipeline
//! recomputes from their definitions. Those types are not `Clone`; their
//! `snapshot()` methods produce definition-only copies, and their
//! `PartialEq` impls compare definitions only. Requests, params and styles
//! are plain values.

pub mod constraint;
pub mod geometry;
pub mod group;
pub mod handle;
pub mod id_list;
pub mod param;
pub mod remap;
pub mod request;
pub mod sketch;
pub mod style;

pub use constraint::{Constraint, ConstraintKind, DisplayGeometry};
pub use geometry::{BezierCurve, BezierLoop, Edge, Mesh, Polygon, RgbaColor, Shell, Triangle, Vector};
pub use group::{Group, GroupDerived, GroupKind, PolyError, SolveResult};
pub use handle::{ConstraintId, EntityId, GroupId, ParamId, RequestId, StyleId};
pub use id_list::{IdList, Keyed};
pub use param::Param;
pub use remap::{Remap, RemapKey};
pub use request::{Request, RequestKind};
pub use sketch::Sketch;
pub use style::Style;
