#![forbid(unsafe_code)]

//! Requests: user-drawn primitives that expand into entities and params.

use crate::handle::{EntityId, GroupId, RequestId, StyleId};
use crate::id_list::Keyed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestKind {
    Workplane,
    DatumPoint,
    #[default]
    LineSegment,
    Cubic,
    CubicPeriodic,
    Circle,
    ArcOfCircle,
    TtfText,
    Image,
}

/// A drawn primitive. Plain value; owns no caches.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: RequestId,
    pub kind: RequestKind,
    pub group: GroupId,
    pub workplane: Option<EntityId>,
    pub construction: bool,
    pub style: Option<StyleId>,
    /// Text content for text requests.
    pub text: String,
    pub font: String,
    pub aspect_ratio: f64,
}

impl Request {
    #[must_use]
    pub fn new(id: RequestId, kind: RequestKind, group: GroupId) -> Self {
        Self {
            id,
            kind,
            group,
            workplane: None,
            construction: false,
            style: None,
            text: String::new(),
            font: String::new(),
            aspect_ratio: 0.0,
        }
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.text.len() + self.font.len()
    }
}

impl Keyed for Request {
    type Id = RequestId;
    fn id(&self) -> RequestId {
        self.id
    }
}
