#![forbid(unsafe_code)]

//! Line and fill styles.

use crate::geometry::RgbaColor;
use crate::handle::StyleId;
use crate::id_list::Keyed;

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub id: StyleId,
    pub name: String,
    pub color: RgbaColor,
    pub width: f64,
    pub visible: bool,
    pub exportable: bool,
}

impl Style {
    #[must_use]
    pub fn new(id: StyleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: RgbaColor::default(),
            width: 1.0,
            visible: true,
            exportable: true,
        }
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.name.len()
    }
}

impl Keyed for Style {
    type Id = StyleId;
    fn id(&self) -> StyleId {
        self.id
    }
}
