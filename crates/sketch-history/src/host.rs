#![forbid(unsafe_code)]

//! Collaborators notified by the undo session.
//!
//! The session never draws, solves or loads files itself. After every verb it
//! reports undo/redo availability, and after every restore it asks the host
//! to drop viewer caches, reload imported files and regenerate geometry.
//! Restore notifications are issued in this order:
//!
//! 1. [`clear_viewer_superstructure`](UndoHost::clear_viewer_superstructure)
//!    for [`Viewer::Graphics`], then [`Viewer::Text`]
//! 2. [`reload_all_imported`](UndoHost::reload_all_imported)
//! 3. [`regenerate_all`](UndoHost::regenerate_all) over [`ALL_GROUPS`]
//! 4. [`show_text_window`](UndoHost::show_text_window)

use std::ops::RangeInclusive;

use sketch_model::Sketch;

/// Group index range covering every group.
pub const ALL_GROUPS: RangeInclusive<usize> = RangeInclusive::new(0, usize::MAX);

/// The two viewers holding caches derived from the sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewer {
    /// The 3d graphics window.
    Graphics,
    /// The property/text browser.
    Text,
}

/// Whether each history direction has anything to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability {
    pub undo: bool,
    pub redo: bool,
}

/// Receiver of undo session notifications.
pub trait UndoHost {
    /// Enable or disable the undo and redo menu items.
    fn set_undo_redo_availability(&mut self, availability: Availability);

    /// Drop every cache a viewer built from the previous sketch.
    fn clear_viewer_superstructure(&mut self, viewer: Viewer);

    /// Re-read linked files; their contents may have changed since capture.
    fn reload_all_imported(&mut self, sketch: &mut Sketch);

    /// Recompute derived data for the groups whose index falls in `groups`.
    ///
    /// Called on a sketch whose derived fields are all empty. Must not be
    /// re-entered.
    fn regenerate_all(&mut self, sketch: &mut Sketch, groups: RangeInclusive<usize>);

    /// Ask for the text window to be brought up on the next UI pass.
    fn show_text_window(&mut self) {}
}

/// Host that ignores every notification.
///
/// Suitable for headless use where nothing observes the sketch between verbs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl UndoHost for NullHost {
    fn set_undo_redo_availability(&mut self, _availability: Availability) {}

    fn clear_viewer_superstructure(&mut self, _viewer: Viewer) {}

    fn reload_all_imported(&mut self, _sketch: &mut Sketch) {}

    fn regenerate_all(&mut self, _sketch: &mut Sketch, _groups: RangeInclusive<usize>) {}
}
