#![forbid(unsafe_code)]

//! Undo/redo session: the live sketch plus its two history buffers.
//!
//! ```text
//! remember()                     undo()                      redo()
//! ┌──────────┐  capture  ┌───┐   ┌───┐ capture ┌──────────┐  ┌───┐
//! │  sketch  │ ────────► │ U │   │ R │ ◄────── │  sketch  │  │ U │ ◄─ capture
//! └──────────┘           └───┘   └───┘         └──────────┘  └───┘
//!               R cleared         U ──pop──► sketch           R ──pop──► sketch
//! ```
//!
//! Every verb takes `&mut self` and runs to completion before returning, so a
//! half-installed restore can never be observed. A host that dispatches from
//! several threads should put the whole session behind one `Mutex`.

use std::fmt;

use sketch_model::Sketch;
use web_time::Instant;

use crate::config::HistoryConfig;
use crate::error::{HistoryError, StackKind};
use crate::host::{ALL_GROUPS, Availability, UndoHost, Viewer};
use crate::stack::UndoStack;
use crate::state::UndoState;

/// Owner of a sketch and its undo and redo history.
pub struct UndoSession {
    sketch: Sketch,
    undo: UndoStack,
    redo: UndoStack,
    config: HistoryConfig,
    unsaved: bool,
}

impl fmt::Debug for UndoSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoSession")
            .field("undo_depth", &self.undo.count())
            .field("redo_depth", &self.redo.count())
            .field("unsaved", &self.unsaved)
            .field("config", &self.config)
            .finish()
    }
}

impl UndoSession {
    /// Start a session on `sketch` with empty history.
    #[must_use]
    pub fn new(sketch: Sketch, config: HistoryConfig) -> Self {
        Self {
            sketch,
            undo: UndoStack::new(StackKind::Undo, config.max_undo),
            redo: UndoStack::new(StackKind::Redo, config.max_undo),
            config,
            unsaved: false,
        }
    }

    /// Start a session with the default configuration.
    #[must_use]
    pub fn with_default_config(sketch: Sketch) -> Self {
        Self::new(sketch, HistoryConfig::default())
    }

    // ====================================================================
    // Verbs
    // ====================================================================

    /// Record the current sketch before an edit.
    ///
    /// Marks the session unsaved, captures onto the undo buffer and discards
    /// the redo branch.
    pub fn remember<H: UndoHost + ?Sized>(&mut self, host: &mut H) {
        let _span = tracing::debug_span!(
            "undo.remember",
            undo_depth = self.undo.count(),
            redo_depth = self.redo.count(),
        )
        .entered();

        self.unsaved = true;
        let evicted = self.undo.push_from(&self.sketch);
        self.redo.clear();

        tracing::debug!(
            target: "sketch.undo",
            undo_depth = self.undo.count(),
            evicted = evicted,
            "remembered sketch state"
        );
        self.signal_availability(host);
    }

    /// Step back one snapshot.
    ///
    /// Returns `Ok(false)` without touching anything when there is nothing
    /// to undo.
    ///
    /// # Errors
    ///
    /// [`HistoryError::Underflow`] only if the buffer bookkeeping is broken;
    /// the sketch is unchanged in that case.
    pub fn undo<H: UndoHost + ?Sized>(&mut self, host: &mut H) -> Result<bool, HistoryError> {
        let _span = tracing::debug_span!(
            "undo.undo",
            undo_depth = self.undo.count(),
            redo_depth = self.redo.count(),
        )
        .entered();
        self.step(StackKind::Undo, host)
    }

    /// Re-apply the most recently undone snapshot.
    ///
    /// Returns `Ok(false)` without touching anything when there is nothing
    /// to redo.
    ///
    /// # Errors
    ///
    /// As for [`undo`](Self::undo).
    pub fn redo<H: UndoHost + ?Sized>(&mut self, host: &mut H) -> Result<bool, HistoryError> {
        let _span = tracing::debug_span!(
            "undo.redo",
            undo_depth = self.undo.count(),
            redo_depth = self.redo.count(),
        )
        .entered();
        self.step(StackKind::Redo, host)
    }

    fn step<H: UndoHost + ?Sized>(
        &mut self,
        from: StackKind,
        host: &mut H,
    ) -> Result<bool, HistoryError> {
        let (src, dst) = match from {
            StackKind::Undo => (&mut self.undo, &mut self.redo),
            StackKind::Redo => (&mut self.redo, &mut self.undo),
        };
        if src.is_empty() {
            tracing::debug!(target: "sketch.undo", stack = %from, "nothing to restore");
            return Ok(false);
        }

        // Pop first so an underflow leaves every buffer untouched.
        let state = src.pop()?;
        dst.push_from(&self.sketch);
        self.install(state, host);

        tracing::debug!(
            target: "sketch.undo",
            stack = %from,
            undo_depth = self.undo.count(),
            redo_depth = self.redo.count(),
            "restored sketch state"
        );
        self.signal_availability(host);
        Ok(true)
    }

    fn install<H: UndoHost + ?Sized>(&mut self, state: UndoState, host: &mut H) {
        let start = Instant::now();
        state.install_into(&mut self.sketch);

        if !self.sketch.active_group_is_live() {
            tracing::warn!(
                target: "sketch.undo",
                active_group = ?self.sketch.active_group,
                "restored active group does not name a live group"
            );
        }

        host.clear_viewer_superstructure(Viewer::Graphics);
        host.clear_viewer_superstructure(Viewer::Text);
        host.reload_all_imported(&mut self.sketch);
        host.regenerate_all(&mut self.sketch, ALL_GROUPS);
        host.show_text_window();

        tracing::debug!(
            target: "sketch.undo",
            restore_us = start.elapsed().as_micros() as u64,
            groups = self.sketch.groups.len(),
            "installed snapshot"
        );
    }

    fn signal_availability<H: UndoHost + ?Sized>(&self, host: &mut H) {
        host.set_undo_redo_availability(self.availability());
    }

    // ====================================================================
    // Maintenance
    // ====================================================================

    /// Drop all undo and redo history, keeping the current sketch.
    pub fn clear_history<H: UndoHost + ?Sized>(&mut self, host: &mut H) {
        self.undo.clear();
        self.redo.clear();
        tracing::debug!(target: "sketch.undo", "cleared history");
        self.signal_availability(host);
    }

    /// Replace the sketch wholesale (new or opened file).
    ///
    /// History is cleared and the session is marked saved. Returns the sketch
    /// that was replaced. Regenerating the new sketch is the caller's job.
    pub fn load_sketch<H: UndoHost + ?Sized>(&mut self, sketch: Sketch, host: &mut H) -> Sketch {
        let previous = std::mem::replace(&mut self.sketch, sketch);
        self.unsaved = false;
        self.clear_history(host);
        previous
    }

    /// Mark the sketch as written to disk.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    // ====================================================================
    // Query
    // ====================================================================

    #[must_use]
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    /// Mutable access for edits. Call [`remember`](Self::remember) first.
    pub fn sketch_mut(&mut self) -> &mut Sketch {
        &mut self.sketch
    }

    /// Consume the session, keeping only the live sketch.
    #[must_use]
    pub fn into_sketch(self) -> Sketch {
        self.sketch
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        Availability {
            undo: !self.undo.is_empty(),
            redo: !self.redo.is_empty(),
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Whether the sketch changed since it was loaded or last saved.
    #[must_use]
    pub fn is_unsaved(&self) -> bool {
        self.unsaved
    }

    #[must_use]
    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    #[must_use]
    pub fn redo_stack(&self) -> &UndoStack {
        &self.redo
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
