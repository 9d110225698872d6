#![forbid(unsafe_code)]

//! Snapshot undo/redo for sketch documents.
//!
//! # Key Components
//!
//! - [`UndoState`] - one captured sketch, with regenerable data stripped
//! - [`UndoStack`] - fixed-capacity ring buffer of snapshots
//! - [`UndoSession`] - the live sketch plus undo and redo buffers, driving
//!   the `remember` / `undo` / `redo` verbs
//! - [`UndoHost`] - notifications to menus, viewers, importer and regenerator
//! - [`HistoryConfig`] - buffer capacity, loadable from TOML/JSON
//!
//! # Quick Start
//!
//! ```ignore
//! use sketch_history::{HistoryConfig, NullHost, UndoSession};
//! use sketch_model::Sketch;
//!
//! let mut session = UndoSession::new(Sketch::new(), HistoryConfig::default());
//! let mut host = NullHost;
//!
//! session.remember(&mut host);      // before every edit
//! edit(session.sketch_mut());
//!
//! session.undo(&mut host)?;         // back to the remembered state
//! session.redo(&mut host)?;         // and forward again
//! ```
//!
//! # Memory Model
//!
//! Capture deep-copies the only shared-looking substructure (each group's
//! remap table) and copies everything else by value, skipping derived
//! geometry. Restore moves collections out of the snapshot, so undo and redo
//! never copy the document twice. Each buffer holds at most
//! [`HistoryConfig::max_undo`] snapshots; pushing onto a full buffer evicts
//! the oldest.

pub mod config;
pub mod error;
pub mod host;
pub mod session;
pub mod stack;
pub mod state;

pub use config::{DEFAULT_MAX_UNDO, HistoryConfig};
pub use error::{ConfigError, HistoryError, StackKind};
pub use host::{ALL_GROUPS, Availability, NullHost, UndoHost, Viewer};
pub use session::UndoSession;
pub use stack::UndoStack;
pub use state::UndoState;
