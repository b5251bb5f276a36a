//! Users table domain module.
//!
//! This module is the single home for:
//! - `columns`: the fixed column set and the pure row renderer
//! - `state`: the table controller (loaded rows, total, load-more)
//! - `actions`: the per-row edit/delete controller
//!
//! UI code only reads these types and forwards the requests they hand out; it
//! never mutates rows directly. Mutations go through the server and come back as
//! a [`TableEvent::Invalidate`] that the table owner answers with a reload.

pub mod actions;
pub mod columns;
pub mod state;

pub use actions::{ActionKind, ActionOutcome, RowActionState};
pub use columns::{CellContent, EMPTY_MESSAGE, UserColumn, render_row};
pub use state::{LoadState, TableBody, UsersTableState};

/// Messages passed from a row up to the owner of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// Server data changed; reload the table from scratch.
    Invalidate,
}
