//! Users table panel.
//!
//! - `state`: Panel state and the completion channel
//! - `api`: Request dispatch over `ehttp`
//! - `panel`: Main panel widget and per-frame polling
//! - `form`: Edit form window
//! - `table`: Table rendering components (columns, header, row, cells)

mod api;
mod form;
mod panel;
mod state;
pub mod table;

pub use panel::{poll_users_responses, users_panel};
pub use state::{ApiEvent, EditFormState, UsersPanelState};
