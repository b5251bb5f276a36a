//! Business layer for the roster users table.
//!
//! Everything here is UI-free: the user model, configuration, the users API and
//! the controllers that decide which requests to send and how to fold their
//! results back into table state.

pub mod config;
pub mod http;
pub mod user;
pub mod users_api;
pub mod users_table;

pub use config::BusinessConfig;
pub use user::{User, UserFormValues, UserId, UsersPage};
pub use users_api::{ApiResult, PAGE_SIZE, PageQuery, UsersApiError};
pub use users_table::{
    ActionKind, ActionOutcome, CellContent, EMPTY_MESSAGE, LoadState, RowActionState, TableBody,
    TableEvent, UserColumn, UsersTableState, render_row,
};
