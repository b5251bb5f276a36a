pub mod users;

pub use users::{UsersPanelState, poll_users_responses, users_panel};
