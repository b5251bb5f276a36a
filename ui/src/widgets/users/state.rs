//! State for the users panel.
//!
//! The business types own the rules (`UsersTableState`, `RowActionState`); this
//! struct only keeps them together with the edit form and the channel that
//! carries request completions back into the frame loop.

use std::collections::HashMap;

use flume::{Receiver, Sender};
use log::{debug, error, info};
use roster_business::http::Response;
use roster_business::{
    ActionKind, ActionOutcome, ApiResult, RowActionState, TableEvent, User, UserFormValues,
    UserId, UsersPage, UsersTableState,
};

/// Completion of a request started by the panel.
#[derive(Debug)]
pub enum ApiEvent {
    /// First page plus total; also the answer to an invalidation.
    Initial(ApiResult<UsersPage>),
    /// A load-more page for the table generation it was requested for.
    Page {
        generation: u64,
        result: ApiResult<Vec<User>>,
    },
    /// An edit or delete round-trip for one row.
    Action {
        id: UserId,
        kind: ActionKind,
        result: ApiResult<Response>,
    },
}

/// Edit form opened from a row, pre-filled with that row's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFormState {
    pub id: UserId,
    pub values: UserFormValues,
    /// Error from the last submission, shown inside the form.
    pub error: Option<String>,
}

impl EditFormState {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            values: user.form_values(),
            error: None,
        }
    }
}

#[derive(Debug)]
pub struct UsersPanelState {
    table: Option<UsersTableState>,
    /// Bumped every time the table is replaced; stale pages are dropped.
    generation: u64,
    /// Initial load or post-invalidation reload in flight.
    reloading: bool,
    load_error: Option<String>,
    row_actions: HashMap<UserId, RowActionState>,
    pub(crate) edit_form: Option<EditFormState>,
    sender: Sender<ApiEvent>,
    receiver: Receiver<ApiEvent>,
}

impl Default for UsersPanelState {
    fn default() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            table: None,
            generation: 0,
            reloading: false,
            load_error: None,
            row_actions: HashMap::new(),
            edit_form: None,
            sender,
            receiver,
        }
    }
}

impl UsersPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel state that starts from an already fetched page.
    pub fn with_page(page: UsersPage) -> Self {
        Self {
            table: Some(UsersTableState::new(page)),
            ..Self::default()
        }
    }

    pub fn table(&self) -> Option<&UsersTableState> {
        self.table.as_ref()
    }

    pub(crate) fn table_mut(&mut self) -> Option<&mut UsersTableState> {
        self.table.as_mut()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_reloading(&self) -> bool {
        self.reloading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether the panel still has to ask for its first page.
    pub(crate) fn needs_initial_load(&self) -> bool {
        self.table.is_none() && !self.reloading && self.load_error.is_none()
    }

    pub(crate) fn set_reloading(&mut self) {
        self.reloading = true;
        self.load_error = None;
    }

    pub fn row_action(&self, id: &UserId) -> RowActionState {
        self.row_actions.get(id).copied().unwrap_or_default()
    }

    pub(crate) fn row_action_mut(&mut self, id: &UserId) -> &mut RowActionState {
        self.row_actions.entry(id.clone()).or_default()
    }

    pub fn edit_form(&self) -> Option<&EditFormState> {
        self.edit_form.as_ref()
    }

    pub(crate) fn open_edit_form(&mut self, user: &User) {
        self.edit_form = Some(EditFormState::from_user(user));
    }

    pub(crate) fn close_edit_form(&mut self) {
        self.edit_form = None;
    }

    pub(crate) fn sender(&self) -> Sender<ApiEvent> {
        self.sender.clone()
    }

    /// Drains completed requests. Returns `true` when the table must be reloaded.
    pub fn apply_pending(&mut self) -> bool {
        let mut invalidate = false;
        while let Ok(event) = self.receiver.try_recv() {
            if self.apply(event) == Some(TableEvent::Invalidate) {
                invalidate = true;
            }
        }
        invalidate
    }

    fn apply(&mut self, event: ApiEvent) -> Option<TableEvent> {
        match event {
            ApiEvent::Initial(result) => {
                self.reloading = false;
                match result {
                    Ok(page) => {
                        info!("Loaded {} of {} users", page.users.len(), page.count);
                        self.generation += 1;
                        match self.table.as_mut() {
                            Some(table) => table.replace(page),
                            None => self.table = Some(UsersTableState::new(page)),
                        }
                        // Busy rows still expect their completion.
                        self.row_actions.retain(|_, action| action.is_loading());
                        self.load_error = None;
                    }
                    Err(e) => {
                        error!("Failed to load users: {e}");
                        self.load_error = Some(e.to_string());
                    }
                }
                None
            }
            ApiEvent::Page { generation, result } => {
                if generation != self.generation {
                    debug!("Dropping page for stale table generation {generation}");
                    return None;
                }
                if let Some(table) = self.table.as_mut() {
                    table.finish_load_more(result);
                }
                None
            }
            ApiEvent::Action { id, kind, result } => {
                let outcome = self.row_action_mut(&id).finish(kind, result);
                self.after_action(&id, kind, outcome)
            }
        }
    }

    fn after_action(
        &mut self,
        id: &UserId,
        kind: ActionKind,
        outcome: ApiResult<ActionOutcome>,
    ) -> Option<TableEvent> {
        let form_is_for_row = self.edit_form.as_ref().is_some_and(|form| &form.id == id);
        match outcome {
            Ok(outcome) => {
                if kind == ActionKind::Edit && form_is_for_row {
                    self.edit_form = None;
                }
                Some(outcome.event)
            }
            Err(e) => {
                error!("{kind:?} of user {id} failed: {e}");
                if kind == ActionKind::Edit
                    && let Some(form) = self.edit_form.as_mut().filter(|_| form_is_for_row)
                {
                    form.error = Some(e.to_string());
                }
                None
            }
        }
    }
}
