//! Per-row edit/delete controller.
//!
//! Each row owns one [`RowActionState`]. Its loading flag only blocks that row's
//! buttons; other rows stay interactive and may have their own requests in flight.
//! Nothing here touches the loaded rows: a finished request yields
//! [`TableEvent::Invalidate`] and the table owner reloads from the server.

use log::{info, warn};

use super::TableEvent;
use crate::config::BusinessConfig;
use crate::http::{RequestBuilder, Response};
use crate::user::{UserFormValues, UserId};
use crate::users_api::{self, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

/// A request that made it to the server and back, whatever the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub status: u16,
    pub event: TableEvent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActionState {
    loading: bool,
}

impl RowActionState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_edit_enabled(&self) -> bool {
        !self.loading
    }

    pub fn is_delete_enabled(&self, read_only: bool) -> bool {
        !read_only && !self.loading
    }

    /// Builds the update request and marks the row busy.
    ///
    /// `Ok(None)` means a request for this row is already in flight.
    pub fn begin_edit(
        &mut self,
        config: &BusinessConfig,
        id: &UserId,
        values: &UserFormValues,
    ) -> ApiResult<Option<RequestBuilder>> {
        if self.loading {
            return Ok(None);
        }
        let request = users_api::update_user_request(config, id, values)?;
        self.loading = true;
        Ok(Some(request))
    }

    /// Builds the removal request and marks the row busy.
    ///
    /// Always `None` in read-only mode: no request is built, no flag is set.
    pub fn begin_delete(&mut self, config: &BusinessConfig, id: &UserId) -> Option<RequestBuilder> {
        if config.read_only {
            info!("Delete of user {id} ignored: read-only mode");
            return None;
        }
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(users_api::delete_user_request(config, id))
    }

    /// Clears the loading flag and reports what the table owner should do.
    ///
    /// Transport failures are handed back unchanged and do not invalidate.
    pub fn finish(
        &mut self,
        kind: ActionKind,
        result: ApiResult<Response>,
    ) -> ApiResult<ActionOutcome> {
        self.loading = false;
        let response = result?;
        if !response.is_success() {
            warn!(
                "{kind:?} request returned status {}; reloading anyway",
                response.status
            );
        }
        Ok(ActionOutcome {
            kind,
            status: response.status,
            event: TableEvent::Invalidate,
        })
    }

    /// Submits edited values for `id`.
    ///
    /// `Ok(None)` when the row was already busy and nothing was sent.
    pub async fn edit(
        &mut self,
        config: &BusinessConfig,
        id: &UserId,
        values: &UserFormValues,
    ) -> ApiResult<Option<ActionOutcome>> {
        let Some(request) = self.begin_edit(config, id, values)? else {
            return Ok(None);
        };
        let result = request.send().await.map_err(Into::into);
        self.finish(ActionKind::Edit, result).map(Some)
    }

    /// Removes `id`. A no-op in read-only mode.
    pub async fn delete(
        &mut self,
        config: &BusinessConfig,
        id: &UserId,
    ) -> ApiResult<Option<ActionOutcome>> {
        let Some(request) = self.begin_delete(config, id) else {
            return Ok(None);
        };
        let result = request.send().await.map_err(Into::into);
        self.finish(ActionKind::Delete, result).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpError, Method};
    use crate::users_api::UsersApiError;

    fn config() -> BusinessConfig {
        BusinessConfig::new("http://localhost:3000".to_owned())
    }

    #[test]
    fn test_begin_edit_marks_row_busy() {
        let mut row = RowActionState::default();
        let request = row
            .begin_edit(&config(), &UserId::from(3), &UserFormValues::default())
            .unwrap()
            .unwrap();

        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.url(), "http://localhost:3000/api/users?id=3");
        assert!(row.is_loading());
        assert!(!row.is_edit_enabled());
        assert!(!row.is_delete_enabled(false));
    }

    #[test]
    fn test_begin_edit_while_busy_sends_nothing() {
        let mut row = RowActionState::default();
        let id = UserId::from(3);
        row.begin_edit(&config(), &id, &UserFormValues::default())
            .unwrap();

        let second = row
            .begin_edit(&config(), &id, &UserFormValues::default())
            .unwrap();
        assert!(second.is_none());
    }

    #[test]
    fn test_begin_delete_read_only_is_noop() {
        let mut row = RowActionState::default();
        let config = config().read_only(true);

        assert!(row.begin_delete(&config, &UserId::from(3)).is_none());
        assert!(!row.is_loading());
        assert!(!row.is_delete_enabled(true));
        assert!(row.is_edit_enabled());
    }

    #[test]
    fn test_begin_delete_builds_request() {
        let mut row = RowActionState::default();
        let request = row.begin_delete(&config(), &UserId::from("abc")).unwrap();

        assert_eq!(request.method(), Method::Delete);
        assert_eq!(request.url(), "http://localhost:3000/api/users?id=abc");
        assert!(row.is_loading());
    }

    #[test]
    fn test_finish_success_invalidates() {
        let mut row = RowActionState::default();
        row.begin_delete(&config(), &UserId::from(1));

        let outcome = row
            .finish(ActionKind::Delete, Ok(Response::new(200)))
            .unwrap();

        assert_eq!(outcome.event, TableEvent::Invalidate);
        assert_eq!(outcome.status, 200);
        assert!(!row.is_loading());
    }

    #[test]
    fn test_finish_error_status_still_invalidates() {
        let mut row = RowActionState::default();
        row.begin_delete(&config(), &UserId::from(1));

        let outcome = row
            .finish(ActionKind::Delete, Ok(Response::new(404)))
            .unwrap();

        assert_eq!(outcome.event, TableEvent::Invalidate);
        assert_eq!(outcome.status, 404);
    }

    #[test]
    fn test_finish_transport_error_propagates_and_clears_flag() {
        let mut row = RowActionState::default();
        row.begin_edit(&config(), &UserId::from(1), &UserFormValues::default())
            .unwrap();

        let err = row
            .finish(
                ActionKind::Edit,
                Err(UsersApiError::Transport(HttpError::new("connection refused"))),
            )
            .unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert!(!row.is_loading());
        assert!(row.is_edit_enabled());
    }
}
