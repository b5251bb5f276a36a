//! Table controller: the loaded users, the server total and the load-more flag.

use log::{error, info};

use crate::config::BusinessConfig;
use crate::user::{User, UsersPage};
use crate::users_api::{self, ApiResult, PageQuery};

/// Whether a load-more request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

/// What the table body should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody<'a> {
    Rows(&'a [User]),
    /// A single full-width row with [`super::EMPTY_MESSAGE`].
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersTableState {
    users: Vec<User>,
    total: usize,
    load: LoadState,
}

impl UsersTableState {
    pub fn new(page: UsersPage) -> Self {
        Self {
            users: page.users,
            total: page.count,
            load: LoadState::Idle,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// The "Load more" control is shown only while records remain on the server.
    pub fn can_load_more(&self) -> bool {
        self.users.len() < self.total
    }

    /// Shown and not already waiting on a page.
    pub fn is_load_more_enabled(&self) -> bool {
        self.can_load_more() && !self.is_loading()
    }

    pub fn body(&self) -> TableBody<'_> {
        if self.users.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(&self.users)
        }
    }

    /// Marks a page request as in flight and returns its window.
    ///
    /// Returns `None` while another page is loading or when everything is loaded,
    /// so a double click never issues two requests.
    pub fn begin_load_more(&mut self) -> Option<PageQuery> {
        if !self.is_load_more_enabled() {
            return None;
        }
        self.load = LoadState::Loading;
        Some(PageQuery::after(self.users.len()))
    }

    /// Applies the outcome of the request started by [`Self::begin_load_more`].
    ///
    /// Failures are logged and leave the rows untouched.
    pub fn finish_load_more(&mut self, result: ApiResult<Vec<User>>) {
        self.load = LoadState::Idle;
        match result {
            Ok(users) => {
                info!(
                    "Loaded {} more users ({} of {})",
                    users.len(),
                    self.users.len() + users.len(),
                    self.total
                );
                self.users.extend(users);
            }
            Err(e) => {
                error!("Failed to load more users: {e}");
            }
        }
    }

    /// Fetches and appends the next page.
    pub async fn load_more(&mut self, config: &BusinessConfig) {
        let Some(query) = self.begin_load_more() else {
            return;
        };
        let result = users_api::list_users(config, query).await;
        self.finish_load_more(result);
    }

    /// Swaps in fresh server truth after an invalidation.
    pub fn replace(&mut self, page: UsersPage) {
        *self = Self::new(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserId;
    use crate::users_api::{PAGE_SIZE, UsersApiError};

    fn users(range: std::ops::Range<u64>) -> Vec<User> {
        range
            .map(|i| User {
                id: UserId::from(i),
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
                email: format!("user{i}@example.com"),
                avatar: None,
                company: "Acme".to_owned(),
            })
            .collect()
    }

    #[test]
    fn test_load_more_visible_iff_fewer_than_total() {
        for total in 0..15 {
            for loaded in 0..=total {
                let state = UsersTableState::new(UsersPage::new(users(0..loaded), total as usize));
                assert_eq!(
                    state.can_load_more(),
                    loaded < total,
                    "loaded={loaded} total={total}"
                );
            }
        }
    }

    #[test]
    fn test_begin_load_more_uses_loaded_count_as_skip() {
        let mut state = UsersTableState::new(UsersPage::new(users(0..10), 25));

        let query = state.begin_load_more().unwrap();
        assert_eq!(query.skip, 10);
        assert_eq!(query.limit, PAGE_SIZE);
        assert!(state.is_loading());
        assert!(!state.is_load_more_enabled());
    }

    #[test]
    fn test_begin_load_more_rejects_concurrent_request() {
        let mut state = UsersTableState::new(UsersPage::new(users(0..10), 25));

        assert!(state.begin_load_more().is_some());
        assert!(state.begin_load_more().is_none());
    }

    #[test]
    fn test_begin_load_more_when_complete() {
        let mut state = UsersTableState::new(UsersPage::new(users(0..3), 3));
        assert!(state.begin_load_more().is_none());
        assert_eq!(state.load_state(), LoadState::Idle);
    }

    #[test]
    fn test_finish_load_more_appends_in_order() {
        let mut state = UsersTableState::new(UsersPage::new(users(0..10), 25));
        let before = state.users().to_vec();

        state.begin_load_more();
        state.finish_load_more(Ok(users(10..20)));

        assert_eq!(state.len(), 20);
        assert_eq!(&state.users()[..10], before.as_slice());
        assert_eq!(&state.users()[10..], users(10..20).as_slice());
        assert!(!state.is_loading());
        assert!(state.can_load_more());
    }

    #[test]
    fn test_finish_load_more_failure_keeps_rows() {
        let mut state = UsersTableState::new(UsersPage::new(users(0..10), 25));
        let before = state.clone();

        state.begin_load_more();
        state.finish_load_more(Err(UsersApiError::Status(500)));

        assert_eq!(state, before);
        assert!(state.is_load_more_enabled());
    }

    #[test]
    fn test_body_empty_when_no_users() {
        let state = UsersTableState::new(UsersPage::default());
        assert_eq!(state.body(), TableBody::Empty);
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_replace_resets_loading() {
        let mut state = UsersTableState::new(UsersPage::new(users(0..10), 25));
        state.begin_load_more();

        state.replace(UsersPage::new(users(0..9), 24));

        assert_eq!(state.len(), 9);
        assert_eq!(state.total(), 24);
        assert!(!state.is_loading());
    }
}
