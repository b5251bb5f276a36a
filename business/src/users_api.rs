//! Users API client helpers.
//!
//! Every endpoint is exposed twice:
//! - a `*_request` function that only *describes* the call as a [`RequestBuilder`],
//!   so the UI can dispatch it on its own transport, and
//! - an async function that sends the description with `reqwest` and decodes the
//!   [`Response`] with the same `decode_*` helper the UI uses.

use log::warn;
use thiserror::Error;

use crate::config::BusinessConfig;
use crate::http::{Client, HttpError, RequestBuilder, Response};
use crate::user::{User, UserFormValues, UserId, UsersPage};

/// Number of records requested per "load more".
pub const PAGE_SIZE: usize = 10;

/// Response header carrying the total number of users on the server.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse users response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// A typed API result.
pub type ApiResult<T> = Result<T, UsersApiError>;

/// `skip`/`limit` window of one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub skip: usize,
    pub limit: usize,
}

impl PageQuery {
    pub fn first() -> Self {
        Self {
            skip: 0,
            limit: PAGE_SIZE,
        }
    }

    pub fn after(loaded: usize) -> Self {
        Self {
            skip: loaded,
            limit: PAGE_SIZE,
        }
    }
}

/// GET `/api/users?skip={n}&limit={limit}`
pub fn list_users_request(config: &BusinessConfig, query: PageQuery) -> RequestBuilder {
    Client::get(format!(
        "{}?skip={}&limit={}",
        config.users_url(),
        query.skip,
        query.limit
    ))
    .header("accept", "application/json")
}

/// PUT `/api/users?id={ID}` with the edited fields as JSON.
pub fn update_user_request(
    config: &BusinessConfig,
    id: &UserId,
    values: &UserFormValues,
) -> ApiResult<RequestBuilder> {
    Client::put(user_url(config, id))
        .json(values)
        .map_err(|e| UsersApiError::Encode(e.to_string()))
}

/// DELETE `/api/users?id={ID}`
pub fn delete_user_request(config: &BusinessConfig, id: &UserId) -> RequestBuilder {
    Client::delete(user_url(config, id))
}

fn user_url(config: &BusinessConfig, id: &UserId) -> String {
    format!(
        "{}?id={}",
        config.users_url(),
        urlencoding::encode(id.as_str())
    )
}

/// Decodes a page of users.
pub fn decode_users(response: &Response) -> ApiResult<Vec<User>> {
    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }
    response
        .json()
        .map_err(|e| UsersApiError::Decode(e.to_string()))
}

/// Decodes the first page together with the server total.
///
/// Without a usable `X-Total-Count` header the page is assumed to be everything.
pub fn decode_initial_page(response: &Response) -> ApiResult<UsersPage> {
    let users = decode_users(response)?;
    let count = match response.header(TOTAL_COUNT_HEADER) {
        Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|_| {
            warn!("Ignoring malformed {TOTAL_COUNT_HEADER} header: {raw:?}");
            users.len()
        }),
        None => users.len(),
    };
    Ok(UsersPage::new(users, count))
}

/// First page plus total count; used on mount and after every invalidation.
pub async fn fetch_initial_page(config: &BusinessConfig) -> ApiResult<UsersPage> {
    let response = list_users_request(config, PageQuery::first()).send().await?;
    decode_initial_page(&response)
}

pub async fn list_users(config: &BusinessConfig, query: PageQuery) -> ApiResult<Vec<User>> {
    let response = list_users_request(config, query).send().await?;
    decode_users(&response)
}

/// Sends the update. Any HTTP status counts as a completed round-trip.
pub async fn update_user(
    config: &BusinessConfig,
    id: &UserId,
    values: &UserFormValues,
) -> ApiResult<Response> {
    let request = update_user_request(config, id, values)?;
    Ok(request.send().await?)
}

/// Sends the removal. Any HTTP status counts as a completed round-trip.
pub async fn delete_user(config: &BusinessConfig, id: &UserId) -> ApiResult<Response> {
    Ok(delete_user_request(config, id).send().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    fn config() -> BusinessConfig {
        BusinessConfig::new("http://localhost:3000".to_owned())
    }

    #[test]
    fn test_list_users_request_url() {
        let request = list_users_request(&config(), PageQuery::after(20));
        assert_eq!(request.method(), Method::Get);
        assert_eq!(
            request.url(),
            "http://localhost:3000/api/users?skip=20&limit=10"
        );
        assert_eq!(
            request.headers().collect::<Vec<_>>(),
            vec![("accept", "application/json")]
        );
    }

    #[test]
    fn test_update_user_request_body() {
        let values = UserFormValues {
            first_name: "Ada".to_owned(),
            ..UserFormValues::default()
        };
        let request = update_user_request(&config(), &UserId::from(5), &values).unwrap();

        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.url(), "http://localhost:3000/api/users?id=5");
        let body: serde_json::Value = serde_json::from_slice(request.body().unwrap()).unwrap();
        assert_eq!(body["FirstName"], "Ada");
    }

    #[test]
    fn test_delete_user_request_escapes_id() {
        let request = delete_user_request(&config(), &UserId::from("a b&c"));
        assert_eq!(request.method(), Method::Delete);
        assert_eq!(
            request.url(),
            "http://localhost:3000/api/users?id=a%20b%26c"
        );
    }

    #[test]
    fn test_decode_users_rejects_error_status() {
        let response = Response::from_parts(500, [], b"oops".to_vec());
        assert_eq!(decode_users(&response), Err(UsersApiError::Status(500)));
    }

    #[test]
    fn test_decode_users_reports_bad_json() {
        let response = Response::from_parts(200, [], b"{not json".to_vec());
        assert!(matches!(
            decode_users(&response),
            Err(UsersApiError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_initial_page_reads_total() {
        let body = serde_json::to_vec(&serde_json::json!([
            {"ID": 1, "FirstName": "A", "LastName": "B", "Email": "a@b.c", "Company": "X"}
        ]))
        .unwrap();
        let response = Response::from_parts(200, [("X-Total-Count", "25")], body);

        let page = decode_initial_page(&response).unwrap();
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.count, 25);
    }

    #[test]
    fn test_decode_initial_page_without_total() {
        let body = b"[]".to_vec();
        let response = Response::from_parts(200, [("x-total-count", "many")], body);

        let page = decode_initial_page(&response).unwrap();
        assert!(page.users.is_empty());
        assert_eq!(page.count, 0);
    }
}
