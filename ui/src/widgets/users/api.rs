//! Request dispatch for the users panel.
//!
//! Requests are described by the business layer and sent here with `ehttp`, whose
//! callback runs off the frame loop. The callback decodes the response, pushes an
//! [`ApiEvent`] into the panel's channel and asks egui for a repaint; the panel
//! drains the channel at the start of the next frame.

use flume::Sender;
use roster_business::http::{HttpResult, RequestBuilder, Response};
use roster_business::users_api::{self, PageQuery};
use roster_business::{ActionKind, BusinessConfig, UserId};

use super::state::ApiEvent;

fn to_ehttp(request: &RequestBuilder) -> ehttp::Request {
    let headers: Vec<(&str, &str)> = request.headers().collect();
    let mut ehttp_request = ehttp::Request::get(request.url());
    ehttp_request.method = request.method().as_str().to_owned();
    ehttp_request.body = request.body().map(<[u8]>::to_vec).unwrap_or_default();
    ehttp_request.headers = ehttp::Headers::new(&headers);
    ehttp_request
}

fn from_ehttp(result: ehttp::Result<ehttp::Response>) -> HttpResult<Response> {
    result
        .map(|response| {
            let headers = response
                .headers
                .headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()));
            Response::from_parts(response.status, headers, response.bytes.clone())
        })
        .map_err(roster_business::http::HttpError::new)
}

/// Sends `request` and delivers `into_event(result)` to the panel.
fn dispatch(
    request: &RequestBuilder,
    ctx: egui::Context,
    sender: Sender<ApiEvent>,
    into_event: impl FnOnce(HttpResult<Response>) -> ApiEvent + Send + 'static,
) {
    log::debug!("{} {}", request.method().as_str(), request.url());

    ehttp::fetch(to_ehttp(request), move |result| {
        let event = into_event(from_ehttp(result));
        if sender.send(event).is_err() {
            log::debug!("Users panel dropped before its request completed");
        }
        ctx.request_repaint();
    });
}

/// GET the first page and total count.
pub fn fetch_initial_page(config: &BusinessConfig, ctx: egui::Context, sender: Sender<ApiEvent>) {
    let request = users_api::list_users_request(config, PageQuery::first());
    dispatch(&request, ctx, sender, |result| {
        ApiEvent::Initial(
            result
                .map_err(Into::into)
                .and_then(|response| users_api::decode_initial_page(&response)),
        )
    });
}

/// GET the page described by `query` for table `generation`.
pub fn fetch_page(
    config: &BusinessConfig,
    query: PageQuery,
    generation: u64,
    ctx: egui::Context,
    sender: Sender<ApiEvent>,
) {
    let request = users_api::list_users_request(config, query);
    dispatch(&request, ctx, sender, move |result| ApiEvent::Page {
        generation,
        result: result
            .map_err(Into::into)
            .and_then(|response| users_api::decode_users(&response)),
    });
}

/// PUT/DELETE a row; any status is reported back as a completed round-trip.
pub fn send_row_action(
    request: &RequestBuilder,
    id: UserId,
    kind: ActionKind,
    ctx: egui::Context,
    sender: Sender<ApiEvent>,
) {
    dispatch(request, ctx, sender, move |result| ApiEvent::Action {
        id,
        kind,
        result: result.map_err(Into::into),
    });
}
