use egui_kittest::Harness;
use roster_ui::state::State;
use roster_ui::widgets::users_panel;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to the mock server between frames.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

/// Frames stepped while waiting for requests to settle.
const SETTLE_FRAMES: usize = 10;

/// Tall enough that every row of a 25-user table and the "Load more" button are on screen.
const HARNESS_SIZE: [f32; 2] = [1400.0, 2400.0];

/// Yields to the runtime so the mock server can answer in-flight requests.
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

pub fn user_json(i: usize) -> serde_json::Value {
    serde_json::json!({
        "ID": i,
        "FirstName": format!("First{i}"),
        "LastName": format!("Last{i}"),
        "Email": format!("user{i}@example.com"),
        "avatar": "",
        "Company": "Acme"
    })
}

pub fn page_json(range: std::ops::Range<usize>) -> serde_json::Value {
    serde_json::Value::Array(range.map(user_json).collect())
}

/// Mounts one GET mock per page of a `total`-user dataset.
///
/// `first_page_calls` is how many times the first page is expected to be fetched.
#[allow(unused)]
pub async fn mount_pages(mock_server: &MockServer, total: usize, first_page_calls: u64) {
    let mut skip = 0;
    loop {
        let end = (skip + 10).min(total);
        let calls = if skip == 0 { first_page_calls } else { 1 };
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(query_param("skip", skip.to_string()))
            .and(query_param("limit", "10"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Total-Count", total.to_string())
                    .set_body_json(page_json(skip..end)),
            )
            .expect(calls)
            .mount(mock_server)
            .await;
        skip += 10;
        if skip >= total {
            break;
        }
    }
}

/// Starts a mock server; routes are mounted before the harness takes its first frame.
pub async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

/// The users panel in a harness, pointed at a mock server.
///
/// The server lives as long as the context so its expectations are verified on drop.
pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    pub fn new(mock_server: MockServer, read_only: bool) -> Self {
        let mut state = State::test(mock_server.uri());
        state.config.read_only = read_only;
        let harness = Harness::builder()
            .with_size(egui::Vec2::from(HARNESS_SIZE))
            .build_ui_state(
                |ui, state: &mut State| {
                    let State { config, users } = state;
                    users_panel(users, config, ui);
                },
                state,
            );
        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Steps frames, yielding between them, until pending requests are answered.
    pub async fn settle(&mut self) {
        for _ in 0..SETTLE_FRAMES {
            self.harness.step();
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        self.harness.step();
    }
}
