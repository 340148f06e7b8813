use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use std::sync::{Arc, Mutex};

pub const CAMPAIGN_ADD_PATH: &str = "/admin/api/v1/campaign/add";

#[allow(dead_code)]
pub struct RecordedCall {
    pub headers: HeaderMap,
    pub body: String,
}

struct MockState {
    replies: Vec<(StatusCode, Vec<u8>)>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Admin API stand-in. The n-th call gets the n-th reply; once the list is
/// exhausted the last reply repeats.
pub struct MockAdmin {
    pub url: String,
    state: Arc<MockState>,
}

impl MockAdmin {
    pub fn spawn(replies: &[(StatusCode, &str)]) -> Self {
        Self::spawn_raw(
            replies
                .iter()
                .map(|(status, body)| (*status, body.as_bytes().to_vec()))
                .collect(),
        )
    }

    pub fn spawn_raw(replies: Vec<(StatusCode, Vec<u8>)>) -> Self {
        let state = Arc::new(MockState {
            replies,
            calls: Mutex::new(Vec::new()),
        });

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock listener");
        listener.set_nonblocking(true).expect("set nonblocking");
        let addr = listener.local_addr().expect("mock local addr");

        let app = Router::new()
            .route(CAMPAIGN_ADD_PATH, post(record_call))
            .with_state(state.clone());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build mock runtime");
            rt.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt mock listener");
                axum::serve(listener, app).await.expect("serve mock admin");
            });
        });

        Self {
            url: format!("http://{}{}", addr, CAMPAIGN_ADD_PATH),
            state,
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> std::sync::MutexGuard<'_, Vec<RecordedCall>> {
        self.state.calls.lock().unwrap()
    }
}

async fn record_call(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let mut calls = state.calls.lock().unwrap();
    calls.push(RecordedCall { headers, body });
    let (status, reply) = state
        .replies
        .get(calls.len() - 1)
        .or_else(|| state.replies.last())
        .cloned()
        .unwrap_or((StatusCode::OK, b"{}".to_vec()));
    (status, [(CONTENT_TYPE, "application/json")], reply)
}
