// tests/support/mocks/upstream.rs
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// ローカルで起動する疑似 NewsAPI の応答設定
#[derive(Clone)]
struct UpstreamReply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct StubUpstream {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl StubUpstream {
    pub fn endpoint(&self) -> String {
        format!("http://{}/v2/everything", self.addr)
    }

    /// 受信したクエリパラメータの一覧
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.seen.lock().expect("seen lock").clone()
    }
}

async fn everything(
    State(reply): State<UpstreamReply>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    reply.seen.lock().expect("seen lock").push(params);
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (
        reply.status,
        [("content-type", "application/json")],
        reply.body.clone(),
    )
}

/// 指定のステータスと本文を返す疑似 NewsAPI を起動する
pub async fn spawn_upstream(
    status: StatusCode,
    body: impl Into<String>,
    delay: Option<Duration>,
) -> StubUpstream {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let reply = UpstreamReply {
        status,
        body: body.into(),
        delay,
        seen: Arc::clone(&seen),
    };
    let app = Router::new()
        .route("/v2/everything", get(everything))
        .with_state(reply);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream");
    });

    StubUpstream { addr, seen }
}
