//! In-process HTTP server for testing API calls.

use std::sync::{Arc, Mutex};

use axum::{Router, extract::Request, middleware::Next, response::Response};
use tokio::net::TcpListener;
use url::Url;

use crate::ApiClient;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query
    pub uri: String,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

impl RecordedRequest {
    fn new(req: &Request) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };
        Self {
            method: req.method().to_string(),
            uri: req.uri().to_string(),
            authorization: header("authorization"),
            user_agent: header("user-agent"),
        }
    }
}

pub struct TestServer {
    pub api: ApiClient,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub async fn start(router: Router) -> Self {
        let requests = Arc::new(Mutex::new(Vec::<RecordedRequest>::new()));
        let recorder = requests.clone();
        let router = router.layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let recorder = recorder.clone();
                async move {
                    let recorded = RecordedRequest::new(&req);
                    recorder.lock().unwrap().push(recorded);
                    let response: Response = next.run(req).await;
                    response
                }
            },
        ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let url = Url::parse(&format!("http://{address}")).unwrap();
        Self {
            api: ApiClient::new(&url, &reqwest::Client::new()),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().unwrap()
    }
}

/// Report JSON with the given vote counters.
pub fn report_json(id: i64, up: i64, down: i64, user_vote: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": 1,
        "title": "Pothole on Main Street",
        "description": "Deep hole near the crossing",
        "category": "pothole",
        "status": "pending",
        "latitude": 60.17,
        "longitude": 24.94,
        "address": "Main Street 1",
        "upvote_count": up,
        "downvote_count": down,
        "user_vote": user_vote,
        "comment_count": 0,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "email": "citizen@example.com",
        "full_name": "Test Citizen",
        "created_at": "2024-01-01T00:00:00Z"
    })
}
