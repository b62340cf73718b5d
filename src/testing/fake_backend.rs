// In-process stand-in for the chai backend used by tests

use crate::api::client::BackendClient;
use crate::models::id::RecordId;
use crate::models::order::{MockPayment, NewOrder, Order};
use crate::models::post::{NewPost, Post};
use crate::models::user::{NewUser, User};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct FakeDb {
    users: Vec<User>,
    posts: Vec<Post>,
    orders: Vec<Order>,
    next_id: u64,
    reject_posts: bool,
    reject_orders: bool,
    reject_user_create: bool,
    reject_listing: bool,
    raw_posts: Option<serde_json::Value>,
    settle_as: Option<String>,
}

impl FakeDb {
    fn next_id(&mut self, prefix: &str) -> RecordId {
        self.next_id += 1;
        RecordId::Text(format!("{}{}", prefix, self.next_id))
    }
}

/// Records every request it serves, keyed by `"<METHOD> <path>"`
#[derive(Default)]
pub struct FakeBackend {
    db: Mutex<FakeDb>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakeBackend {
    /// Serve a fresh fake on an ephemeral port and return a client for it
    pub async fn start() -> (BackendClient, Arc<Self>) {
        let backend = Arc::new(Self::default());

        let router = Router::new()
            .route("/api/users", get(find_user).post(create_user))
            .route("/api/posts", get(list_posts).post(create_post))
            .route("/api/orders", post(create_order))
            .route("/api/payments/mock-complete", post(mock_complete))
            .with_state(Arc::clone(&backend));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client =
            BackendClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();

        (client, backend)
    }

    fn record(&self, endpoint: &str) {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_insert(0) += 1;
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn seed_user(&self, handle: &str) -> User {
        let mut db = self.db.lock().unwrap();
        let user = User {
            id: db.next_id("u"),
            handle: handle.to_string(),
            name: "Seeded".to_string(),
            university: "RVU".to_string(),
            bio: String::new(),
        };
        db.users.push(user.clone());
        user
    }

    pub fn remove_user(&self, handle: &str) {
        self.db.lock().unwrap().users.retain(|user| user.handle != handle);
    }

    pub fn users(&self) -> Vec<User> {
        self.db.lock().unwrap().users.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.db.lock().unwrap().posts.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.db.lock().unwrap().orders.clone()
    }

    pub fn reject_posts(&self, reject: bool) {
        self.db.lock().unwrap().reject_posts = reject;
    }

    pub fn reject_orders(&self, reject: bool) {
        self.db.lock().unwrap().reject_orders = reject;
    }

    pub fn reject_listing(&self, reject: bool) {
        self.db.lock().unwrap().reject_listing = reject;
    }

    /// Answer `GET /api/posts` with this body verbatim
    pub fn serve_raw_posts(&self, body: serde_json::Value) {
        self.db.lock().unwrap().raw_posts = Some(body);
    }

    pub fn reject_user_create(&self, reject: bool) {
        self.db.lock().unwrap().reject_user_create = reject;
    }

    /// Force the status reported by mock-complete regardless of the request
    pub fn settle_as(&self, status: &str) {
        self.db.lock().unwrap().settle_as = Some(status.to_string());
    }
}

async fn find_user(
    State(backend): State<Arc<FakeBackend>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    backend.record("GET /api/users");

    let handle = params.get("handle").cloned().unwrap_or_default();
    let db = backend.db.lock().unwrap();
    match db.users.iter().find(|user| user.handle == handle) {
        Some(user) => Json(user.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "user not found").into_response(),
    }
}

async fn create_user(
    State(backend): State<Arc<FakeBackend>>,
    Json(new_user): Json<NewUser>,
) -> Response {
    backend.record("POST /api/users");

    let mut db = backend.db.lock().unwrap();
    if db.reject_user_create {
        return (StatusCode::INTERNAL_SERVER_ERROR, "nope").into_response();
    }

    let user = User {
        id: db.next_id("u"),
        handle: new_user.handle,
        name: new_user.name,
        university: new_user.university,
        bio: new_user.bio,
    };
    db.users.push(user.clone());
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn list_posts(State(backend): State<Arc<FakeBackend>>) -> Response {
    backend.record("GET /api/posts");

    let db = backend.db.lock().unwrap();
    if db.reject_listing {
        return (StatusCode::INTERNAL_SERVER_ERROR, "nope").into_response();
    }
    if let Some(raw) = &db.raw_posts {
        return Json(raw.clone()).into_response();
    }
    Json(db.posts.clone()).into_response()
}

async fn create_post(
    State(backend): State<Arc<FakeBackend>>,
    Json(new_post): Json<NewPost>,
) -> Response {
    backend.record("POST /api/posts");

    let mut db = backend.db.lock().unwrap();
    if db.reject_posts {
        return (StatusCode::INTERNAL_SERVER_ERROR, "nope").into_response();
    }

    let post = Post {
        id: db.next_id("p"),
        author_id: Some(new_post.author_id),
        text: new_post.text,
        tags: new_post.tags,
        created_at: Some(serde_json::json!("2025-03-14T09:26:53Z")),
    };
    db.posts.push(post.clone());
    (StatusCode::CREATED, Json(post)).into_response()
}

async fn create_order(
    State(backend): State<Arc<FakeBackend>>,
    Json(new_order): Json<NewOrder>,
) -> Response {
    backend.record("POST /api/orders");

    let mut db = backend.db.lock().unwrap();
    if db.reject_orders {
        return (StatusCode::BAD_REQUEST, "nope").into_response();
    }

    let order = Order {
        id: db.next_id("o"),
        user_id: new_order.user_id,
        items: new_order.items,
        total_amount: f64::from(new_order.total_amount),
        payment_status: "pending".to_string(),
    };
    db.orders.push(order.clone());
    (StatusCode::CREATED, Json(order)).into_response()
}

async fn mock_complete(
    State(backend): State<Arc<FakeBackend>>,
    Json(payment): Json<MockPayment>,
) -> Response {
    backend.record("POST /api/payments/mock-complete");

    let mut db = backend.db.lock().unwrap();
    let fallback = if payment.success { "success" } else { "failed" };
    let status = db.settle_as.clone().unwrap_or_else(|| fallback.to_string());

    match db.orders.iter_mut().find(|order| order.id == payment.order_id) {
        Some(order) => {
            order.payment_status = status;
            Json(order.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "order not found").into_response(),
    }
}
