//! End-to-end tests for the Shopfront client.
//!
//! Every test runs against an in-process fake backend: an axum router
//! speaking the backend REST contract (envelope responses, bearer-token
//! auth, stock-checked order submission) on an ephemeral port. A
//! [`TestContext`] pairs one backend with one temporary data directory,
//! so each test gets a fully isolated client and no external services
//! are needed.
//!
//! The fake backend accepts exactly one set of credentials
//! ([`TEST_EMAIL`] / [`TEST_PASSWORD`]) and one bearer token
//! ([`TEST_TOKEN`]); everything else is rejected with the same envelope
//! shapes the real backend produces.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test harness: a panic here is a test failure.
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::{Value, json};

use shopfront_client::{App, ClientConfig, LocalStore};

/// Email accepted by the fake backend's login endpoint.
pub const TEST_EMAIL: &str = "ada@example.com";

/// Password accepted by the fake backend's login endpoint.
pub const TEST_PASSWORD: &str = "hunter2";

/// The only bearer token the fake backend honours.
pub const TEST_TOKEN: &str = "tok-valid";

// =============================================================================
// Fake backend
// =============================================================================

/// Shared state behind the fake backend's handlers.
pub struct BackendState {
    products: Vec<Value>,
    orders: Mutex<Vec<Value>>,
    order_attempts: AtomicUsize,
    product_fetches: AtomicUsize,
}

impl BackendState {
    fn new() -> Self {
        Self {
            products: vec![
                fixture_product("1", "Wireless Headphones", "Noise cancelling over-ear headphones", 299.99, "Electronics", 15),
                fixture_product("2", "Leather Backpack", "Hand-stitched full-grain leather backpack", 89.99, "Fashion", 1),
                fixture_product("3", "Coffee Maker", "Programmable drip coffee maker", 159.99, "Home", 8),
            ],
            orders: Mutex::new(Vec::new()),
            order_attempts: AtomicUsize::new(0),
            product_fetches: AtomicUsize::new(0),
        }
    }
}

fn fixture_product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    stock: u32,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": description,
        "price": price,
        "image": format!("https://images.example.com/{id}.jpg"),
        "category": category,
        "stock": stock,
        "rating": 4.5,
        "reviews": 120,
    })
}

fn fixture_user() -> Value {
    json!({ "id": "1", "name": "Ada", "email": TEST_EMAIL })
}

/// An in-process fake backend bound to an ephemeral port.
pub struct FakeBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
}

impl FakeBackend {
    /// Start the backend on `127.0.0.1:0` and serve until dropped.
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::new());
        let app = router(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// The API base URL, including the `/api` prefix.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// The server root, without the `/api` prefix.
    #[must_use]
    pub fn root_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// How many order submissions reached the backend, accepted or not.
    #[must_use]
    pub fn order_attempts(&self) -> usize {
        self.state.order_attempts.load(Ordering::SeqCst)
    }

    /// How many orders the backend accepted.
    #[must_use]
    pub fn orders_placed(&self) -> usize {
        self.state.orders.lock().unwrap().len()
    }

    /// How many product-detail requests reached the backend.
    #[must_use]
    pub fn product_fetches(&self) -> usize {
        self.state.product_fetches.load(Ordering::SeqCst)
    }
}

fn router(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/categories", get(list_categories))
        .route("/api/products/{id}", get(get_product))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/profile", get(profile))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn ok(data: Value) -> Reply {
    Ok(Json(json!({ "success": true, "data": data })))
}

fn fail(status: StatusCode, message: &str) -> Reply {
    Err((status, Json(json!({ "success": false, "message": message }))))
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TEST_TOKEN}"))
}

async fn list_products(
    State(state): State<Arc<BackendState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let category = params.get("category");
    let search = params.get("search").map(|s| s.to_lowercase());

    let products: Vec<Value> = state
        .products
        .iter()
        .filter(|p| {
            let category_ok =
                category.is_none_or(|c| p["category"].as_str() == Some(c.as_str()));
            let search_ok = search.as_deref().is_none_or(|q| {
                let name = p["name"].as_str().unwrap_or_default().to_lowercase();
                let description = p["description"].as_str().unwrap_or_default().to_lowercase();
                name.contains(q) || description.contains(q)
            });
            category_ok && search_ok
        })
        .cloned()
        .collect();

    ok(Value::Array(products))
}

async fn list_categories(State(state): State<Arc<BackendState>>) -> Reply {
    let mut categories: Vec<String> = state
        .products
        .iter()
        .filter_map(|p| p["category"].as_str().map(String::from))
        .collect();
    categories.dedup();
    ok(json!(categories))
}

async fn get_product(State(state): State<Arc<BackendState>>, Path(id): Path<String>) -> Reply {
    state.product_fetches.fetch_add(1, Ordering::SeqCst);
    state.products.iter().find(|p| p["id"] == id.as_str()).map_or_else(
        || fail(StatusCode::NOT_FOUND, "Product not found"),
        |product| ok(product.clone()),
    )
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["email"] == TEST_EMAIL && body["password"] == TEST_PASSWORD {
        ok(json!({ "user": fixture_user(), "token": TEST_TOKEN }))
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid email or password")
    }
}

async fn register(Json(body): Json<Value>) -> Reply {
    if body["email"] == TEST_EMAIL {
        return fail(StatusCode::BAD_REQUEST, "Email already registered");
    }
    let user = json!({
        "id": "2",
        "name": body["name"],
        "email": body["email"],
    });
    ok(json!({ "user": user, "token": TEST_TOKEN }))
}

async fn profile(headers: HeaderMap) -> Reply {
    if authorized(&headers) {
        ok(fixture_user())
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid or expired token")
    }
}

async fn create_order(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    state.order_attempts.fetch_add(1, Ordering::SeqCst);

    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid or expired token");
    }

    let items = body["items"].as_array().cloned().unwrap_or_default();
    if items.is_empty() {
        return fail(StatusCode::BAD_REQUEST, "Order has no items");
    }

    let mut total_cents: i64 = 0;
    let mut lines = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let product = &item["product"];
        let quantity = item["quantity"].as_u64().unwrap_or(0);

        let stock = state
            .products
            .iter()
            .find(|p| p["id"] == product["id"])
            .map_or(0, |p| p["stock"].as_u64().unwrap_or(0));
        if quantity > stock {
            let name = product["name"].as_str().unwrap_or("product");
            return fail(
                StatusCode::BAD_REQUEST,
                &format!("Insufficient stock for {name}"),
            );
        }

        let price_cents = to_cents(product["price"].as_f64().unwrap_or(0.0));
        let subtotal_cents = price_cents * i64::try_from(quantity).unwrap_or(0);
        total_cents += subtotal_cents;

        lines.push(json!({
            "id": index + 1,
            "productId": product["id"],
            "quantity": quantity,
            "price": from_cents(price_cents),
            "subtotal": from_cents(subtotal_cents),
            "product": product,
        }));
    }

    let mut orders = state.orders.lock().unwrap();
    let order = json!({
        "id": (orders.len() + 1).to_string(),
        "userId": "1",
        "total": from_cents(total_cents),
        "status": "pending",
        "createdAt": "2024-06-01T10:00:00",
        "updatedAt": "2024-06-01T10:00:00",
        "items": lines,
    });
    orders.push(order.clone());
    ok(order)
}

async fn list_orders(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid or expired token");
    }
    let orders = state.orders.lock().unwrap();
    ok(Value::Array(orders.clone()))
}

async fn get_order(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Invalid or expired token");
    }
    let orders = state.orders.lock().unwrap();
    orders.iter().find(|o| o["id"] == id.as_str()).map_or_else(
        || fail(StatusCode::NOT_FOUND, "Order not found"),
        |order| ok(order.clone()),
    )
}

// The backend stores money in cents; prices travel as floats on the wire.
#[allow(clippy::cast_possible_truncation)]
fn to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

#[allow(clippy::cast_precision_loss)]
fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

// =============================================================================
// Test context
// =============================================================================

/// One fake backend plus one temporary data directory.
pub struct TestContext {
    /// The running fake backend.
    pub backend: FakeBackend,
    data_dir: tempfile::TempDir,
}

impl TestContext {
    /// Spawn a backend and allocate a fresh data directory.
    pub async fn spawn() -> Self {
        Self {
            backend: FakeBackend::spawn().await,
            data_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Build an [`App`] pointed at the backend. Calling this again after
    /// dropping the first models a client restart over the same local
    /// state.
    #[must_use]
    pub fn app(&self) -> App {
        let config = ClientConfig::new(&self.backend.api_url(), self.data_dir.path()).unwrap();
        App::new(config).unwrap()
    }

    /// Direct access to the local store behind the app, for seeding and
    /// inspecting records.
    #[must_use]
    pub fn store(&self) -> LocalStore {
        LocalStore::open(self.data_dir.path()).unwrap()
    }
}
