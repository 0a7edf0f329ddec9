// cortado-client/tests/client_integration.rs
// Integration tests against a loopback café API

use axum::Json;
use axum::Router;
use axum::extract::Json as JsonBody;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use cortado_client::{ApiResponse, ClientConfig, ClientError};
use shared::client::{LoginRequest, LoginResponse};
use shared::error::AppError;
use shared::models::{Order, OrderCreate, OrderItem, OrderStatus, User, UserRole, UserStatus};

fn sample_user() -> User {
    User {
        id: "u-1".to_string(),
        name: "Staff One".to_string(),
        email: "staff@cafe.example".to_string(),
        role: UserRole::Staff,
        status: UserStatus::Active,
        joined_at: 1_704_067_200_000,
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

async fn spawn_server(router: Router) -> String {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn login_handler(
    JsonBody(req): JsonBody<LoginRequest>,
) -> Json<ApiResponse<LoginResponse>> {
    assert_eq!(req.email, "staff@cafe.example");
    Json(ApiResponse::ok(LoginResponse {
        token: "tok-1".to_string(),
        user: sample_user(),
    }))
}

async fn me_handler(headers: HeaderMap) -> Response {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer tok-1") => Json(ApiResponse::ok(sample_user())).into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(AppError::not_authenticated().to_response()),
        )
            .into_response(),
    }
}

#[tokio::test]
async fn test_login_caches_token_and_attaches_bearer() {
    let router = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/me", get(me_handler));
    let base = spawn_server(router).await;

    let client = ClientConfig::new(base).build();
    assert!(client.token().is_none());

    let login = client.login("staff@cafe.example", "secret").await.unwrap();
    assert_eq!(login.token, "tok-1");
    assert_eq!(client.token().as_deref(), Some("tok-1"));

    // The cached token is attached as a bearer credential
    let me = client.me().await.unwrap();
    assert_eq!(me.email, "staff@cafe.example");
}

#[tokio::test]
async fn test_401_evicts_token() {
    let router = Router::new().route("/auth/me", get(me_handler));
    let base = spawn_server(router).await;

    let client = ClientConfig::new(base).with_token("stale-token").build();
    assert!(client.token_store().is_present());

    let err = client.me().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(
        !client.token_store().is_present(),
        "401 must evict the cached token"
    );
}

#[tokio::test]
async fn test_server_error_message_surfaced_verbatim() {
    async fn conflict() -> Response {
        (
            StatusCode::CONFLICT,
            Json(ApiResponse::<()>::error("E8002", "Email already registered")),
        )
            .into_response()
    }

    let router = Router::new().route("/users", post(conflict));
    let base = spawn_server(router).await;
    let client = ClientConfig::new(base).build();

    let payload = shared::models::UserCreate {
        name: "X".to_string(),
        email: "x@cafe.example".to_string(),
        password: "pw".to_string(),
        role: None,
    };
    let err = client.create_user(&payload).await.unwrap_err();
    assert_eq!(err.display_message(), "Email already registered");
    match err {
        ClientError::Api { status, code, .. } => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(code, "E8002");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_details_joined_when_message_empty() {
    async fn invalid() -> Response {
        let body = ApiResponse::<()>::error("E0002", "").with_details(
            [(
                "quantity".to_string(),
                serde_json::Value::String("must be positive".to_string()),
            )]
            .into_iter()
            .collect(),
        );
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }

    let router = Router::new().route("/orders", post(invalid));
    let base = spawn_server(router).await;
    let client = ClientConfig::new(base).build();

    let payload = OrderCreate {
        table_id: "t-1".to_string(),
        guest_name: None,
        items: vec![],
    };
    let err = client.create_order(&payload).await.unwrap_err();
    assert_eq!(err.display_message(), "must be positive");
}

#[tokio::test]
async fn test_create_order_returns_server_object() {
    async fn create(JsonBody(req): JsonBody<OrderCreate>) -> Json<ApiResponse<Order>> {
        // The server prices the lines and owns the total
        let items: Vec<OrderItem> = req
            .items
            .iter()
            .enumerate()
            .map(|(i, line)| OrderItem {
                id: format!("i-{}", i),
                product_id: line.product_id.clone(),
                name: format!("Product {}", line.product_id),
                quantity: line.quantity,
                unit_price: 350,
            })
            .collect();
        let total = items.iter().map(|i| i.line_total()).sum();
        Json(ApiResponse::ok(Order {
            id: "o-1".to_string(),
            table_id: req.table_id,
            guest_name: req.guest_name,
            items,
            status: OrderStatus::New,
            total,
            created_at: 1_704_067_200_000,
        }))
    }

    let router = Router::new().route("/orders", post(create));
    let base = spawn_server(router).await;
    let client = ClientConfig::new(base).build();

    let payload = OrderCreate {
        table_id: "t-7".to_string(),
        guest_name: Some("Ada".to_string()),
        items: vec![shared::models::OrderItemCreate {
            product_id: "p-1".to_string(),
            quantity: 2,
        }],
    };
    let order = client.create_order(&payload).await.unwrap();
    assert_eq!(order.id, "o-1");
    assert_eq!(order.table_id, "t-7");
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.total, 700);
    assert_eq!(order.items_total(), order.total);
}

#[tokio::test]
async fn test_network_error_maps_to_connectivity_message() {
    // Nothing is listening on this port
    let client = ClientConfig::new("http://127.0.0.1:1")
        .with_timeout(2)
        .build();
    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(
        err.display_message(),
        "Unable to reach the server. Please check your connection."
    );
}
