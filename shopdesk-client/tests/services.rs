// shopdesk-client/tests/services.rs
// Resource services: envelope unwrapping, query building, missing endpoints

mod common;

use std::sync::Arc;

use common::MockBackend;
use rust_decimal::Decimal;
use shared::models::{OrderStatus, ProductCreate, VoucherCreate, DiscountType};
use shared::query::{OrderFilters, ProductFilters, UserFilters};
use shopdesk_client::{ClientConfig, ClientError, LaunchRoute, MemorySessionStore, ShopdeskClient};

fn shopdesk(url: &str) -> ShopdeskClient {
    ShopdeskClient::new(&ClientConfig::new(url), Arc::new(MemorySessionStore::new())).unwrap()
}

const THREE_PRODUCTS: &str = r#"{
    "success": true,
    "data": [
        {"_id":"p1","name":"Green tea","price":3.5,"stock":10},
        {"_id":"p2","name":"Black tea","price":4,"stock":0,"isActive":false},
        {"_id":"p3","name":"Oolong","price":6.25,"stock":2,"isFeatured":true}
    ],
    "pagination": {"total": 3, "totalPages": 1, "page": 1, "limit": 10}
}"#;

#[tokio::test]
async fn test_list_unwraps_envelope() {
    let backend = MockBackend::new();
    backend.respond("GET", "/products", 200, THREE_PRODUCTS);
    let client = shopdesk(&backend.start().await);

    let page = client
        .products()
        .list(1, 10, &ProductFilters::default())
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].name, "Green tea");
    assert!(!page.items[1].is_active);
    assert!(page.items[2].is_featured);
}

#[tokio::test]
async fn test_list_query_only_contains_present_filters() {
    let backend = MockBackend::new();
    backend.respond("GET", "/products", 200, r#"{"success":true,"data":[]}"#);
    let client = shopdesk(&backend.start().await);

    let filters = ProductFilters {
        search: Some("tea".into()),
        is_active: Some(true),
        ..Default::default()
    };
    let page = client.products().list(2, 20, &filters).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(
        backend.last().query.as_deref(),
        Some("page=2&limit=20&search=tea&isActive=true")
    );
}

#[tokio::test]
async fn test_order_filters_serialize_status_and_date() {
    let backend = MockBackend::new();
    backend.respond("GET", "/orders", 200, r#"{"success":true,"data":[]}"#);
    let client = shopdesk(&backend.start().await);

    let filters = OrderFilters {
        search: None,
        status: Some(OrderStatus::Shipping),
        date: chrono::NaiveDate::from_ymd_opt(2024, 3, 9),
    };
    client.orders().list(1, 10, &filters).await.unwrap();

    assert_eq!(
        backend.last().query.as_deref(),
        Some("page=1&limit=10&status=shipping&date=2024-03-09")
    );
}

#[tokio::test]
async fn test_users_404_is_empty_page() {
    let backend = MockBackend::new();
    let client = shopdesk(&backend.start().await);

    let page = client
        .users()
        .list(1, 10, &UserFilters::default())
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(backend.last().path, "/users");
}

#[tokio::test]
async fn test_user_stats_404_is_zeroed() {
    let backend = MockBackend::new();
    let client = shopdesk(&backend.start().await);

    let stats = client.users().stats().await.unwrap();
    assert_eq!(stats, Default::default());
}

#[tokio::test]
async fn test_products_404_propagates() {
    let backend = MockBackend::new();
    let client = shopdesk(&backend.start().await);

    let err = client
        .products()
        .list(1, 10, &ProductFilters::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_users_500_still_propagates() {
    let backend = MockBackend::new();
    backend.respond("GET", "/users", 500, r#"{"message":"Database down"}"#);
    let client = shopdesk(&backend.start().await);

    let err = client
        .users()
        .list(1, 10, &UserFilters::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Database down");
}

#[tokio::test]
async fn test_success_false_envelope_is_an_error() {
    let backend = MockBackend::new();
    backend.respond(
        "GET",
        "/categories",
        200,
        r#"{"success":false,"message":"Not allowed"}"#,
    );
    let client = shopdesk(&backend.start().await);

    let err = client.categories().list_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Not allowed");
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_network() {
    let backend = MockBackend::new();
    let client = shopdesk(&backend.start().await);

    let payload = ProductCreate {
        name: String::new(),
        description: None,
        price: Decimal::new(100, 0),
        sale_price: None,
        stock: 1,
        category: None,
        images: vec![],
        is_featured: false,
    };
    let err = client.products().create(&payload).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.to_string(), "Product name is required");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let backend = MockBackend::new();
    backend.respond("DELETE", "/banners/b1", 204, "");
    let client = shopdesk(&backend.start().await);

    client.banners().delete("b1").await.unwrap();
    assert_eq!(backend.last().method, "DELETE");
}

#[tokio::test]
async fn test_update_order_status_patches_status() {
    let backend = MockBackend::new();
    backend.respond(
        "PATCH",
        "/orders/o1/status",
        200,
        r#"{"success":true,"data":{"_id":"o1","customerName":"An","total":120,"status":"shipping"}}"#,
    );
    let client = shopdesk(&backend.start().await);

    let order = client
        .orders()
        .update_status("o1", OrderStatus::Shipping)
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Shipping);
    assert_eq!(backend.last().body, r#"{"status":"shipping"}"#);
}

#[tokio::test]
async fn test_voucher_code_is_normalized() {
    let backend = MockBackend::new();
    backend.respond(
        "POST",
        "/vouchers",
        201,
        r#"{"success":true,"data":{"_id":"v1","code":"SUMMER","discountType":"percent","discountValue":10}}"#,
    );
    let client = shopdesk(&backend.start().await);

    let payload = VoucherCreate {
        code: " summer ".into(),
        description: None,
        discount_type: DiscountType::Percent,
        discount_value: Decimal::new(10, 0),
        min_order_value: None,
        max_discount: None,
        usage_limit: None,
        starts_at: None,
        expires_at: None,
    };
    client.vouchers().create(&payload).await.unwrap();

    let body: serde_json::Value = serde_json::from_str(&backend.last().body).unwrap();
    assert_eq!(body["code"], "SUMMER");
}

#[tokio::test]
async fn test_banners_sorted_by_position() {
    let backend = MockBackend::new();
    backend.respond(
        "GET",
        "/banners",
        200,
        r#"{"success":true,"data":[
            {"_id":"b2","image":"http://x/2.png","position":2},
            {"_id":"b1","image":"http://x/1.png","position":1}
        ]}"#,
    );
    let client = shopdesk(&backend.start().await);

    let banners = client.banners().list_all().await.unwrap();
    let ids: Vec<_> = banners.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2"]);
}

#[tokio::test]
async fn test_login_persists_session_and_logout_clears_it() {
    let backend = MockBackend::new();
    backend.respond(
        "POST",
        "/auth/login",
        200,
        r#"{"success":true,"data":{"token":"jwt-1","user":{"id":"u1","email":"admin@shop.test","role":"admin"}}}"#,
    );
    backend.respond("GET", "/branches", 200, r#"{"success":true,"data":[]}"#);
    let client = shopdesk(&backend.start().await);
    assert_eq!(client.launch_route(), LaunchRoute::Login);

    client
        .auth()
        .login("admin@shop.test", "secret123")
        .await
        .unwrap();
    assert_eq!(client.launch_route(), LaunchRoute::Dashboard);

    client.branches().list_all().await.unwrap();
    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer jwt-1"));

    client.auth().logout().unwrap();
    assert_eq!(client.launch_route(), LaunchRoute::Login);
    client.branches().list_all().await.unwrap();
    assert!(backend.last().authorization.is_none());
}

#[tokio::test]
async fn test_login_rejects_non_admin() {
    let backend = MockBackend::new();
    backend.respond(
        "POST",
        "/auth/login",
        200,
        r#"{"success":true,"data":{"token":"jwt-2","user":{"id":"u2","email":"shopper@shop.test","role":"user"}}}"#,
    );
    let client = shopdesk(&backend.start().await);

    let err = client
        .auth()
        .login("shopper@shop.test", "secret123")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(client.launch_route(), LaunchRoute::Login);
}

#[tokio::test]
async fn test_login_wrong_password_message() {
    let backend = MockBackend::new();
    backend.respond(
        "POST",
        "/auth/login",
        401,
        r#"{"success":false,"message":"Invalid email or password"}"#,
    );
    let client = shopdesk(&backend.start().await);

    let err = client
        .auth()
        .login("admin@shop.test", "wrong-pass")
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid email or password");
}

#[tokio::test]
async fn test_login_rejects_malformed_email_locally() {
    let backend = MockBackend::new();
    let client = shopdesk(&backend.start().await);

    let err = client.auth().login("admin", "secret123").await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.to_string(), "Invalid email address");
    assert!(backend.requests().is_empty());
    assert_eq!(client.launch_route(), LaunchRoute::Login);
}

#[tokio::test]
async fn test_orders_page_survives_unrecognized_status() {
    let backend = MockBackend::new();
    backend.respond(
        "GET",
        "/orders",
        200,
        r#"{"success":true,"data":[
            {"_id":"o1","customerName":"An","total":100,"status":"delivered"},
            {"_id":"o2","customerName":"Binh","total":50,"status":"refunded"}
        ],"pagination":{"total":2}}"#,
    );
    let client = shopdesk(&backend.start().await);

    let page = client
        .orders()
        .list(1, 10, &OrderFilters::default())
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].status, OrderStatus::Unknown);

    let err = client
        .orders()
        .update_status("o2", OrderStatus::Unknown)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_dashboard_falls_back_per_part() {
    let backend = MockBackend::new();
    backend.respond(
        "GET",
        "/orders",
        200,
        r#"{"success":true,"data":[
            {"_id":"o1","customerName":"An","total":100,"status":"delivered"},
            {"_id":"o2","customerName":"Binh","total":50,"status":"cancelled"},
            {"_id":"o3","customerName":"Chi","total":25.5,"status":"pending"}
        ],"pagination":{"total":42}}"#,
    );
    backend.respond("GET", "/products", 500, "oops");
    let client = shopdesk(&backend.start().await);

    let summary = client.dashboard().summary().await;

    assert_eq!(summary.order_total, 42);
    assert_eq!(summary.recent_orders.len(), 3);
    assert_eq!(summary.recent_revenue, Decimal::new(1255, 1));
    assert_eq!(summary.product_total, 0);
    assert_eq!(summary.user_stats, Default::default());
}
