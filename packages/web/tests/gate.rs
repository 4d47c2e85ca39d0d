use api::auth::cookies::ACCESS_TOKEN_COOKIE;
use api::auth::TokenKeys;
use api::client::LoginTokens;
use api::config::Backend;
use api::models::{Event, EventStatus, Payment, PaymentStatus, Role, UserProfile, UserStatus};
use api::{ApiResponse, BackendClient};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::{AppendHeaders, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use tower::ServiceExt;
use web::state::AppState;

const SECRET: &str = "web-gate-secret";

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn app(base_url: String) -> Router {
    let backend = BackendClient::new(&Backend {
        url: base_url,
        timeout_secs: 2,
    })
    .unwrap();
    web::app(AppState::with_parts(TokenKeys::new(SECRET, 600), backend))
}

fn cookie_for(role: Role) -> String {
    let token = TokenKeys::new(SECRET, 600)
        .issue("someone@eventora.dev", role)
        .unwrap();
    format!("{ACCESS_TOKEN_COOKIE}={token}")
}

fn page(uri: &str, cookie: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

async fn html(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_anonymous_dashboard_redirects_to_login() {
    let app = app(unreachable_backend().await);
    for path in ["/dashboard", "/user/dashboard", "/host/dashboard", "/admin/dashboard"] {
        let response = app.clone().oneshot(page(path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/login");
    }
}

#[tokio::test]
async fn test_wrong_role_redirects_to_login() {
    let app = app(unreachable_backend().await);

    let response = app
        .clone()
        .oneshot(page("/admin/dashboard", Some(cookie_for(Role::Host))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    // No hierarchy: ADMIN does not get into HOST pages either.
    let response = app
        .clone()
        .oneshot(page("/host/dashboard", Some(cookie_for(Role::Admin))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_matching_role_renders_with_role_sidebar() {
    let app = app(unreachable_backend().await);
    let response = app
        .oneshot(page("/admin/dashboard", Some(cookie_for(Role::Admin))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = html(response).await;
    assert!(page.contains("data-role=\"ADMIN\""));
    assert!(page.contains("Manage Users"));
    assert!(!page.contains("/host/dashboard"));
    // Backend is down, so the page runs on token claims alone.
    assert!(page.contains("someone@eventora.dev"));
    assert!(page.contains("temporarily unavailable"));
}

#[tokio::test]
async fn test_generic_dashboard_follows_role() {
    let app = app(unreachable_backend().await);
    let response = app
        .oneshot(page("/dashboard", Some(cookie_for(Role::User))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = html(response).await;
    assert!(page.contains("data-role=\"USER\""));
    assert!(page.contains("My Bookings"));
}

#[tokio::test]
async fn test_forged_cookie_is_anonymous() {
    let app = app(unreachable_backend().await);
    let forged = TokenKeys::new("other-secret", 600)
        .issue("someone@eventora.dev", Role::Admin)
        .unwrap();
    let response = app
        .oneshot(page(
            "/admin/dashboard",
            Some(format!("{ACCESS_TOKEN_COOKIE}={forged}")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_page_redirects_signed_in_visitors() {
    let app = app(unreachable_backend().await);

    let response = app.clone().oneshot(page("/login", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(html(response).await.contains("name=\"password\""));

    let response = app
        .oneshot(page("/login", Some(cookie_for(Role::Host))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn test_home_renders_without_backend() {
    let app = app(unreachable_backend().await);
    let response = app.oneshot(page("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = html(response).await;
    assert!(page.contains("No upcoming events yet."));
    assert!(page.contains("href=\"/login\""));
}

#[tokio::test]
async fn test_logout_clears_cookies_even_if_backend_is_down() {
    let app = app(unreachable_backend().await);
    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .header(header::COOKIE, cookie_for(Role::User))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("accessToken=;")));
    assert!(cookies.iter().any(|c| c.starts_with("refreshToken=;")));
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn test_login_relays_backend_cookies() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                AppendHeaders([
                    (header::SET_COOKIE, "accessToken=aaa; HttpOnly; Path=/"),
                    (header::SET_COOKIE, "refreshToken=rrr; HttpOnly; Path=/"),
                ]),
                Json(ApiResponse::ok(
                    "User logged in successfully",
                    LoginTokens {
                        access_token: "aaa".to_string(),
                        refresh_token: "rrr".to_string(),
                    },
                )),
            )
        }),
    );
    let app = app(spawn_backend(router).await);

    let response = app
        .oneshot(post_form("/login", "email=ada%40eventora.dev&password=password123"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    assert_eq!(
        set_cookies(&response),
        vec![
            "accessToken=aaa; HttpOnly; Path=/".to_string(),
            "refreshToken=rrr; HttpOnly; Path=/".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_rejected_login_shows_backend_message() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::failure("Invalid email or password")),
            )
        }),
    );
    let app = app(spawn_backend(router).await);

    let response = app
        .oneshot(post_form("/login", "email=ada%40eventora.dev&password=nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&response).is_empty());
    assert!(html(response).await.contains("Invalid email or password"));
}

#[tokio::test]
async fn test_enriched_user_dashboard_shows_metrics() {
    let profile = UserProfile {
        id: "u1".to_string(),
        email: "someone@eventora.dev".to_string(),
        role: Role::User,
        status: UserStatus::Active,
        full_name: Some("Ada Lovelace".to_string()),
        profile_image: None,
    };
    let events = vec![Event {
        id: "e1".to_string(),
        title: "Rust Meetup".to_string(),
        category: None,
        location: None,
        date: Utc::now() + Duration::days(7),
        fee: 40.0,
        host_id: "h1".to_string(),
        capacity: 50,
        status: EventStatus::Open,
    }];
    let payments = vec![Payment {
        id: "p1".to_string(),
        event_id: "e1".to_string(),
        user_id: "u1".to_string(),
        amount: 40.0,
        status: PaymentStatus::Paid,
        created_at: Utc::now(),
    }];

    let router = Router::new()
        .route(
            "/auth/me",
            get(move || {
                let profile = profile.clone();
                async move { Json(ApiResponse::ok("Profile", profile)) }
            }),
        )
        .route(
            "/events",
            get(move || {
                let events = events.clone();
                async move { Json(ApiResponse::ok("Events", events)) }
            }),
        )
        .route(
            "/payments",
            get(move || {
                let payments = payments.clone();
                async move { Json(ApiResponse::ok("Payments", payments)) }
            }),
        );
    let app = app(spawn_backend(router).await);

    let response = app
        .oneshot(page("/user/dashboard", Some(cookie_for(Role::User))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = html(response).await;
    assert!(page.contains("Ada Lovelace"));
    assert!(page.contains("$40.00"));
    assert!(!page.contains("temporarily unavailable"));
}
