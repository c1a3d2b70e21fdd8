pub mod config;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod state;
pub mod store;
pub mod utils;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        // Public routes
        .route("/", get(|| async { Redirect::permanent("/login") }))
        .route("/login", get(handlers::auth::login_page).post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))

        // Pages (session required)
        .route("/dashboard", get(handlers::dashboard))
        .route("/leads", get(handlers::leads::leads_list))
        .route("/leads/:id", get(handlers::leads::lead_detail))
        .route("/notifications", get(handlers::notifications::notifications_page))
        .route(
            "/notifications/read-all",
            post(handlers::notifications::mark_all_notifications_read),
        )
        .route(
            "/notifications/:id/read",
            post(handlers::notifications::mark_notification_read),
        )
        .route("/communications", get(handlers::communications::communications_page))
        .route("/analytics", get(handlers::analytics::analytics_page))
        .route("/competitive", get(handlers::competitive::competitive_page))

        // JSON API
        .route("/api/leads", get(handlers::api::leads))
        .route("/api/notifications", get(handlers::api::notifications))
        .route("/api/metrics", get(handlers::api::metrics))
        .route("/api/score", post(handlers::api::score))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CookieManagerLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
