//! Route definitions for the cafe stock tracker

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes - item catalog
        .nest("/items", item_routes())
        // Protected routes - stock movements and levels
        .nest("/inventory", inventory_routes())
        // Protected routes - purchase plans
        .nest("/plans", plan_routes())
        // Protected routes - supplier directory
        .nest("/suppliers", supplier_routes())
        // Protected routes - account management
        .nest("/users", user_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/setup", post(handlers::setup))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
}

/// Item catalog routes (protected; mutations owner-gated in handlers)
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/:item_id",
            put(handlers::update_item).delete(handlers::delete_item),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Inventory routes (protected)
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movements",
            get(handlers::list_movements).post(handlers::record_movement),
        )
        .route("/stock", get(handlers::stock_overview))
        .route("/stock/:item_id", get(handlers::get_stock))
        .route("/low-stock", get(handlers::low_stock))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Purchase plan routes (protected)
fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_plans).post(handlers::add_plan))
        .route("/:plan_id/complete", post(handlers::complete_plan))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Supplier directory routes (protected; deletion owner-gated in handler)
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route("/:supplier_id", delete(handlers::delete_supplier))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Account management routes (protected, owner-gated in handlers)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route_layer(middleware::from_fn(auth_middleware))
}
