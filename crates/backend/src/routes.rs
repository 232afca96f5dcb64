use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // REFERENCE CODES
        // ========================================
        .route(
            "/api/reference-codes/org-codes",
            get(handlers::reference_codes::org_codes),
        )
        .route(
            "/api/reference-codes/nre/session",
            post(handlers::reference_codes::start_nre_session),
        )
        .route(
            "/api/reference-codes/nre/preview",
            post(handlers::reference_codes::preview_nre),
        )
        .route(
            "/api/reference-codes/sku/options",
            get(handlers::reference_codes::sku_options),
        )
        .route(
            "/api/reference-codes/sku/preview",
            post(handlers::reference_codes::preview_sku),
        )
        // ========================================
        // AGGREGATES
        // ========================================
        // A025 NRE Budget
        .route(
            "/api/a025/nre-budget/prepare",
            post(handlers::a025_nre_budget::prepare),
        )
        .route(
            "/api/a025/nre-budget/payment-schedule.csv",
            post(handlers::a025_nre_budget::payment_schedule_csv),
        )
        .route(
            "/api/a025/nre-budget/analytics",
            post(handlers::a025_nre_budget::analytics),
        )
        .route(
            "/api/a025/nre-budget/analytics.csv",
            post(handlers::a025_nre_budget::analytics_csv),
        )
        // A026 SKU Financial Scenario
        .route(
            "/api/a026/sku-scenario/defaults",
            get(handlers::a026_sku_scenario::defaults),
        )
        .route(
            "/api/a026/sku-scenario/rollup",
            post(handlers::a026_sku_scenario::rollup),
        )
        .route(
            "/api/a026/sku-scenario/prepare",
            post(handlers::a026_sku_scenario::prepare),
        )
}
