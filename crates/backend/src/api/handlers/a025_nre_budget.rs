use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use contracts::domain::a025_nre_budget::{
    nre_analytics, AnalyticsGroupBy, NreAnalytics, NreBudget, NreBudgetDto,
};
use serde::Deserialize;

use crate::domain::a025_nre_budget::{analytics_export, payment_schedule, service};
use crate::shared::config;
use crate::shared::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub group_by: AnalyticsGroupBy,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn budgets_from(dtos: &[NreBudgetDto]) -> Result<Vec<NreBudget>, ApiError> {
    dtos.iter()
        .map(NreBudget::from_dto)
        .collect::<Result<Vec<_>, _>>()
        .map_err(ApiError::BadRequest)
}

fn csv_attachment(csv: String, file_name: String) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", file_name);
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response()
}

/// POST /api/a025/nre-budget/prepare
pub async fn prepare(Json(dto): Json<NreBudgetDto>) -> Result<Json<NreBudget>, ApiError> {
    let budget = service::prepare_for_submit(&config::get().reference_codes, &dto, today())?;
    Ok(Json(budget))
}

/// POST /api/a025/nre-budget/payment-schedule.csv
pub async fn payment_schedule_csv(
    Json(dtos): Json<Vec<NreBudgetDto>>,
) -> Result<Response, ApiError> {
    let budgets = budgets_from(&dtos)?;
    let today = today();
    let csv = payment_schedule::export_csv(&budgets, today)?;
    Ok(csv_attachment(csv, payment_schedule::file_name(today)))
}

/// POST /api/a025/nre-budget/analytics?group_by=project|sku|category|vendor
pub async fn analytics(
    Query(query): Query<AnalyticsQuery>,
    Json(dtos): Json<Vec<NreBudgetDto>>,
) -> Result<Json<NreAnalytics>, ApiError> {
    let budgets = budgets_from(&dtos)?;
    Ok(Json(nre_analytics(&budgets, query.group_by)))
}

/// POST /api/a025/nre-budget/analytics.csv
pub async fn analytics_csv(Json(dtos): Json<Vec<NreBudgetDto>>) -> Result<Response, ApiError> {
    let budgets = budgets_from(&dtos)?;
    let csv = analytics_export::export_csv(&budgets)?;
    Ok(csv_attachment(csv, analytics_export::file_name(today())))
}
