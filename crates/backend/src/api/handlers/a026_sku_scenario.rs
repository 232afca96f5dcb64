use axum::Json;
use contracts::domain::a026_sku_scenario::{SkuFinancialScenario, SkuScenarioDto};
use contracts::shared::cost_rollup::{CostRollup, CostWorksheet};

use crate::domain::a026_sku_scenario::service;
use crate::shared::config;
use crate::shared::error::ApiError;

/// GET /api/a026/sku-scenario/defaults
pub async fn defaults() -> Json<CostWorksheet> {
    Json(service::default_worksheet(&config::get().cost_defaults))
}

/// POST /api/a026/sku-scenario/rollup
pub async fn rollup(Json(worksheet): Json<CostWorksheet>) -> Json<CostRollup> {
    Json(service::rollup(&worksheet))
}

/// POST /api/a026/sku-scenario/prepare
pub async fn prepare(
    Json(dto): Json<SkuScenarioDto>,
) -> Result<Json<SkuFinancialScenario>, ApiError> {
    Ok(Json(service::prepare_for_submit(&dto)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults() {
        let Json(ws) = defaults().await;
        assert_eq!(ws.returns_freight, 13.0);
        assert_eq!(ws.returns_handling, 0.45);
    }

    #[tokio::test]
    async fn test_rollup_from_json() {
        let worksheet: CostWorksheet = serde_json::from_str(
            r#"{
                "average_selling_price": 100,
                "reseller_margin_pct": 10,
                "marketing_reserve_pct": 5,
                "fulfillment_cost": 2,
                "product_cost_fob": 30,
                "sw_license_fee": 5,
                "returns_freight": 13,
                "returns_handling": 0.45
            }"#,
        )
        .unwrap();
        let Json(result) = rollup(Json(worksheet)).await;
        assert!((result.net_receipts - 83.0).abs() < 1e-9);
        assert!((result.gross_profit - 30.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_rollup_zero_price() {
        let Json(result) = rollup(Json(CostWorksheet::default())).await;
        assert_eq!(result.gross_margin_pct, 0.0);
    }

    #[tokio::test]
    async fn test_prepare_rejects_bad_country() {
        let dto = SkuScenarioDto {
            scenario_name: "EU launch".into(),
            sku_name: "MNQ1525-30W-U".into(),
            channel: "emg".into(),
            country_code: "Germany".into(),
            ..SkuScenarioDto::default()
        };
        let err = prepare(Json(dto)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }
}
