use crate::shared::error::ApiError;
use contracts::domain::a026_sku_scenario::{SkuFinancialScenario, SkuScenarioDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::cost_rollup::{CostDefaults, CostRollup, CostWorksheet};

/// Пустой лист с константами по умолчанию
pub fn default_worksheet(defaults: &CostDefaults) -> CostWorksheet {
    CostWorksheet::with_defaults(defaults)
}

pub fn rollup(worksheet: &CostWorksheet) -> CostRollup {
    let result = CostRollup::compute(worksheet);
    tracing::debug!(
        "Rollup: net receipts {:.2}, gross profit {:.2}, margin {:.2}%",
        result.net_receipts,
        result.gross_profit,
        result.gross_margin_pct
    );
    result
}

/// Подготовить сценарий к сохранению: снимок расчёта + валидация
pub fn prepare_for_submit(dto: &SkuScenarioDto) -> Result<SkuFinancialScenario, ApiError> {
    let scenario = SkuFinancialScenario::from_dto(dto).map_err(ApiError::BadRequest)?;

    if let Err(message) = scenario.validate() {
        tracing::warn!(
            "{}: rejected '{}': {}",
            SkuFinancialScenario::element_name(),
            scenario.scenario_name(),
            message
        );
        return Err(ApiError::Validation {
            missing: vec![message],
        });
    }

    if scenario.standard_channel().is_none() {
        tracing::info!(
            "{}: custom channel '{}'",
            SkuFinancialScenario::element_name(),
            scenario.channel
        );
    }

    tracing::info!(
        "{}: prepared '{}' for {} / {}, margin {:.2}%",
        SkuFinancialScenario::element_name(),
        scenario.scenario_name(),
        scenario.sku_name,
        scenario.country_code,
        scenario.rollup().gross_margin_pct
    );
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worksheet() -> CostWorksheet {
        CostWorksheet {
            average_selling_price: 100.0,
            reseller_margin_pct: 10.0,
            marketing_reserve_pct: 5.0,
            fulfillment_cost: 2.0,
            product_cost_fob: 30.0,
            sw_license_fee: 5.0,
            ..default_worksheet(&CostDefaults::default())
        }
    }

    #[test]
    fn test_default_worksheet() {
        let ws = default_worksheet(&CostDefaults::default());
        assert_eq!(ws.returns_freight, 13.0);
        assert_eq!(ws.returns_handling, 0.45);
        assert_eq!(ws.average_selling_price, 0.0);
        assert_eq!(rollup(&ws).gross_margin_pct, 0.0);
    }

    #[test]
    fn test_rollup_worked_example() {
        let result = rollup(&worksheet());
        assert!((result.all_deductions - 17.0).abs() < 1e-9);
        assert!((result.net_receipts - 83.0).abs() < 1e-9);
        assert!((result.total_product_costs - 35.0).abs() < 1e-9);
        assert!((result.royalty - 4.15).abs() < 1e-9);
        assert!((result.total_cogs - 13.45).abs() < 1e-9);
        assert!((result.gross_profit - 30.4).abs() < 1e-9);
        assert!((result.gross_margin_pct - 36.626_506_024).abs() < 1e-6);
    }

    #[test]
    fn test_prepare() {
        let dto = SkuScenarioDto {
            scenario_name: "Launch".into(),
            sku_name: "BDIG1025-80B-E".into(),
            channel: "shopify".into(),
            country_code: "ca".into(),
            worksheet: worksheet(),
            ..SkuScenarioDto::default()
        };
        let scenario = prepare_for_submit(&dto).unwrap();
        assert_eq!(scenario.country_code, "CA");
        assert!((scenario.rollup().gross_profit - 30.4).abs() < 1e-9);

        let mut invalid = dto.clone();
        invalid.sku_name.clear();
        match prepare_for_submit(&invalid) {
            Err(ApiError::Validation { missing }) => {
                assert_eq!(missing, vec!["SKU name is required".to_string()])
            }
            _ => panic!("expected validation error"),
        }

        let mut bad_id = dto;
        bad_id.id = Some("not-a-uuid".into());
        assert!(matches!(
            prepare_for_submit(&bad_id),
            Err(ApiError::BadRequest(_))
        ));
    }
}
