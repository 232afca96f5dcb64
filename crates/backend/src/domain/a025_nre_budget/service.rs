use crate::shared::config::ReferenceCodesConfig;
use crate::shared::error::ApiError;
use chrono::NaiveDate;
use contracts::domain::a025_nre_budget::{NreBudget, NreBudgetDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::reference_code::{parse_nre_number, UNKNOWN_ORG_CODE};

/// Проверить номер NRE из формы
///
/// Номер должен соответствовать формату и содержать известный код организации
/// (или резервный `99`).
pub fn verify_reference_number(
    config: &ReferenceCodesConfig,
    number: &str,
) -> Result<(), ApiError> {
    let parts = parse_nre_number(number).map_err(ApiError::BadRequest)?;

    let known = parts.org_code == UNKNOWN_ORG_CODE
        || config.org_codes.iter().any(|(_, code)| code == parts.org_code);
    if !known {
        return Err(ApiError::BadRequest(format!(
            "Unknown organization code '{}' in NRE number '{}'",
            parts.org_code, number
        )));
    }
    Ok(())
}

/// Подготовить бюджет к отправке во внешний API
///
/// Итоги пересчитываются на сервере, присланный `totalAmount` не используется.
/// Статус оплаты выводится из графика платежей на дату `today`.
pub fn prepare_for_submit(
    config: &ReferenceCodesConfig,
    dto: &NreBudgetDto,
    today: NaiveDate,
) -> Result<NreBudget, ApiError> {
    verify_reference_number(config, &dto.nre_reference_number)?;

    let mut budget = NreBudget::from_dto(dto).map_err(ApiError::BadRequest)?;
    budget.payment_status = budget.derived_payment_status(today);

    let missing = budget.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(
            "{}: rejected {} with {} missing field(s)",
            NreBudget::element_name(),
            budget.code(),
            missing.len()
        );
        return Err(ApiError::Validation { missing });
    }

    tracing::info!(
        "{}: prepared {} for '{}', total {:.2} ({}), {} line item(s), {} payment(s)",
        NreBudget::element_name(),
        budget.code(),
        budget.vendor_name,
        budget.total_amount,
        budget.payment_status.display_name(),
        budget.line_items.len(),
        budget.payment_line_items.len()
    );
    Ok(budget)
}
