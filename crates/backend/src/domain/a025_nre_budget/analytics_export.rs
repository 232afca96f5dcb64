use chrono::NaiveDate;
use contracts::domain::a025_nre_budget::{NreBudget, NreCategory};
use contracts::domain::common::AggregateRoot;

const HEADERS: [&str; 9] = [
    "NRE Number",
    "Vendor",
    "Project",
    "Line Item #",
    "Description",
    "Amount",
    "Payment Date",
    "Payment Status",
    "Category",
];

pub fn file_name(today: NaiveDate) -> String {
    format!("NRE_Analytics_{}.csv", today.format("%Y-%m-%d"))
}

/// Название категории для выгрузки: справочное имя или введённое вручную
fn category_label(category: &str) -> String {
    NreCategory::from_code(category)
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| category.to_string())
}

/// Выгрузка аналитики NRE: одна строка на строку затрат
///
/// Дата и статус оплаты общие для всего бюджета: дата первого платежа
/// и статус оплаты относительно итога бюджета.
pub fn export_csv(budgets: &[NreBudget]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;

    let mut rows = 0usize;
    for budget in budgets {
        let project = budget.project_name.as_deref().unwrap_or("");
        let payment_date = budget
            .first_payment_date()
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_default();
        let status = budget.settlement_status().display_name();

        for item in &budget.line_items {
            let number = item.line_item_number.to_string();
            let amount = format!("{:.2}", item.total_amount);
            let category = category_label(&item.resolved_category());
            writer.write_record([
                budget.nre_reference_number(),
                budget.vendor_name.as_str(),
                project,
                number.as_str(),
                item.description.as_str(),
                amount.as_str(),
                payment_date.as_str(),
                status,
                category.as_str(),
            ])?;
            rows += 1;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;

    tracing::info!(
        "{} analytics export: {} line item(s) from {} budget(s)",
        NreBudget::list_name(),
        rows,
        budgets.len()
    );
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_nre_budget::{NreBudgetDto, NreLineItem, PaymentLineItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn budget(payments: Vec<PaymentLineItem>) -> NreBudget {
        NreBudget::from_dto(&NreBudgetDto {
            nre_reference_number: "NRE-1002701234".into(),
            vendor_name: "Motorola".into(),
            line_items: vec![
                NreLineItem {
                    description: "Molds".into(),
                    category: "TOOLING".into(),
                    unit_price: 600.0,
                    ..NreLineItem::new(1)
                },
                NreLineItem {
                    description: "Drop test".into(),
                    category: "CUSTOM".into(),
                    custom_category: Some("Reliability Lab".into()),
                    unit_price: 400.0,
                    ..NreLineItem::new(2)
                },
            ],
            payment_line_items: payments,
            ..NreBudgetDto::default()
        })
        .unwrap()
    }

    fn payment(amount: f64, is_paid: bool) -> PaymentLineItem {
        PaymentLineItem {
            payment_date: Some(date(2025, 4, 7)),
            amount,
            is_paid,
            ..PaymentLineItem::new(1)
        }
    }

    #[test]
    fn test_export_rows() {
        let csv = export_csv(&[budget(vec![payment(250.0, true)])]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#""NRE Number","Vendor","Project","Line Item #","Description","Amount","Payment Date","Payment Status","Category""#,
                r#""NRE-1002701234","Motorola","","1","Molds","600.00","4/7/2025","Partially Paid","Tooling""#,
                r#""NRE-1002701234","Motorola","","2","Drop test","400.00","4/7/2025","Partially Paid","Reliability Lab""#,
            ]
        );
    }

    #[test]
    fn test_status_boundaries() {
        let status_of = |payments| {
            let csv = export_csv(&[budget(payments)]).unwrap();
            csv.lines().nth(1).unwrap().split(',').nth(7).unwrap().to_string()
        };
        assert_eq!(status_of(vec![]), r#""Not Paid""#);
        assert_eq!(status_of(vec![payment(1000.0, false)]), r#""Not Paid""#);
        assert_eq!(status_of(vec![payment(999.99, true)]), r#""Partially Paid""#);
        assert_eq!(status_of(vec![payment(1000.0, true)]), r#""Paid""#);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(date(2025, 9, 28)), "NRE_Analytics_2025-09-28.csv");
    }
}
