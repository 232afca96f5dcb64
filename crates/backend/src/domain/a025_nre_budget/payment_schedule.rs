use chrono::NaiveDate;
use contracts::domain::a025_nre_budget::NreBudget;
use contracts::domain::common::AggregateRoot;

const HEADERS: [&str; 8] = [
    "NRE Number",
    "Vendor",
    "Project",
    "Payment #",
    "Payment Date",
    "Amount",
    "Status",
    "Notes",
];

/// Имя файла выгрузки на дату `today`
pub fn file_name(today: NaiveDate) -> String {
    format!("NRE_Payment_Schedule_{}.csv", today.format("%Y-%m-%d"))
}

/// Выгрузка графика платежей в CSV
///
/// Для каждого бюджета с платежами: строки платежей, строка `TOTAL`
/// и пустая строка-разделитель. Бюджеты без платежей пропускаются.
/// Статус платежа считается относительно `today`.
pub fn export_csv(budgets: &[NreBudget], today: NaiveDate) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;

    let mut exported = 0usize;
    for budget in budgets.iter().filter(|b| !b.payment_line_items.is_empty()) {
        let number = budget.nre_reference_number();
        let project = budget.project_name.as_deref().unwrap_or("");

        for payment in &budget.payment_line_items {
            let date = payment
                .payment_date
                .map(|d| d.format("%-m/%-d/%Y").to_string())
                .unwrap_or_default();
            let payment_number = payment.payment_number.to_string();
            let amount = format!("{:.2}", payment.amount);
            writer.write_record([
                number,
                budget.vendor_name.as_str(),
                project,
                payment_number.as_str(),
                date.as_str(),
                amount.as_str(),
                payment.state(today).as_str(),
                payment.notes.as_deref().unwrap_or(""),
            ])?;
        }

        let total = format!("{:.2}", budget.scheduled_total());
        writer.write_record([number, "TOTAL", "", "", "", total.as_str(), "", ""])?;
        writer.write_record([""; 8])?;
        exported += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;

    tracing::info!(
        "{}: payment schedule export, {} of {} budget(s) with payments",
        NreBudget::full_name(),
        exported,
        budgets.len()
    );
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_nre_budget::{NreBudgetDto, PaymentLineItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn budget(number: &str, payments: Vec<PaymentLineItem>) -> NreBudget {
        NreBudget::from_dto(&NreBudgetDto {
            nre_reference_number: number.into(),
            vendor_name: "Motorola".into(),
            project_name: Some("Gateway".into()),
            payment_line_items: payments,
            ..NreBudgetDto::default()
        })
        .unwrap()
    }

    #[test]
    fn test_export_rows() {
        let paid = PaymentLineItem {
            payment_date: Some(date(2025, 3, 5)),
            amount: 1000.0,
            is_paid: true,
            ..PaymentLineItem::new(1)
        };
        let open = PaymentLineItem {
            payment_date: Some(date(2025, 12, 1)),
            amount: 250.5,
            notes: Some("Final".into()),
            ..PaymentLineItem::new(2)
        };
        let budgets = vec![
            budget("NRE-1002701234", vec![paid, open]),
            budget("NRE-2000010001", vec![]),
        ];

        let csv = export_csv(&budgets, date(2025, 10, 1)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#""NRE Number","Vendor","Project","Payment #","Payment Date","Amount","Status","Notes""#,
                r#""NRE-1002701234","Motorola","Gateway","1","3/5/2025","1000.00","PAID","""#,
                r#""NRE-1002701234","Motorola","Gateway","2","12/1/2025","250.50","PENDING","Final""#,
                r#""NRE-1002701234","TOTAL","","","","1250.50","","""#,
                r#""","","","","","","","""#,
            ]
        );
    }

    #[test]
    fn test_overdue_status() {
        let late = PaymentLineItem {
            payment_date: Some(date(2025, 1, 10)),
            amount: 10.0,
            ..PaymentLineItem::new(1)
        };
        let csv = export_csv(&[budget("NRE-1000000001", vec![late])], date(2025, 2, 1)).unwrap();
        assert!(csv.contains(r#""OVERDUE""#));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(date(2025, 9, 28)), "NRE_Payment_Schedule_2025-09-28.csv");
    }
}
