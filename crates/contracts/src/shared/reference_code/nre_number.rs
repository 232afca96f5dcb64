use super::{epoch_days, format_epoch_days, CodeOutcome, Disambiguator, OrgCodeTable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NRE_PREFIX: &str = "NRE-";

/// Подсказка вместо номера, пока не выбраны организация и дата
pub const NRE_PLACEHOLDER: &str = "NRE-Select options above";

/// Поля конструктора номера NRE
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NreNumberInputs {
    /// Код организации-поставщика (например, "MTN")
    pub vendor_org: String,
    pub date: Option<NaiveDate>,
}

/// Составные части номера NRE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NreNumberParts {
    pub org_code: String,
    pub epoch_days: i64,
    pub random: Disambiguator,
}

/// Построить номер `NRE-[орг 2][дни 4][случайные 4]`
///
/// Пример: MTN, 2025-09-28, "1234" → `NRE-1002701234`.
pub fn build_nre_number(
    inputs: &NreNumberInputs,
    random: Disambiguator,
    table: &OrgCodeTable,
    epoch: NaiveDate,
) -> CodeOutcome {
    let mut missing = Vec::new();
    if inputs.vendor_org.is_empty() {
        missing.push("vendor_org");
    }
    let date = match inputs.date {
        Some(d) => d,
        None => {
            missing.push("date");
            return CodeOutcome::incomplete(&missing);
        }
    };
    if !missing.is_empty() {
        return CodeOutcome::incomplete(&missing);
    }

    CodeOutcome::ready(format!(
        "{}{}{}{}",
        NRE_PREFIX,
        table.lookup(&inputs.vendor_org),
        format_epoch_days(epoch_days(date, epoch)),
        random
    ))
}

/// Разобрать номер NRE обратно на части
///
/// Поле дней может быть длиннее 4 знаков, поэтому орг-код берётся
/// с начала, а случайная часть с конца.
pub fn parse_nre_number(number: &str) -> Result<NreNumberParts, String> {
    let digits = number
        .strip_prefix(NRE_PREFIX)
        .ok_or_else(|| format!("NRE number must start with '{}': '{}'", NRE_PREFIX, number))?;

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("NRE number must contain only digits after prefix: '{}'", number));
    }
    if digits.len() < 10 {
        return Err(format!("NRE number is too short: '{}'", number));
    }

    let (org_code, rest) = digits.split_at(2);
    let (days, random) = rest.split_at(rest.len() - 4);

    Ok(NreNumberParts {
        org_code: org_code.to_string(),
        epoch_days: days
            .parse::<i64>()
            .map_err(|e| format!("Invalid epoch days in '{}': {}", number, e))?,
        random: Disambiguator::parse(random)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::reference_code::{REFERENCE_EPOCH, UNKNOWN_ORG_CODE};

    fn inputs(org: &str, date: Option<(i32, u32, u32)>) -> NreNumberInputs {
        NreNumberInputs {
            vendor_org: org.to_string(),
            date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        }
    }

    fn random(v: u16) -> Disambiguator {
        Disambiguator::from_value(v).unwrap()
    }

    #[test]
    fn test_mtn_example() {
        let outcome = build_nre_number(
            &inputs("MTN", Some((2025, 9, 28))),
            random(1234),
            &OrgCodeTable::default(),
            REFERENCE_EPOCH,
        );
        assert_eq!(outcome.code(), Some("NRE-1002701234"));
    }

    #[test]
    fn test_unknown_org_falls_back_to_99() {
        let outcome = build_nre_number(
            &inputs("ZZZ", Some((2025, 9, 28))),
            random(1234),
            &OrgCodeTable::default(),
            REFERENCE_EPOCH,
        );
        assert_eq!(outcome.code(), Some("NRE-9902701234"));
        assert!(outcome.code().unwrap()[4..].starts_with(UNKNOWN_ORG_CODE));
    }

    #[test]
    fn test_incomplete_inputs() {
        let table = OrgCodeTable::default();
        let outcome = build_nre_number(&inputs("", Some((2025, 1, 1))), random(1), &table, REFERENCE_EPOCH);
        assert_eq!(outcome, CodeOutcome::incomplete(&["vendor_org"]));

        let outcome = build_nre_number(&inputs("MTN", None), random(1), &table, REFERENCE_EPOCH);
        assert_eq!(outcome, CodeOutcome::incomplete(&["date"]));

        let outcome = build_nre_number(&inputs("", None), random(1), &table, REFERENCE_EPOCH);
        assert_eq!(outcome, CodeOutcome::incomplete(&["vendor_org", "date"]));
        assert_eq!(outcome.display(NRE_PLACEHOLDER), NRE_PLACEHOLDER);
    }

    #[test]
    fn test_grammar_and_length() {
        let table = OrgCodeTable::default();
        for (org, v) in [("BDI", 0u16), ("CAT", 9999), ("ASK", 42)] {
            let code = build_nre_number(&inputs(org, Some((2025, 3, 15))), random(v), &table, REFERENCE_EPOCH)
                .code()
                .map(str::to_string)
                .unwrap();
            assert_eq!(code.len(), 14);
            assert!(code.starts_with(NRE_PREFIX));
            assert!(code[4..].bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_before_epoch_uses_day_zero() {
        let outcome = build_nre_number(
            &inputs("BDI", Some((2024, 6, 1))),
            random(5),
            &OrgCodeTable::default(),
            REFERENCE_EPOCH,
        );
        assert_eq!(outcome.code(), Some("NRE-9000000005"));
    }

    #[test]
    fn test_epoch_field_grows_past_9999() {
        // 2052-05-19 = 10000 дней от эпохи
        let outcome = build_nre_number(
            &inputs("MTN", Some((2052, 5, 19))),
            random(1),
            &OrgCodeTable::default(),
            REFERENCE_EPOCH,
        );
        assert_eq!(outcome.code(), Some("NRE-10100000001"));
    }

    #[test]
    fn test_idempotent() {
        let table = OrgCodeTable::default();
        let i = inputs("GPN", Some((2025, 7, 4)));
        let a = build_nre_number(&i, random(777), &table, REFERENCE_EPOCH);
        let b = build_nre_number(&i, random(777), &table, REFERENCE_EPOCH);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_round_trip_of_example() {
        let parts = parse_nre_number("NRE-1002701234").unwrap();
        assert_eq!(parts.org_code, "10");
        assert_eq!(parts.epoch_days, 270);
        assert_eq!(parts.random.as_string(), "1234");

        let parts = parse_nre_number("NRE-10100000001").unwrap();
        assert_eq!(parts.epoch_days, 10000);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_nre_number("1002701234").is_err());
        assert!(parse_nre_number("NRE-100270123").is_err());
        assert!(parse_nre_number("NRE-10027O1234").is_err());
        assert!(parse_nre_number("NRE-Select options above").is_err());
    }
}
