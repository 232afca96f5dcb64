use chrono::NaiveDate;

/// Эпоха для номеров NRE (1 января 2025)
pub const REFERENCE_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(d) => d,
    None => panic!("invalid reference epoch"),
};

/// Количество полных дней от эпохи до даты
///
/// Даты раньше эпохи дают 0. Верхней границы нет.
pub fn epoch_days(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days().max(0)
}

/// Дни от эпохи с дополнением нулями до 4 знаков
///
/// После 9999 дней поле просто становится длиннее.
pub fn format_epoch_days(days: i64) -> String {
    format!("{:04}", days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_days_known_dates() {
        assert_eq!(epoch_days(date(2025, 1, 1), REFERENCE_EPOCH), 0);
        assert_eq!(epoch_days(date(2025, 1, 2), REFERENCE_EPOCH), 1);
        assert_eq!(epoch_days(date(2025, 9, 28), REFERENCE_EPOCH), 270);
        assert_eq!(epoch_days(date(2026, 1, 1), REFERENCE_EPOCH), 365);
    }

    #[test]
    fn test_epoch_days_before_epoch_is_zero() {
        assert_eq!(epoch_days(date(2024, 12, 31), REFERENCE_EPOCH), 0);
        assert_eq!(epoch_days(date(1999, 6, 1), REFERENCE_EPOCH), 0);
    }

    #[test]
    fn test_epoch_days_monotonic() {
        let mut prev = 0;
        let mut d = date(2024, 12, 1);
        while d < date(2026, 3, 1) {
            let days = epoch_days(d, REFERENCE_EPOCH);
            assert!(days >= 0);
            assert!(days >= prev);
            prev = days;
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_format_epoch_days() {
        assert_eq!(format_epoch_days(0), "0000");
        assert_eq!(format_epoch_days(270), "0270");
        assert_eq!(format_epoch_days(9999), "9999");
        // поле не обрезается
        assert_eq!(format_epoch_days(10000), "10000");
    }
}
