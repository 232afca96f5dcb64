use super::aggregate::NreBudget;
use serde::{Deserialize, Serialize};

/// Разрез аналитики NRE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsGroupBy {
    #[default]
    Project,
    Sku,
    Category,
    Vendor,
}

impl AnalyticsGroupBy {
    /// Ключ группы для бюджетов без значения
    pub fn fallback_key(&self) -> &'static str {
        match self {
            AnalyticsGroupBy::Project => "Unassigned",
            AnalyticsGroupBy::Sku => "No SKU",
            AnalyticsGroupBy::Category => "Uncategorized",
            AnalyticsGroupBy::Vendor => "Unknown Vendor",
        }
    }
}

/// Итог одной группы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsGroup {
    pub key: String,
    pub total: f64,
    /// Бюджеты, а для разреза по категориям - строки затрат
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NreAnalytics {
    pub group_by: AnalyticsGroupBy,
    /// По убыванию суммы; при равенстве - в порядке появления
    pub groups: Vec<AnalyticsGroup>,
    pub grand_total: f64,
}

impl NreAnalytics {
    /// Доля группы в общем итоге, %
    pub fn share_pct(&self, group: &AnalyticsGroup) -> f64 {
        if self.grand_total == 0.0 {
            return 0.0;
        }
        group.total / self.grand_total * 100.0
    }
}

/// Сгруппировать затраты NRE по проекту, SKU, категории или поставщику
///
/// Проект, SKU и поставщик суммируют `total_amount` бюджетов. Категории
/// суммируют строки затрат, `CUSTOM` заменяется введённым названием.
pub fn nre_analytics(budgets: &[NreBudget], group_by: AnalyticsGroupBy) -> NreAnalytics {
    let mut groups: Vec<AnalyticsGroup> = Vec::new();

    fn add(groups: &mut Vec<AnalyticsGroup>, key: &str, amount: f64) {
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => {
                group.total += amount;
                group.count += 1;
            }
            None => groups.push(AnalyticsGroup {
                key: key.to_string(),
                total: amount,
                count: 1,
            }),
        }
    }

    let key_or_fallback = |value: Option<&str>| -> String {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.to_string(),
            None => group_by.fallback_key().to_string(),
        }
    };

    for budget in budgets {
        match group_by {
            AnalyticsGroupBy::Project => {
                let key = key_or_fallback(budget.project_name.as_deref());
                add(&mut groups, &key, budget.total_amount);
            }
            AnalyticsGroupBy::Sku => {
                let key = key_or_fallback(Some(budget.sku_code.as_str()));
                add(&mut groups, &key, budget.total_amount);
            }
            AnalyticsGroupBy::Vendor => {
                let key = key_or_fallback(Some(budget.vendor_name.as_str()));
                add(&mut groups, &key, budget.total_amount);
            }
            AnalyticsGroupBy::Category => {
                for item in &budget.line_items {
                    let category = item.resolved_category();
                    let key = key_or_fallback(Some(category.as_str()));
                    add(&mut groups, &key, item.total_amount);
                }
            }
        }
    }

    // sort_by стабильна: равные суммы сохраняют порядок появления
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    let grand_total = groups.iter().map(|g| g.total).sum();

    NreAnalytics {
        group_by,
        groups,
        grand_total,
    }
}
