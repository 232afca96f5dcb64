use super::{CostLineItem, LineItems};
use serde::{Deserialize, Serialize};

/// Константы, которыми заполняется новый лист расчёта
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostDefaults {
    pub returns_freight: f64,
    pub returns_handling: f64,
}

impl Default for CostDefaults {
    fn default() -> Self {
        Self {
            returns_freight: 13.00,
            returns_handling: 0.45,
        }
    }
}

/// Входные данные листа расчёта себестоимости SKU
///
/// Денежные поля в валюте, проценты в шкале 0..100.
/// Отрицательные значения допустимы (кредиты).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostWorksheet {
    // Цена и вычеты
    pub average_selling_price: f64,
    pub reseller_margin_pct: f64,
    pub marketing_reserve_pct: f64,
    pub fulfillment_cost: f64,

    // Затраты на продукт
    pub product_cost_fob: f64,
    pub sw_license_fee: f64,
    pub other_product_costs: LineItems,

    // CoGS
    pub returns_freight: f64,
    pub returns_handling: f64,
    pub doa_channel_credit: f64,
    pub financing_cost: f64,
    pub pps_handling_fee: f64,
    pub inbound_shipping_cost: f64,
    pub outbound_shipping_cost: f64,
    pub greenfield_marketing: f64,
    pub other_cogs: LineItems,
}

impl CostWorksheet {
    /// Новый лист с предзаполненными возвратами
    pub fn with_defaults(defaults: &CostDefaults) -> Self {
        Self {
            returns_freight: defaults.returns_freight,
            returns_handling: defaults.returns_handling,
            ..Self::default()
        }
    }

    /// Сумма восьми именованных статей CoGS
    pub fn named_cogs_total(&self) -> f64 {
        self.returns_freight
            + self.returns_handling
            + self.doa_channel_credit
            + self.financing_cost
            + self.pps_handling_fee
            + self.inbound_shipping_cost
            + self.outbound_shipping_cost
            + self.greenfield_marketing
    }

    pub fn add_other_product_cost(&mut self, label: impl Into<String>, amount: f64) -> usize {
        self.other_product_costs.push(CostLineItem::new(label, amount))
    }

    pub fn add_other_cogs(&mut self, label: impl Into<String>, amount: f64) -> usize {
        self.other_cogs.push(CostLineItem::new(label, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults() {
        let ws = CostWorksheet::with_defaults(&CostDefaults::default());
        assert_eq!(ws.returns_freight, 13.0);
        assert_eq!(ws.returns_handling, 0.45);
        assert_eq!(ws.average_selling_price, 0.0);
        assert!(ws.other_cogs.is_empty());
    }

    #[test]
    fn test_partial_json_fills_zeroes() {
        let ws: CostWorksheet = serde_json::from_str(
            r#"{"average_selling_price": 100, "other_cogs": [{"label": "Insurance", "amount": 0.5}]}"#,
        )
        .unwrap();
        assert_eq!(ws.average_selling_price, 100.0);
        assert_eq!(ws.fulfillment_cost, 0.0);
        assert_eq!(ws.other_cogs.total(), 0.5);
    }

    #[test]
    fn test_named_cogs_total() {
        let ws = CostWorksheet {
            returns_freight: 1.0,
            returns_handling: 2.0,
            doa_channel_credit: 3.0,
            financing_cost: 4.0,
            pps_handling_fee: 5.0,
            inbound_shipping_cost: 6.0,
            outbound_shipping_cost: 7.0,
            greenfield_marketing: 8.0,
            ..CostWorksheet::default()
        };
        assert_eq!(ws.named_cogs_total(), 36.0);
    }
}
