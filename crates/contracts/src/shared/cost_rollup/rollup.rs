use super::CostWorksheet;
use serde::{Deserialize, Serialize};

/// Ставка роялти от чистой выручки, не от ASP
pub const ROYALTY_RATE: f64 = 0.05;

/// Производные показатели листа расчёта
///
/// Всегда пересчитываются из текущего [`CostWorksheet`], отдельно не редактируются.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostRollup {
    pub all_deductions: f64,
    pub net_receipts: f64,
    pub total_product_costs: f64,
    pub royalty: f64,
    pub total_cogs: f64,
    pub gross_profit: f64,
    pub gross_margin_pct: f64,
}

impl CostRollup {
    pub fn compute(ws: &CostWorksheet) -> Self {
        let all_deductions = all_deductions(ws);
        let net_receipts = ws.average_selling_price - all_deductions;
        let total_product_costs =
            ws.product_cost_fob + ws.sw_license_fee + ws.other_product_costs.total();
        let royalty = net_receipts * ROYALTY_RATE;
        let total_cogs = ws.named_cogs_total() + ws.other_cogs.total();
        let gross_profit = net_receipts - total_product_costs - royalty - total_cogs;
        let gross_margin_pct = gross_margin_pct(gross_profit, net_receipts);

        Self {
            all_deductions,
            net_receipts,
            total_product_costs,
            royalty,
            total_cogs,
            gross_profit,
            gross_margin_pct,
        }
    }
}

fn all_deductions(ws: &CostWorksheet) -> f64 {
    let asp = ws.average_selling_price;
    let reseller = (asp * ws.reseller_margin_pct) / 100.0;
    let marketing = (asp * ws.marketing_reserve_pct) / 100.0;
    reseller + marketing + ws.fulfillment_cost
}

fn gross_margin_pct(gross_profit: f64, net_receipts: f64) -> f64 {
    if net_receipts == 0.0 {
        return 0.0;
    }
    gross_profit / net_receipts * 100.0
}
