//! Расчёт себестоимости и маржи SKU (business-analysis worksheet)
//!
//! Порядок расчёта фиксирован: вычеты → чистая выручка → затраты на продукт →
//! роялти → CoGS → валовая прибыль → маржа.

pub mod line_items;
pub mod rollup;
pub mod worksheet;

pub use line_items::{CostLineItem, LineItems};
pub use rollup::{CostRollup, ROYALTY_RATE};
pub use worksheet::{CostDefaults, CostWorksheet};
