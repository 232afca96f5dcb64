pub mod a025_nre_budget;
pub mod a026_sku_scenario;
pub mod common;
