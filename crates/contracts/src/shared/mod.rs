pub mod cost_rollup;
pub mod reference_code;
