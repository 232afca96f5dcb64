pub mod analytics_export;
pub mod payment_schedule;
pub mod service;
