pub mod aggregate;
pub mod analytics;

pub use aggregate::{
    NreBudget, NreBudgetDto, NreBudgetId, NreCategory, NreLineItem, PaymentLineItem,
    PaymentState, PaymentStatus,
};
pub use analytics::{nre_analytics, AnalyticsGroup, AnalyticsGroupBy, NreAnalytics};
