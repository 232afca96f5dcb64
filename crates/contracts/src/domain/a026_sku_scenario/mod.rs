pub mod aggregate;

pub use aggregate::{
    ChannelGroup, SalesChannel, SkuFinancialScenario, SkuScenarioDto, SkuScenarioId,
};
